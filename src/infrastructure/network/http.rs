// HTTP client utilities
use crate::domain::error::AgriError;
use reqwest::Client;

/// Shared outbound client. Timeouts are set per request by each caller.
pub fn create_client() -> Result<Client, AgriError> {
    Ok(Client::builder()
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(std::time::Duration::from_secs(30))
        .connect_timeout(std::time::Duration::from_secs(5))
        .user_agent(concat!("agribot/", env!("CARGO_PKG_VERSION")))
        .build()?)
}
