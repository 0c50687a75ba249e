use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgriError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid request: {0}")]
    Validation(String),

    // Translation provider failures never leave the translator.
    #[error("{provider} failed: {message}")]
    Provider {
        provider: &'static str,
        message: String,
    },

    #[error("Model endpoint {endpoint} returned status {status}")]
    Gateway { status: u16, endpoint: String },

    #[error("Model endpoint {endpoint} unreachable: {message}")]
    GatewayTransport { endpoint: String, message: String },
}

impl AgriError {
    pub fn provider(provider: &'static str, message: impl Into<String>) -> Self {
        AgriError::Provider {
            provider,
            message: message.into(),
        }
    }

    /// True for any failure talking to the model endpoint.
    pub fn is_gateway(&self) -> bool {
        matches!(
            self,
            AgriError::Gateway { .. } | AgriError::GatewayTransport { .. }
        )
    }
}
