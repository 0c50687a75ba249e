use crate::domain::error::AgriError;
use crate::domain::model::{LanguageCode, Provenance};
use crate::domain::traits::TranslationProvider;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const PROVIDER: &str = "libre";

#[derive(Serialize, Debug)]
struct LibreRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Deserialize, Debug)]
struct LibreResponse {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

/// LibreTranslate-compatible service (`POST {base}/translate`).
pub struct LibreTranslator {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl LibreTranslator {
    pub fn new(client: Client, base: &str, api_key: Option<String>, timeout: Duration) -> Self {
        Self {
            client,
            endpoint: format!("{}/translate", base.trim_end_matches('/')),
            api_key: api_key.filter(|key| !key.is_empty()),
            timeout,
        }
    }
}

#[async_trait]
impl TranslationProvider for LibreTranslator {
    fn provenance(&self) -> Provenance {
        Provenance::Libre
    }

    async fn translate(
        &self,
        text: &str,
        source: LanguageCode,
        target: LanguageCode,
    ) -> Result<String, AgriError> {
        let body = LibreRequest {
            q: text,
            source: source.as_str(),
            target: target.as_str(),
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| AgriError::provider(PROVIDER, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(AgriError::provider(
                PROVIDER,
                format!("HTTP {}: {}", status.as_u16(), detail),
            ));
        }

        let parsed: LibreResponse = response
            .json()
            .await
            .map_err(|e| AgriError::provider(PROVIDER, format!("bad response: {}", e)))?;

        // A reply without translatedText echoes the input back.
        Ok(parsed.translated_text.unwrap_or_else(|| text.to_string()))
    }
}
