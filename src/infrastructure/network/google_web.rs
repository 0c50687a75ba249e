use crate::domain::error::AgriError;
use crate::domain::model::{LanguageCode, Provenance};
use crate::domain::traits::TranslationProvider;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

const PROVIDER: &str = "google_web";

/// Public web-translate endpoint, no key required.
pub struct GoogleWebTranslator {
    client: Client,
    url: String,
    timeout: Duration,
}

impl GoogleWebTranslator {
    pub fn new(client: Client, url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client,
            url: url.into(),
            timeout,
        }
    }
}

#[async_trait]
impl TranslationProvider for GoogleWebTranslator {
    fn provenance(&self) -> Provenance {
        Provenance::GoogleWeb
    }

    async fn translate(
        &self,
        text: &str,
        source: LanguageCode,
        target: LanguageCode,
    ) -> Result<String, AgriError> {
        let params = [
            ("client", "gtx"),
            ("sl", source.as_str()),
            ("tl", target.as_str()),
            ("dt", "t"),
            ("q", text),
        ];

        let response = self
            .client
            .get(&self.url)
            .timeout(self.timeout)
            .query(&params)
            .send()
            .await
            .map_err(|e| AgriError::provider(PROVIDER, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AgriError::provider(
                PROVIDER,
                format!("HTTP {}", status.as_u16()),
            ));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| AgriError::provider(PROVIDER, format!("bad response: {}", e)))?;

        let joined = join_chunks(&body);
        if joined.is_empty() {
            Ok(text.to_string())
        } else {
            Ok(joined)
        }
    }
}

/// Join the translated chunks of a reply shaped like
/// `[[["chunk", "orig", ...], ["chunk", "orig", ...]], null, "hi", ...]`.
pub fn join_chunks(body: &Value) -> String {
    body.get(0)
        .and_then(Value::as_array)
        .map(|chunks| {
            chunks
                .iter()
                .filter_map(|chunk| chunk.get(0).and_then(Value::as_str))
                .collect::<String>()
        })
        .unwrap_or_default()
}
