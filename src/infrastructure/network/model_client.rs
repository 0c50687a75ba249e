use crate::domain::error::AgriError;
use crate::domain::model::Query;
use crate::domain::traits::ModelGateway;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// Pulls a reply out of one envelope field, or passes.
type Extract = fn(&Value) -> Option<String>;

/// Envelope paths tried in order. Nested paths come before their parent so
/// `{"output": {"text": ".."}}` yields the text rather than the whole object.
const EXTRACTION_RULES: &[(&[&str], Extract)] = &[
    (&["answer"], stringify_value),
    (&["output", "text"], stringify_value),
    (&["output"], stringify_value),
    (&["response", "text"], stringify_value),
    (&["response"], stringify_value),
    (&["result"], stringify_value),
    (&["message"], stringify_value),
    (&["text"], stringify_value),
    (&["data"], stringify_value),
    (&[], bare_string),
];

fn stringify_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => serde_json::to_string(other).ok(),
    }
}

/// A top-level JSON string is the reply itself, without quotes.
fn bare_string(value: &Value) -> Option<String> {
    value.as_str().map(str::to_string)
}

fn lookup<'a>(envelope: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter()
        .try_fold(envelope, |node, key| node.as_object()?.get(*key))
}

/// Normalize a model envelope to a plain string.
///
/// Always succeeds: when no known field matches, the whole envelope is
/// serialized.
pub fn extract_reply(envelope: &Value) -> String {
    EXTRACTION_RULES
        .iter()
        .find_map(|(path, extract)| lookup(envelope, path).and_then(extract))
        .unwrap_or_else(|| envelope.to_string())
}

/// HTTP client for the remote model endpoint.
///
/// Failures are propagated; callers decide how to report them.
pub struct HttpModelGateway {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpModelGateway {
    pub fn new(client: Client, endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            timeout,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ModelGateway for HttpModelGateway {
    async fn invoke(&self, query: &Query) -> Result<String, AgriError> {
        let response = self
            .client
            .post(&self.endpoint)
            .timeout(self.timeout)
            .json(query)
            .send()
            .await
            .map_err(|e| AgriError::GatewayTransport {
                endpoint: self.endpoint.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AgriError::Gateway {
                status: status.as_u16(),
                endpoint: self.endpoint.clone(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| AgriError::GatewayTransport {
                endpoint: self.endpoint.clone(),
                message: e.to_string(),
            })?;

        let reply = match serde_json::from_str::<Value>(&body) {
            Ok(envelope) => extract_reply(&envelope),
            Err(_) => {
                tracing::debug!(endpoint = %self.endpoint, "model reply is not JSON, using raw body");
                body
            }
        };

        Ok(reply)
    }
}
