use crate::domain::error::AgriError;
use crate::domain::model::{Exchange, LanguageCode, Provenance, Query};
use async_trait::async_trait;

/// Classifies text into one of the supported languages.
///
/// Detection never fails: anything the classifier cannot place is English.
pub trait LanguageDetector: Send + Sync {
    fn detect(&self, text: &str) -> LanguageCode;
}

/// A single translation backend.
///
/// Providers report failures; the fallback chain and fail-open policy live in
/// [`crate::application::translate::Translator`].
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    fn provenance(&self) -> Provenance;

    async fn translate(
        &self,
        text: &str,
        source: LanguageCode,
        target: LanguageCode,
    ) -> Result<String, AgriError>;
}

/// Remote model endpoint.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// Send the query and return the reply as plain text.
    async fn invoke(&self, query: &Query) -> Result<String, AgriError>;
}

/// Per-user conversation storage
#[async_trait]
pub trait ConversationStore: Send + Sync {
    async fn append(&self, user_id: &str, exchange: Exchange) -> Result<(), AgriError>;

    async fn list(&self, user_id: &str) -> Result<Vec<Exchange>, AgriError>;

    /// Remove every exchange for the user, returning how many were dropped.
    async fn clear(&self, user_id: &str) -> Result<usize, AgriError>;
}
