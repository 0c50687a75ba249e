use crate::domain::model::{LanguageCode, TranslationResult};
use crate::domain::traits::TranslationProvider;
use std::sync::Arc;

/// Translation with provider fallback.
///
/// Order: the configured primary provider (if any), then the secondary
/// provider, then the original text. Never returns an error.
#[derive(Clone)]
pub struct Translator {
    primary: Option<Arc<dyn TranslationProvider>>,
    secondary: Arc<dyn TranslationProvider>,
}

impl Translator {
    pub fn new(
        primary: Option<Arc<dyn TranslationProvider>>,
        secondary: Arc<dyn TranslationProvider>,
    ) -> Self {
        Self { primary, secondary }
    }

    pub async fn translate(
        &self,
        text: &str,
        source: LanguageCode,
        target: LanguageCode,
    ) -> TranslationResult {
        if text.is_empty() || source == target {
            return TranslationResult::untouched(text);
        }

        tracing::debug!(%source, %target, preview = %preview(text), "translating");

        match &self.primary {
            Some(primary) => match primary.translate(text, source, target).await {
                Ok(out) => {
                    tracing::info!(provider = %primary.provenance(), %source, %target, "translation ok");
                    return TranslationResult {
                        text: out,
                        provenance: primary.provenance(),
                    };
                }
                Err(e) => {
                    tracing::warn!(provider = %primary.provenance(), error = %e, "primary translation failed");
                }
            },
            None => {
                tracing::debug!("no primary translation service configured");
            }
        }

        match self.secondary.translate(text, source, target).await {
            Ok(out) => {
                tracing::info!(provider = %self.secondary.provenance(), %source, %target, "translation ok");
                TranslationResult {
                    text: out,
                    provenance: self.secondary.provenance(),
                }
            }
            Err(e) => {
                tracing::error!(provider = %self.secondary.provenance(), error = %e, "fallback translation failed, returning original text");
                TranslationResult::untouched(text)
            }
        }
    }
}

/// First 60 characters, for logs.
fn preview(text: &str) -> String {
    text.chars().take(60).collect()
}
