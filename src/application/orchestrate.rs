use crate::application::translate::Translator;
use crate::domain::error::AgriError;
use crate::domain::model::{DebugInfo, LanguageCode, LanguageHint, OrchestrationResult, Query};
use crate::domain::traits::{LanguageDetector, ModelGateway};
use std::fmt;
use std::sync::Arc;

/// Pipeline stage, recorded in logs and on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Detecting,
    TranslatingIn,
    Invoking,
    TranslatingOut,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Detecting => "detecting",
            Stage::TranslatingIn => "translating_in",
            Stage::Invoking => "invoking",
            Stage::TranslatingOut => "translating_out",
            Stage::Done => "done",
        };
        f.write_str(name)
    }
}

/// detect → translate to English → ask the model → translate back.
#[derive(Clone)]
pub struct Orchestrator {
    detector: Arc<dyn LanguageDetector>,
    translator: Translator,
    gateway: Arc<dyn ModelGateway>,
    debug_default: bool,
}

impl Orchestrator {
    pub fn new(
        detector: Arc<dyn LanguageDetector>,
        translator: Translator,
        gateway: Arc<dyn ModelGateway>,
        debug_default: bool,
    ) -> Self {
        Self {
            detector,
            translator,
            gateway,
            debug_default,
        }
    }

    pub fn detector(&self) -> &dyn LanguageDetector {
        self.detector.as_ref()
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    /// Run one query through the pipeline.
    ///
    /// `debug` adds the intermediate English values; the process-wide toggle
    /// turns it on for every request.
    pub async fn orchestrate(
        &self,
        query: &Query,
        debug: bool,
    ) -> Result<OrchestrationResult, AgriError> {
        if query.is_blank() {
            return Err(AgriError::Validation("user_query is required".to_string()));
        }

        let lang = match query.language_hint {
            LanguageHint::Fixed(code) => code,
            LanguageHint::Auto => {
                tracing::debug!(stage = %Stage::Detecting, "no language hint, detecting");
                self.detector.detect(&query.text)
            }
        };

        let prompt_en = if lang == LanguageCode::PIVOT {
            query.text.clone()
        } else {
            tracing::debug!(stage = %Stage::TranslatingIn, %lang);
            let result = self
                .translator
                .translate(&query.text, lang, LanguageCode::PIVOT)
                .await;
            tracing::debug!(provider = %result.provenance, "prompt pivoted");
            result.text
        };

        tracing::debug!(stage = %Stage::Invoking, user_id = %query.user_id);
        let pivot_query = Query {
            text: prompt_en.clone(),
            ..query.clone()
        };
        let reply_en = self.gateway.invoke(&pivot_query).await.map_err(|e| {
            tracing::error!(stage = %Stage::Invoking, error = %e, "model invocation failed");
            e
        })?;

        let output = if lang == LanguageCode::PIVOT {
            reply_en.clone()
        } else {
            tracing::debug!(stage = %Stage::TranslatingOut, %lang);
            let result = self
                .translator
                .translate(&reply_en, LanguageCode::PIVOT, lang)
                .await;
            tracing::debug!(provider = %result.provenance, "reply translated back");
            result.text
        };

        tracing::info!(stage = %Stage::Done, %lang, "query answered");

        let debug = (debug || self.debug_default).then(|| DebugInfo {
            detected: lang,
            prompt_in_pivot: prompt_en,
            model_output_in_pivot: reply_en,
        });

        Ok(OrchestrationResult {
            output,
            lang,
            debug,
        })
    }
}
