// Trigram language detection backed by whatlang
use crate::domain::model::LanguageCode;
use crate::domain::traits::LanguageDetector;
use whatlang::{Detector, Lang};

/// Shorter inputs are too unreliable to classify and are treated as English.
pub const MIN_DETECT_CHARS: usize = 9;

pub struct WhatlangDetector {
    detector: Detector,
}

impl WhatlangDetector {
    pub fn new() -> Self {
        Self {
            detector: Detector::new(),
        }
    }
}

impl Default for WhatlangDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageDetector for WhatlangDetector {
    fn detect(&self, text: &str) -> LanguageCode {
        let trimmed = text.trim();
        if trimmed.chars().count() < MIN_DETECT_CHARS {
            tracing::debug!(chars = trimmed.chars().count(), "text too short to detect, using en");
            return LanguageCode::En;
        }

        match self.detector.detect(trimmed) {
            Some(info) => {
                let code = match info.lang() {
                    Lang::Hin => LanguageCode::Hi,
                    Lang::Tel => LanguageCode::Te,
                    // English and every unsupported language
                    _ => LanguageCode::En,
                };
                tracing::debug!(raw = info.lang().code(), lang = %code, confidence = info.confidence(), "detected language");
                code
            }
            None => {
                tracing::debug!("detector undecided, using en");
                LanguageCode::En
            }
        }
    }
}
