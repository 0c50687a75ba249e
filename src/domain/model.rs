use serde::{Deserialize, Serialize};
use std::fmt;

// Supported languages. Everything outside this set collapses to English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    #[default]
    En,
    Hi,
    Te,
}

impl LanguageCode {
    /// The pivot language every model call goes through.
    pub const PIVOT: LanguageCode = LanguageCode::En;

    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageCode::En => "en",
            LanguageCode::Hi => "hi",
            LanguageCode::Te => "te",
        }
    }

    /// Clamp an arbitrary code to the supported set (`en` when unknown).
    ///
    /// Accepts 2-letter codes, ISO 639-3 codes and locale tags such as `hi-IN`.
    pub fn clamp(code: &str) -> LanguageCode {
        let code = code.trim().to_ascii_lowercase();
        let primary = code.split(['-', '_']).next().unwrap_or("");
        match primary {
            "hi" | "hin" => LanguageCode::Hi,
            "te" | "tel" => LanguageCode::Te,
            _ => LanguageCode::En,
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Language requested by the client: either a fixed language or "detect it"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum LanguageHint {
    #[default]
    Auto,
    Fixed(LanguageCode),
}

impl From<String> for LanguageHint {
    fn from(value: String) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("auto") {
            LanguageHint::Auto
        } else {
            LanguageHint::Fixed(LanguageCode::clamp(trimmed))
        }
    }
}

// A chat query as handed to the orchestrator and the model gateway
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Query {
    #[serde(rename = "user_query")]
    pub text: String,
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    pub use_web_search: bool,
    #[serde(skip)]
    pub language_hint: LanguageHint,
}

impl Query {
    pub fn new(text: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            user_id: user_id.into(),
            user_location: None,
            user_name: None,
            use_web_search: false,
            language_hint: LanguageHint::Auto,
        }
    }

    pub fn with_hint(mut self, hint: LanguageHint) -> Self {
        self.language_hint = hint;
        self
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

// Which translation provider produced a text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// Short-circuit or fail-open: the input came back untouched.
    None,
    Libre,
    GoogleWeb,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Provenance::None => "none",
            Provenance::Libre => "libre",
            Provenance::GoogleWeb => "google_web",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TranslationResult {
    pub text: String,
    pub provenance: Provenance,
}

impl TranslationResult {
    pub fn untouched(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            provenance: Provenance::None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DebugInfo {
    pub detected: LanguageCode,
    #[serde(rename = "prompt_en")]
    pub prompt_in_pivot: String,
    #[serde(rename = "model_output_en")]
    pub model_output_in_pivot: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrchestrationResult {
    pub output: String,
    pub lang: LanguageCode,
    #[serde(rename = "_debug", skip_serializing_if = "Option::is_none")]
    pub debug: Option<DebugInfo>,
}

// One stored question/answer pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exchange {
    pub id: uuid::Uuid,
    pub user_query: String,
    pub output: String,
    pub lang: LanguageCode,
    pub created_at: i64,
}

impl Exchange {
    pub fn new(user_query: String, output: String, lang: LanguageCode) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            user_query,
            output,
            lang,
            created_at: chrono::Utc::now().timestamp(),
        }
    }
}
