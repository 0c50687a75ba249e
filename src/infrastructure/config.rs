use crate::domain::error::AgriError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Expose intermediate pipeline values on every `/generate` response.
    #[serde(default)]
    pub debug: bool,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub translate: TranslateConfig,
    #[serde(default)]
    pub logging: Logging,
    #[serde(default)]
    pub history: HistoryConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_cors_origin")]
    pub cors_origin: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ModelConfig {
    #[serde(default = "default_model_url")]
    pub url: String,
    #[serde(default = "default_model_timeout")]
    pub timeout_secs: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TranslateConfig {
    /// LibreTranslate-compatible base URL. Unset means public web fallback only.
    pub base: Option<String>,
    pub api_key: Option<String>,
    #[serde(default = "default_web_url")]
    pub web_url: String,
    #[serde(default = "default_translate_timeout")]
    pub timeout_secs: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Logging {
    #[serde(default = "default_enable")]
    pub enable: bool,
    pub path: Option<String>,
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct HistoryConfig {
    #[serde(default = "default_enable")]
    pub enable: bool,
    #[serde(default = "default_max_per_user")]
    pub max_per_user: usize,
    /// Users kept before the least recently written one is dropped.
    #[serde(default = "default_max_users")]
    pub max_users: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origin: default_cors_origin(),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            url: default_model_url(),
            timeout_secs: default_model_timeout(),
        }
    }
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            base: None,
            api_key: None,
            web_url: default_web_url(),
            timeout_secs: default_translate_timeout(),
        }
    }
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            enable: true,
            path: None,
            level: default_log_level(),
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            enable: true,
            max_per_user: default_max_per_user(),
            max_users: default_max_users(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            server: ServerConfig::default(),
            model: ModelConfig::default(),
            translate: TranslateConfig::default(),
            logging: Logging::default(),
            history: HistoryConfig::default(),
        }
    }
}

// Defaults
fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    5000
}
fn default_cors_origin() -> String {
    "http://localhost:3000".to_string()
}
fn default_model_url() -> String {
    "http://127.0.0.1:8000/generate".to_string()
}
fn default_model_timeout() -> u64 {
    60
}
fn default_web_url() -> String {
    "https://translate.googleapis.com/translate_a/single".to_string()
}
fn default_translate_timeout() -> u64 {
    10
}
fn default_enable() -> bool {
    true
}
fn default_log_level() -> String {
    "INFO".to_string()
}
fn default_max_per_user() -> usize {
    100
}
fn default_max_users() -> usize {
    10_000
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Config, AgriError> {
        Ok(toml::from_str::<Config>(content)?)
    }

    /// Translation base URL, if one is actually set.
    pub fn translate_base(&self) -> Option<&str> {
        self.translate
            .base
            .as_deref()
            .map(str::trim)
            .filter(|base| !base.is_empty())
    }

    /// Apply environment overrides on top of file values.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("MODEL_URL").filter(|v| !v.trim().is_empty()) {
            self.model.url = url;
        }
        if let Some(base) = lookup("TRANSLATE_BASE") {
            self.translate.base = Some(base).filter(|v| !v.trim().is_empty());
        }
        if let Some(key) = lookup("TRANSLATE_API_KEY") {
            self.translate.api_key = Some(key).filter(|v| !v.trim().is_empty());
        }
        if let Some(debug) = lookup("AGRIBOT_DEBUG") {
            self.debug = is_truthy(&debug);
        }
        if let Some(port) = lookup("PORT").and_then(|p| p.trim().parse::<u16>().ok()) {
            self.server.port = port;
        }
    }
}

/// `1`, `true`, `yes` and `on` switch a flag on.
pub fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("agribot").join("config.toml"))
}

/// Load the config file (explicit path first, then the default location) and
/// layer process environment on top.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, AgriError> {
    let mut config = match explicit {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            Config::from_toml_str(&content)?
        }
        None => load_default_file(),
    };

    config.apply_env(|key| std::env::var(key).ok());
    Ok(config)
}

fn load_default_file() -> Config {
    if let Some(path) = get_config_path() {
        if path.exists() {
            match fs::read_to_string(&path)
                .map_err(AgriError::from)
                .and_then(|content| Config::from_toml_str(&content))
            {
                Ok(config) => return config,
                Err(e) => {
                    eprintln!(
                        "Warning: Failed to parse config file: {}. Using defaults.",
                        e
                    );
                }
            }
        }
    }

    Config::default()
}

pub fn generate_config_sample() -> Result<(), AgriError> {
    let config_path = get_config_path();

    if let Some(path) = config_path {
        if path.exists() {
            eprintln!("Config file already exists at: {}", path.display());
            return Ok(());
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let sample = Config::default();
        let toml_content = toml::to_string_pretty(&sample)
            .map_err(|e| AgriError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(&path, toml_content)
            .map_err(|e| AgriError::Config(format!("Failed to write config file: {}", e)))?;
        println!("Generated config file at: {}", path.display());
    } else {
        return Err(AgriError::Config(
            "Cannot determine config directory".to_string(),
        ));
    }

    Ok(())
}
