//! Configuration tests

use agribot::infrastructure::config::{is_truthy, Config};
use std::collections::HashMap;

#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert!(!config.debug);
    assert_eq!(config.server.port, 5000);
    assert_eq!(config.server.cors_origin, "http://localhost:3000");
    assert_eq!(config.model.url, "http://127.0.0.1:8000/generate");
    assert!(config.translate_base().is_none());
    assert!(config.logging.enable);
    assert_eq!(config.logging.level, "INFO");
    assert!(config.history.enable);
    assert_eq!(config.history.max_per_user, 100);
    assert_eq!(config.history.max_users, 10_000);
}

#[test]
fn test_config_toml_format() {
    let toml_content = r#"
debug = true

[server]
port = 8080

[model]
url = "https://model.example/generate"
timeout_secs = 30

[translate]
base = "http://localhost:5001/"
api_key = "k"

[logging]
enable = true
path = "/tmp/agribot.log"
level = "DEBUG"

[history]
max_users = 250
"#;

    let config = Config::from_toml_str(toml_content).unwrap();
    assert!(config.debug);
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.model.url, "https://model.example/generate");
    assert_eq!(config.model.timeout_secs, 30);
    assert_eq!(config.translate_base(), Some("http://localhost:5001/"));
    assert_eq!(config.translate.api_key.as_deref(), Some("k"));
    assert_eq!(config.translate.timeout_secs, 10);
    assert_eq!(config.logging.path.as_deref(), Some("/tmp/agribot.log"));
    assert_eq!(config.logging.level, "DEBUG");
    assert_eq!(config.history.max_users, 250);
    assert_eq!(config.history.max_per_user, 100);
}

#[test]
fn test_invalid_toml_is_an_error() {
    assert!(Config::from_toml_str("[server]\nport = \"eighty\"").is_err());
}

#[test]
fn test_blank_translate_base_means_web_only() {
    let config = Config::from_toml_str("[translate]\nbase = \"  \"").unwrap();
    assert!(config.translate_base().is_none());
}

#[test]
fn test_env_overrides_file_values() {
    let env: HashMap<&str, &str> = [
        ("MODEL_URL", "http://gpu-box:9000/generate"),
        ("TRANSLATE_BASE", "https://libretranslate.example"),
        ("TRANSLATE_API_KEY", "abc"),
        ("AGRIBOT_DEBUG", "1"),
        ("PORT", "7000"),
    ]
    .into_iter()
    .collect();

    let mut config = Config::default();
    config.apply_env(|key| env.get(key).map(|v| v.to_string()));

    assert_eq!(config.model.url, "http://gpu-box:9000/generate");
    assert_eq!(config.translate_base(), Some("https://libretranslate.example"));
    assert_eq!(config.translate.api_key.as_deref(), Some("abc"));
    assert!(config.debug);
    assert_eq!(config.server.port, 7000);
}

#[test]
fn test_empty_env_values_clear_or_ignore() {
    let mut config = Config::from_toml_str("[translate]\nbase = \"http://x\"").unwrap();
    config.apply_env(|key| match key {
        "TRANSLATE_BASE" => Some(String::new()),
        "MODEL_URL" => Some("  ".to_string()),
        "PORT" => Some("not-a-port".to_string()),
        _ => None,
    });

    assert!(config.translate_base().is_none());
    assert_eq!(config.model.url, "http://127.0.0.1:8000/generate");
    assert_eq!(config.server.port, 5000);
}

#[test]
fn test_truthy_values() {
    for on in ["1", "true", "TRUE", "yes", "on", " 1 "] {
        assert!(is_truthy(on), "{on}");
    }
    for off in ["0", "false", "", "no", "debug"] {
        assert!(!is_truthy(off), "{off}");
    }
}

#[test]
fn test_default_config_serializes_round_trip() {
    let config = Config::default();
    let text = toml::to_string_pretty(&config).unwrap();
    assert_eq!(Config::from_toml_str(&text).unwrap(), config);
}
