//! Configuration loading tests
//!
//! TOML files come from `tempfile`; environment overrides are injected as a
//! map so tests never touch the real process environment.

use std::collections::HashMap;
use std::io::Write;

use tempfile::NamedTempFile;

use urlkeep::config::{StaticConfig, StoreBackend};
use urlkeep::errors::UrlkeepError;

fn write_toml(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("Failed to create temp config");
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn env(pairs: &[(&str, &str)]) -> Option<HashMap<String, String>> {
    Some(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

#[test]
fn test_load_from_toml() {
    let file = write_toml(
        r#"
[server]
host = "0.0.0.0"
port = 9090
public_base_url = "https://go.example"

[store]
backend = "memory"
max_create_attempts = 8

[logging]
level = "debug"
format = "json"
"#,
    );

    let config = StaticConfig::load_with_env(file.path().to_str(), env(&[])).unwrap();
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.server.public_base_url.as_deref(), Some("https://go.example"));
    assert_eq!(config.store.backend, StoreBackend::Memory);
    assert_eq!(config.store.max_create_attempts, 8);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, "json");
    // 未写出的段落使用默认值
    assert_eq!(config.database.database_url, "urls.db");
    assert_eq!(config.database.retry_count, 3);
}

#[test]
fn test_env_overrides_toml() {
    let file = write_toml(
        r#"
[server]
port = 9090

[database]
database_url = "from-file.db"
"#,
    );

    let config = StaticConfig::load_with_env(
        file.path().to_str(),
        env(&[
            ("UK__SERVER__PORT", "7000"),
            ("UK__DATABASE__DATABASE_URL", "sqlite://from-env.db"),
            ("UK__STORE__BACKEND", "memory"),
        ]),
    )
    .unwrap();

    assert_eq!(config.server.port, 7000);
    assert_eq!(config.database.database_url, "sqlite://from-env.db");
    assert_eq!(config.store.backend, StoreBackend::Memory);
}

#[test]
fn test_missing_explicit_file_is_error() {
    let result = StaticConfig::load_with_env(Some("/nonexistent/urlkeep.toml"), env(&[]));
    assert!(matches!(result, Err(UrlkeepError::Config(_))));
}

#[test]
fn test_invalid_values_rejected() {
    let file = write_toml(
        r#"
[store]
max_create_attempts = 0
"#,
    );
    let result = StaticConfig::load_with_env(file.path().to_str(), env(&[]));
    assert!(matches!(result, Err(UrlkeepError::Config(_))));

    let file = write_toml(
        r#"
[store]
backend = "redis"
"#,
    );
    let result = StaticConfig::load_with_env(file.path().to_str(), env(&[]));
    assert!(matches!(result, Err(UrlkeepError::Config(_))));
}

#[test]
fn test_sample_config_loads_back() {
    let file = write_toml(&StaticConfig::generate_sample_config());
    let config = StaticConfig::load_with_env(file.path().to_str(), env(&[])).unwrap();
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.store.backend, StoreBackend::Database);
    assert_eq!(config.store.max_create_attempts, 64);
}
