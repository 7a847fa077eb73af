//! Integration tests for configuration loading and validation
//!
//! Note: Tests that modify environment variables take a shared mutex to
//! avoid interference between tests.

use liveddm_client::config::load_config;
use secrecy::ExposeSecret;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn write_config(contents: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(contents.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn test_load_complete_config() {
    let toml_content = r#"
[application]
log_level = "debug"

[api]
base_url = "https://liveddm.example.com"
api_key = "vendor-key-123"
timeout_seconds = 45
tls_verify = false

[logging]
local_enabled = true
local_path = "/tmp/liveddm-logs"
local_rotation = "hourly"
"#;

    let temp_file = write_config(toml_content);
    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.api.base_url, "https://liveddm.example.com");
    assert_eq!(config.api.api_key.expose_secret().as_ref(), "vendor-key-123");
    assert_eq!(config.api.timeout_seconds, 45);
    assert!(!config.api.tls_verify);
    assert!(config.logging.local_enabled);
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_load_minimal_config_applies_defaults() {
    let toml_content = r#"
[api]
base_url = "https://liveddm.example.com"
api_key = "vendor-key-123"
"#;

    let temp_file = write_config(toml_content);
    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.application.log_level, "info");
    assert_eq!(config.api.timeout_seconds, 30);
    assert!(config.api.tls_verify);
    assert!(!config.logging.local_enabled);
    assert_eq!(config.logging.local_rotation, "daily");
}

#[test]
fn test_env_var_substitution_in_api_key() {
    let _guard = ENV_MUTEX.lock().unwrap();
    std::env::set_var("LIVEDDM_CONFIG_TEST_KEY", "key-from-environment");

    let toml_content = r#"
[api]
base_url = "https://liveddm.example.com"
api_key = "${LIVEDDM_CONFIG_TEST_KEY}"
"#;

    let temp_file = write_config(toml_content);
    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(
        config.api.api_key.expose_secret().as_ref(),
        "key-from-environment"
    );

    std::env::remove_var("LIVEDDM_CONFIG_TEST_KEY");
}

#[test]
fn test_missing_env_var_is_a_configuration_error() {
    let _guard = ENV_MUTEX.lock().unwrap();
    std::env::remove_var("LIVEDDM_CONFIG_TEST_UNSET");

    let toml_content = r#"
[api]
base_url = "https://liveddm.example.com"
api_key = "${LIVEDDM_CONFIG_TEST_UNSET}"
"#;

    let temp_file = write_config(toml_content);
    let err = load_config(temp_file.path()).unwrap_err();

    assert!(err.to_string().contains("LIVEDDM_CONFIG_TEST_UNSET"));
}

#[test]
fn test_invalid_log_level_fails_validation() {
    let toml_content = r#"
[application]
log_level = "shout"

[api]
base_url = "https://liveddm.example.com"
api_key = "vendor-key-123"
"#;

    let temp_file = write_config(toml_content);
    let err = load_config(temp_file.path()).unwrap_err();

    assert!(err.to_string().contains("log_level"));
}

#[test]
fn test_invalid_base_url_fails_validation() {
    let toml_content = r#"
[api]
base_url = "not a url at all"
api_key = "vendor-key-123"
"#;

    let temp_file = write_config(toml_content);
    let err = load_config(temp_file.path()).unwrap_err();

    assert!(err.to_string().contains("base_url"));
}

#[test]
fn test_missing_api_section_is_a_parse_error() {
    let toml_content = r#"
[application]
log_level = "info"
"#;

    let temp_file = write_config(toml_content);
    let err = load_config(temp_file.path()).unwrap_err();

    assert!(err.to_string().contains("Failed to parse TOML"));
}
