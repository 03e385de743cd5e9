use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("unknown").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "STOREFRONT_ENV"));
}

#[test]
fn build_app_config_uses_defaults_for_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(
        cfg.api_base_url,
        "https://react-shopping-cart-67954.firebaseio.com"
    );
    assert_eq!(cfg.request_timeout_ms, 10_000);
    assert_eq!(cfg.retry_attempts, 3);
    assert_eq!(cfg.retry_delay_ms, 1_000);
    assert_eq!(cfg.user_agent, "storefront/0.1 (catalog-client)");
}

#[test]
fn api_base_url_override() {
    let mut map = HashMap::new();
    map.insert("STOREFRONT_API_BASE_URL", "http://127.0.0.1:8080");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.api_base_url, "http://127.0.0.1:8080");
}

#[test]
fn api_base_url_rejects_non_http_scheme() {
    let mut map = HashMap::new();
    map.insert("STOREFRONT_API_BASE_URL", "file:///etc/passwd");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STOREFRONT_API_BASE_URL"),
        "expected InvalidEnvVar(STOREFRONT_API_BASE_URL), got: {result:?}"
    );
}

#[test]
fn request_timeout_ms_override() {
    let mut map = HashMap::new();
    map.insert("STOREFRONT_REQUEST_TIMEOUT_MS", "2500");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.request_timeout_ms, 2_500);
}

#[test]
fn request_timeout_ms_invalid() {
    let mut map = HashMap::new();
    map.insert("STOREFRONT_REQUEST_TIMEOUT_MS", "ten seconds");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STOREFRONT_REQUEST_TIMEOUT_MS"),
        "expected InvalidEnvVar(STOREFRONT_REQUEST_TIMEOUT_MS), got: {result:?}"
    );
}

#[test]
fn retry_attempts_override() {
    let mut map = HashMap::new();
    map.insert("STOREFRONT_RETRY_ATTEMPTS", "5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.retry_attempts, 5);
}

#[test]
fn retry_attempts_zero_is_rejected() {
    let mut map = HashMap::new();
    map.insert("STOREFRONT_RETRY_ATTEMPTS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STOREFRONT_RETRY_ATTEMPTS"),
        "expected InvalidEnvVar(STOREFRONT_RETRY_ATTEMPTS), got: {result:?}"
    );
}

#[test]
fn retry_delay_ms_invalid() {
    let mut map = HashMap::new();
    map.insert("STOREFRONT_RETRY_DELAY_MS", "-1");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STOREFRONT_RETRY_DELAY_MS"),
        "expected InvalidEnvVar(STOREFRONT_RETRY_DELAY_MS), got: {result:?}"
    );
}

#[test]
fn user_agent_override() {
    let mut map = HashMap::new();
    map.insert("STOREFRONT_USER_AGENT", "custom-agent/2.0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.user_agent, "custom-agent/2.0");
}

#[test]
fn build_app_config_fails_on_invalid_storefront_env() {
    let mut map = HashMap::new();
    map.insert("STOREFRONT_ENV", "producton");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STOREFRONT_ENV"),
        "expected InvalidEnvVar(STOREFRONT_ENV), got: {result:?}"
    );
}
