use std::collections::HashMap;

use chat_relay_lambda::config::{DEFAULT_MODEL_ID, RelayConfig};

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let config = RelayConfig::from_lookup(lookup(&[]));
    assert_eq!(config.model_id, DEFAULT_MODEL_ID);
    assert_eq!(config.model_id, "us.amazon.nova-lite-v1:0");
    assert!(config.endpoint_url.is_none());
    assert!(config.bearer_token.is_none());
}

#[test]
fn reads_all_variables() {
    let config = RelayConfig::from_lookup(lookup(&[
        ("MODEL_ID", "us.amazon.nova-pro-v1:0"),
        ("BEDROCK_ENDPOINT_URL", "http://localhost:4566"),
        ("AWS_BEARER_TOKEN_BEDROCK", "secret"),
    ]));
    assert_eq!(config.model_id, "us.amazon.nova-pro-v1:0");
    assert_eq!(config.endpoint_url.as_deref(), Some("http://localhost:4566"));
    assert_eq!(config.bearer_token.as_deref(), Some("secret"));
}

#[test]
fn empty_values_count_as_unset() {
    let config = RelayConfig::from_lookup(lookup(&[("MODEL_ID", ""), ("BEDROCK_ENDPOINT_URL", "  ")]));
    assert_eq!(config.model_id, DEFAULT_MODEL_ID);
    assert!(config.endpoint_url.is_none());
}

#[test]
fn debug_redacts_bearer_token() {
    let config = RelayConfig::default().with_bearer_token("secret");
    let debug = format!("{config:?}");
    assert!(!debug.contains("secret"));
    assert!(debug.contains("<redacted>"));
}
