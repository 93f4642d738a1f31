use cipherkit_crypto::{CipherStrength, HashAlgorithm, SelectorPolicy, ToolkitConfig};
use pretty_assertions::assert_eq;

#[test]
fn default_policy_is_strict() {
    let config = ToolkitConfig::default();
    assert_eq!(config.selector_policy, SelectorPolicy::Strict);
}

#[test]
fn legacy_policy_defaults() {
    assert_eq!(
        SelectorPolicy::legacy(),
        SelectorPolicy::LegacyFallback {
            hash: HashAlgorithm::Sha3_256,
            cipher: CipherStrength::Aes128,
        }
    );
}

#[test]
fn empty_json_gives_defaults() {
    let config = ToolkitConfig::from_json("{}").unwrap();
    assert_eq!(config, ToolkitConfig::default());
}

#[test]
fn parses_legacy_fallback() {
    let json = r#"{
        "selector_policy": {
            "mode": "legacy-fallback",
            "hash": "sha512",
            "cipher": "aes-256-cbc"
        }
    }"#;
    let config = ToolkitConfig::from_json(json).unwrap();
    assert_eq!(
        config.selector_policy,
        SelectorPolicy::LegacyFallback {
            hash: HashAlgorithm::Sha512,
            cipher: CipherStrength::Aes256,
        }
    );
}

#[test]
fn serialization_roundtrip() {
    let config = ToolkitConfig {
        selector_policy: SelectorPolicy::legacy(),
    };
    let json = config.to_json().unwrap();
    let parsed = ToolkitConfig::from_json(&json).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn malformed_json_is_a_config_error() {
    let err = ToolkitConfig::from_json("{ not json").unwrap_err();
    assert!(err.to_string().starts_with("invalid configuration:"));
}

#[test]
fn unknown_mode_is_rejected() {
    let err = ToolkitConfig::from_json(r#"{"selector_policy": {"mode": "lenient"}}"#);
    assert!(err.is_err());
}
