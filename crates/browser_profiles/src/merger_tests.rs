//! Tests for the capability options merger.

use super::*;
use serde_json::json;

// ============================================================================
// Test Helpers
// ============================================================================

fn fragment(value: Value) -> CapabilityFragment {
    match value {
        Value::Object(map) => map,
        other => panic!("test fragment must be an object, got {other}"),
    }
}

fn merge(
    namespace: CapabilityNamespace,
    base: Value,
    overrides: Value,
) -> ProfileResult<CapabilityFragment> {
    OptionsMerger::new().merge(namespace, &fragment(base), &fragment(overrides))
}

// ============================================================================
// Strategy behaviour
// ============================================================================

/// Verify list options are concatenated with base items first.
#[test]
fn test_list_merge_appends_override_after_base() {
    let merged = merge(
        CapabilityNamespace::ChromeOptions,
        json!({ "args": ["a"] }),
        json!({ "args": ["b"] }),
    )
    .expect("args is a known chrome option");

    assert_eq!(Value::Object(merged), json!({ "args": ["a", "b"] }));
}

#[test]
fn test_list_merge_keeps_duplicates() {
    let merged = merge(
        CapabilityNamespace::FirefoxOptions,
        json!({ "args": ["-headless"] }),
        json!({ "args": ["-headless"] }),
    )
    .expect("args is a known firefox option");

    assert_eq!(merged["args"], json!(["-headless", "-headless"]));
}

/// Verify dict options are right-biased on overlapping subkeys.
#[test]
fn test_dict_merge_prefers_override_subkeys() {
    let merged = merge(
        CapabilityNamespace::ChromeOptions,
        json!({ "prefs": { "x": 1, "y": 2 } }),
        json!({ "prefs": { "y": 9 } }),
    )
    .expect("prefs is a known chrome option");

    assert_eq!(Value::Object(merged), json!({ "prefs": { "x": 1, "y": 9 } }));
}

#[test]
fn test_scalar_merge_takes_override() {
    let merged = merge(
        CapabilityNamespace::ChromeOptions,
        json!({ "binary": "A" }),
        json!({ "binary": "B" }),
    )
    .expect("binary is a known chrome option");

    assert_eq!(Value::Object(merged), json!({ "binary": "B" }));
}

#[test]
fn test_base_only_keys_pass_through() {
    let merged = merge(
        CapabilityNamespace::FirefoxOptions,
        json!({ "log": { "level": "trace" }, "binary": "/usr/bin/firefox" }),
        json!({ "args": ["-headless"] }),
    )
    .expect("args is a known firefox option");

    assert_eq!(merged["log"], json!({ "level": "trace" }));
    assert_eq!(merged["binary"], json!("/usr/bin/firefox"));
    assert_eq!(merged["args"], json!(["-headless"]));
}

#[test]
fn test_merge_into_empty_base_copies_override() {
    let merged = merge(
        CapabilityNamespace::EdgeOptions,
        json!({}),
        json!({ "binary": "/opt/edge", "args": ["--headless"] }),
    )
    .expect("both keys are known edge options");

    assert_eq!(
        Value::Object(merged),
        json!({ "binary": "/opt/edge", "args": ["--headless"] })
    );
}

#[test]
fn test_merge_preserves_declared_key_order() {
    let merged = merge(
        CapabilityNamespace::ChromeOptions,
        json!({ "args": ["no-sandbox"] }),
        json!({ "prefs": {}, "binary": "/x", "detach": true }),
    )
    .expect("all keys are known chrome options");

    let keys: Vec<&str> = merged.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["args", "prefs", "binary", "detach"]);
}

// ============================================================================
// Validation
// ============================================================================

/// Verify every recognized key of every strict schema merges without error.
#[test]
fn test_recognized_keys_never_fail() {
    for namespace in [
        CapabilityNamespace::ChromeOptions,
        CapabilityNamespace::FirefoxOptions,
        CapabilityNamespace::EdgeOptions,
    ] {
        let schema = namespace.schema();
        let mut overrides = CapabilityFragment::new();
        for key in schema.known_keys() {
            let value = match schema.strategy_for(key) {
                Some(MergeStrategy::Scalar) => json!("value"),
                Some(MergeStrategy::List) => json!(["item"]),
                Some(MergeStrategy::Dict) => json!({ "sub": true }),
                None => unreachable!("known key must have a strategy"),
            };
            overrides.insert(key.to_string(), value);
        }

        let result = OptionsMerger::new().merge(namespace, &CapabilityFragment::new(), &overrides);
        assert!(result.is_ok(), "{namespace} rejected its own keys: {result:?}");
    }
}

/// Verify a single unknown key always fails and the error names it.
#[test]
fn test_unknown_key_fails_naming_key() {
    for namespace in [
        CapabilityNamespace::ChromeOptions,
        CapabilityNamespace::FirefoxOptions,
        CapabilityNamespace::EdgeOptions,
    ] {
        let result = merge(
            namespace,
            json!({}),
            json!({ "args": [], "notARealOption": 1 }),
        );

        assert_eq!(
            result,
            Err(ProfileError::UnknownCapabilityKey {
                namespace: namespace.key().to_string(),
                key: "notARealOption".to_string(),
            })
        );
    }
}

#[test]
fn test_passthrough_namespace_accepts_anything_and_overrides() {
    let merged = merge(
        CapabilityNamespace::CloudGridOptions,
        json!({ "os": "Windows", "local": true }),
        json!({ "os": "OS X", "osVersion": "Big Sur" }),
    )
    .expect("passthrough namespaces accept any key");

    assert_eq!(
        Value::Object(merged),
        json!({ "os": "OS X", "local": true, "osVersion": "Big Sur" })
    );
}

#[test]
fn test_list_key_rejects_non_list_value() {
    let result = merge(
        CapabilityNamespace::ChromeOptions,
        json!({}),
        json!({ "args": "--headless" }),
    );

    assert_eq!(
        result,
        Err(ProfileError::InvalidCapabilityValue {
            namespace: "chromeOptions".to_string(),
            key: "args".to_string(),
            expected: "a list".to_string(),
        })
    );
}

#[test]
fn test_dict_key_rejects_non_table_value() {
    let result = merge(
        CapabilityNamespace::FirefoxOptions,
        json!({}),
        json!({ "prefs": ["not", "a", "table"] }),
    );

    assert!(matches!(
        result,
        Err(ProfileError::InvalidCapabilityValue { ref key, .. }) if key == "prefs"
    ));
}
