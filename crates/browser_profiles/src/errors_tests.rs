//! Tests for profile error types.

use super::*;

#[test]
fn test_unknown_capability_key_names_namespace_and_key() {
    let error = ProfileError::UnknownCapabilityKey {
        namespace: "chromeOptions".to_string(),
        key: "binaryPath".to_string(),
    };

    assert_eq!(
        error.to_string(),
        "Unknown option in chromeOptions: 'binaryPath'"
    );
}

#[test]
fn test_invalid_capability_value_display() {
    let error = ProfileError::InvalidCapabilityValue {
        namespace: "moz:firefoxOptions".to_string(),
        key: "args".to_string(),
        expected: "a list".to_string(),
    };

    assert_eq!(
        error.to_string(),
        "Invalid value for moz:firefoxOptions.args: expected a list"
    );
}

#[test]
fn test_invalid_custom_profile_source_display() {
    let error = ProfileError::InvalidCustomProfileSource {
        reason: "expected a table of profiles".to_string(),
    };

    assert!(error.to_string().contains("expected a table of profiles"));
}

#[test]
fn test_unresolvable_context_display() {
    let error = ProfileError::UnresolvableContext {
        reason: "composer.lock not found".to_string(),
    };

    assert_eq!(
        error.to_string(),
        "Unable to resolve execution context: composer.lock not found"
    );
}

#[test]
fn test_errors_are_comparable() {
    let a = ProfileError::ProfileNotFound {
        name: "chrome".to_string(),
    };
    let b = a.clone();

    assert_eq!(a, b);
    assert_ne!(
        a,
        ProfileError::ProfileNotFound {
            name: "firefox".to_string()
        }
    );
}

#[test]
fn test_result_alias_propagates_with_question_mark() {
    fn inner() -> ProfileResult<u8> {
        Err(ProfileError::ParseError {
            reason: "bad".to_string(),
        })
    }

    fn outer() -> ProfileResult<u8> {
        let value = inner()?;
        Ok(value + 1)
    }

    assert!(matches!(outer(), Err(ProfileError::ParseError { .. })));
}
