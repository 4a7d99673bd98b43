//! Loading of user-defined profiles.
//!
//! Custom profiles arrive from a collaborator (usually a local file) as a
//! mapping of profile name to a profile in the test runner's layout. Anything
//! other than a mapping, or an entry that is not a valid profile, fails the
//! whole load.
//!
//! # TOML Format
//!
//! ```toml
//! [headlessgeckodriver2]
//! browser = "firefox"
//! wd_host = "http://localhost:4445"
//!
//! [headlessgeckodriver2.capabilities.extra_capabilities."moz:firefoxOptions"]
//! args = ["-headless"]
//! ```

use serde_json::Value;
use tracing::debug;

use crate::{
    errors::{ProfileError, ProfileResult},
    profile::Profile,
    profile_set::{ProfileSet, ProfileSource},
};

#[cfg(test)]
#[path = "custom_profiles_tests.rs"]
mod tests;

/// Converts a collaborator-supplied value into a set of custom profiles.
///
/// # Errors
///
/// Returns `ProfileError::InvalidCustomProfileSource` if `value` is not a
/// mapping or any entry does not describe a profile.
pub fn custom_profiles_from_value(value: Value) -> ProfileResult<ProfileSet> {
    let entries = match value {
        Value::Object(entries) => entries,
        other => {
            return Err(ProfileError::InvalidCustomProfileSource {
                reason: format!("expected a mapping of profiles, found {}", json_kind(&other)),
            })
        }
    };

    let mut profiles = ProfileSet::new();
    for (name, entry) in entries {
        let profile: Profile =
            serde_json::from_value(entry).map_err(|e| ProfileError::InvalidCustomProfileSource {
                reason: format!("profile '{name}' is invalid: {e}"),
            })?;
        debug!(message = "Loaded custom profile", name = name.as_str());
        profiles.insert(name, profile, ProfileSource::Custom);
    }

    Ok(profiles)
}

/// Parses custom profiles from a TOML document.
pub fn custom_profiles_from_toml_str(content: &str) -> ProfileResult<ProfileSet> {
    let value: Value = toml::from_str(content).map_err(|e| ProfileError::ParseError {
        reason: e.to_string(),
    })?;
    custom_profiles_from_value(value)
}

/// Parses custom profiles from a JSON document.
pub fn custom_profiles_from_json_str(content: &str) -> ProfileResult<ProfileSet> {
    let value: Value = serde_json::from_str(content).map_err(|e| ProfileError::ParseError {
        reason: e.to_string(),
    })?;
    custom_profiles_from_value(value)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}
