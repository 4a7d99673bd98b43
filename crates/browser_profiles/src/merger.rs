//! Schema-driven merging of capability fragments.
//!
//! The merger combines a base fragment (usually vendor defaults) with an
//! override fragment (usually user-supplied options) for a single namespace.
//! Every key in the override must be recognized by the namespace's schema;
//! the strategy registered for the key decides how the two values combine:
//!
//! - **Scalar**: the override replaces the base value.
//! - **List**: override items are appended after base items, duplicates kept.
//! - **Dict**: overlapping subkeys take the override value, others are kept.
//!
//! Keys present only in the base pass through unchanged.
//!
//! # Examples
//!
//! ```rust
//! use browser_profiles::{CapabilityNamespace, OptionsMerger};
//! use serde_json::json;
//!
//! let base = json!({ "args": ["no-sandbox"] });
//! let overrides = json!({ "args": ["--headless"], "binary": "/opt/chrome" });
//!
//! let merged = OptionsMerger::new().merge(
//!     CapabilityNamespace::ChromeOptions,
//!     base.as_object().unwrap(),
//!     overrides.as_object().unwrap(),
//! )?;
//!
//! assert_eq!(merged["args"], json!(["no-sandbox", "--headless"]));
//! assert_eq!(merged["binary"], json!("/opt/chrome"));
//! # Ok::<(), browser_profiles::ProfileError>(())
//! ```

use serde_json::Value;
use tracing::debug;

use crate::{
    errors::{ProfileError, ProfileResult},
    schema::{CapabilityFragment, CapabilityNamespace, MergeStrategy},
};

#[cfg(test)]
#[path = "merger_tests.rs"]
mod tests;

/// Capability fragment merging engine.
///
/// Stateless; it takes two fragments and produces a new one.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionsMerger {}

impl OptionsMerger {
    pub fn new() -> Self {
        Self {}
    }

    /// Merges `overrides` into `base` under the rules of `namespace`.
    ///
    /// # Errors
    ///
    /// - `ProfileError::UnknownCapabilityKey` if `overrides` holds a key the
    ///   namespace schema does not recognize.
    /// - `ProfileError::InvalidCapabilityValue` if a list or dict key is given
    ///   a value of another shape.
    pub fn merge(
        &self,
        namespace: CapabilityNamespace,
        base: &CapabilityFragment,
        overrides: &CapabilityFragment,
    ) -> ProfileResult<CapabilityFragment> {
        let schema = namespace.schema();
        let mut merged = base.clone();

        for (key, value) in overrides {
            let strategy =
                schema
                    .strategy_for(key)
                    .ok_or_else(|| ProfileError::UnknownCapabilityKey {
                        namespace: namespace.key().to_string(),
                        key: key.clone(),
                    })?;

            debug!(
                message = "Merging capability option",
                namespace = namespace.key(),
                key = key.as_str(),
                strategy = ?strategy
            );

            match strategy {
                MergeStrategy::Scalar => {
                    merged.insert(key.clone(), value.clone());
                }
                MergeStrategy::List => {
                    let items = value
                        .as_array()
                        .ok_or_else(|| invalid_value(namespace, key, strategy))?;
                    match merged.get_mut(key) {
                        Some(Value::Array(existing)) => existing.extend(items.iter().cloned()),
                        _ => {
                            merged.insert(key.clone(), Value::Array(items.clone()));
                        }
                    }
                }
                MergeStrategy::Dict => {
                    let entries = value
                        .as_object()
                        .ok_or_else(|| invalid_value(namespace, key, strategy))?;
                    match merged.get_mut(key) {
                        Some(Value::Object(existing)) => {
                            for (subkey, subvalue) in entries {
                                existing.insert(subkey.clone(), subvalue.clone());
                            }
                        }
                        _ => {
                            merged.insert(key.clone(), Value::Object(entries.clone()));
                        }
                    }
                }
            }
        }

        Ok(merged)
    }
}

fn invalid_value(namespace: CapabilityNamespace, key: &str, strategy: MergeStrategy) -> ProfileError {
    ProfileError::InvalidCapabilityValue {
        namespace: namespace.key().to_string(),
        key: key.to_string(),
        expected: strategy.expected_shape().to_string(),
    }
}
