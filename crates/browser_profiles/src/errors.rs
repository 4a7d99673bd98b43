//! Profile generation error types.
//!
//! Domain-specific errors for capability validation, profile construction
//! and loading of configuration or custom profiles.

use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Profile generation errors.
///
/// Every variant is a hard stop. Nothing in this crate retries or degrades to
/// a partially built profile; the error is handed back to whatever invoked
/// profile resolution.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProfileError {
    /// An override fragment carried a key that is not in the namespace's
    /// merge schema.
    #[error("Unknown option in {namespace}: '{key}'")]
    UnknownCapabilityKey { namespace: String, key: String },

    /// A recognized key carried a value of the wrong shape for its merge
    /// strategy (for example a string where a list is expected).
    #[error("Invalid value for {namespace}.{key}: expected {expected}")]
    InvalidCapabilityValue {
        namespace: String,
        key: String,
        expected: String,
    },

    /// The custom profile collaborator did not supply a usable mapping.
    #[error("Invalid custom profile source: {reason}")]
    InvalidCustomProfileSource { reason: String },

    /// Protocol detection could not locate what it needed in the caller's
    /// environment.
    #[error("Unable to resolve execution context: {reason}")]
    UnresolvableContext { reason: String },

    /// A configuration document could not be parsed.
    #[error("Failed to parse configuration: {reason}")]
    ParseError { reason: String },

    /// A named profile was requested but is not in the set.
    #[error("Profile not found: {name}")]
    ProfileNotFound { name: String },
}

/// Result type alias for profile operations.
pub type ProfileResult<T> = Result<T, ProfileError>;
