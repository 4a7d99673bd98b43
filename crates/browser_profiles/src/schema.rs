//! Capability namespaces and their merge schemas.
//!
//! Each vendor-specific options block (for example `moz:firefoxOptions`) has
//! a fixed table of recognized option names, each tagged with the strategy
//! used to merge a default value with a user-supplied one. The tables track
//! the vendors' published capability documentation and are not user
//! configurable.

use std::fmt;

use serde_json::{Map, Value};

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;

/// A vendor option block: option name to scalar, list or nested map.
///
/// Key order is preserved, so iteration follows the order the options were
/// declared in.
pub type CapabilityFragment = Map<String, Value>;

/// How an override value combines with an existing value for the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MergeStrategy {
    /// The override replaces the existing value.
    Scalar,

    /// The override's items are appended after the existing items.
    List,

    /// Overlapping subkeys take the override's value; other subkeys are kept.
    Dict,
}

impl MergeStrategy {
    /// Human-readable description of the JSON shape this strategy requires.
    pub fn expected_shape(&self) -> &'static str {
        match self {
            MergeStrategy::Scalar => "a value",
            MergeStrategy::List => "a list",
            MergeStrategy::Dict => "a table",
        }
    }
}

/// The set of options a namespace accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeSchema {
    /// Only the listed keys are valid.
    Strict(&'static [(&'static str, MergeStrategy)]),

    /// Any key is valid and merged as a scalar. Used for namespaces whose
    /// contents are handed to the remote end unvalidated.
    Passthrough,
}

impl MergeSchema {
    /// Returns the merge strategy for `key`, or `None` when the key is not
    /// recognized by this schema.
    pub fn strategy_for(&self, key: &str) -> Option<MergeStrategy> {
        match self {
            MergeSchema::Strict(table) => table
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, strategy)| *strategy),
            MergeSchema::Passthrough => Some(MergeStrategy::Scalar),
        }
    }

    /// Names of the recognized keys. Empty for passthrough schemas.
    pub fn known_keys(&self) -> Vec<&'static str> {
        match self {
            MergeSchema::Strict(table) => table.iter().map(|(name, _)| *name).collect(),
            MergeSchema::Passthrough => Vec::new(),
        }
    }

    pub fn is_passthrough(&self) -> bool {
        matches!(self, MergeSchema::Passthrough)
    }
}

// https://chromedriver.chromium.org/capabilities
const CHROME_OPTIONS: &[(&str, MergeStrategy)] = &[
    ("binary", MergeStrategy::Scalar),
    ("debuggerAddress", MergeStrategy::Scalar),
    ("detach", MergeStrategy::Scalar),
    ("minidumpPath", MergeStrategy::Scalar),
    ("args", MergeStrategy::List),
    ("extensions", MergeStrategy::List),
    ("excludeSwitches", MergeStrategy::List),
    ("windowTypes", MergeStrategy::List),
    ("localState", MergeStrategy::Dict),
    ("prefs", MergeStrategy::Dict),
    ("mobileEmulation", MergeStrategy::Dict),
    ("perfLoggingPrefs", MergeStrategy::Dict),
];

// https://developer.mozilla.org/en-US/docs/Web/WebDriver/Capabilities/firefoxOptions
const FIREFOX_OPTIONS: &[(&str, MergeStrategy)] = &[
    ("binary", MergeStrategy::Scalar),
    ("profile", MergeStrategy::Scalar),
    ("args", MergeStrategy::List),
    ("prefs", MergeStrategy::Dict),
    ("log", MergeStrategy::Dict),
];

const EDGE_OPTIONS: &[(&str, MergeStrategy)] = &[
    ("binary", MergeStrategy::Scalar),
    ("args", MergeStrategy::List),
];

/// The capability blocks a user may supply for a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CapabilityNamespace {
    ChromeOptions,
    FirefoxOptions,
    EdgeOptions,
    SafariOptions,
    CloudGridOptions,
    Generic,
}

impl CapabilityNamespace {
    /// Vendor blocks in the order they are considered when choosing the one
    /// block a profile honors. The first block present wins.
    pub const PRECEDENCE: [CapabilityNamespace; 5] = [
        CapabilityNamespace::ChromeOptions,
        CapabilityNamespace::FirefoxOptions,
        CapabilityNamespace::SafariOptions,
        CapabilityNamespace::EdgeOptions,
        CapabilityNamespace::Generic,
    ];

    /// The capability name this block is sent under.
    pub fn key(&self) -> &'static str {
        match self {
            CapabilityNamespace::ChromeOptions => "chromeOptions",
            CapabilityNamespace::FirefoxOptions => "moz:firefoxOptions",
            CapabilityNamespace::EdgeOptions => "ms:edgeOptions",
            CapabilityNamespace::SafariOptions => "safari:options",
            CapabilityNamespace::CloudGridOptions => "bstack:options",
            CapabilityNamespace::Generic => "capabilities",
        }
    }

    pub fn schema(&self) -> MergeSchema {
        match self {
            CapabilityNamespace::ChromeOptions => MergeSchema::Strict(CHROME_OPTIONS),
            CapabilityNamespace::FirefoxOptions => MergeSchema::Strict(FIREFOX_OPTIONS),
            CapabilityNamespace::EdgeOptions => MergeSchema::Strict(EDGE_OPTIONS),
            CapabilityNamespace::SafariOptions
            | CapabilityNamespace::CloudGridOptions
            | CapabilityNamespace::Generic => MergeSchema::Passthrough,
        }
    }

    /// Whether the block may carry a local `binary` path.
    pub fn carries_binary(&self) -> bool {
        matches!(
            self,
            CapabilityNamespace::ChromeOptions
                | CapabilityNamespace::FirefoxOptions
                | CapabilityNamespace::EdgeOptions
        )
    }
}

impl fmt::Display for CapabilityNamespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
