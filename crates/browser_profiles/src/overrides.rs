//! User-supplied capability overrides for a single profile.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    errors::{ProfileError, ProfileResult},
    schema::{CapabilityFragment, CapabilityNamespace},
};

#[cfg(test)]
#[path = "overrides_tests.rs"]
mod tests;

/// The capability blocks a caller supplies when building a profile.
///
/// Each block is keyed by its namespace's wire name, so overrides can be read
/// straight from JSON or TOML:
///
/// ```toml
/// [chromeOptions]
/// args = ["--window-size=1920,1080"]
///
/// ["bstack:options"]
/// os = "Windows"
/// osVersion = "10"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CapabilityOverrides {
    #[serde(rename = "chromeOptions", default, skip_serializing_if = "Option::is_none")]
    pub chrome_options: Option<CapabilityFragment>,

    #[serde(rename = "moz:firefoxOptions", default, skip_serializing_if = "Option::is_none")]
    pub firefox_options: Option<CapabilityFragment>,

    #[serde(rename = "ms:edgeOptions", default, skip_serializing_if = "Option::is_none")]
    pub edge_options: Option<CapabilityFragment>,

    /// Overrides the `ms:edgeChromium` flag, which otherwise defaults to `true`.
    #[serde(rename = "ms:edgeChromium", default, skip_serializing_if = "Option::is_none")]
    pub edge_chromium: Option<bool>,

    #[serde(rename = "safari:options", default, skip_serializing_if = "Option::is_none")]
    pub safari_options: Option<CapabilityFragment>,

    /// Cloud grid settings (OS, project name, tunnel use and so on).
    #[serde(rename = "bstack:options", default, skip_serializing_if = "Option::is_none")]
    pub cloud_grid_options: Option<CapabilityFragment>,

    /// Generic W3C capabilities such as `browserName` or `browserVersion`.
    #[serde(rename = "capabilities", default, skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<CapabilityFragment>,
}

impl CapabilityOverrides {
    /// Creates an empty set of overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads overrides from a JSON value keyed by namespace wire names.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::ParseError` if the value is not an object or a
    /// block is not a table.
    pub fn from_value(value: Value) -> ProfileResult<Self> {
        serde_json::from_value(value).map_err(|e| ProfileError::ParseError {
            reason: format!("invalid capability overrides: {e}"),
        })
    }

    /// Returns the block supplied for `namespace`, if any.
    pub fn block(&self, namespace: CapabilityNamespace) -> Option<&CapabilityFragment> {
        match namespace {
            CapabilityNamespace::ChromeOptions => self.chrome_options.as_ref(),
            CapabilityNamespace::FirefoxOptions => self.firefox_options.as_ref(),
            CapabilityNamespace::EdgeOptions => self.edge_options.as_ref(),
            CapabilityNamespace::SafariOptions => self.safari_options.as_ref(),
            CapabilityNamespace::CloudGridOptions => self.cloud_grid_options.as_ref(),
            CapabilityNamespace::Generic => self.capabilities.as_ref(),
        }
    }

    /// Returns these overrides with the block for `namespace` replaced.
    pub fn with_block(mut self, namespace: CapabilityNamespace, block: CapabilityFragment) -> Self {
        let slot = match namespace {
            CapabilityNamespace::ChromeOptions => &mut self.chrome_options,
            CapabilityNamespace::FirefoxOptions => &mut self.firefox_options,
            CapabilityNamespace::EdgeOptions => &mut self.edge_options,
            CapabilityNamespace::SafariOptions => &mut self.safari_options,
            CapabilityNamespace::CloudGridOptions => &mut self.cloud_grid_options,
            CapabilityNamespace::Generic => &mut self.capabilities,
        };
        *slot = Some(block);
        self
    }

    pub fn with_edge_chromium(mut self, enabled: bool) -> Self {
        self.edge_chromium = Some(enabled);
        self
    }

    /// True when no block and no flag has been supplied.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
