//! Built profiles, in the shape the test runner consumes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::schema::CapabilityFragment;

#[cfg(test)]
#[path = "profile_tests.rs"]
mod tests;

/// A named browser profile: which browser to drive, where its WebDriver
/// endpoint is, and the capabilities to negotiate the session with.
///
/// Serializes to the test runner's profile layout:
///
/// ```json
/// {
///   "browser": "chrome",
///   "wd_host": "http://localhost:9515",
///   "capabilities": {
///     "extra_capabilities": { "chromeOptions": { "args": ["no-sandbox"] } }
///   }
/// }
/// ```
///
/// Fields the runner understands but this crate does not model (for example
/// `tags`, or `version` inside `capabilities`) are kept in `extra` and written
/// back out unchanged. A missing `wd_host` reads as empty and is omitted
/// again on output, leaving the runner's own default in effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "browser")]
    pub browser_name: String,

    #[serde(rename = "wd_host", default, skip_serializing_if = "String::is_empty")]
    pub webdriver_host: String,

    #[serde(default)]
    pub capabilities: ProfileCapabilities,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The capability section of a profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileCapabilities {
    /// Capabilities passed through to the WebDriver session request.
    #[serde(default)]
    pub extra_capabilities: CapabilityFragment,

    /// Session name shown by the remote end (cloud grid project name).
    #[serde(rename = "name", default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Other capability settings, such as `marionette` or `version`.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Profile {
    /// Creates a profile with no extra capabilities.
    pub fn new(browser_name: impl Into<String>, webdriver_host: impl Into<String>) -> Self {
        Self {
            browser_name: browser_name.into(),
            webdriver_host: webdriver_host.into(),
            capabilities: ProfileCapabilities::default(),
            extra: Map::new(),
        }
    }

    /// Returns a copy of this profile pointed at another WebDriver endpoint.
    ///
    /// Useful for fanning one profile out over several driver instances.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use browser_profiles::Profile;
    ///
    /// let first = Profile::new("firefox", "http://localhost:4444");
    /// let second = first.with_webdriver_host("http://localhost:4445");
    /// assert_eq!(second.webdriver_host, "http://localhost:4445");
    /// assert_eq!(second.browser_name, first.browser_name);
    /// ```
    pub fn with_webdriver_host(&self, webdriver_host: impl Into<String>) -> Self {
        Self {
            webdriver_host: webdriver_host.into(),
            ..self.clone()
        }
    }

    /// Looks up a top-level extra capability.
    pub fn extra_capability(&self, key: &str) -> Option<&Value> {
        self.capabilities.extra_capabilities.get(key)
    }

    pub fn display_name(&self) -> Option<&str> {
        self.capabilities.display_name.as_deref()
    }
}
