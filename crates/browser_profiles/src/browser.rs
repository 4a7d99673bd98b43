//! Browser families and their default capabilities.

use std::fmt;

use serde_json::json;

use crate::{
    configuration::Configuration,
    schema::{CapabilityFragment, CapabilityNamespace},
};

#[cfg(test)]
#[path = "browser_tests.rs"]
mod tests;

/// Launch arguments that put Chromium-family browsers in headless mode.
pub const CHROMIUM_HEADLESS_ARGS: &[&str] = &["--headless", "--no-gpu"];

/// Launch arguments that put Firefox in headless mode.
pub const FIREFOX_HEADLESS_ARGS: &[&str] = &["-headless"];

/// The browser families profiles can be built for.
///
/// Any browser name that is not one of the known families maps to
/// `Generic`; such profiles get no vendor defaults and no schema checks
/// beyond the generic passthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Browser {
    Chrome,
    Firefox,
    Safari,
    Edge,
    Generic,
}

impl Browser {
    /// Maps a WebDriver browser name onto a family.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use browser_profiles::Browser;
    ///
    /// assert_eq!(Browser::from_name("firefox"), Browser::Firefox);
    /// assert_eq!(Browser::from_name("opera"), Browser::Generic);
    /// ```
    pub fn from_name(name: &str) -> Self {
        match name {
            "chrome" => Browser::Chrome,
            "firefox" => Browser::Firefox,
            "safari" => Browser::Safari,
            "edge" => Browser::Edge,
            _ => Browser::Generic,
        }
    }

    /// The canonical browser name used in profiles.
    pub fn name(&self) -> &'static str {
        match self {
            Browser::Chrome => "chrome",
            Browser::Firefox => "firefox",
            Browser::Safari => "safari",
            Browser::Edge => "edge",
            Browser::Generic => "generic",
        }
    }

    /// The vendor options block this browser is configured through, if any.
    pub fn options_namespace(&self) -> Option<CapabilityNamespace> {
        match self {
            Browser::Chrome => Some(CapabilityNamespace::ChromeOptions),
            Browser::Firefox => Some(CapabilityNamespace::FirefoxOptions),
            Browser::Safari => Some(CapabilityNamespace::SafariOptions),
            Browser::Edge => Some(CapabilityNamespace::EdgeOptions),
            Browser::Generic => None,
        }
    }

    /// Builds the default options block for this browser.
    ///
    /// Safari and generic browsers have no defaults. A binary path configured
    /// for the browser is included as the `binary` option.
    pub fn default_options(
        &self,
        config: &Configuration,
    ) -> Option<(CapabilityNamespace, CapabilityFragment)> {
        let mut block = CapabilityFragment::new();
        let binary = match self {
            Browser::Chrome => {
                block.insert("args".to_string(), json!(["no-sandbox"]));
                config.chrome_binary_path()
            }
            Browser::Firefox => {
                block.insert(
                    "prefs".to_string(),
                    json!({ "devtools.console.stdout.content": true }),
                );
                block.insert("log".to_string(), json!({ "level": "trace" }));
                config.firefox_binary_path()
            }
            Browser::Edge => config.edge_binary_path(),
            Browser::Safari | Browser::Generic => return None,
        };

        if let Some(path) = binary {
            block.insert("binary".to_string(), json!(path));
        }

        self.options_namespace().map(|namespace| (namespace, block))
    }

    /// Launch arguments for headless mode, if the browser supports it.
    pub fn headless_args(&self) -> Option<&'static [&'static str]> {
        match self {
            Browser::Chrome | Browser::Edge => Some(CHROMIUM_HEADLESS_ARGS),
            Browser::Firefox => Some(FIREFOX_HEADLESS_ARGS),
            Browser::Safari | Browser::Generic => None,
        }
    }
}

impl fmt::Display for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
