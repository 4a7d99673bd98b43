//! The standard profile matrix and profile set composition.
//!
//! The standard set holds one profile per browser, launcher endpoint and
//! headless mode:
//!
//! | Profiles | Browser | Endpoint |
//! |---|---|---|
//! | `chromedriver`, `headlesschromedriver` | chrome | chromedriver |
//! | `chrome`, `headlesschrome` | chrome | selenium |
//! | `gecko`, `geckodriver`, `headlessgecko`, `headlessgeckodriver` | firefox | geckodriver |
//! | `firefox`, `headlessfirefox` | firefox | selenium |
//! | `edgedriver`, `headlessedgedriver` | edge | edgedriver |
//! | `edge`, `headlessedge` | edge | selenium |
//! | `safaridriver` | safari | safaridriver |
//! | `bs_osx_safari`, `bs_win_edge` | safari, edge | cloud grid (when configured) |
//!
//! Custom profiles are layered on top by name; a custom entry fully replaces
//! a standard entry with the same name.

use serde_json::{json, Value};
use tracing::{debug, info};

use crate::{
    browser::Browser,
    builder::ProfileBuilder,
    configuration::Configuration,
    errors::ProfileResult,
    overrides::CapabilityOverrides,
    profile_set::{ProfileSet, ProfileSource},
    schema::{CapabilityFragment, CapabilityNamespace},
};

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;

/// Which configured endpoint a standard profile connects to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Launcher {
    Selenium,
    Chromedriver,
    Geckodriver,
    Edgedriver,
    Safaridriver,
}

impl Launcher {
    fn url<'c>(&self, config: &'c Configuration) -> &'c str {
        match self {
            Launcher::Selenium => config.selenium_url(),
            Launcher::Chromedriver => config.chromedriver_url(),
            Launcher::Geckodriver => config.geckodriver_url(),
            Launcher::Edgedriver => config.edgedriver_url(),
            Launcher::Safaridriver => config.safaridriver_url(),
        }
    }
}

struct StandardProfile {
    name: &'static str,
    browser: Browser,
    launcher: Launcher,
    headless: bool,
}

const fn standard(
    name: &'static str,
    browser: Browser,
    launcher: Launcher,
    headless: bool,
) -> StandardProfile {
    StandardProfile {
        name,
        browser,
        launcher,
        headless,
    }
}

const STANDARD_PROFILES: &[StandardProfile] = &[
    standard("chromedriver", Browser::Chrome, Launcher::Chromedriver, false),
    standard("headlesschromedriver", Browser::Chrome, Launcher::Chromedriver, true),
    standard("chrome", Browser::Chrome, Launcher::Selenium, false),
    standard("headlesschrome", Browser::Chrome, Launcher::Selenium, true),
    standard("gecko", Browser::Firefox, Launcher::Geckodriver, false),
    standard("geckodriver", Browser::Firefox, Launcher::Geckodriver, false),
    standard("headlessgecko", Browser::Firefox, Launcher::Geckodriver, true),
    standard("headlessgeckodriver", Browser::Firefox, Launcher::Geckodriver, true),
    standard("firefox", Browser::Firefox, Launcher::Selenium, false),
    standard("headlessfirefox", Browser::Firefox, Launcher::Selenium, true),
    standard("edgedriver", Browser::Edge, Launcher::Edgedriver, false),
    standard("headlessedgedriver", Browser::Edge, Launcher::Edgedriver, true),
    standard("edge", Browser::Edge, Launcher::Selenium, false),
    standard("headlessedge", Browser::Edge, Launcher::Selenium, true),
    standard("safaridriver", Browser::Safari, Launcher::Safaridriver, false),
];

/// Builds named profile sets against a configuration.
///
/// # Examples
///
/// ```rust
/// use browser_profiles::{Configuration, ProfileRegistry};
///
/// let config = Configuration::new();
/// let registry = ProfileRegistry::new(&config);
/// let profiles = registry.standard_profiles(true)?;
///
/// assert!(profiles.contains("headlessfirefox"));
/// assert!(!profiles.contains("bs_osx_safari"));
/// # Ok::<(), browser_profiles::ProfileError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ProfileRegistry<'a> {
    config: &'a Configuration,
    builder: ProfileBuilder<'a>,
}

impl<'a> ProfileRegistry<'a> {
    pub fn new(config: &'a Configuration) -> Self {
        Self {
            config,
            builder: ProfileBuilder::new(config),
        }
    }

    /// The builder this registry uses for individual profiles.
    pub fn builder(&self) -> &ProfileBuilder<'a> {
        &self.builder
    }

    /// Builds the standard profile set.
    ///
    /// Cloud grid profiles are included only when the configuration resolves
    /// a cloud grid endpoint.
    ///
    /// # Errors
    ///
    /// Propagates any error from building an individual profile.
    pub fn standard_profiles(&self, supports_w3c: bool) -> ProfileResult<ProfileSet> {
        let mut profiles = ProfileSet::new();

        for entry in STANDARD_PROFILES {
            let overrides = if entry.headless {
                headless_overrides(entry.browser)
            } else {
                CapabilityOverrides::new()
            };
            let profile = self.builder.build(
                entry.browser.name(),
                entry.launcher.url(self.config),
                supports_w3c,
                &overrides,
            )?;
            profiles.insert(entry.name, profile, ProfileSource::Standard);
        }

        match self.config.cloud_grid_url() {
            Some(grid_url) => {
                for (name, browser, overrides) in cloud_grid_profiles() {
                    let profile =
                        self.builder
                            .build(browser.name(), &grid_url, supports_w3c, &overrides)?;
                    profiles.insert(name, profile, ProfileSource::Standard);
                }
            }
            None => debug!("No cloud grid endpoint configured, skipping cloud grid profiles"),
        }

        info!(
            message = "Built standard profiles",
            count = profiles.len(),
            supports_w3c = supports_w3c
        );
        Ok(profiles)
    }

    /// Overlays the standard profiles underneath an existing set.
    ///
    /// Entries already in `existing` keep precedence over standard entries
    /// with the same name.
    pub fn with_standard_profiles(
        &self,
        existing: ProfileSet,
        supports_w3c: bool,
    ) -> ProfileResult<ProfileSet> {
        let mut profiles = self.standard_profiles(supports_w3c)?;
        profiles.extend(existing);
        Ok(profiles)
    }

    /// Layers `custom` over `standard` by name.
    ///
    /// This is a flat overwrite: a custom entry replaces the standard entry
    /// with the same name entirely, with no capability-level merging.
    pub fn with_custom_profiles(standard: ProfileSet, custom: ProfileSet) -> ProfileSet {
        let mut profiles = standard;
        for name in custom.names().filter(|name| profiles.contains(name)) {
            debug!(message = "Custom profile replaces existing profile", name = name);
        }
        profiles.extend(custom);
        profiles
    }

    /// Builds a profile and registers it under `name`, replacing any profile
    /// already registered with that name.
    ///
    /// # Errors
    ///
    /// Propagates profile build errors; the set is left unchanged on error.
    pub fn add_browser_profile(
        &self,
        profiles: &mut ProfileSet,
        name: &str,
        browser_name: &str,
        webdriver_host: &str,
        supports_w3c: bool,
        overrides: &CapabilityOverrides,
    ) -> ProfileResult<()> {
        let profile = self
            .builder
            .build(browser_name, webdriver_host, supports_w3c, overrides)?;
        profiles.register(name, profile);
        Ok(())
    }
}

/// Overrides that launch `browser` without a window.
pub fn headless_overrides(browser: Browser) -> CapabilityOverrides {
    match (browser.options_namespace(), browser.headless_args()) {
        (Some(namespace), Some(args)) => {
            let mut block = CapabilityFragment::new();
            block.insert("args".to_string(), json!(args));
            CapabilityOverrides::new().with_block(namespace, block)
        }
        _ => CapabilityOverrides::new(),
    }
}

fn fragment(value: Value) -> CapabilityFragment {
    match value {
        Value::Object(block) => block,
        _ => CapabilityFragment::new(),
    }
}

/// A small selection of cloud grid browsers showing how such profiles are
/// assembled.
fn cloud_grid_profiles() -> Vec<(&'static str, Browser, CapabilityOverrides)> {
    vec![
        (
            "bs_osx_safari",
            Browser::Safari,
            CapabilityOverrides::new()
                .with_block(
                    CapabilityNamespace::CloudGridOptions,
                    fragment(json!({ "os": "OS X", "osVersion": "Big Sur", "local": true })),
                )
                .with_block(
                    CapabilityNamespace::Generic,
                    fragment(json!({ "browserName": "Safari" })),
                ),
        ),
        (
            "bs_win_edge",
            Browser::Edge,
            CapabilityOverrides::new().with_block(
                CapabilityNamespace::CloudGridOptions,
                fragment(json!({ "os": "Windows", "osVersion": "10", "local": true })),
            ),
        ),
    ]
}
