//! Profile construction.
//!
//! Building a profile takes a browser name, a WebDriver endpoint, whether the
//! remote end speaks the W3C protocol, and the caller's capability overrides.
//! The steps are:
//!
//! 1. Compute the browser's default options block (including a configured
//!    binary path) and merge the caller's block for the same namespace into
//!    it, validating against the namespace schema.
//! 2. Pick the single block the profile honors. Blocks are considered in the
//!    order Chrome, Firefox, Safari, Edge, generic `capabilities`; the first
//!    one present wins and later ones are ignored.
//! 3. Place the chosen block in `extra_capabilities`. Firefox on the legacy
//!    protocol is flattened into the top level with `marionette` disabled;
//!    the generic block becomes the top level as-is.
//! 4. When cloud grid options are supplied, copy them in and strip every
//!    local `binary` path, which is meaningless on a remote grid. A cloud
//!    grid `projectName` becomes the profile's display name.

use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    browser::Browser,
    configuration::Configuration,
    errors::ProfileResult,
    merger::OptionsMerger,
    overrides::CapabilityOverrides,
    profile::{Profile, ProfileCapabilities},
    schema::{CapabilityFragment, CapabilityNamespace},
};

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;

/// Builds individual profiles against a configuration.
///
/// # Examples
///
/// ```rust
/// use browser_profiles::{CapabilityOverrides, Configuration, ProfileBuilder};
///
/// let config = Configuration::new();
/// let builder = ProfileBuilder::new(&config);
///
/// let profile = builder.build(
///     "chrome",
///     config.chromedriver_url(),
///     true,
///     &CapabilityOverrides::new(),
/// )?;
///
/// assert_eq!(profile.browser_name, "chrome");
/// assert!(profile.extra_capability("chromeOptions").is_some());
/// # Ok::<(), browser_profiles::ProfileError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ProfileBuilder<'a> {
    config: &'a Configuration,
    merger: OptionsMerger,
}

impl<'a> ProfileBuilder<'a> {
    pub fn new(config: &'a Configuration) -> Self {
        Self {
            config,
            merger: OptionsMerger::new(),
        }
    }

    /// Builds a profile.
    ///
    /// # Arguments
    ///
    /// * `browser_name` - WebDriver browser name (`chrome`, `firefox`, `safari`, `edge` or any other)
    /// * `webdriver_host` - Endpoint the session will be opened against
    /// * `supports_w3c` - Whether the runner talks the W3C protocol
    /// * `overrides` - Caller-supplied capability blocks
    ///
    /// # Errors
    ///
    /// Propagates `UnknownCapabilityKey` and `InvalidCapabilityValue` from
    /// merging the chosen block. No other failure modes exist.
    pub fn build(
        &self,
        browser_name: &str,
        webdriver_host: &str,
        supports_w3c: bool,
        overrides: &CapabilityOverrides,
    ) -> ProfileResult<Profile> {
        let browser = Browser::from_name(browser_name);
        debug!(
            message = "Building browser profile",
            browser = browser_name,
            webdriver_host = webdriver_host,
            supports_w3c = supports_w3c
        );

        let defaults = browser.default_options(self.config);
        let mut extra = CapabilityFragment::new();
        let mut flattened_firefox = false;

        if let Some((namespace, block)) = self.select_block(defaults, overrides)? {
            match namespace {
                CapabilityNamespace::FirefoxOptions if !supports_w3c => {
                    extra = block;
                    extra.insert("marionette".to_string(), Value::Bool(false));
                    flattened_firefox = true;
                }
                CapabilityNamespace::EdgeOptions => {
                    extra.insert(
                        "browserName".to_string(),
                        Value::String("MicrosoftEdge".to_string()),
                    );
                    extra.insert(namespace.key().to_string(), Value::Object(block));
                    extra.insert(
                        "ms:edgeChromium".to_string(),
                        Value::Bool(overrides.edge_chromium.unwrap_or(true)),
                    );
                }
                CapabilityNamespace::Generic => {
                    extra = block;
                }
                CapabilityNamespace::ChromeOptions
                | CapabilityNamespace::FirefoxOptions
                | CapabilityNamespace::SafariOptions
                | CapabilityNamespace::CloudGridOptions => {
                    extra.insert(namespace.key().to_string(), Value::Object(block));
                }
            }
        }

        if let Some(grid) = overrides.block(CapabilityNamespace::CloudGridOptions) {
            extra.insert(
                CapabilityNamespace::CloudGridOptions.key().to_string(),
                Value::Object(grid.clone()),
            );
            strip_local_binaries(&mut extra, flattened_firefox);
        }

        let display_name = cloud_grid_project_name(&extra);

        Ok(Profile {
            browser_name: browser_name.to_string(),
            webdriver_host: webdriver_host.to_string(),
            capabilities: ProfileCapabilities {
                extra_capabilities: extra,
                display_name,
                ..ProfileCapabilities::default()
            },
            extra: Default::default(),
        })
    }

    /// Chooses the one options block the profile honors and merges the
    /// browser defaults into it.
    fn select_block(
        &self,
        defaults: Option<(CapabilityNamespace, CapabilityFragment)>,
        overrides: &CapabilityOverrides,
    ) -> ProfileResult<Option<(CapabilityNamespace, CapabilityFragment)>> {
        let empty = CapabilityFragment::new();
        let mut selected: Option<(CapabilityNamespace, CapabilityFragment)> = None;

        for namespace in CapabilityNamespace::PRECEDENCE {
            let base = defaults
                .as_ref()
                .filter(|(default_namespace, _)| *default_namespace == namespace)
                .map(|(_, block)| block);
            let supplied = overrides.block(namespace);

            if base.is_none() && supplied.is_none() {
                continue;
            }

            if let Some((chosen, _)) = &selected {
                if supplied.is_some() {
                    warn!(
                        message = "Ignoring capability block, only one options block is honored per profile",
                        ignored = namespace.key(),
                        honored = chosen.key()
                    );
                }
                if base.is_some_and(|block| !block.is_empty()) {
                    warn!(
                        message = "Discarding browser default options, only one options block is honored per profile",
                        discarded = namespace.key(),
                        honored = chosen.key()
                    );
                }
                continue;
            }

            let merged = self.merger.merge(
                namespace,
                base.unwrap_or(&empty),
                supplied.unwrap_or(&empty),
            )?;
            selected = Some((namespace, merged));
        }

        Ok(selected)
    }
}

/// Removes local binary paths from every driver options block.
fn strip_local_binaries(extra: &mut CapabilityFragment, flattened_firefox: bool) {
    for namespace in CapabilityNamespace::PRECEDENCE
        .into_iter()
        .filter(CapabilityNamespace::carries_binary)
    {
        if let Some(Value::Object(block)) = extra.get_mut(namespace.key()) {
            if let Some(binary) = block.remove("binary") {
                warn!(
                    message = "Dropping local binary for cloud grid profile",
                    namespace = namespace.key(),
                    binary = %binary
                );
            }
        }
    }

    // Legacy Firefox options live at the top level.
    if flattened_firefox {
        if let Some(binary) = extra.remove("binary") {
            warn!(
                message = "Dropping local binary for cloud grid profile",
                namespace = "legacy firefox",
                binary = %binary
            );
        }
    }
}

fn cloud_grid_project_name(extra: &CapabilityFragment) -> Option<String> {
    extra
        .get(CapabilityNamespace::CloudGridOptions.key())
        .and_then(|grid| grid.get("projectName"))
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}
