//! Input file loading for the browser-profiles CLI.
//!
//! The CLI reads two optional files, both named explicitly on the command
//! line:
//!
//! - a settings file (flat TOML) layered over the built-in defaults
//! - a custom profile file (TOML, or JSON when the extension is `.json`)
//!   layered over the standard profiles

use std::{fs, path::Path};

use browser_profiles::{
    custom_profiles_from_json_str, custom_profiles_from_toml_str, Configuration, ProfileSet,
};
use tracing::{debug, info};

use crate::errors::Error;

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "BROWSER_PROFILES_LOG";

/// Loads the settings file at `path` and layers it over the defaults.
///
/// When `path` is `None` the built-in defaults are used unchanged.
///
/// # Errors
///
/// - `Error::Config` if the file does not exist or cannot be read
/// - `Error::Profiles` if the file is not a flat table of strings and booleans
pub fn load_configuration(path: Option<&Path>) -> Result<Configuration, Error> {
    let defaults = Configuration::new();
    let Some(path) = path else {
        debug!("No settings file given, using defaults");
        return Ok(defaults);
    };

    let content = read_file(path)?;
    let local = Configuration::from_toml_str(&content)?;
    info!(
        message = "Loaded settings",
        path = %path.display(),
        settings = local.len()
    );
    Ok(Configuration::layered(&defaults, &local))
}

/// Loads custom profiles from `path`.
///
/// # Errors
///
/// - `Error::Config` if the file does not exist or cannot be read
/// - `Error::Profiles` if the document does not hold a mapping of profiles
pub fn load_custom_profiles(path: &Path) -> Result<ProfileSet, Error> {
    let content = read_file(path)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let profiles = if is_json {
        custom_profiles_from_json_str(&content)?
    } else {
        custom_profiles_from_toml_str(&content)?
    };
    info!(
        message = "Loaded custom profiles",
        path = %path.display(),
        count = profiles.len()
    );
    Ok(profiles)
}

fn read_file(path: &Path) -> Result<String, Error> {
    debug!("Reading {:?}", path);

    if !path.exists() {
        return Err(Error::Config(format!("File not found: {:?}", path)));
    }

    fs::read_to_string(path).map_err(|e| Error::Config(format!("Failed to read {:?}: {}", path, e)))
}
