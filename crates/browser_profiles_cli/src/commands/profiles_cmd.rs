//! Profile inspection and rendering commands.
//!
//! Every command resolves the same profile set: the standard profiles built
//! from the settings file, with custom profiles layered on top by name. The
//! commands only differ in how much of that set they print.
//!
//! # Examples
//!
//! ```bash
//! # List the profile names
//! browser-profiles --config settings.toml list
//!
//! # Inspect one profile as JSON
//! browser-profiles show headlessfirefox --format json
//!
//! # Render the full set for the test runner
//! browser-profiles --custom-profiles profiles.toml --project-root . render > profiles.json
//! ```

use std::path::PathBuf;

use browser_profiles::{
    FixedProtocol, LockfileProtocolDetector, Profile, ProfileRegistry, ProfileSet, ProfileSource,
    ProtocolDetector,
};
use clap::Subcommand;
use colored::Colorize;
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    config::{load_configuration, load_custom_profiles},
    errors::Error,
};

#[cfg(test)]
#[path = "profiles_cmd_tests.rs"]
mod tests;

/// Profile subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum ProfileCommands {
    /// List every resolved profile.
    ///
    /// Shows the browser, WebDriver host and source of each profile.
    List {
        /// Output format (json or pretty).
        #[arg(long, default_value = "pretty")]
        format: String,
    },

    /// Show a single profile.
    Show {
        /// Name of the profile to show.
        name: String,

        /// Output format (json or pretty).
        #[arg(long, default_value = "pretty")]
        format: String,
    },

    /// Render the full profile set as JSON for the test runner.
    Render,
}

/// The inputs every profile command resolves from.
///
/// Mirrors the global command-line flags.
#[derive(Debug, Clone, Default)]
pub struct ProfileInputs {
    /// Settings file layered over the built-in defaults.
    pub config: Option<PathBuf>,

    /// Custom profile file layered over the standard profiles.
    pub custom_profiles: Option<PathBuf>,

    /// Build for the legacy WebDriver protocol.
    pub legacy_protocol: bool,

    /// Test runner project whose lockfile decides the protocol.
    pub project_root: Option<PathBuf>,
}

/// One line of `list` output.
#[derive(Debug, Clone, Serialize)]
struct ProfileSummary<'a> {
    name: &'a str,
    browser: &'a str,
    wd_host: &'a str,
    source: Option<ProfileSource>,
}

/// Executes a profile command and returns the text to print.
///
/// # Errors
///
/// Returns an error if the inputs cannot be loaded, a profile fails to
/// build, the requested profile does not exist or the format is unknown.
#[instrument(skip(inputs))]
pub fn execute(cmd: &ProfileCommands, inputs: &ProfileInputs) -> Result<String, Error> {
    let profiles = resolve_profiles(inputs)?;

    match cmd {
        ProfileCommands::List { format } => format_profile_list(&profiles, format),
        ProfileCommands::Show { name, format } => {
            let profile = profiles.require(name)?;
            format_profile(name, profile, profiles.source_of(name), format)
        }
        ProfileCommands::Render => to_json(&profiles),
    }
}

/// Builds the profile set described by `inputs`.
///
/// # Errors
///
/// - `Error::InvalidArguments` if both a fixed legacy protocol and a project
///   root are given
/// - `Error::Config` if an input file cannot be read
/// - `Error::Profiles` for any profile build or detection failure
pub fn resolve_profiles(inputs: &ProfileInputs) -> Result<ProfileSet, Error> {
    let config = load_configuration(inputs.config.as_deref())?;
    let supports_w3c = detect_protocol(inputs)?;

    let registry = ProfileRegistry::new(&config);
    let standard = registry.standard_profiles(supports_w3c)?;

    let profiles = match &inputs.custom_profiles {
        Some(path) => {
            let custom = load_custom_profiles(path)?;
            ProfileRegistry::with_custom_profiles(standard, custom)
        }
        None => standard,
    };

    info!(
        message = "Resolved profiles",
        count = profiles.len(),
        supports_w3c = supports_w3c
    );
    Ok(profiles)
}

fn detect_protocol(inputs: &ProfileInputs) -> Result<bool, Error> {
    let supports_w3c = match (inputs.legacy_protocol, &inputs.project_root) {
        (true, Some(_)) => {
            return Err(Error::InvalidArguments(
                "--legacy-protocol cannot be combined with --project-root".to_string(),
            ))
        }
        (true, None) => FixedProtocol(false).supports_w3c()?,
        (false, Some(root)) => LockfileProtocolDetector::new(root).supports_w3c()?,
        (false, None) => FixedProtocol(true).supports_w3c()?,
    };

    debug!(message = "Protocol resolved", supports_w3c = supports_w3c);
    Ok(supports_w3c)
}

fn format_profile_list(profiles: &ProfileSet, format: &str) -> Result<String, Error> {
    let summaries: Vec<ProfileSummary<'_>> = profiles
        .iter()
        .map(|(name, profile)| ProfileSummary {
            name,
            browser: &profile.browser_name,
            wd_host: &profile.webdriver_host,
            source: profiles.source_of(name),
        })
        .collect();

    match format {
        "json" => to_json(&summaries),
        "pretty" => Ok(format_profile_list_pretty(&summaries)),
        _ => Err(invalid_format(format)),
    }
}

fn format_profile_list_pretty(summaries: &[ProfileSummary<'_>]) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n\n", "Browser profiles".bold().bright_cyan()));

    if summaries.is_empty() {
        output.push_str(&format!("  {}\n", "(none)".dimmed()));
        return output;
    }

    for summary in summaries {
        let source = summary
            .source
            .map(|s| s.to_string())
            .unwrap_or_default();
        output.push_str(&format!(
            "  {} {} {} {}\n",
            summary.name.bold(),
            summary.browser.green(),
            summary.wd_host,
            format!("[{source}]").dimmed()
        ));
    }

    output.push_str(&format!("\n{} profiles\n", summaries.len()));
    output
}

fn format_profile(
    name: &str,
    profile: &Profile,
    source: Option<ProfileSource>,
    format: &str,
) -> Result<String, Error> {
    match format {
        "json" => to_json(profile),
        "pretty" => format_profile_pretty(name, profile, source),
        _ => Err(invalid_format(format)),
    }
}

fn format_profile_pretty(
    name: &str,
    profile: &Profile,
    source: Option<ProfileSource>,
) -> Result<String, Error> {
    let mut output = String::new();

    output.push_str(&format!("\n{}\n\n", name.bold().bright_cyan()));
    output.push_str(&format!("{}: {}\n", "Browser".bold(), profile.browser_name.green()));
    output.push_str(&format!("{}: {}\n", "WebDriver host".bold(), profile.webdriver_host));
    if let Some(source) = source {
        output.push_str(&format!("{}: {}\n", "Source".bold(), source));
    }
    if let Some(display_name) = profile.display_name() {
        output.push_str(&format!("{}: {}\n", "Session name".bold(), display_name));
    }

    output.push_str(&format!("\n{}\n", "Capabilities:".bold()));
    if profile.capabilities.extra_capabilities.is_empty() {
        output.push_str(&format!("  {}\n", "(none)".dimmed()));
    } else {
        let capabilities = to_json(&profile.capabilities.extra_capabilities)?;
        for line in capabilities.lines() {
            output.push_str(&format!("  {line}\n"));
        }
    }

    Ok(output)
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, Error> {
    serde_json::to_string_pretty(value)
        .map_err(|e| Error::Output(format!("Failed to serialize to JSON: {}", e)))
}

fn invalid_format(format: &str) -> Error {
    Error::InvalidArguments(format!(
        "Invalid format: '{}'. Use 'json' or 'pretty'.",
        format
    ))
}
