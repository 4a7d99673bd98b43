//! Integration tests for profile generation.
//!
//! These tests run the whole pipeline (settings, protocol detection, standard
//! profiles, custom overlay, serialization) and complement the unit tests in
//! each module.

use crate::*;
use serde_json::json;

/// Test the full flow from a settings file to the runner-facing JSON.
#[test]
fn test_settings_to_rendered_profiles() {
    let defaults = Configuration::new();
    let local = Configuration::from_toml_str(
        r#"
        chromedriver_url = "http://ci-chrome:9515"
        chrome_binary_path = "/opt/chrome/chrome"
        "#,
    )
    .expect("valid settings");
    let config = Configuration::layered(&defaults, &local);

    let supports_w3c = FixedProtocol(true).supports_w3c().expect("fixed protocol");
    let registry = ProfileRegistry::new(&config);
    let standard = registry.standard_profiles(supports_w3c).expect("standard profiles");

    let rendered = serde_json::to_value(&standard).expect("serializable");

    assert_eq!(
        rendered["headlesschromedriver"],
        json!({
            "browser": "chrome",
            "wd_host": "http://ci-chrome:9515",
            "capabilities": {
                "extra_capabilities": {
                    "chromeOptions": {
                        "args": ["no-sandbox", "--headless", "--no-gpu"],
                        "binary": "/opt/chrome/chrome",
                    }
                }
            }
        })
    );
}

/// Test custom profiles copied from a standard profile onto extra ports.
#[test]
fn test_fan_out_custom_profiles_over_driver_ports() {
    let config = Configuration::new();
    let registry = ProfileRegistry::new(&config);
    let standard = registry.standard_profiles(true).expect("standard profiles");

    let template = standard
        .require("headlessgeckodriver")
        .expect("standard profile")
        .clone();
    let mut custom = ProfileSet::new();
    for i in 1..=3u16 {
        let host = template
            .webdriver_host
            .replace("4444", &(4444 + i - 1).to_string());
        custom.insert(
            format!("headlessgeckodriver{i}"),
            template.with_webdriver_host(host),
            ProfileSource::Custom,
        );
    }

    let profiles = ProfileRegistry::with_custom_profiles(standard, custom);

    let hosts: Vec<&str> = (1..=3)
        .map(|i| {
            profiles
                .require(&format!("headlessgeckodriver{i}"))
                .map(|p| p.webdriver_host.as_str())
                .expect("fanned out profile")
        })
        .collect();
    assert_eq!(
        hosts,
        vec!["http://localhost:4444", "http://localhost:4445", "http://localhost:4446"]
    );
}

/// Test that cloud grid custom profiles built through the builder carry the
/// grid options and no local binaries.
#[test]
fn test_cloud_grid_custom_profiles() {
    let config = Configuration::from_settings([
        ("browserstack_username", "ci"),
        ("browserstack_password", "secret"),
        ("firefox_binary_path", "/usr/bin/firefox"),
    ]);
    let registry = ProfileRegistry::new(&config);
    let grid_url = config.cloud_grid_url().expect("credentials configured");

    let mut custom = ProfileSet::new();
    registry
        .add_browser_profile(
            &mut custom,
            "bs_win10_firefox",
            "firefox",
            &grid_url,
            true,
            &CapabilityOverrides::from_value(json!({
                "bstack:options": {
                    "os": "Windows",
                    "osVersion": "10",
                    "local": true,
                    "projectName": "Nightly",
                },
                "capabilities": { "browserName": "Firefox", "browserVersion": "latest-beta" },
            }))
            .expect("well-formed overrides"),
        )
        .expect("firefox cloud grid profile builds");

    let profiles = ProfileRegistry::with_custom_profiles(
        registry.standard_profiles(true).expect("standard profiles"),
        custom,
    );
    let profile = profiles.require("bs_win10_firefox").expect("custom profile");

    assert_eq!(profile.display_name(), Some("Nightly"));
    assert_eq!(
        profile.extra_capability("moz:firefoxOptions").and_then(|o| o.get("binary")),
        None
    );
    assert!(profiles.contains("bs_osx_safari"));
}

/// Test that an invalid override anywhere in the pipeline surfaces as an error.
#[test]
fn test_unknown_option_surfaces_to_caller() {
    let config = Configuration::new();
    let registry = ProfileRegistry::new(&config);
    let mut profiles = ProfileSet::new();

    let error = registry
        .add_browser_profile(
            &mut profiles,
            "broken",
            "firefox",
            config.geckodriver_url(),
            true,
            &CapabilityOverrides::from_value(json!({
                "moz:firefoxOptions": { "extensions": ["x.xpi"] }
            }))
            .expect("well-formed overrides"),
        )
        .expect_err("extensions is not a firefox option");

    assert_eq!(error.to_string(), "Unknown option in moz:firefoxOptions: 'extensions'");
}

/// Test that a custom entry replaces the standard one exactly as supplied.
#[test]
fn test_custom_profile_replaces_standard_entry_verbatim() {
    let config = Configuration::new();
    let standard = ProfileRegistry::new(&config)
        .standard_profiles(true)
        .expect("standard profiles");
    let entry = json!({
        "browser": "chrome",
        "wd_host": "http://grid:4444",
        "capabilities": {
            "extra_capabilities": { "x": 1 },
            "marionette": true,
            "version": "120",
        },
        "tags": ["smoke"],
    });
    let custom = custom_profiles_from_value(json!({ "chrome": entry.clone() }))
        .expect("valid custom profiles");

    let profiles = ProfileRegistry::with_custom_profiles(standard, custom);
    let rendered = serde_json::to_value(&profiles).expect("serializable");

    assert_eq!(rendered["chrome"], entry);
    assert_eq!(rendered["chromedriver"]["wd_host"], "http://localhost:9515");
}
