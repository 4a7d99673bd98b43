//! Browser profile generation for WebDriver test runners.
//!
//! This crate turns a small settings mapping into a set of named browser
//! profiles: which browser to drive, the WebDriver endpoint to connect to,
//! and the capabilities to request. User-supplied capability blocks are
//! validated against per-vendor schemas and merged over browser defaults.
//!
//! # Examples
//!
//! ```rust
//! use browser_profiles::{Configuration, ProfileRegistry, ProfileSet};
//!
//! let config = Configuration::new().with_setting("geckodriver_url", "http://localhost:4446");
//! let registry = ProfileRegistry::new(&config);
//!
//! let standard = registry.standard_profiles(true)?;
//! let profiles = ProfileRegistry::with_custom_profiles(standard, ProfileSet::new());
//!
//! let gecko = profiles.require("headlessgeckodriver")?;
//! assert_eq!(gecko.webdriver_host, "http://localhost:4446");
//! # Ok::<(), browser_profiles::ProfileError>(())
//! ```

pub mod browser;
pub mod builder;
pub mod configuration;
pub mod custom_profiles;
pub mod errors;
pub mod merger;
pub mod overrides;
pub mod profile;
pub mod profile_set;
pub mod protocol;
pub mod registry;
pub mod schema;

#[cfg(test)]
mod integration_tests;

pub use browser::Browser;
pub use builder::ProfileBuilder;
pub use configuration::{Configuration, SettingValue};
pub use custom_profiles::{
    custom_profiles_from_json_str, custom_profiles_from_toml_str, custom_profiles_from_value,
};
pub use errors::{ProfileError, ProfileResult};
pub use merger::OptionsMerger;
pub use overrides::CapabilityOverrides;
pub use profile::{Profile, ProfileCapabilities};
pub use profile_set::{ProfileSet, ProfileSource};
pub use protocol::{FixedProtocol, LockfileProtocolDetector, ProtocolDetector};
pub use registry::ProfileRegistry;
pub use schema::{CapabilityFragment, CapabilityNamespace, MergeSchema, MergeStrategy};
