//! Named profile collections with source tracking.
//!
//! A `ProfileSet` maps profile names to profiles and remembers which source
//! supplied each entry:
//!
//! - **Standard**: generated from the built-in browser/launcher matrix
//! - **Custom**: loaded from a custom profile source
//! - **Registered**: added explicitly by the caller
//!
//! The source trace is informational; precedence between sources is decided
//! by the operations in [`crate::registry`].

use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::{
    errors::{ProfileError, ProfileResult},
    profile::Profile,
};

#[cfg(test)]
#[path = "profile_set_tests.rs"]
mod tests;

/// Where a profile in a [`ProfileSet`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileSource {
    Standard,
    Custom,
    Registered,
}

impl fmt::Display for ProfileSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProfileSource::Standard => "standard",
            ProfileSource::Custom => "custom",
            ProfileSource::Registered => "registered",
        };
        f.write_str(label)
    }
}

/// An ordered mapping from profile name to profile.
///
/// Serializes as a plain name → profile map, which is what the test runner
/// reads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileSet {
    profiles: BTreeMap<String, Profile>,
    sources: BTreeMap<String, ProfileSource>,
}

impl ProfileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a profile, replacing any profile with the same name.
    ///
    /// Returns the replaced profile, if there was one.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        profile: Profile,
        source: ProfileSource,
    ) -> Option<Profile> {
        let name = name.into();
        self.sources.insert(name.clone(), source);
        self.profiles.insert(name, profile)
    }

    /// Adds a caller-built profile under `name`, replacing any existing entry.
    pub fn register(&mut self, name: impl Into<String>, profile: Profile) -> Option<Profile> {
        self.insert(name, profile, ProfileSource::Registered)
    }

    pub fn get(&self, name: &str) -> Option<&Profile> {
        self.profiles.get(name)
    }

    /// Looks up a profile, failing when it is absent.
    pub fn require(&self, name: &str) -> ProfileResult<&Profile> {
        self.get(name).ok_or_else(|| ProfileError::ProfileNotFound {
            name: name.to_string(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.profiles.contains_key(name)
    }

    /// Which source supplied the profile called `name`.
    pub fn source_of(&self, name: &str) -> Option<ProfileSource> {
        self.sources.get(name).copied()
    }

    /// Profile names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Profile)> {
        self.profiles.iter().map(|(name, profile)| (name.as_str(), profile))
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Moves every entry of `other` into this set. Entries in `other` win.
    pub fn extend(&mut self, other: ProfileSet) {
        let ProfileSet { profiles, mut sources } = other;
        for (name, profile) in profiles {
            let source = sources
                .remove(&name)
                .unwrap_or(ProfileSource::Registered);
            self.insert(name, profile, source);
        }
    }

    pub fn into_profiles(self) -> BTreeMap<String, Profile> {
        self.profiles
    }
}

impl Serialize for ProfileSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.profiles.serialize(serializer)
    }
}
