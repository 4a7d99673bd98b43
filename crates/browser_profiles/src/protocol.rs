//! WebDriver protocol detection.
//!
//! Whether the test runner speaks the W3C protocol or the legacy JSON Wire
//! Protocol decides how Firefox options are laid out. Callers either state it
//! outright with [`FixedProtocol`] or let [`LockfileProtocolDetector`] infer
//! it from the project's dependency lockfile.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::{ProfileError, ProfileResult};

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod tests;

/// Name of the lockfile inspected by [`LockfileProtocolDetector`].
pub const LOCKFILE_NAME: &str = "composer.lock";

/// Driver package whose presence means the runner is on the legacy protocol.
pub const LEGACY_DRIVER_PACKAGE: &str = "instaclick/php-webdriver";

/// Decides whether profiles should be built for the W3C protocol.
pub trait ProtocolDetector {
    /// Returns `true` for the W3C protocol, `false` for the legacy protocol.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::UnresolvableContext` when the detector cannot
    /// find what it needs to decide.
    fn supports_w3c(&self) -> ProfileResult<bool>;
}

/// A protocol choice supplied directly by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedProtocol(pub bool);

impl ProtocolDetector for FixedProtocol {
    fn supports_w3c(&self) -> ProfileResult<bool> {
        Ok(self.0)
    }
}

/// Infers the protocol from the test runner project's lockfile.
///
/// The runner is on the legacy protocol when its lockfile references the
/// legacy driver package, and on W3C otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockfileProtocolDetector {
    project_root: PathBuf,
    legacy_package: String,
}

impl LockfileProtocolDetector {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            legacy_package: LEGACY_DRIVER_PACKAGE.to_string(),
        }
    }

    /// Uses a different package name as the legacy protocol marker.
    pub fn with_legacy_package(mut self, package: impl Into<String>) -> Self {
        self.legacy_package = package.into();
        self
    }

    pub fn lockfile_path(&self) -> PathBuf {
        self.project_root.join(LOCKFILE_NAME)
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }
}

impl ProtocolDetector for LockfileProtocolDetector {
    fn supports_w3c(&self) -> ProfileResult<bool> {
        let path = self.lockfile_path();
        let content =
            fs::read_to_string(&path).map_err(|e| ProfileError::UnresolvableContext {
                reason: format!("cannot read {}: {}", path.display(), e),
            })?;

        let legacy = content.contains(&self.legacy_package);
        debug!(
            message = "Detected WebDriver protocol from lockfile",
            lockfile = %path.display(),
            legacy = legacy
        );
        Ok(!legacy)
    }
}
