use browser_profiles::ProfileError;
use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur in the browser-profiles CLI.
///
/// This enum covers loading input files, building profiles and writing the
/// result. Every variant ends the command with a non-zero exit code.
#[derive(Error, Debug)]
pub enum Error {
    /// A settings or custom profile file could not be read.
    ///
    /// Returned when a path given on the command line does not exist or
    /// cannot be read.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Building or composing profiles failed.
    ///
    /// Wraps the library error so the unknown option, invalid source or
    /// protocol detection failure is reported verbatim.
    #[error(transparent)]
    Profiles(#[from] ProfileError),

    /// Invalid command-line arguments were provided.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The result could not be serialized for output.
    #[error("Failed to render output: {0}")]
    Output(String),
}
