use std::io::{self, Write};
use std::path::PathBuf;

use browser_profiles_cli::{
    commands::profiles_cmd::{self, ProfileCommands, ProfileInputs},
    config::LOG_ENV_VAR,
    errors::Error,
};
use clap::Parser;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

/// browser-profiles: generate WebDriver browser profiles for a test runner
#[derive(Parser, Debug)]
#[command(name = "browser-profiles")]
#[command(about = "Generate WebDriver browser profiles for a test runner", long_about = None)]
struct Cli {
    /// Settings file (TOML) layered over the built-in defaults.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Custom profile file (TOML, or JSON when the extension is .json).
    #[arg(long, global = true)]
    custom_profiles: Option<PathBuf>,

    /// Build profiles for the legacy WebDriver protocol.
    #[arg(long, global = true, conflicts_with = "project_root")]
    legacy_protocol: bool,

    /// Test runner project whose lockfile decides the WebDriver protocol.
    #[arg(long, global = true)]
    project_root: Option<PathBuf>,

    #[command(subcommand)]
    command: ProfileCommands,
}

impl Cli {
    fn inputs(&self) -> ProfileInputs {
        ProfileInputs {
            config: self.config.clone(),
            custom_profiles: self.custom_profiles.clone(),
            legacy_protocol: self.legacy_protocol,
            project_root: self.project_root.clone(),
        }
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let output = profiles_cmd::execute(&cli.command, &cli.inputs())?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", output)
        .and_then(|_| stdout.flush())
        .map_err(|e| Error::Output(e.to_string()))
}

fn main() {
    // Logs go to stderr so rendered JSON on stdout stays clean
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_env(LOG_ENV_VAR))
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        error!("Error: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
