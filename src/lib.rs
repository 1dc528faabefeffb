//! Core library entry for the `rolespec` CLI.
//!
//! Works out which role and profile specs a staged change needs: changed
//! manifests map to classes, changed profiles pull in every role whose
//! manifests mention them, and each class maps to its spec file.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod closure;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod logging;
pub mod ports;
pub mod workdir;

pub use closure::{ClassId, TestPlan};
pub use config::Settings;
pub use error::{Error, Result};

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> std::result::Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli)
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn run_prints_apply_command() {
        let result = run(["rolespec", "apply-command"]);
        assert!(result.is_ok());
    }

    #[test]
    fn run_errors_on_unknown_subcommand() {
        let result = run(["rolespec", "unknown"]);
        assert!(result.is_err());
    }

    #[test]
    fn run_rejects_invalid_spec_class() {
        let result = run(["rolespec", "--root", "/r", "spec-path", "widget::x"]);
        assert!(result.unwrap_err().contains("widget::x"));
    }
}
