//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{DEFAULT_BASEBRANCH, DEFAULT_BASEPATH};

/// Top-level CLI parser for `rolespec`.
#[derive(Debug, Parser)]
#[command(name = "rolespec", version, about = "Pick the role and profile specs a change needs")]
pub struct Cli {
    /// Repository layout options.
    #[command(flatten)]
    pub repo: RepoArgs,
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Options locating the control repository.
#[derive(Debug, Args)]
pub struct RepoArgs {
    /// Repository top level (defaults to `git rev-parse --show-toplevel`).
    #[arg(long, global = true, env = "ROLESPEC_ROOT")]
    pub root: Option<PathBuf>,
    /// Directory holding the role and profile modules.
    #[arg(long, global = true, env = "ROLESPEC_BASEPATH", default_value = DEFAULT_BASEPATH)]
    pub basepath: String,
    /// Ref that staged changes are compared against.
    #[arg(long, global = true, env = "ROLESPEC_BASEBRANCH", default_value = DEFAULT_BASEBRANCH)]
    pub basebranch: String,
    /// Role module directory (defaults to `<root>/<basepath>/role`).
    #[arg(long, global = true, env = "ROLESPEC_ROLE_PATH")]
    pub role_path: Option<PathBuf>,
    /// Profile module directory (defaults to `<root>/<basepath>/profile`).
    #[arg(long, global = true, env = "ROLESPEC_PROFILE_PATH")]
    pub profile_path: Option<PathBuf>,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List roles affected by staged changes, including roles using changed profiles.
    Changed,
    /// List spec files to run for staged changes.
    Specs,
    /// Print the class a manifest path defines.
    Class {
        /// Manifest path, absolute or relative to the repository root.
        path: String,
    },
    /// Print the spec file for a role or profile class.
    SpecPath {
        /// Class identifier such as `role::web`.
        class: String,
    },
    /// List roles whose manifests mention a class.
    Includes {
        /// Class identifier such as `profile::db`.
        class: String,
    },
    /// Link the profile and installed modules into the spec fixtures.
    Fixtures,
    /// Remove spec fixtures and installed modules.
    Clean,
    /// Install Puppetfile modules with r10k.
    Install,
    /// Print the `puppet apply` command for a local smoke run.
    ApplyCommand,
}
