//! Error types for closure computation and its collaborators.

use std::path::PathBuf;

use thiserror::Error;

/// Boxed error type returned by port implementations.
pub type PortError = Box<dyn std::error::Error + Send + Sync>;

/// Convenience alias for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by `rolespec`.
///
/// Unrecognised path shapes are never errors; they are filtered out as
/// `None` long before anything here is constructed.
#[derive(Debug, Error)]
pub enum Error {
    /// A class identifier whose leading segment is neither `role` nor `profile`.
    #[error("invalid class '{class}': expected a role:: or profile:: identifier")]
    InvalidClass {
        /// The offending identifier.
        class: String,
    },

    /// A git invocation exited unsuccessfully.
    #[error("git {command} failed: {stderr}")]
    Git {
        /// The git subcommand line that was run.
        command: String,
        /// Captured standard error.
        stderr: String,
    },

    /// An external command exited with a non-zero status.
    #[error("`{command}` exited with status {exit_code}: {stderr}")]
    Command {
        /// The command line that was run.
        command: String,
        /// The process exit code.
        exit_code: i32,
        /// Captured standard error.
        stderr: String,
    },

    /// Fixture teardown refused to run against an empty target.
    #[error("refusing to clean: {what} path is empty")]
    UnsafeClean {
        /// Which target resolved empty.
        what: &'static str,
    },

    /// Filesystem failure with the path involved.
    #[error("{}: {source}", path.display())]
    Io {
        /// Path that was being accessed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failure reported by a port adapter.
    #[error(transparent)]
    Port(#[from] PortError),
}

impl Error {
    /// Wrap an I/O error with the path it concerns.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}
