//! Git repository port for version-control queries.

use std::path::{Path, PathBuf};

use crate::error::PortError;

/// Provides read access to a git repository.
///
/// Abstracting git access allows deterministic replay and testing
/// without requiring a real repository.
pub trait GitRepo: Send + Sync {
    /// Returns the absolute path of the repository top level.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory is not inside a repository.
    fn toplevel(&self) -> Result<PathBuf, PortError>;

    /// Returns the hash of the current HEAD commit.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository has no commits or is invalid.
    fn current_commit(&self) -> Result<String, PortError>;

    /// Lists staged paths added, copied, modified or renamed relative to `base`
    /// in the repository containing `dir`.
    ///
    /// Paths are repository-relative, one entry per changed file.
    ///
    /// # Errors
    ///
    /// Returns an error if the diff cannot be computed (e.g. unknown ref).
    fn diff_names(&self, dir: &Path, base: &str) -> Result<Vec<String>, PortError>;

    /// Lists tracked files under `dir` whose contents contain `needle`.
    ///
    /// The match is a literal, case-sensitive substring search. Returned
    /// paths are relative to `dir`. No matches is an empty list, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the search itself fails.
    fn grep_files(&self, dir: &Path, needle: &str) -> Result<Vec<String>, PortError>;
}
