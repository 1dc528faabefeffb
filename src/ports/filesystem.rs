//! Filesystem port for fixture link management.

use std::path::Path;

use crate::error::PortError;

/// Provides the filesystem operations fixture linking needs.
///
/// Abstracting the filesystem allows testing link and teardown logic
/// without touching the real disk.
pub trait FileSystem: Send + Sync {
    /// Returns `true` if the path exists (following symlinks).
    fn exists(&self, path: &Path) -> bool;

    /// Returns `true` if the path itself is a symlink, dangling or not.
    fn is_symlink(&self, path: &Path) -> bool;

    /// Creates a directory and all missing parents.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    fn create_dir_all(&self, path: &Path) -> Result<(), PortError>;

    /// Creates a symlink at `link` pointing to `original`.
    ///
    /// # Errors
    ///
    /// Returns an error if the link cannot be created.
    fn symlink(&self, original: &Path, link: &Path) -> Result<(), PortError>;

    /// Lists the names of subdirectories of `path`, sorted. A missing
    /// directory yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory exists but cannot be read.
    fn list_dirs(&self, path: &Path) -> Result<Vec<String>, PortError>;

    /// Recursively removes a directory. A missing path is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if removal fails.
    fn remove_dir_all(&self, path: &Path) -> Result<(), PortError>;
}
