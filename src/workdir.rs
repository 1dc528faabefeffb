//! Scoped changes of the process working directory.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::error::{Error, Result};

/// Serialises working-directory changes across the process.
static CWD_LOCK: Mutex<()> = Mutex::new(());

/// Holds the process inside a directory until dropped.
///
/// Entering records the current directory and takes a process-wide lock;
/// dropping restores the recorded directory, whether the scope ended
/// normally, through `?`, or by unwinding. Guards must not be nested.
#[derive(Debug)]
pub struct WorkingDir {
    previous: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl WorkingDir {
    /// Changes into `dir`, returning a guard that changes back on drop.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be read or `dir`
    /// cannot be entered.
    pub fn enter(dir: &Path) -> Result<Self> {
        let lock = CWD_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        let previous = std::env::current_dir().map_err(|e| Error::io(".", e))?;
        std::env::set_current_dir(dir).map_err(|e| Error::io(dir, e))?;
        debug!("cd to {}", dir.display());
        Ok(Self { previous, _lock: lock })
    }
}

impl Drop for WorkingDir {
    fn drop(&mut self) {
        if let Err(e) = std::env::set_current_dir(&self.previous) {
            tracing::warn!("failed to restore {}: {e}", self.previous.display());
        } else {
            debug!("cd to {}", self.previous.display());
        }
    }
}

/// Runs `f` with `dir` as the working directory, restoring the previous
/// directory afterwards on every exit path.
///
/// # Errors
///
/// Returns an error if `dir` cannot be entered, or whatever `f` returns.
pub fn with_working_dir<T, F>(dir: &Path, f: F) -> Result<T>
where
    F: FnOnce() -> Result<T>,
{
    let _guard = WorkingDir::enter(dir)?;
    f()
}
