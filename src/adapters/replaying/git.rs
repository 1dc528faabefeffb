//! Replaying adapter for the `GitRepo` port.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use crate::cassette::replayer::CassetteReplayer;
use crate::error::PortError;
use crate::ports::git::GitRepo;

/// Replays recorded git operations from a cassette.
///
/// Arguments are not compared against the recording; calls are answered
/// strictly in recorded order per method.
pub struct ReplayingGitRepo {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingGitRepo {
    /// Creates a new replaying git repo from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }

    fn next<T: serde::de::DeserializeOwned>(&self, method: &str) -> Result<T, PortError> {
        self.replayer.lock().unwrap_or_else(PoisonError::into_inner).next_result("git", method)
    }
}

impl GitRepo for ReplayingGitRepo {
    fn toplevel(&self) -> Result<PathBuf, PortError> {
        self.next("toplevel")
    }

    fn current_commit(&self) -> Result<String, PortError> {
        self.next("current_commit")
    }

    fn diff_names(&self, _dir: &Path, _base: &str) -> Result<Vec<String>, PortError> {
        self.next("diff_names")
    }

    fn grep_files(&self, _dir: &Path, _needle: &str) -> Result<Vec<String>, PortError> {
        self.next("grep_files")
    }
}
