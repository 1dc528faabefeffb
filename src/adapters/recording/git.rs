//! Recording adapter for the `GitRepo` port.

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::{record_result, SharedRecorder};
use crate::error::PortError;
use crate::ports::GitRepo;

/// Records git interactions while delegating to an inner implementation.
pub struct RecordingGitRepo {
    inner: Box<dyn GitRepo>,
    recorder: SharedRecorder,
}

impl RecordingGitRepo {
    /// Creates a new recording git repo wrapping the given implementation.
    pub fn new(inner: Box<dyn GitRepo>, recorder: SharedRecorder) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct DiffInput<'a> {
    dir: String,
    base: &'a str,
}

#[derive(Serialize)]
struct GrepInput<'a> {
    dir: String,
    needle: &'a str,
}

impl GitRepo for RecordingGitRepo {
    fn toplevel(&self) -> Result<PathBuf, PortError> {
        let result = self.inner.toplevel();
        record_result(&self.recorder, "git", "toplevel", &(), &result);
        result
    }

    fn current_commit(&self) -> Result<String, PortError> {
        let result = self.inner.current_commit();
        record_result(&self.recorder, "git", "current_commit", &(), &result);
        result
    }

    fn diff_names(&self, dir: &Path, base: &str) -> Result<Vec<String>, PortError> {
        let result = self.inner.diff_names(dir, base);
        let input = DiffInput { dir: dir.display().to_string(), base };
        record_result(&self.recorder, "git", "diff_names", &input, &result);
        result
    }

    fn grep_files(&self, dir: &Path, needle: &str) -> Result<Vec<String>, PortError> {
        let result = self.inner.grep_files(dir, needle);
        let input = GrepInput { dir: dir.display().to_string(), needle };
        record_result(&self.recorder, "git", "grep_files", &input, &result);
        result
    }
}
