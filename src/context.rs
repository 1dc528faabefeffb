//! Service context bundling all port trait objects.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use crate::adapters::live::filesystem::LiveFileSystem;
use crate::adapters::live::git::LiveGitRepo;
use crate::adapters::live::shell::LiveShellExecutor;
use crate::adapters::recording::{RecordingGitRepo, RecordingShellExecutor, SharedRecorder};
use crate::adapters::replaying::{ReplayingGitRepo, ReplayingShellExecutor};
use crate::cassette::{Cassette, CassetteRecorder, CassetteReplayer};
use crate::error::PortError;
use crate::ports::filesystem::FileSystem;
use crate::ports::git::GitRepo;
use crate::ports::shell::ShellExecutor;

/// Bundles all port trait objects into a single context.
///
/// Constructors wire up different adapter implementations (live,
/// recording, replaying).
pub struct ServiceContext {
    /// Git repository for diffs and content searches.
    pub git: Box<dyn GitRepo>,
    /// Shell executor for the module installer.
    pub shell: Box<dyn ShellExecutor>,
    /// Filesystem for fixture links.
    pub fs: Box<dyn FileSystem>,
    /// Cassette being recorded; written to disk on drop.
    recorder: Option<SharedRecorder>,
}

impl ServiceContext {
    /// Creates a live context backed by real processes and disk.
    #[must_use]
    pub fn live() -> Self {
        Self {
            git: Box::new(LiveGitRepo),
            shell: Box::new(LiveShellExecutor),
            fs: Box::new(LiveFileSystem),
            recorder: None,
        }
    }

    /// Creates a live context that also records git and shell calls.
    ///
    /// The cassette is written to `path` when the context is dropped.
    /// Filesystem calls are not recorded.
    #[must_use]
    pub fn recording(path: &Path) -> Self {
        let commit = LiveGitRepo.current_commit().unwrap_or_else(|e| {
            tracing::warn!("could not read HEAD for cassette: {e}");
            "unknown".to_string()
        });
        let recorder: SharedRecorder =
            Arc::new(Mutex::new(CassetteRecorder::new(path, "rolespec-session", commit)));

        Self {
            git: Box::new(RecordingGitRepo::new(Box::new(LiveGitRepo), Arc::clone(&recorder))),
            shell: Box::new(RecordingShellExecutor::new(
                Box::new(LiveShellExecutor),
                Arc::clone(&recorder),
            )),
            fs: Box::new(LiveFileSystem),
            recorder: Some(recorder),
        }
    }

    /// Creates a context whose git and shell ports replay a cassette.
    ///
    /// The filesystem port is not replayable and panics when used.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let cassette = Cassette::load(path)?;
        Ok(Self {
            git: Box::new(ReplayingGitRepo::new(CassetteReplayer::for_port(&cassette, "git"))),
            shell: Box::new(ReplayingShellExecutor::new(CassetteReplayer::for_port(
                &cassette, "shell",
            ))),
            fs: Box::new(PanickingFileSystem),
            recorder: None,
        })
    }

    /// Assembles a context from arbitrary port implementations.
    #[must_use]
    pub fn from_parts(
        git: Box<dyn GitRepo>,
        shell: Box<dyn ShellExecutor>,
        fs: Box<dyn FileSystem>,
    ) -> Self {
        Self { git, shell, fs, recorder: None }
    }

    /// Writes the cassette now instead of on drop, returning its path.
    ///
    /// Returns `Ok(None)` for contexts that are not recording.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette cannot be written.
    pub fn finish_recording(mut self) -> Result<Option<PathBuf>, String> {
        self.write_cassette()
    }

    fn write_cassette(&mut self) -> Result<Option<PathBuf>, String> {
        let Some(recorder) = self.recorder.take() else {
            return Ok(None);
        };
        // Adapters hold the other references; swap them out first.
        self.git = Box::new(LiveGitRepo);
        self.shell = Box::new(LiveShellExecutor);
        let recorder = Arc::try_unwrap(recorder)
            .map_err(|_| "Recording adapters still hold the recorder".to_string())?
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        recorder.finish().map(Some).map_err(|e| format!("Failed to write cassette: {e}"))
    }
}

impl Drop for ServiceContext {
    fn drop(&mut self) {
        if let Err(e) = self.write_cassette() {
            tracing::warn!("{e}");
        }
    }
}

struct PanickingFileSystem;

impl PanickingFileSystem {
    fn unavailable() -> ! {
        panic!("FileSystem port is not replayable; fixture commands need a live context");
    }
}

impl FileSystem for PanickingFileSystem {
    fn exists(&self, _path: &Path) -> bool {
        Self::unavailable()
    }
    fn is_symlink(&self, _path: &Path) -> bool {
        Self::unavailable()
    }
    fn create_dir_all(&self, _path: &Path) -> Result<(), PortError> {
        Self::unavailable()
    }
    fn symlink(&self, _original: &Path, _link: &Path) -> Result<(), PortError> {
        Self::unavailable()
    }
    fn list_dirs(&self, _path: &Path) -> Result<Vec<String>, PortError> {
        Self::unavailable()
    }
    fn remove_dir_all(&self, _path: &Path) -> Result<(), PortError> {
        Self::unavailable()
    }
}
