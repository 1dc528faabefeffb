//! Recording adapters that capture interactions to a cassette.

pub mod git;
pub mod shell;

use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;

use crate::cassette::recorder::CassetteRecorder;

pub use git::RecordingGitRepo;
pub use shell::RecordingShellExecutor;

/// Shared handle to the session recorder.
pub type SharedRecorder = Arc<Mutex<CassetteRecorder>>;

/// Append a port result to the shared recorder.
pub(crate) fn record_result<T, E, I>(
    recorder: &SharedRecorder,
    port: &str,
    method: &str,
    input: &I,
    result: &Result<T, E>,
) where
    T: Serialize,
    E: std::fmt::Display,
    I: Serialize,
{
    recorder
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .record_result(port, method, input, result);
}
