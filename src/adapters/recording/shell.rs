//! Recording adapter for the `ShellExecutor` port.

use std::path::Path;

use serde::Serialize;

use super::{record_result, SharedRecorder};
use crate::error::PortError;
use crate::ports::{ShellExecutor, ShellOutput};

/// Records shell interactions while delegating to an inner implementation.
pub struct RecordingShellExecutor {
    inner: Box<dyn ShellExecutor>,
    recorder: SharedRecorder,
}

impl RecordingShellExecutor {
    /// Creates a new recording shell executor wrapping the given implementation.
    pub fn new(inner: Box<dyn ShellExecutor>, recorder: SharedRecorder) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct CommandInput<'a> {
    command: &'a str,
    dir: String,
}

impl ShellExecutor for RecordingShellExecutor {
    fn run(&self, command: &str, dir: &Path) -> Result<ShellOutput, PortError> {
        let result = self.inner.run(command, dir);
        let input = CommandInput { command, dir: dir.display().to_string() };
        record_result(&self.recorder, "shell", "run", &input, &result);
        result
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::adapters::live::shell::LiveShellExecutor;
    use crate::cassette::{Cassette, CassetteRecorder};

    #[test]
    fn records_run_interaction() {
        let dir = std::env::temp_dir().join("rolespec_rec_shell_test");
        std::fs::create_dir_all(&dir).unwrap();
        let cassette_path = dir.join("shell.cassette.yaml");
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(&cassette_path, "test", "abc")));

        {
            let shell =
                RecordingShellExecutor::new(Box::new(LiveShellExecutor), Arc::clone(&recorder));
            let result = shell.run("echo hello", &dir);
            assert!(result.is_ok());
        }

        let recorder = Arc::try_unwrap(recorder).unwrap().into_inner().unwrap();
        let cassette = Cassette::load(&recorder.finish().unwrap()).unwrap();

        let run = &cassette.interactions[0];
        assert_eq!((run.port.as_str(), run.method.as_str()), ("shell", "run"));
        assert_eq!(run.input["command"], "echo hello");
        assert_eq!(run.output["ok"]["stdout"], "hello\n");

        let _ = std::fs::remove_dir_all(&dir);
    }
}
