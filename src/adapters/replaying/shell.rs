//! Replaying adapter for the `ShellExecutor` port.

use std::path::Path;
use std::sync::{Mutex, PoisonError};

use crate::cassette::replayer::CassetteReplayer;
use crate::error::PortError;
use crate::ports::shell::{ShellExecutor, ShellOutput};

/// Replays recorded shell command results from a cassette.
pub struct ReplayingShellExecutor {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingShellExecutor {
    /// Creates a new replaying shell executor from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl ShellExecutor for ReplayingShellExecutor {
    fn run(&self, _command: &str, _dir: &Path) -> Result<ShellOutput, PortError> {
        self.replayer.lock().unwrap_or_else(PoisonError::into_inner).next_result("shell", "run")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::{Cassette, Interaction};
    use chrono::Utc;
    use serde_json::json;

    #[test]
    fn replays_exit_code_and_output() {
        let cassette = Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            commit: "abc".into(),
            interactions: vec![Interaction {
                seq: 0,
                port: "shell".into(),
                method: "run".into(),
                input: json!({"command": "r10k puppetfile install", "dir": "/r"}),
                output: json!({"ok": {"exit_code": 1, "stdout": "", "stderr": "no Puppetfile"}}),
            }],
        };
        let shell = ReplayingShellExecutor::new(CassetteReplayer::for_port(&cassette, "shell"));

        let output = shell.run("r10k puppetfile install", Path::new("/r")).unwrap();

        assert_eq!(output.exit_code, 1);
        assert_eq!(output.stderr, "no Puppetfile");
    }
}
