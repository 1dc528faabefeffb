//! Live shell executor using `std::process::Command`.

use std::path::Path;
use std::process::Command;

use crate::error::PortError;
use crate::ports::shell::{ShellExecutor, ShellOutput};
use crate::workdir::WorkingDir;

/// Live shell executor that runs commands via the system shell.
pub struct LiveShellExecutor;

impl ShellExecutor for LiveShellExecutor {
    fn run(&self, command: &str, dir: &Path) -> Result<ShellOutput, PortError> {
        let _cwd = WorkingDir::enter(dir)?;
        tracing::debug!("sh -c {command}");
        let output = Command::new("sh").arg("-c").arg(command).output()?;
        Ok(ShellOutput {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_command_in_requested_directory() {
        let dir = std::env::temp_dir().join("rolespec_live_shell_pwd");
        std::fs::create_dir_all(&dir).unwrap();
        let dir = dir.canonicalize().unwrap();

        let result = LiveShellExecutor.run("pwd -P", &dir).unwrap();

        assert!(result.success());
        assert_eq!(result.stdout.trim(), dir.display().to_string());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn captures_exit_code() {
        let result = LiveShellExecutor.run("exit 42", &std::env::temp_dir()).unwrap();

        assert_eq!(result.exit_code, 42);
        assert!(!result.success());
    }
}
