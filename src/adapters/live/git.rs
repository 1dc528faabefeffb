//! Live git adapter using `git` CLI commands.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tracing::debug;

use crate::error::{Error, PortError};
use crate::ports::git::GitRepo;
use crate::workdir::WorkingDir;

/// Live git adapter that shells out to the `git` CLI.
pub struct LiveGitRepo;

/// Runs `git <args>` in the current directory, failing on non-zero exit.
fn git(args: &[&str]) -> Result<Output, PortError> {
    debug!("git {}", args.join(" "));
    let output = Command::new("git").args(args).output()?;
    if !output.status.success() {
        return Err(failure(args, &output).into());
    }
    Ok(output)
}

fn failure(args: &[&str], output: &Output) -> Error {
    Error::Git {
        command: args.join(" "),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
    }
}

/// Splits `-z` output into paths; NUL separation keeps non-ASCII names unquoted.
fn nul_separated(output: &Output) -> Vec<String> {
    output
        .stdout
        .split(|b| *b == 0)
        .filter(|entry| !entry.is_empty())
        .map(|entry| String::from_utf8_lossy(entry).into_owned())
        .collect()
}

impl GitRepo for LiveGitRepo {
    fn toplevel(&self) -> Result<PathBuf, PortError> {
        let output = git(&["rev-parse", "--show-toplevel"])?;
        Ok(PathBuf::from(String::from_utf8_lossy(&output.stdout).trim()))
    }

    fn current_commit(&self) -> Result<String, PortError> {
        let output = git(&["rev-parse", "HEAD"])?;
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn diff_names(&self, dir: &Path, base: &str) -> Result<Vec<String>, PortError> {
        let _cwd = WorkingDir::enter(dir)?;
        let output = git(&["diff", base, "--cached", "--diff-filter=ACMR", "--name-only", "-z"])?;
        Ok(nul_separated(&output))
    }

    fn grep_files(&self, dir: &Path, needle: &str) -> Result<Vec<String>, PortError> {
        let _cwd = WorkingDir::enter(dir)?;
        let args = ["grep", "-l", "-z", "-F", "-e", needle];
        debug!("git {}", args.join(" "));
        let output = Command::new("git").args(args).output()?;
        match output.status.code() {
            Some(0) => Ok(nul_separated(&output)),
            // git grep exits 1 when nothing matched
            Some(1) if output.stderr.is_empty() => Ok(Vec::new()),
            _ => Err(failure(&args, &output).into()),
        }
    }
}
