//! `rolespec install` command.

use crate::config::Settings;
use crate::context::ServiceContext;
use crate::error::Error;

/// Command that installs the Puppetfile's modules.
pub const INSTALL_COMMAND: &str = "r10k puppetfile install";

/// Execute the `install` command in the project root.
///
/// # Errors
///
/// Returns an error string if r10k cannot be started or exits non-zero.
pub fn run(ctx: &ServiceContext, settings: &Settings) -> Result<(), String> {
    println!("Installing modules with r10k");
    let output = ctx.shell.run(INSTALL_COMMAND, settings.root()).map_err(|e| e.to_string())?;
    if !output.success() {
        return Err(Error::Command {
            command: INSTALL_COMMAND.to_string(),
            exit_code: output.exit_code,
            stderr: output.stderr.trim().to_string(),
        }
        .to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::adapters::live::filesystem::LiveFileSystem;
    use crate::adapters::live::git::LiveGitRepo;
    use crate::error::PortError;
    use crate::ports::{ShellExecutor, ShellOutput};

    struct FixedShell(i32);

    impl ShellExecutor for FixedShell {
        fn run(&self, command: &str, dir: &Path) -> Result<ShellOutput, PortError> {
            assert_eq!(command, INSTALL_COMMAND);
            assert_eq!(dir, Path::new("/r"));
            Ok(ShellOutput { exit_code: self.0, stdout: String::new(), stderr: "boom\n".into() })
        }
    }

    fn context(exit_code: i32) -> ServiceContext {
        ServiceContext::from_parts(
            Box::new(LiveGitRepo),
            Box::new(FixedShell(exit_code)),
            Box::new(LiveFileSystem),
        )
    }

    #[test]
    fn succeeds_when_r10k_succeeds() {
        assert!(run(&context(0), &Settings::new("/r")).is_ok());
    }

    #[test]
    fn non_zero_exit_is_reported() {
        let err = run(&context(3), &Settings::new("/r")).unwrap_err();
        assert!(err.contains("status 3"));
        assert!(err.contains("boom"));
    }
}
