//! `rolespec apply-command` command.

/// The `puppet apply` invocation used for local smoke runs.
#[must_use]
pub fn apply_command(basepath: &str) -> String {
    format!(
        "puppet apply manifests/site.pp \\\n      --modulepath $(echo `pwd`/modules:`pwd`/{basepath}) \
         --hiera_config hiera.yaml"
    )
}

/// Execute the `apply-command` command.
///
/// # Errors
///
/// Never fails; the signature matches the other handlers.
#[allow(clippy::unnecessary_wraps)]
pub fn run(basepath: &str) -> Result<(), String> {
    println!("{}", apply_command(basepath));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_puppet_apply_command() {
        let expected = "puppet apply manifests/site.pp \\\n      --modulepath \
                        $(echo `pwd`/modules:`pwd`/site) --hiera_config hiera.yaml";
        assert_eq!(apply_command("site"), expected);
    }
}
