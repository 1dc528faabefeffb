//! `rolespec class` command.

use crate::config::Settings;

/// Execute the `class` command.
///
/// # Errors
///
/// Returns an error string if the path is not a role or profile manifest.
pub fn run(settings: &Settings, path: &str) -> Result<(), String> {
    let class = settings
        .codec()
        .encode(path)
        .ok_or_else(|| format!("{path} is not a manifest under a manifests directory"))?;
    println!("{class}");
    Ok(())
}
