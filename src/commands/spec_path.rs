//! `rolespec spec-path` command.

use crate::closure::{spec_path, ClassId};
use crate::config::Settings;

/// Execute the `spec-path` command.
///
/// # Errors
///
/// Returns an error string for classes that are neither roles nor profiles.
pub fn run(settings: &Settings, class: &str) -> Result<(), String> {
    let path = spec_path::resolve(settings, &ClassId::from(class)).map_err(|e| e.to_string())?;
    println!("{}", path.display());
    Ok(())
}
