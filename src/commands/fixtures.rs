//! `rolespec fixtures` and `rolespec clean` commands.

use crate::config::Settings;
use crate::context::ServiceContext;
use crate::fixtures;

/// Execute the `fixtures` command.
///
/// # Errors
///
/// Returns an error string if a link cannot be created.
pub fn link(ctx: &ServiceContext, settings: &Settings) -> Result<(), String> {
    let created = fixtures::link(ctx.fs.as_ref(), settings).map_err(|e| e.to_string())?;
    println!("Linked {} fixture module(s).", created.len());
    Ok(())
}

/// Execute the `clean` command.
///
/// # Errors
///
/// Returns an error string if a target is empty or cannot be removed.
pub fn clean(ctx: &ServiceContext, settings: &Settings) -> Result<(), String> {
    fixtures::clean(ctx.fs.as_ref(), settings).map_err(|e| e.to_string())
}
