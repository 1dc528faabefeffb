//! `rolespec includes` command.

use crate::closure::inclusion::find_including_roles;
use crate::closure::ClassId;
use crate::config::Settings;
use crate::context::ServiceContext;

/// Execute the `includes` command.
///
/// # Errors
///
/// Returns an error string if the search fails.
pub fn run(ctx: &ServiceContext, settings: &Settings, class: &str) -> Result<(), String> {
    let roles = find_including_roles(ctx.git.as_ref(), settings, &ClassId::from(class))
        .map_err(|e| e.to_string())?;
    for role in &roles {
        println!("{role}");
    }
    Ok(())
}
