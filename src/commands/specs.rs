//! `rolespec specs` command.

use crate::closure::TestPlan;
use crate::config::Settings;
use crate::context::ServiceContext;

/// Execute the `specs` command.
///
/// Prints acceptance specs for the role closure followed by unit specs for
/// changed profiles.
///
/// # Errors
///
/// Returns an error string if the closure cannot be computed or a class
/// does not resolve to a spec.
pub fn run(ctx: &ServiceContext, settings: &Settings) -> Result<(), String> {
    let plan = TestPlan::from_diff(ctx.git.as_ref(), settings).map_err(|e| e.to_string())?;
    for path in plan.spec_paths(settings).map_err(|e| e.to_string())? {
        println!("{}", path.display());
    }
    Ok(())
}
