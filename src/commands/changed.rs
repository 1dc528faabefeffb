//! `rolespec changed` command.

use crate::closure::TestPlan;
use crate::config::Settings;
use crate::context::ServiceContext;

/// Execute the `changed` command.
///
/// Prints every role in the closure, one per line, sorted.
///
/// # Errors
///
/// Returns an error string if the diff or an inclusion search fails.
pub fn run(ctx: &ServiceContext, settings: &Settings) -> Result<(), String> {
    let plan = TestPlan::from_diff(ctx.git.as_ref(), settings).map_err(|e| e.to_string())?;
    for class in &plan.closure {
        println!("{class}");
    }
    Ok(())
}
