//! Union of directly changed roles and roles reached through profiles.

use std::collections::BTreeSet;

use super::codec::ClassId;
use super::inclusion::find_including_roles;
use crate::config::Settings;
use crate::error::Result;
use crate::ports::git::GitRepo;

/// Computes the set of roles whose specs must run.
///
/// Every changed role is included, plus every role that textually mentions
/// a changed profile. Roles that only reach a profile through another role
/// are not discovered.
///
/// # Errors
///
/// Returns the first inclusion search failure.
pub fn compute<'a, P>(
    git: &dyn GitRepo,
    settings: &Settings,
    roles: &BTreeSet<ClassId>,
    profiles: P,
) -> Result<BTreeSet<ClassId>>
where
    P: IntoIterator<Item = &'a ClassId>,
{
    let mut closure = roles.clone();
    for profile in profiles {
        closure.extend(find_including_roles(git, settings, profile)?);
    }
    Ok(closure)
}
