//! Resolution of class identifiers to their spec files.

use std::path::PathBuf;

use super::codec::ClassId;
use crate::config::Settings;
use crate::error::{Error, Result};

/// Suffix every spec file carries.
pub const SPEC_SUFFIX: &str = "_spec.rb";

/// Returns the spec file that tests `class`.
///
/// Profiles map to unit specs under `<root>/<basepath>/profile/spec/`, roles
/// to acceptance specs under `<root>/<basepath>/role/spec/acceptance/`.
/// Pinned role and profile directories do not apply here.
///
/// # Errors
///
/// Returns [`Error::InvalidClass`] when the leading segment is neither
/// `role` nor `profile`, or nothing follows it.
pub fn resolve(settings: &Settings, class: &ClassId) -> Result<PathBuf> {
    let mut dir = match class.leading() {
        "profile" => settings.module_path("profile").join("spec"),
        "role" => settings.module_path("role").join("spec").join("acceptance"),
        _ => return Err(invalid(class)),
    };

    let rest: Vec<&str> = class.segments().skip(1).collect();
    let Some((last, parents)) = rest.split_last() else {
        return Err(invalid(class));
    };
    if last.is_empty() {
        return Err(invalid(class));
    }
    dir.extend(parents);
    Ok(dir.join(format!("{last}{SPEC_SUFFIX}")))
}

fn invalid(class: &ClassId) -> Error {
    Error::InvalidClass { class: class.to_string() }
}
