//! Change-closure computation.
//!
//! Turns the staged diff into the set of role and profile classes whose
//! specs must run:
//!
//! 1. [`codec`] maps manifest paths to class identifiers.
//! 2. [`classify`] splits the diff into changed roles and profiles.
//! 3. [`inclusion`] finds roles that mention a changed profile.
//! 4. [`compute`] unions the two into the closure.
//! 5. [`spec_path`] maps each class to its spec file.

pub mod classify;
pub mod codec;
pub mod compute;
pub mod inclusion;
pub mod spec_path;

use std::collections::BTreeSet;
use std::path::PathBuf;

pub use classify::ChangedClasses;
pub use codec::{ClassId, PathClassCodec};

use crate::config::Settings;
use crate::error::Result;
use crate::ports::git::GitRepo;

/// Everything derived from one diff.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TestPlan {
    /// Roles and profiles changed directly.
    pub changed: ChangedClasses,
    /// Changed roles plus roles that mention a changed profile.
    pub closure: BTreeSet<ClassId>,
}

impl TestPlan {
    /// Diffs against the base branch and computes the closure.
    ///
    /// # Errors
    ///
    /// Returns an error if the diff or any inclusion search fails.
    pub fn from_diff(git: &dyn GitRepo, settings: &Settings) -> Result<Self> {
        let paths = git.diff_names(settings.root(), &settings.basebranch)?;
        tracing::debug!("{} staged change(s) against {}", paths.len(), settings.basebranch);
        let changed = classify::classify(&paths, &settings.basepath, &settings.codec());
        let closure = compute::compute(git, settings, &changed.roles, &changed.profiles)?;
        Ok(Self { changed, closure })
    }

    /// Acceptance specs for the closure, then unit specs for changed profiles.
    ///
    /// # Errors
    ///
    /// Returns an error if any class fails to resolve.
    pub fn spec_paths(&self, settings: &Settings) -> Result<Vec<PathBuf>> {
        self.closure
            .iter()
            .chain(&self.changed.profiles)
            .map(|class| spec_path::resolve(settings, class))
            .collect()
    }
}
