//! Per-invocation settings: project root, base path and base branch.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::closure::codec::PathClassCodec;
use crate::error::Result;
use crate::ports::git::GitRepo;

/// Default subtree holding the `role` and `profile` modules.
pub const DEFAULT_BASEPATH: &str = "site";

/// Default ref that changes are compared against.
pub const DEFAULT_BASEBRANCH: &str = "master";

/// Settings resolved once per invocation and passed to every component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Absolute path of the repository top level.
    pub root: PathBuf,
    /// Subtree containing `role` and `profile`, relative to `root`.
    pub basepath: String,
    /// Ref that staged changes are diffed against.
    pub basebranch: String,
    role_path: Option<PathBuf>,
    profile_path: Option<PathBuf>,
}

impl Settings {
    /// Settings with the default base path and branch.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            basepath: DEFAULT_BASEPATH.to_string(),
            basebranch: DEFAULT_BASEBRANCH.to_string(),
            role_path: None,
            profile_path: None,
        }
    }

    /// Resolves the project root from `root` if given, else from git.
    ///
    /// # Errors
    ///
    /// Returns an error if no root was given and git cannot report one.
    pub fn resolve(root: Option<PathBuf>, git: &dyn GitRepo) -> Result<Self> {
        let root = match root {
            Some(root) => root,
            None => git.toplevel()?,
        };
        debug!("project_root = {}", root.display());
        Ok(Self::new(root))
    }

    /// Replaces the base path.
    #[must_use]
    pub fn with_basepath(mut self, basepath: impl Into<String>) -> Self {
        self.basepath = basepath.into();
        self
    }

    /// Replaces the base branch.
    #[must_use]
    pub fn with_basebranch(mut self, basebranch: impl Into<String>) -> Self {
        self.basebranch = basebranch.into();
        self
    }

    /// Pins the role directory instead of deriving it from the base path.
    #[must_use]
    pub fn with_role_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.role_path = Some(path.into());
        self
    }

    /// Pins the profile directory instead of deriving it from the base path.
    #[must_use]
    pub fn with_profile_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.profile_path = Some(path.into());
        self
    }

    /// Directory of the role module.
    #[must_use]
    pub fn role_path(&self) -> PathBuf {
        self.role_path.clone().unwrap_or_else(|| self.module_path("role"))
    }

    /// Directory of the profile module.
    #[must_use]
    pub fn profile_path(&self) -> PathBuf {
        self.profile_path.clone().unwrap_or_else(|| self.module_path("profile"))
    }

    /// Directory of `module` under the base path, ignoring pinned paths.
    #[must_use]
    pub fn module_path(&self, module: &str) -> PathBuf {
        self.root.join(&self.basepath).join(module)
    }

    /// Directory holding installed third-party modules.
    #[must_use]
    pub fn modules_path(&self) -> PathBuf {
        self.root.join("modules")
    }

    /// Codec bound to this root and base path.
    #[must_use]
    pub fn codec(&self) -> PathClassCodec<'_> {
        PathClassCodec::new(self.root(), &self.basepath)
    }

    /// The project root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}
