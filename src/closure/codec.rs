//! Mapping between manifest paths and namespaced class identifiers.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Namespace separator used in class identifiers.
pub const SEPARATOR: &str = "::";

/// Path segments dropped when deriving a class identifier.
const DROPPED_SEGMENTS: [&str; 2] = ["site", "manifests"];

/// Class categories that are not classes on their own.
const CATEGORIES: [&str; 2] = ["role", "profile"];

/// A namespaced class identifier such as `role::web` or `profile::db::mysql`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassId(String);

impl ClassId {
    /// Wraps an identifier string as-is.
    pub fn new(class: impl Into<String>) -> Self {
        Self(class.into())
    }

    /// The identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterates the `::`-separated segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(SEPARATOR)
    }

    /// The first segment, which names the class category.
    #[must_use]
    pub fn leading(&self) -> &str {
        self.segments().next().unwrap_or_default()
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClassId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Derives class identifiers from manifest paths.
///
/// Paths are made relative to `root` (and to `basepath` when it leads the
/// relative path), stripped of `.pp`, and every `site` and `manifests`
/// segment is removed before rejoining with `::`.
#[derive(Debug, Clone)]
pub struct PathClassCodec<'a> {
    root: &'a Path,
    basepath: &'a str,
}

impl<'a> PathClassCodec<'a> {
    /// Creates a codec for the given project root and base path.
    #[must_use]
    pub fn new(root: &'a Path, basepath: &'a str) -> Self {
        Self { root, basepath }
    }

    /// Encodes a manifest path into its class identifier.
    ///
    /// Returns `None` unless the path has a whole `manifests` segment
    /// followed by a file ending in `.pp`, or when only a bare `role` or
    /// `profile` would remain (e.g. `role/manifests/site.pp`).
    #[must_use]
    pub fn encode(&self, path: &str) -> Option<ClassId> {
        let root = self.root.to_string_lossy();
        let root = root.trim_end_matches('/');
        let relative = if root.is_empty() {
            path
        } else {
            path.strip_prefix(root).and_then(|rest| rest.strip_prefix('/')).unwrap_or(path)
        };

        let stem = relative.strip_suffix(".pp")?;
        let segments: Vec<&str> = stem.split('/').collect();
        let manifests_at = segments.iter().position(|s| *s == "manifests")?;
        if manifests_at + 1 >= segments.len() || segments.last().is_some_and(|s| s.is_empty()) {
            return None;
        }

        let base: Vec<&str> = self.basepath.split('/').filter(|s| !s.is_empty()).collect();
        let skip = if !base.is_empty() && segments.starts_with(&base) { base.len() } else { 0 };

        let kept: Vec<&str> = segments[skip..]
            .iter()
            .copied()
            .filter(|s| !s.is_empty() && !DROPPED_SEGMENTS.contains(s))
            .collect();
        if kept.is_empty() || matches!(kept.as_slice(), [only] if CATEGORIES.contains(only)) {
            return None;
        }
        Some(ClassId(kept.join(SEPARATOR)))
    }
}
