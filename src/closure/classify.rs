//! Splits a changed-file list into changed roles and changed profiles.

use std::collections::BTreeSet;

use super::codec::{ClassId, PathClassCodec};

/// Role and profile classes touched by a diff.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ChangedClasses {
    /// Roles whose own manifests changed.
    pub roles: BTreeSet<ClassId>,
    /// Profiles whose own manifests changed.
    pub profiles: BTreeSet<ClassId>,
}

/// Classifies changed paths into role and profile identifiers.
///
/// Paths are kept when they contain `<basepath>/role/manifests` or
/// `<basepath>/profile/manifests`; anything the codec cannot encode is
/// dropped.
#[must_use]
pub fn classify<I, S>(changed: I, basepath: &str, codec: &PathClassCodec<'_>) -> ChangedClasses
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let changed: Vec<S> = changed.into_iter().collect();
    let basepath = basepath.trim_end_matches('/');
    ChangedClasses {
        roles: select(&changed, &format!("{basepath}/role/manifests"), codec),
        profiles: select(&changed, &format!("{basepath}/profile/manifests"), codec),
    }
}

fn select<S: AsRef<str>>(
    changed: &[S],
    needle: &str,
    codec: &PathClassCodec<'_>,
) -> BTreeSet<ClassId> {
    changed
        .iter()
        .map(AsRef::as_ref)
        .filter(|path| path.contains(needle))
        .filter_map(|path| codec.encode(path))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn splits_roles_and_profiles_and_drops_the_rest() {
        let codec = PathClassCodec::new(Path::new("/r"), "site");
        let changed = ["site/role/manifests/foo.pp", "site/profile/manifests/bar.pp", "README.md"];

        let classes = classify(changed, "site", &codec);

        assert_eq!(classes.roles, BTreeSet::from([ClassId::from("role::foo")]));
        assert_eq!(classes.profiles, BTreeSet::from([ClassId::from("profile::bar")]));
    }

    #[test]
    fn drops_matching_paths_that_do_not_encode() {
        let codec = PathClassCodec::new(Path::new("/r"), "site");
        let changed = ["site/role/manifests/notes.txt", "site/profile/manifests/"];

        let classes = classify(changed, "site", &codec);

        assert!(classes.roles.is_empty());
        assert!(classes.profiles.is_empty());
    }

    #[test]
    fn bare_category_manifest_is_skipped() {
        let codec = PathClassCodec::new(Path::new("/r"), "site");
        let changed = ["site/role/manifests/site.pp", "site/role/manifests/web.pp"];

        let classes = classify(changed, "site", &codec);

        assert_eq!(classes.roles, BTreeSet::from([ClassId::from("role::web")]));
    }

    #[test]
    fn deduplicates_repeated_entries() {
        let codec = PathClassCodec::new(Path::new("/r"), "site");
        let changed = vec![
            "site/role/manifests/web.pp".to_string(),
            "site/role/manifests/web.pp".to_string(),
        ];

        let classes = classify(changed, "site", &codec);

        assert_eq!(classes.roles.len(), 1);
    }

    #[test]
    fn honours_custom_basepath() {
        let codec = PathClassCodec::new(Path::new("/r"), "dist");
        let changed = ["dist/role/manifests/web.pp", "site/role/manifests/db.pp"];

        let classes = classify(changed, "dist", &codec);

        assert_eq!(classes.roles, BTreeSet::from([ClassId::from("role::web")]));
    }
}
