//! Reverse lookup of roles that mention a profile.

use std::collections::BTreeSet;

use tracing::debug;

use super::codec::ClassId;
use crate::config::Settings;
use crate::error::Result;
use crate::ports::git::GitRepo;

/// Finds roles whose tracked files contain `profile` as literal text.
///
/// The search is a plain substring match, so a role mentioning the profile
/// only in a comment, or as the prefix of a longer class name, is returned
/// too. Hits that do not encode to a class (specs, templates) are dropped.
///
/// # Errors
///
/// Returns an error if the search backend fails.
pub fn find_including_roles(
    git: &dyn GitRepo,
    settings: &Settings,
    profile: &ClassId,
) -> Result<BTreeSet<ClassId>> {
    let role_path = settings.role_path();
    let hits = git.grep_files(&role_path, profile.as_str())?;
    debug!("{} file(s) under {} mention {profile}", hits.len(), role_path.display());

    let codec = settings.codec();
    Ok(hits
        .iter()
        .filter_map(|hit| codec.encode(&role_path.join(hit).to_string_lossy()))
        .collect())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;

    use super::*;
    use crate::error::PortError;

    /// Answers `grep_files` from a fixed table and remembers the directory.
    #[derive(Default)]
    struct TableGit {
        hits: HashMap<String, Vec<String>>,
        searched_in: Mutex<Vec<PathBuf>>,
    }

    impl GitRepo for TableGit {
        fn toplevel(&self) -> std::result::Result<PathBuf, PortError> {
            Ok(PathBuf::from("/r"))
        }
        fn current_commit(&self) -> std::result::Result<String, PortError> {
            Ok("abc".into())
        }
        fn diff_names(
            &self,
            _dir: &Path,
            _base: &str,
        ) -> std::result::Result<Vec<String>, PortError> {
            Ok(Vec::new())
        }
        fn grep_files(
            &self,
            dir: &Path,
            needle: &str,
        ) -> std::result::Result<Vec<String>, PortError> {
            self.searched_in.lock().unwrap().push(dir.to_path_buf());
            Ok(self.hits.get(needle).cloned().unwrap_or_default())
        }
    }

    #[test]
    fn maps_hits_back_to_role_classes() {
        let git = TableGit {
            hits: HashMap::from([(
                "profile::db".to_string(),
                vec![
                    "manifests/web.pp".to_string(),
                    "manifests/app/worker.pp".to_string(),
                    "spec/acceptance/web_spec.rb".to_string(),
                    "README.md".to_string(),
                ],
            )]),
            ..TableGit::default()
        };
        let settings = Settings::new("/r");

        let roles = find_including_roles(&git, &settings, &ClassId::from("profile::db")).unwrap();

        assert_eq!(
            roles,
            BTreeSet::from([ClassId::from("role::app::worker"), ClassId::from("role::web")])
        );
        assert_eq!(*git.searched_in.lock().unwrap(), vec![PathBuf::from("/r/site/role")]);
    }

    #[test]
    fn no_hits_is_an_empty_set() {
        let git = TableGit::default();
        let settings = Settings::new("/r");

        let roles = find_including_roles(&git, &settings, &ClassId::from("profile::db")).unwrap();

        assert!(roles.is_empty());
    }

    #[test]
    fn search_failures_propagate() {
        struct BrokenGit;
        impl GitRepo for BrokenGit {
            fn toplevel(&self) -> std::result::Result<PathBuf, PortError> {
                Err("no repo".into())
            }
            fn current_commit(&self) -> std::result::Result<String, PortError> {
                Err("no repo".into())
            }
            fn diff_names(
                &self,
                _dir: &Path,
                _base: &str,
            ) -> std::result::Result<Vec<String>, PortError> {
                Err("no repo".into())
            }
            fn grep_files(
                &self,
                _dir: &Path,
                _needle: &str,
            ) -> std::result::Result<Vec<String>, PortError> {
                Err("git grep -l failed: fatal".into())
            }
        }

        let result = find_including_roles(&BrokenGit, &Settings::new("/r"), &"profile::db".into());

        assert!(result.unwrap_err().to_string().contains("fatal"));
    }
}
