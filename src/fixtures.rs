//! Fixture symlinks that let profile specs resolve sibling modules.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::ports::filesystem::FileSystem;

/// Directory that spec fixtures resolve modules from.
#[must_use]
pub fn fixtures_path(settings: &Settings) -> PathBuf {
    settings.profile_path().join("spec").join("fixtures").join("modules")
}

/// Links the profile module and every installed module into the fixtures
/// directory. Existing links are left alone.
///
/// Returns the links that were created.
///
/// # Errors
///
/// Returns an error if the fixtures directory or a link cannot be created.
pub fn link(fs: &dyn FileSystem, settings: &Settings) -> Result<Vec<PathBuf>> {
    let fixtures = fixtures_path(settings);
    fs.create_dir_all(&fixtures)?;

    let modules = settings.modules_path();
    let mut targets = vec![(settings.profile_path(), fixtures.join("profile"))];
    for name in fs.list_dirs(&modules)? {
        targets.push((modules.join(&name), fixtures.join(&name)));
    }

    let mut created = Vec::new();
    for (original, link) in targets {
        if present(fs, &link) {
            continue;
        }
        debug!("ln -s {} {}", original.display(), link.display());
        fs.symlink(&original, &link)?;
        created.push(link);
    }
    Ok(created)
}

/// Removes the fixtures directory and the installed modules directory.
///
/// Nothing is deleted if either path is empty.
///
/// # Errors
///
/// Returns [`Error::UnsafeClean`] for an empty target, or the removal error.
pub fn clean(fs: &dyn FileSystem, settings: &Settings) -> Result<()> {
    let fixtures = fixtures_path(settings);
    let modules = settings.modules_path();
    refuse_empty(&fixtures, "fixtures")?;
    refuse_empty(&modules, "modules")?;

    for dir in [&fixtures, &modules] {
        debug!("rm -rf {}", dir.display());
        fs.remove_dir_all(dir)?;
    }
    Ok(())
}

fn present(fs: &dyn FileSystem, path: &Path) -> bool {
    fs.is_symlink(path) || fs.exists(path)
}

fn refuse_empty(path: &Path, what: &'static str) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(Error::UnsafeClean { what });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, BTreeSet};
    use std::sync::Mutex;

    use super::*;
    use crate::error::PortError;

    /// In-memory filesystem tracking directories and links.
    #[derive(Default)]
    struct MemoryFs {
        dirs: Mutex<BTreeSet<PathBuf>>,
        links: Mutex<BTreeMap<PathBuf, PathBuf>>,
        removed: Mutex<Vec<PathBuf>>,
    }

    impl MemoryFs {
        fn with_dirs(dirs: &[&str]) -> Self {
            let fs = Self::default();
            fs.dirs.lock().unwrap().extend(dirs.iter().map(PathBuf::from));
            fs
        }
    }

    impl FileSystem for MemoryFs {
        fn exists(&self, path: &Path) -> bool {
            self.dirs.lock().unwrap().contains(path)
        }
        fn is_symlink(&self, path: &Path) -> bool {
            self.links.lock().unwrap().contains_key(path)
        }
        fn create_dir_all(&self, path: &Path) -> std::result::Result<(), PortError> {
            self.dirs.lock().unwrap().insert(path.to_path_buf());
            Ok(())
        }
        fn symlink(&self, original: &Path, link: &Path) -> std::result::Result<(), PortError> {
            self.links.lock().unwrap().insert(link.to_path_buf(), original.to_path_buf());
            Ok(())
        }
        fn list_dirs(&self, path: &Path) -> std::result::Result<Vec<String>, PortError> {
            Ok(self
                .dirs
                .lock()
                .unwrap()
                .iter()
                .filter(|d| d.parent() == Some(path))
                .filter_map(|d| d.file_name().map(|n| n.to_string_lossy().into_owned()))
                .collect())
        }
        fn remove_dir_all(&self, path: &Path) -> std::result::Result<(), PortError> {
            self.removed.lock().unwrap().push(path.to_path_buf());
            Ok(())
        }
    }

    #[test]
    fn links_profile_and_each_module() {
        let fs = MemoryFs::with_dirs(&["/r/modules/stdlib", "/r/modules/concat"]);
        let settings = Settings::new("/r");

        let created = link(&fs, &settings).unwrap();

        let fixtures = PathBuf::from("/r/site/profile/spec/fixtures/modules");
        assert_eq!(
            created,
            vec![fixtures.join("profile"), fixtures.join("concat"), fixtures.join("stdlib")]
        );
        let links = fs.links.lock().unwrap();
        assert_eq!(links[&fixtures.join("profile")], PathBuf::from("/r/site/profile"));
        assert_eq!(links[&fixtures.join("stdlib")], PathBuf::from("/r/modules/stdlib"));
    }

    #[test]
    fn skips_links_that_already_exist() {
        let fs = MemoryFs::with_dirs(&["/r/modules/stdlib"]);
        let settings = Settings::new("/r");

        link(&fs, &settings).unwrap();
        let second = link(&fs, &settings).unwrap();

        assert!(second.is_empty());
    }

    #[test]
    fn clean_removes_fixtures_and_modules() {
        let fs = MemoryFs::default();
        let settings = Settings::new("/r");

        clean(&fs, &settings).unwrap();

        assert_eq!(
            *fs.removed.lock().unwrap(),
            vec![
                PathBuf::from("/r/site/profile/spec/fixtures/modules"),
                PathBuf::from("/r/modules"),
            ]
        );
    }

    #[test]
    fn refuses_empty_targets() {
        assert!(matches!(
            refuse_empty(Path::new(""), "modules"),
            Err(Error::UnsafeClean { what: "modules" })
        ));
        assert!(refuse_empty(Path::new("/r/modules"), "modules").is_ok());
    }
}
