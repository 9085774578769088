//! Repository name detection.
//!
//! The repository name is the base name of the directory the tool runs in,
//! which matches the checkout directory of a GitHub clone.

use std::env;
use std::path::Path;

use anyhow::{
    Context,
    Result,
};

/// Repository name for `dir`: its final path segment.
pub fn repo_name_from_dir(dir: &Path) -> Result<String> {
    let name = dir
        .file_name()
        .with_context(|| format!("Cannot derive a repository name from {}", dir.display()))?;
    Ok(name.to_string_lossy().into_owned())
}

/// Repository name for the current working directory.
pub fn current_repo_name() -> Result<String> {
    let cwd = env::current_dir().context("Failed to get current directory")?;
    repo_name_from_dir(&cwd)
}

/// Switches the working directory and restores the previous one on drop,
/// including when a test panics.
#[cfg(test)]
pub(crate) struct CurrentDirGuard {
    original: std::path::PathBuf,
}

#[cfg(test)]
impl CurrentDirGuard {
    pub(crate) fn enter(dir: &Path) -> Self {
        let original = env::current_dir().unwrap();
        env::set_current_dir(dir).unwrap();
        Self { original }
    }
}

#[cfg(test)]
impl Drop for CurrentDirGuard {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.original);
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_repo_name_from_dir() {
        let dir = PathBuf::from("/home/ci/work/terraform-aws-ecs");
        assert_eq!(repo_name_from_dir(&dir).unwrap(), "terraform-aws-ecs");
    }

    #[test]
    fn test_repo_name_ignores_trailing_slash() {
        let dir = PathBuf::from("/src/myrepo/");
        assert_eq!(repo_name_from_dir(&dir).unwrap(), "myrepo");
    }

    #[test]
    fn test_repo_name_from_root_fails() {
        let result = repo_name_from_dir(Path::new("/"));
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Cannot derive a repository name")
        );
    }

    #[test]
    #[serial_test::serial]
    fn test_current_repo_name() {
        let dir = tempfile::tempdir().unwrap();
        let repo_dir = dir.path().join("myrepo");
        std::fs::create_dir(&repo_dir).unwrap();

        let name = {
            let _guard = CurrentDirGuard::enter(&repo_dir);
            current_repo_name()
        };

        assert_eq!(name.unwrap(), "myrepo");
    }

    #[test]
    #[serial_test::serial]
    fn test_current_dir_restored_after_panic() {
        let original = env::current_dir().unwrap();
        let dir = tempfile::tempdir().unwrap();

        let outcome = std::panic::catch_unwind(|| {
            let _guard = CurrentDirGuard::enter(dir.path());
            panic!("test body failed");
        });

        assert!(outcome.is_err());
        assert_eq!(env::current_dir().unwrap(), original);
    }
}
