//! Update README badges command.
//!
//! This command inserts or refreshes the release and build status badges at
//! the top of a README. The repository name in the badge URLs is taken from
//! the name of the current directory.
//!
//! # Examples
//!
//! ```bash
//! # From the root of a checkout named "myrepo"
//! update-badges --path README.md
//!
//! # Short form
//! update-badges -p docs/README.md
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::readme::update_readme_file;
use crate::repo::current_repo_name;

/// Arguments for the `update-badges` command.
#[derive(Parser, Debug)]
pub struct UpdateBadgesArgs {
    /// Path to the README file to update.
    #[arg(short = 'p', long)]
    pub path: Option<PathBuf>,
}

/// Update the badges of the README given in `args`.
///
/// # Errors
///
/// Returns an error if the repository name cannot be derived from the
/// current directory, or if the README cannot be read or written. A missing
/// `--path` is passed on as an empty path and fails on open.
///
/// # Example Output
///
/// ```text
/// updating badges in README: README.md
/// found [![build status] badge
/// Inserting release badge before build badge
/// ```
pub fn update_badges(args: UpdateBadgesArgs) -> Result<()> {
    let repo = current_repo_name()?;
    let path = args.path.unwrap_or_default();
    update_readme_file(&path, &repo)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::badge::{
        format_build_badge,
        format_release_badge,
    };
    use crate::repo::CurrentDirGuard;

    fn in_dir<T>(dir: &std::path::Path, f: impl FnOnce() -> T) -> T {
        let _guard = CurrentDirGuard::enter(dir);
        f()
    }

    #[test]
    #[serial_test::serial]
    fn test_update_badges_uses_directory_name() {
        let dir = tempfile::tempdir().unwrap();
        let repo_dir = dir.path().join("myrepo");
        std::fs::create_dir(&repo_dir).unwrap();
        let readme = repo_dir.join("README.md");
        std::fs::write(&readme, "# myrepo\n").unwrap();

        let args = UpdateBadgesArgs {
            path: Some(PathBuf::from("README.md")),
        };
        in_dir(&repo_dir, || update_badges(args)).unwrap();

        let written = std::fs::read_to_string(&readme).unwrap();
        assert_eq!(
            written,
            format!(
                "{}\n{}\n# myrepo\n",
                format_release_badge("myrepo"),
                format_build_badge("myrepo")
            )
        );
    }

    #[test]
    #[serial_test::serial]
    fn test_update_badges_without_path_fails() {
        let dir = tempfile::tempdir().unwrap();

        let args = UpdateBadgesArgs { path: None };
        let result = in_dir(dir.path(), || update_badges(args));

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to open"));
    }

    #[test]
    #[serial_test::serial]
    fn test_update_badges_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();

        let args = UpdateBadgesArgs {
            path: Some(PathBuf::from("NOPE.md")),
        };
        let result = in_dir(dir.path(), || update_badges(args));

        assert!(result.is_err());
        assert!(!dir.path().join("NOPE.md").exists());
    }

    #[test]
    fn test_parse_short_and_long_path() {
        let args = UpdateBadgesArgs::try_parse_from(["update-badges", "-p", "README.md"]).unwrap();
        assert_eq!(args.path, Some(PathBuf::from("README.md")));

        let args =
            UpdateBadgesArgs::try_parse_from(["update-badges", "--path", "docs/README.md"]).unwrap();
        assert_eq!(args.path, Some(PathBuf::from("docs/README.md")));

        let args = UpdateBadgesArgs::try_parse_from(["update-badges"]).unwrap();
        assert_eq!(args.path, None);
    }
}
