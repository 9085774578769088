//! Release and build-status badge formatting.
//!
//! Both badges are markdown image links pointing at shields.io, templated
//! only by the repository name:
//!
//! ```text
//! [![latest release](<shield>)](<releases page>)
//! [![build status](<shield>)](<actions page>)
//! ```

/// GitHub organization that owns the repositories.
pub const GITHUB_OWNER: &str = "telia-oss";

/// Prefix of an existing release badge line.
pub const RELEASE_MARKER: &str = "[![latest release]";

/// Prefix of an existing build badge line.
pub const BUILD_MARKER: &str = "[![build status]";

/// Older prefix still accepted for the build badge.
pub const LEGACY_BUILD_MARKER: &str = "[![workflow]";

/// The two badges maintained at the top of a README.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    /// Latest tagged release.
    Release,
    /// Status of the most recent CI workflow run.
    Build,
}

impl Badge {
    /// Line prefixes that identify this badge, in order of preference.
    pub fn markers(self) -> &'static [&'static str] {
        match self {
            Badge::Release => &[RELEASE_MARKER],
            Badge::Build => &[BUILD_MARKER, LEGACY_BUILD_MARKER],
        }
    }

    /// Return the marker `line` starts with, if any.
    pub fn match_line(self, line: &str) -> Option<&'static str> {
        self.markers()
            .iter()
            .copied()
            .find(|marker| line.starts_with(marker))
    }

    /// Format this badge for `repo`.
    pub fn format(self, repo: &str) -> String {
        match self {
            Badge::Release => format_release_badge(repo),
            Badge::Build => format_build_badge(repo),
        }
    }
}

/// Format the release badge linking to the latest release page.
///
/// The repository name is substituted verbatim.
///
/// # Examples
///
/// ```
/// use update_badges::badge::format_release_badge;
///
/// assert_eq!(
///     format_release_badge("myrepo"),
///     "[![latest release](https://img.shields.io/github/v/release/telia-oss/myrepo?style=flat-square)](https://github.com/telia-oss/myrepo/releases/latest)"
/// );
/// ```
pub fn format_release_badge(repo: &str) -> String {
    let icon = format!(
        "https://img.shields.io/github/v/release/{}/{}?style=flat-square",
        GITHUB_OWNER, repo
    );
    let link = format!("https://github.com/{}/{}/releases/latest", GITHUB_OWNER, repo);
    format!("[![latest release]({})]({})", icon, link)
}

/// Format the build status badge linking to the `main.yml` workflow runs.
pub fn format_build_badge(repo: &str) -> String {
    let icon = format!(
        "https://img.shields.io/github/actions/workflow/status/{}/{}/main.yml?branch=master&logo=github&style=flat-square",
        GITHUB_OWNER, repo
    );
    let link = format!(
        "https://github.com/{}/{}/actions/workflows/main.yml",
        GITHUB_OWNER, repo
    );
    format!("[![build status]({})]({})", icon, link)
}
