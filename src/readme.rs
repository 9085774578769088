//! README badge line updates.
//!
//! The README is handled as a sequence of lines, each keeping its own line
//! terminator. A single scan records every line starting with a badge
//! marker; the last match per badge decides where the fresh badges go:
//!
//! | Found           | Action                                            |
//! |-----------------|---------------------------------------------------|
//! | neither         | insert release + build at the top of the file     |
//! | build only      | insert the release badge directly above the build |
//! | release only    | insert the build badge directly below the release |
//! | both            | overwrite both lines in place                     |
//!
//! Running the update twice yields the same file as running it once: the
//! second run finds both badges and rewrites them with identical text.

use std::fs::OpenOptions;
use std::io::{
    Read,
    Seek,
    SeekFrom,
    Write,
};
use std::path::Path;

use anyhow::{
    Context,
    Result,
};

use crate::badge::Badge;

/// A line that starts with one of the badge markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeMatch {
    /// Zero-based line index.
    pub line: usize,
    /// Badge the marker belongs to.
    pub badge: Badge,
    /// Marker the line starts with.
    pub marker: &'static str,
}

/// Every badge line found in a document, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BadgeScan {
    pub matches: Vec<BadgeMatch>,
}

impl BadgeScan {
    /// Index of the last line carrying `badge`.
    pub fn last(&self, badge: Badge) -> Option<usize> {
        self.matches
            .iter()
            .rev()
            .find(|m| m.badge == badge)
            .map(|m| m.line)
    }

    /// Number of lines carrying `badge`.
    pub fn count(&self, badge: Badge) -> usize {
        self.matches.iter().filter(|m| m.badge == badge).count()
    }

    /// Resolve where the badges go.
    pub fn placement(&self) -> Placement {
        match (self.last(Badge::Release), self.last(Badge::Build)) {
            (None, None) => Placement::NeitherFound,
            (Some(release), None) => Placement::ReleaseOnly { release },
            (None, Some(build)) => Placement::BuildOnly { build },
            (Some(release), Some(build)) => Placement::BothFound { release, build },
        }
    }
}

/// Where the badges end up, based on which ones already exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// No badge present; both go to the top.
    NeitherFound,
    /// Only the release badge is present.
    ReleaseOnly { release: usize },
    /// Only the build badge is present.
    BuildOnly { build: usize },
    /// Both are present and get overwritten in place.
    BothFound { release: usize, build: usize },
}

impl Placement {
    /// Progress message for the branch taken.
    pub fn describe(&self) -> &'static str {
        match self {
            Placement::NeitherFound => "Inserting both badges at start of README",
            Placement::BuildOnly { .. } => "Inserting release badge before build badge",
            Placement::ReleaseOnly { .. } => "Inserting build badge after release badge",
            Placement::BothFound { .. } => "Updating both badges in place",
        }
    }

    /// Make room for missing badges and return the `(release, build)` slots.
    ///
    /// Inserted slots hold a blank line until they are overwritten.
    fn make_room(self, lines: &mut Vec<String>) -> (usize, usize) {
        match self {
            Placement::NeitherFound => {
                lines.insert(0, String::from("\n"));
                lines.insert(0, String::from("\n"));
                (0, 1)
            }
            Placement::BuildOnly { build } => {
                lines.insert(build, String::from("\n"));
                (build, build + 1)
            }
            Placement::ReleaseOnly { release } => {
                lines.insert(release + 1, String::from("\n"));
                (release, release + 1)
            }
            Placement::BothFound { release, build } => (release, build),
        }
    }
}

/// Result of updating the badges of a README.
#[derive(Debug)]
pub struct ReadmeUpdateResult {
    /// The updated content.
    pub content: String,
    /// Branch taken to place the badges.
    pub placement: Placement,
    /// Badge lines found in the original content.
    pub scan: BadgeScan,
    /// Whether the content differs from the original.
    pub modified: bool,
}

/// Split `content` into lines that keep their terminators.
fn split_lines(content: &str) -> Vec<String> {
    content.split_inclusive('\n').map(str::to_owned).collect()
}

/// Record every line that starts with a badge marker.
///
/// The scan runs to the end of the document so later duplicates win.
pub fn scan_lines<S: AsRef<str>>(lines: &[S]) -> BadgeScan {
    let mut matches = Vec::new();
    for (line, text) in lines.iter().enumerate() {
        let text = text.as_ref();
        for badge in [Badge::Release, Badge::Build] {
            if let Some(marker) = badge.match_line(text) {
                matches.push(BadgeMatch {
                    line,
                    badge,
                    marker,
                });
            }
        }
    }
    BadgeScan { matches }
}

/// Insert or refresh the release and build badges in README `content`.
///
/// # Examples
///
/// ```
/// use update_badges::readme::{
///     Placement,
///     update_readme_content,
/// };
///
/// let result = update_readme_content("# myrepo\n", "myrepo");
/// assert_eq!(result.placement, Placement::NeitherFound);
/// assert!(result.content.starts_with("[![latest release]"));
/// assert!(result.content.ends_with("# myrepo\n"));
/// ```
pub fn update_readme_content(content: &str, repo: &str) -> ReadmeUpdateResult {
    let mut lines = split_lines(content);
    let scan = scan_lines(&lines);
    let placement = scan.placement();

    let (release, build) = placement.make_room(&mut lines);
    lines[release] = format!("{}\n", Badge::Release.format(repo));
    lines[build] = format!("{}\n", Badge::Build.format(repo));

    let updated = lines.concat();
    let modified = updated != content;
    ReadmeUpdateResult {
        content: updated,
        placement,
        scan,
        modified,
    }
}

/// Write what the scan found and which branch is taken.
fn report(out: &mut impl Write, result: &ReadmeUpdateResult) -> std::io::Result<()> {
    for m in &result.scan.matches {
        writeln!(out, "found {} badge", m.marker)?;
    }
    for badge in [Badge::Release, Badge::Build] {
        let count = result.scan.count(badge);
        if count > 1
            && let Some(last) = result.scan.last(badge)
        {
            writeln!(
                out,
                "note: {} {} badges found, only line {} is updated",
                count,
                badge.markers()[0],
                last + 1
            )?;
        }
    }
    writeln!(out, "{}", result.placement.describe())
}

/// Update the badges of the README at `path` in place.
///
/// The file is opened for reading and writing, rewritten from the start and
/// truncated to the new content.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, is not valid UTF-8, or
/// cannot be written.
pub fn update_readme_file(path: &Path, repo: &str) -> Result<ReadmeUpdateResult> {
    let mut out = std::io::stdout().lock();
    writeln!(out, "updating badges in README: {}", path.display())?;

    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let mut content = String::new();
    file.read_to_string(&mut content)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let result = update_readme_content(&content, repo);
    report(&mut out, &result)?;

    file.seek(SeekFrom::Start(0))
        .with_context(|| format!("Failed to rewind {}", path.display()))?;
    file.write_all(result.content.as_bytes())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    file.set_len(result.content.len() as u64)
        .with_context(|| format!("Failed to truncate {}", path.display()))?;

    Ok(result)
}
