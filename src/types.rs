/// Core vocabulary shared by the readers, normalizers and tables
///
/// This module defines the outcome of a module report, the two supported
/// report producers, and the repository context used to build links.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a single module report, or of a whole aggregation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Passed,
    Failed,
    Skipped,
    /// The report carried no totals at all
    Unknown,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Passed => "Passed",
            Outcome::Failed => "Failed",
            Outcome::Skipped => "Skipped",
            Outcome::Unknown => "Unknown",
        }
    }

    /// Cell text used in the summary tables
    pub fn display(&self) -> String {
        let icon = match self {
            Outcome::Passed => "✅",
            Outcome::Failed => "❌",
            Outcome::Skipped => "⏩",
            Outcome::Unknown => "❔",
        };
        format!("{}{}", icon, self.as_str())
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed)
    }
}

/// Producer of a JUnit XML report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReporterType {
    #[serde(rename = "gotestsum")]
    Gotestsum,
    #[serde(rename = "golangci-lint")]
    GolangCILint,
}

impl ReporterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReporterType::Gotestsum => "gotestsum",
            ReporterType::GolangCILint => "golangci-lint",
        }
    }
}

impl fmt::Display for ReporterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Repository coordinates used to link table cells back to the source tree.
///
/// Nothing here talks to the network; it only shapes URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubContext {
    pub owner: String,
    pub repo: String,
    pub sha: String,
}

impl GitHubContext {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>, sha: impl Into<String>) -> Self {
        Self { owner: owner.into(), repo: repo.into(), sha: sha.into() }
    }

    /// `https://github.com/<owner>/<repo>/blob/<sha>/<path>`
    pub fn blob_url(&self, path: &str) -> String {
        format!("https://github.com/{}/{}/blob/{}/{}", self.owner, self.repo, self.sha, path)
    }

    /// Blob URL anchored at a line
    pub fn line_url(&self, path: &str, line: u32) -> String {
        format!("{}#L{}", self.blob_url(path), line)
    }
}

/// One configured column group: a report type plus the directories holding its XML files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlFileGroup {
    pub title: String,
    pub kind: ReporterType,
    pub directories: Vec<String>,
    pub file_name: String,
    /// Maximum failure rows before the overflow row (default 10)
    pub failure_limit: Option<usize>,
    /// Maximum annotations emitted for this group (unlimited when None)
    pub annotation_limit: Option<usize>,
}

impl XmlFileGroup {
    pub fn new(title: impl Into<String>, kind: ReporterType, directories: Vec<String>, file_name: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            kind,
            directories,
            file_name: file_name.into(),
            failure_limit: None,
            annotation_limit: None,
        }
    }
}

/// Join path segments the way a POSIX `path.join` would, dropping `.` and empty segments
/// and resolving `..` against what came before.
pub fn join_path(parts: &[&str]) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for part in parts {
        for segment in part.split('/') {
            match segment {
                "" | "." => continue,
                ".." => {
                    if matches!(segments.last(), Some(last) if *last != "..") {
                        segments.pop();
                    } else {
                        segments.push("..");
                    }
                }
                other => segments.push(other),
            }
        }
    }
    if segments.is_empty() { ".".to_string() } else { segments.join("/") }
}
