//! Normalized report model.
//!
//! Every XML producer is reduced to the same three things: a per-module
//! `Summary`, a list of located `Failure`s, and the `Annotation` derived from
//! each failure.

use crate::types::{GitHubContext, Outcome, ReporterType, join_path};

/// Per-module, per-producer summary
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub result: Outcome,
    pub tests: u32,
    pub passed: u32,
    pub failed: u32,
    pub skipped: u32,
    /// Seconds, when the producer reports it
    pub time: Option<f64>,
    /// Go toolchain version, when the producer reports it
    pub version: Option<String>,
}

impl Summary {
    /// `1.2s`-style cell text, or `-` when unknown
    pub fn time_display(&self) -> String {
        self.time.map(|t| format!("{:.1}s", t)).unwrap_or_else(|| "-".to_string())
    }
}

/// A failure attributed to a file and line inside a module
#[derive(Debug, Clone, PartialEq)]
pub struct Failure {
    pub kind: ReporterType,
    pub module_dir: String,
    pub sub_dir: String,
    pub file: String,
    /// Always >= 1
    pub line: u32,
    pub test: String,
    pub message: String,
}

impl Failure {
    /// Repository-relative path of the failing file
    pub fn full_path(&self) -> String {
        join_path(&[&self.module_dir, &self.sub_dir, &self.file])
    }

    /// Message with newlines flattened to spaces
    pub fn flat_message(&self) -> String {
        self.message.replace("\r\n", " ").replace('\n', " ")
    }

    /// Row index in the failure table: a link to the failing line
    pub fn index(&self, context: &GitHubContext) -> String {
        let full_path = self.full_path();
        format!("[{}:{}]({})", full_path, self.line, context.line_url(&full_path, self.line))
    }

    pub fn annotation(&self) -> Annotation {
        Annotation { file_path: self.full_path(), line: self.line, message: self.flat_message() }
    }
}

/// A GitHub Actions log annotation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub file_path: String,
    pub line: u32,
    pub message: String,
}

impl Annotation {
    /// `::error file=<path>,line=<line>::<message>`; nothing is escaped.
    pub fn body(&self) -> String {
        format!("::error file={},line={}::{}", self.file_path, self.line, self.message)
    }
}

/// Everything one XML file says about one module
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub path: String,
    pub kind: ReporterType,
    pub summary: Summary,
    pub failures: Vec<Failure>,
}

impl Report {
    pub fn result(&self) -> Outcome {
        self.summary.result
    }

    /// Row index in the summary tables: a link to the module directory.
    ///
    /// Identical for the same directory across producers, which is what the
    /// cross-group join keys on.
    pub fn index(&self, context: &GitHubContext) -> String {
        summary_index(context, &self.path)
    }
}

pub fn summary_index(context: &GitHubContext, module_dir: &str) -> String {
    format!("[{}]({})", module_dir, context.blob_url(module_dir))
}
