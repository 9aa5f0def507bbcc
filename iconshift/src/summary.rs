//! Per-file outcomes and run totals.

use crate::catalog::MigrationKind;
use crate::rewrite::RuleHit;
use serde::Serialize;

/// What happened to one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "message", rename_all = "snake_case")]
pub enum FileStatus {
    /// Content changed (and was written unless dry-running).
    Modified,
    /// No rule changed the content.
    Unchanged,
    /// A listed file does not exist.
    NotFound,
    /// Reading or writing failed.
    Failed(String),
}

/// Outcome for one file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// Path as shown to the user.
    pub path: String,
    /// Outcome.
    #[serde(flatten)]
    pub status: FileStatus,
    /// Rules that fired, in order. Empty unless modified.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hits: Vec<RuleHit>,
}

impl FileReport {
    /// Report without rule hits.
    #[must_use]
    pub fn new(path: impl Into<String>, status: FileStatus) -> Self {
        Self {
            path: path.into(),
            status,
            hits: Vec::new(),
        }
    }
}

/// Totals for one migration run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// Migration that ran.
    pub migration: MigrationKind,
    /// Whether files were left untouched on disk.
    pub dry_run: bool,
    /// Files attempted.
    pub attempted: usize,
    /// Files whose content changed.
    pub modified: usize,
    /// Files left as they were.
    pub unchanged: usize,
    /// Listed files that were missing.
    pub not_found: usize,
    /// Files that failed to read or write.
    pub failed: usize,
    /// One entry per attempted file.
    pub files: Vec<FileReport>,
}

impl RunSummary {
    /// Empty summary for `migration`.
    #[must_use]
    pub fn new(migration: MigrationKind, dry_run: bool) -> Self {
        Self {
            migration,
            dry_run,
            attempted: 0,
            modified: 0,
            unchanged: 0,
            not_found: 0,
            failed: 0,
            files: Vec::new(),
        }
    }

    /// Counts `report` and keeps it.
    pub fn record(&mut self, report: FileReport) {
        self.attempted += 1;
        match report.status {
            FileStatus::Modified => self.modified += 1,
            FileStatus::Unchanged => self.unchanged += 1,
            FileStatus::NotFound => self.not_found += 1,
            FileStatus::Failed(_) => self.failed += 1,
        }
        self.files.push(report);
    }

    /// Reports of modified files.
    pub fn modified_files(&self) -> impl Iterator<Item = &FileReport> {
        self.files
            .iter()
            .filter(|f| f.status == FileStatus::Modified)
    }
}
