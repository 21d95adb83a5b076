//! Run report

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::matcher::SkippedFile;

/// A match the remover could not remove
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedRemoval {
    #[serde(serialize_with = "crate::lossy_path::serialize")]
    pub path: PathBuf,
    pub reason: String,
}

/// What a completed run did
///
/// Paths serialize lossily, so the report renders for any file name.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    #[serde(serialize_with = "crate::lossy_path::serialize")]
    pub folder: PathBuf,
    /// Reference digest, lowercase hex
    pub digest: String,
    pub examined: usize,
    #[serde(serialize_with = "crate::lossy_path::serialize_all")]
    pub matched: Vec<PathBuf>,
    #[serde(serialize_with = "crate::lossy_path::serialize_all")]
    pub removed: Vec<PathBuf>,
    pub skipped: Vec<SkippedFile>,
    pub failed_removals: Vec<FailedRemoval>,
    pub dry_run: bool,
    pub finished_at: DateTime<Utc>,
}

impl RunReport {
    /// True when every match was removed (or would have been, on a dry run)
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed_removals.is_empty()
    }

    /// One-line human summary
    #[must_use]
    pub fn summary(&self) -> String {
        let verb = if self.dry_run { "would trash" } else { "trashed" };
        let mut line = format!(
            "Examined {} files, {} matched, {} {}",
            self.examined,
            self.matched.len(),
            verb,
            self.removed.len()
        );
        if !self.skipped.is_empty() {
            line.push_str(&format!(", {} unreadable", self.skipped.len()));
        }
        if !self.failed_removals.is_empty() {
            line.push_str(&format!(", {} failed", self.failed_removals.len()));
        }
        line
    }
}
