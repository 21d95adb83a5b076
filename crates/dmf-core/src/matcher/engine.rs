//! Match engine

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, trace};

use crate::digest::Digest;
use crate::scanner::CandidateFile;

/// A candidate that could not be hashed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    #[serde(serialize_with = "crate::lossy_path::serialize")]
    pub path: PathBuf,
    pub reason: String,
}

/// Result of matching one folder listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchOutcome {
    /// Matching paths, in listing order
    pub matched: Vec<PathBuf>,
    pub skipped: Vec<SkippedFile>,
    /// Number of candidates that were hashed successfully
    pub examined: usize,
}

/// Compares candidate files against one reference digest
#[derive(Debug, Clone)]
pub struct MatchEngine {
    reference: Digest,
}

impl MatchEngine {
    #[must_use]
    pub fn new(reference: Digest) -> Self {
        Self { reference }
    }

    #[must_use]
    pub fn reference(&self) -> &Digest {
        &self.reference
    }

    /// Whether an already computed digest matches
    #[must_use]
    pub fn is_match(&self, digest: &Digest) -> bool {
        *digest == self.reference
    }

    /// Hash one file and compare it.
    ///
    /// # Errors
    /// Returns the I/O error if the file cannot be read.
    pub fn check_file(&self, path: &Path) -> std::io::Result<bool> {
        let digest = Digest::of_file(path)?;
        trace!("\t The hash is {digest}");
        Ok(self.is_match(&digest))
    }

    /// Hash every candidate in order and collect the matches.
    ///
    /// Unreadable files are recorded in [`MatchOutcome::skipped`] and the
    /// scan carries on.
    #[must_use]
    pub fn find_matches(&self, candidates: &[CandidateFile]) -> MatchOutcome {
        let mut outcome = MatchOutcome::default();

        for candidate in candidates {
            let name = candidate.display_name();
            match self.check_file(&candidate.path) {
                Ok(true) => {
                    debug!("Hashes match for {name}");
                    outcome.examined += 1;
                    outcome.matched.push(candidate.path.clone());
                }
                Ok(false) => {
                    trace!("Hashes don't match for {name}");
                    outcome.examined += 1;
                }
                Err(e) => {
                    debug!("\t Could not read contents of file at {name}: {e}");
                    outcome.skipped.push(SkippedFile {
                        path: candidate.path.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        outcome
    }
}
