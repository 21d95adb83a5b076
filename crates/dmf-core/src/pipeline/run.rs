//! Run driver

use std::fmt;

use chrono::Utc;
use tracing::{debug, error};

use super::{FailedRemoval, RunConfig, RunReport};
use crate::error::Error;
use crate::matcher::MatchEngine;
use crate::remover::Remover;
use crate::scanner::DirectoryScanner;

/// Where a run currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Idle,
    ResolvingDigest,
    Scanning,
    Matching,
    Removing,
    Done,
}

impl fmt::Display for RunPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::ResolvingDigest => "resolving digest",
            Self::Scanning => "scanning",
            Self::Matching => "matching",
            Self::Removing => "removing",
            Self::Done => "done",
        };
        f.write_str(name)
    }
}

fn enter(phase: RunPhase) {
    debug!(%phase, "Entering phase");
}

/// Run the whole pipeline over `config.folder`.
///
/// # Errors
/// Returns the first terminal error: digest resolution failures and
/// folder validation failures ([`Error::NotAFolder`], [`Error::EmptyFolder`]).
/// Per-file read and removal failures are reported in the [`RunReport`].
pub fn run(config: &RunConfig, remover: &dyn Remover) -> Result<RunReport, Error> {
    enter(RunPhase::Idle);
    debug!("Searching {}", config.folder.display());

    enter(RunPhase::ResolvingDigest);
    let digest = config.resolver().resolve(&config.folder)?;

    enter(RunPhase::Scanning);
    let candidates = DirectoryScanner::new(&config.folder).candidates()?;
    debug!("{} candidate files", candidates.len());

    enter(RunPhase::Matching);
    let outcome = MatchEngine::new(digest).find_matches(&candidates);

    enter(RunPhase::Removing);
    let mut removed = Vec::with_capacity(outcome.matched.len());
    let mut failed_removals = Vec::new();
    for path in &outcome.matched {
        match remover.remove(path) {
            Ok(()) => removed.push(path.clone()),
            Err(e) => {
                error!("{e}");
                failed_removals.push(FailedRemoval {
                    path: path.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    enter(RunPhase::Done);
    Ok(RunReport {
        folder: config.folder.clone(),
        digest: digest.to_string(),
        examined: outcome.examined,
        matched: outcome.matched,
        removed,
        skipped: outcome.skipped,
        failed_removals,
        dry_run: remover.is_dry_run(),
        finished_at: Utc::now(),
    })
}
