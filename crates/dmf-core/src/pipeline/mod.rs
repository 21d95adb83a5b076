//! Pipeline module: One complete run over a folder
//!
//! Phases, in order:
//! 1. Resolve the reference digest
//! 2. List candidate files
//! 3. Hash and match every candidate
//! 4. Hand matches to the remover
//!
//! A failure in phase 1 or 2 ends the run. Unreadable files in phase 3 and
//! failed removals in phase 4 are recorded in the [`RunReport`] instead.

mod config;
mod report;
mod run;

pub use config::RunConfig;
pub use report::{FailedRemoval, RunReport};
pub use run::{run, RunPhase};
