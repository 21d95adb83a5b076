//! Scanner module: Candidate discovery in a single folder
//!
//! Lists the immediate children of the target folder (never recursing)
//! and keeps only entries that still exist and are not directories.

mod entry_kind;
mod listing;

pub use entry_kind::EntryKind;
pub use listing::{CandidateFile, DirectoryScanner};
