//! Matcher module: Hash candidates and compare against the reference
//!
//! Comparison is whole-digest byte equality. Hex text is never compared,
//! so a digest whose rendering merely contains the reference's rendering
//! is not a match.

mod engine;

pub use engine::{MatchEngine, MatchOutcome, SkippedFile};
