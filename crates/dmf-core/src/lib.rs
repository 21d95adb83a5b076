//! dmf-core: Core library for trashing files that match a reference hash
//!
//! Scans the immediate children of one folder, hashes every regular file
//! with SHA-512, and hands each file whose digest equals a single reference
//! digest to a [`Remover`].
//!
//! The reference digest comes from one of two sources:
//!
//! - **Explicit** - hex text passed by the caller
//! - **Sidecar** - a text file inside the target folder, by default
//!   [`DEFAULT_SIDECAR_FILE_NAME`]

pub mod digest;
pub mod error;
pub mod hex;
mod lossy_path;
pub mod matcher;
pub mod pipeline;
pub mod remover;
pub mod resolver;
pub mod scanner;

// Re-export commonly used types
pub use digest::{Digest, DIGEST_LEN};
pub use error::Error;
pub use hex::{HexCase, HexError, HexMode};
pub use matcher::{MatchEngine, MatchOutcome, SkippedFile};
pub use pipeline::{run, RunConfig, RunPhase, RunReport};
pub use remover::{DryRunRemover, RelocatingRemover, RemoveError, Remover, TrashRemover};
pub use resolver::{DigestResolver, SourcePolicy, DEFAULT_SIDECAR_FILE_NAME};
pub use scanner::{CandidateFile, DirectoryScanner, EntryKind};
