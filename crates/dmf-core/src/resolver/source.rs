//! Digest source settings

/// Sidecar file looked up when no override is given
pub const DEFAULT_SIDECAR_FILE_NAME: &str = "delete-files-matching-hashes.txt";

/// What to do when both an explicit hash and a sidecar name are given
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SourcePolicy {
    /// Use the explicit hash and ignore the sidecar
    #[default]
    ExplicitWins,
    /// Refuse to pick one
    Exclusive,
}
