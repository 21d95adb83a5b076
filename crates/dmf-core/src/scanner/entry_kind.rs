//! Filesystem entry kinds

use std::fs;
use std::path::Path;

/// What a path points at right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Nothing there (including dangling symlinks)
    Missing,
    Directory,
    /// Anything that exists and is not a directory
    File,
}

impl EntryKind {
    /// Inspect a path, following symlinks
    #[must_use]
    pub fn of(path: &Path) -> Self {
        match fs::metadata(path) {
            Ok(meta) if meta.is_dir() => Self::Directory,
            Ok(_) => Self::File,
            Err(_) => Self::Missing,
        }
    }

    #[must_use]
    pub fn exists(self) -> bool {
        self != Self::Missing
    }

    #[must_use]
    pub fn is_directory(self) -> bool {
        self == Self::Directory
    }
}
