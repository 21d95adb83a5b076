//! Directory listing: One snapshot of a folder's immediate children

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};
use walkdir::WalkDir;

use super::EntryKind;
use crate::error::Error;

/// A folder entry as seen when it was inspected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    pub path: PathBuf,
    pub exists: bool,
    pub is_directory: bool,
}

impl CandidateFile {
    /// Inspect `path` and record what is there now
    #[must_use]
    pub fn inspect(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let kind = EntryKind::of(&path);
        Self {
            path,
            exists: kind.exists(),
            is_directory: kind.is_directory(),
        }
    }

    /// Whether this entry should be hashed
    #[must_use]
    pub fn is_candidate(&self) -> bool {
        self.exists && !self.is_directory
    }

    /// File name for log lines
    #[must_use]
    pub fn display_name(&self) -> String {
        self.path.file_name().map_or_else(
            || self.path.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
    }
}

/// Lists candidate files in one folder
#[derive(Debug)]
pub struct DirectoryScanner {
    root: PathBuf,
}

impl DirectoryScanner {
    /// Create a new scanner for the given folder
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the folder being scanned
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Take one listing of the folder's immediate children, in the order the
    /// OS returns them.
    ///
    /// # Errors
    /// Returns [`Error::NotAFolder`] if the root is missing or not a
    /// directory, [`Error::EmptyFolder`] if it has no entries at all, and
    /// [`Error::Listing`] if the directory cannot be read.
    pub fn list(&self) -> Result<Vec<CandidateFile>, Error> {
        if !EntryKind::of(&self.root).is_directory() {
            return Err(Error::NotAFolder {
                path: self.root.clone(),
            });
        }
        debug!("Folder exists and is a directory");

        let entries = WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .into_iter()
            .map(|entry| {
                entry
                    .map(|e| CandidateFile::inspect(e.into_path()))
                    .map_err(|e| Error::Listing {
                        path: self.root.clone(),
                        source: io::Error::from(e),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Child entries: {}", entries.len());
        for entry in &entries {
            trace!("  {}", entry.path.display());
        }

        if entries.is_empty() {
            return Err(Error::EmptyFolder {
                path: self.root.clone(),
            });
        }

        Ok(entries)
    }

    /// List the folder and keep only entries worth hashing.
    ///
    /// Each entry is inspected again at filter time, so anything removed or
    /// replaced by a directory since the listing is dropped.
    ///
    /// # Errors
    /// Same as [`DirectoryScanner::list`].
    pub fn candidates(&self) -> Result<Vec<CandidateFile>, Error> {
        Ok(self
            .list()?
            .into_iter()
            .map(|entry| CandidateFile::inspect(entry.path))
            .filter(|entry| {
                debug!(
                    "Filtering {}: exists={}, directory={}",
                    entry.display_name(),
                    entry.exists,
                    entry.is_directory
                );
                entry.is_candidate()
            })
            .collect())
    }
}
