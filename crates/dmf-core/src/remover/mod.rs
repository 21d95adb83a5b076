//! Remover module: What happens to a matching file
//!
//! - [`TrashRemover`] - move to the OS trash (the default)
//! - [`RelocatingRemover`] - move into a chosen folder
//! - [`DryRunRemover`] - log only

mod dry_run;
mod relocate;
mod trash_bin;

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub use dry_run::DryRunRemover;
pub use relocate::RelocatingRemover;
pub use trash_bin::TrashRemover;

/// Errors that can occur while removing a matching file
#[derive(Debug, Error)]
pub enum RemoveError {
    #[error("could not move {} to the trash: {source}", .path.display())]
    Trash {
        path: PathBuf,
        #[source]
        source: trash::Error,
    },

    #[error("could not move {} to {}: {source}", .path.display(), .destination.display())]
    Io {
        path: PathBuf,
        destination: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no free name for {} in {}", .path.display(), .destination.display())]
    Collision { path: PathBuf, destination: PathBuf },
}

/// Performs the destructive action on one matching file
pub trait Remover {
    /// Remove `path`
    ///
    /// # Errors
    /// Returns an error if the file could not be removed.
    fn remove(&self, path: &Path) -> Result<(), RemoveError>;

    /// Whether this remover leaves files untouched
    fn is_dry_run(&self) -> bool {
        false
    }
}
