//! OS trash remover

use std::path::Path;

use tracing::info;

use super::{RemoveError, Remover};

/// Moves files to the platform trash, so they can be restored
#[derive(Debug, Clone, Copy, Default)]
pub struct TrashRemover;

impl Remover for TrashRemover {
    fn remove(&self, path: &Path) -> Result<(), RemoveError> {
        info!("Trashing {}", path.display());
        trash::delete(path).map_err(|source| RemoveError::Trash {
            path: path.to_path_buf(),
            source,
        })
    }
}
