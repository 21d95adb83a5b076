//! Dry-run remover

use std::path::Path;

use tracing::info;

use super::{RemoveError, Remover};

/// Logs what would be removed and touches nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunRemover;

impl Remover for DryRunRemover {
    fn remove(&self, path: &Path) -> Result<(), RemoveError> {
        info!("Would trash {}", path.display());
        Ok(())
    }

    fn is_dry_run(&self) -> bool {
        true
    }
}
