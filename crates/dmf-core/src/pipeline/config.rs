//! Run configuration

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::hex::HexMode;
use crate::resolver::{DigestResolver, SourcePolicy};

/// Everything a run needs besides the remover
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub folder: PathBuf,
    pub explicit_hash: Option<OsString>,
    pub sidecar_name: Option<String>,
    pub hex_mode: HexMode,
    pub source_policy: SourcePolicy,
}

impl RunConfig {
    /// Create a configuration for the given folder
    #[must_use]
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
            explicit_hash: None,
            sidecar_name: None,
            hex_mode: HexMode::default(),
            source_policy: SourcePolicy::default(),
        }
    }

    /// Set the explicit hash
    #[must_use]
    pub fn with_explicit_hash(mut self, hash: impl Into<OsString>) -> Self {
        self.explicit_hash = Some(hash.into());
        self
    }

    /// Override the sidecar file name
    #[must_use]
    pub fn with_sidecar_name(mut self, name: impl Into<String>) -> Self {
        self.sidecar_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_hex_mode(mut self, mode: HexMode) -> Self {
        self.hex_mode = mode;
        self
    }

    #[must_use]
    pub fn with_source_policy(mut self, policy: SourcePolicy) -> Self {
        self.source_policy = policy;
        self
    }

    #[must_use]
    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// Build the digest resolver for this configuration
    #[must_use]
    pub fn resolver(&self) -> DigestResolver {
        let mut resolver = DigestResolver::new()
            .with_hex_mode(self.hex_mode)
            .with_policy(self.source_policy);

        if let Some(hash) = &self.explicit_hash {
            resolver = resolver.with_explicit(hash.clone());
        }
        if let Some(name) = &self.sidecar_name {
            resolver = resolver.with_sidecar_name(name.clone());
        }
        resolver
    }
}
