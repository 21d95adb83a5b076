//! Reference digest resolution

use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Component, Path};

use tracing::{debug, trace, warn};

use super::{SourcePolicy, DEFAULT_SIDECAR_FILE_NAME};
use crate::digest::Digest;
use crate::error::Error;
use crate::hex::{decode_with, HexMode};
use crate::scanner::EntryKind;

/// Resolves the single reference digest for a run
#[derive(Debug, Clone, Default)]
pub struct DigestResolver {
    explicit: Option<OsString>,
    sidecar_name: Option<String>,
    hex_mode: HexMode,
    policy: SourcePolicy,
}

impl DigestResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use this hex hash instead of any sidecar file
    #[must_use]
    pub fn with_explicit(mut self, hash: impl Into<OsString>) -> Self {
        self.explicit = Some(hash.into());
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
    pub fn with_policy(mut self, policy: SourcePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Name of the sidecar file this resolver would read
    #[must_use]
    pub fn sidecar_name(&self) -> &str {
        self.sidecar_name
            .as_deref()
            .unwrap_or(DEFAULT_SIDECAR_FILE_NAME)
    }

    /// Produce the reference digest for `folder`.
    ///
    /// Surrounding whitespace is trimmed before the text is decoded.
    ///
    /// # Errors
    /// - [`Error::NoDigestFound`] when no source yields any text
    /// - [`Error::NotAFolder`] when the sidecar would be read from a
    ///   path that is not a folder
    /// - [`Error::HashSourceNotUtf8`] when the explicit hash is not UTF-8
    /// - [`Error::ConflictingDigestSources`] when both sources are given
    ///   under [`SourcePolicy::Exclusive`]
    /// - [`Error::SidecarOutsideFolder`] when the sidecar name is not a
    ///   bare file name
    /// - [`Error::InvalidHex`] when strict decoding rejects the text
    /// - [`Error::MalformedDigest`] when the decoded length is wrong
    pub fn resolve(&self, folder: &Path) -> Result<Digest, Error> {
        let text = self.encoded(folder)?;
        let encoded = text.trim();
        if encoded.is_empty() {
            debug!("No hash found");
            return Err(Error::NoDigestFound {
                folder: folder.to_path_buf(),
            });
        }

        trace!("Encoded hash: {}", flag_non_alphanumerics(encoded));

        let digest = Digest::try_from(decode_with(encoded, self.hex_mode)?)?;
        debug!("Looking for hashes matching: {digest}");
        Ok(digest)
    }

    fn encoded(&self, folder: &Path) -> Result<String, Error> {
        if let Some(explicit) = &self.explicit {
            if self.sidecar_name.is_some() {
                if self.policy == SourcePolicy::Exclusive {
                    return Err(Error::ConflictingDigestSources);
                }
                warn!("Both a hash and a hash file name were given; using the hash");
            }
            debug!("Hash was given explicitly");
            return explicit_text(explicit).map(str::to_owned);
        }

        self.read_sidecar(folder)
    }

    fn read_sidecar(&self, folder: &Path) -> Result<String, Error> {
        if !EntryKind::of(folder).is_directory() {
            return Err(Error::NotAFolder {
                path: folder.to_path_buf(),
            });
        }

        let name = self.sidecar_name();
        debug!("Hash file name: {name}");
        if !is_plain_file_name(name) {
            return Err(Error::SidecarOutsideFolder {
                name: name.to_owned(),
            });
        }
        let path = folder.join(name);

        if EntryKind::of(&path) != EntryKind::File {
            return Err(Error::NoDigestFound {
                folder: folder.to_path_buf(),
            });
        }

        fs::read_to_string(&path).map_err(|source| Error::SidecarUnreadable { path, source })
    }
}

fn explicit_text(raw: &OsStr) -> Result<&str, Error> {
    raw.to_str().ok_or(Error::HashSourceNotUtf8)
}

/// A single normal path component, so the sidecar stays inside the folder
fn is_plain_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Make stray characters stand out in log output
fn flag_non_alphanumerics(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_alphanumeric() { c } else { '🚫' })
        .collect()
}
