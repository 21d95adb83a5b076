//! SHA-512 digest value and streaming computation

use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use sha2::{Digest as _, Sha512};

use crate::error::Error;
use crate::hex::{encode, HexCase};

/// Output size of SHA-512 in bytes
pub const DIGEST_LEN: usize = 64;

const READ_BUFFER_SIZE: usize = 64 * 1024;

/// A complete SHA-512 digest
///
/// Always exactly [`DIGEST_LEN`] bytes. Equality is plain byte equality.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// Hash an in-memory byte slice
    #[must_use]
    pub fn of_bytes(data: &[u8]) -> Self {
        Self::from_hasher(Sha512::new_with_prefix(data))
    }

    /// Hash everything a reader yields, one buffer at a time
    ///
    /// # Errors
    /// Returns any I/O error raised while reading.
    pub fn of_reader(mut reader: impl Read) -> io::Result<Self> {
        let mut hasher = Sha512::new();
        let mut buffer = vec![0u8; READ_BUFFER_SIZE];
        loop {
            let read = match reader.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            hasher.update(&buffer[..read]);
        }
        Ok(Self::from_hasher(hasher))
    }

    /// Hash the contents of a file
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or read.
    pub fn of_file(path: &Path) -> io::Result<Self> {
        Self::of_reader(File::open(path)?)
    }

    fn from_hasher(hasher: Sha512) -> Self {
        let mut bytes = [0u8; DIGEST_LEN];
        bytes.copy_from_slice(&hasher.finalize());
        Self(bytes)
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Hex rendering in the requested case
    #[must_use]
    pub fn to_hex(&self, case: HexCase) -> String {
        encode(&self.0, case)
    }
}

impl TryFrom<Vec<u8>> for Digest {
    type Error = Error;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        let actual = bytes.len();
        <[u8; DIGEST_LEN]>::try_from(bytes)
            .map(Self)
            .map_err(|_| Error::MalformedDigest {
                actual,
                expected: DIGEST_LEN,
            })
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex(HexCase::Lower))
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({self})")
    }
}
