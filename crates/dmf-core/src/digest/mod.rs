//! Digest module: The fixed SHA-512 fingerprint used for matching

mod sha512;

pub use sha512::{Digest, DIGEST_LEN};
