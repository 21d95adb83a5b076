//! Hex module: Text <-> byte conversion for digests
//!
//! The default decoder is lenient: it skips anything that is not a hex
//! digit and silently drops a trailing unpaired nibble. That behavior is
//! kept for compatibility with existing sidecar files. Callers that want
//! malformed input reported use [`decode_strict`].

mod codec;

pub use codec::{decode, decode_strict, decode_with, encode, HexCase, HexError, HexMode};
