//! Hex codec

use thiserror::Error;

/// Errors reported by [`decode_strict`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexError {
    #[error("'{character}' at position {index} is not a hex digit")]
    InvalidCharacter { character: char, index: usize },

    #[error("hex text has an odd number of digits ({nibbles})")]
    OddLength { nibbles: usize },
}

/// How hex text is turned into bytes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HexMode {
    /// Skip non-hex characters and drop a trailing unpaired digit
    #[default]
    Lenient,
    /// Reject any non-hex character or odd digit count
    Strict,
}

/// Letter case used by [`encode`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HexCase {
    #[default]
    Lower,
    Upper,
}

const LOWER_DIGITS: &[u8; 16] = b"0123456789abcdef";
const UPPER_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

fn nibble(character: char) -> Option<u8> {
    match character {
        '0'..='9' => Some(character as u8 - b'0'),
        'a'..='f' => Some(character as u8 - b'a' + 10),
        'A'..='F' => Some(character as u8 - b'A' + 10),
        _ => None,
    }
}

/// Pack nibbles pairwise, high nibble first. A trailing odd nibble is dropped.
fn pack(nibbles: &[u8]) -> Vec<u8> {
    nibbles
        .chunks_exact(2)
        .map(|pair| (pair[0] << 4) | pair[1])
        .collect()
}

/// Decode hex text leniently.
///
/// Characters outside `0-9`, `a-f` and `A-F` are skipped entirely, and if
/// the remaining digit count is odd the final digit is ignored. This never
/// fails; malformed input just yields fewer bytes.
#[must_use]
pub fn decode(text: &str) -> Vec<u8> {
    let nibbles: Vec<u8> = text.chars().filter_map(nibble).collect();
    pack(&nibbles)
}

/// Decode hex text, rejecting anything [`decode`] would silently skip.
///
/// # Errors
/// Returns [`HexError::InvalidCharacter`] for the first non-hex character
/// and [`HexError::OddLength`] when the digit count is odd.
pub fn decode_strict(text: &str) -> Result<Vec<u8>, HexError> {
    let nibbles = text
        .chars()
        .enumerate()
        .map(|(index, character)| {
            nibble(character).ok_or(HexError::InvalidCharacter { character, index })
        })
        .collect::<Result<Vec<u8>, _>>()?;

    if nibbles.len() % 2 != 0 {
        return Err(HexError::OddLength {
            nibbles: nibbles.len(),
        });
    }

    Ok(pack(&nibbles))
}

/// Decode using the given mode
///
/// # Errors
/// Only [`HexMode::Strict`] can fail; see [`decode_strict`].
pub fn decode_with(text: &str, mode: HexMode) -> Result<Vec<u8>, HexError> {
    match mode {
        HexMode::Lenient => Ok(decode(text)),
        HexMode::Strict => decode_strict(text),
    }
}

/// Encode bytes as two zero-padded hex digits each
#[must_use]
pub fn encode(bytes: &[u8], case: HexCase) -> String {
    let digits = match case {
        HexCase::Lower => LOWER_DIGITS,
        HexCase::Upper => UPPER_DIGITS,
    };

    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        out.push(char::from(digits[usize::from(byte >> 4)]));
        out.push(char::from(digits[usize::from(byte & 0x0f)]));
    }
    out
}
