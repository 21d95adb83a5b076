//! Tests for reference digest resolution

#![allow(clippy::expect_used)]

use std::fs;

use rstest::rstest;
use tempfile::TempDir;

use crate::digest::Digest;
use crate::error::Error;
use crate::hex::{HexCase, HexMode};
use crate::resolver::{DigestResolver, SourcePolicy, DEFAULT_SIDECAR_FILE_NAME};

// ============================================================================
// Helper functions
// ============================================================================

fn hex_of(content: &[u8]) -> String {
    Digest::of_bytes(content).to_hex(HexCase::Lower)
}

fn folder_with_sidecar(name: &str, text: &str) -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join(name), text).expect("Failed to write sidecar");
    temp_dir
}

// ============================================================================
// Explicit hash
// ============================================================================

#[test]
fn test_explicit_hash_resolves() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let digest = DigestResolver::new()
        .with_explicit(hex_of(b"hello"))
        .resolve(temp_dir.path())
        .expect("Failed to resolve");
    assert_eq!(digest, Digest::of_bytes(b"hello"));
}

#[test]
fn test_explicit_hash_wins_over_existing_sidecar() {
    let temp_dir = folder_with_sidecar(DEFAULT_SIDECAR_FILE_NAME, &hex_of(b"world"));

    let digest = DigestResolver::new()
        .with_explicit(hex_of(b"hello"))
        .resolve(temp_dir.path())
        .expect("Failed to resolve");
    assert_eq!(digest, Digest::of_bytes(b"hello"));
}

#[test]
fn test_explicit_hash_wins_over_sidecar_name_override() {
    let temp_dir = folder_with_sidecar("custom.txt", &hex_of(b"world"));

    let digest = DigestResolver::new()
        .with_explicit(hex_of(b"hello"))
        .with_sidecar_name("custom.txt")
        .resolve(temp_dir.path())
        .expect("Explicit should win by default");
    assert_eq!(digest, Digest::of_bytes(b"hello"));
}

#[test]
fn test_exclusive_policy_rejects_both_sources() {
    let temp_dir = folder_with_sidecar("custom.txt", &hex_of(b"world"));

    let err = DigestResolver::new()
        .with_explicit(hex_of(b"hello"))
        .with_sidecar_name("custom.txt")
        .with_policy(SourcePolicy::Exclusive)
        .resolve(temp_dir.path())
        .expect_err("Both sources should be rejected");
    assert!(matches!(err, Error::ConflictingDigestSources));
}

#[test]
fn test_exclusive_policy_allows_a_single_source() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let digest = DigestResolver::new()
        .with_explicit(hex_of(b"hello"))
        .with_policy(SourcePolicy::Exclusive)
        .resolve(temp_dir.path())
        .expect("One source is fine");
    assert_eq!(digest, Digest::of_bytes(b"hello"));
}

#[test]
fn test_explicit_hash_does_not_need_an_existing_folder() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let digest = DigestResolver::new()
        .with_explicit(hex_of(b"hello"))
        .resolve(&temp_dir.path().join("not-there"))
        .expect("Explicit hash never touches the folder");
    assert_eq!(digest, Digest::of_bytes(b"hello"));
}

#[test]
fn test_explicit_hash_is_trimmed() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let digest = DigestResolver::new()
        .with_explicit(format!("  \n{}\t\n", hex_of(b"hello")))
        .resolve(temp_dir.path())
        .expect("Failed to resolve");
    assert_eq!(digest, Digest::of_bytes(b"hello"));
}

#[test]
fn test_explicit_blank_hash_is_no_digest() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let err = DigestResolver::new()
        .with_explicit("   ")
        .resolve(temp_dir.path())
        .expect_err("Blank hash should fail");
    assert!(matches!(err, Error::NoDigestFound { .. }));
}

#[cfg(unix)]
#[test]
fn test_explicit_hash_not_utf8() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let err = DigestResolver::new()
        .with_explicit(OsString::from_vec(vec![b'a', 0xff, b'b']))
        .resolve(temp_dir.path())
        .expect_err("Invalid UTF-8 should fail");
    assert!(matches!(err, Error::HashSourceNotUtf8));
}

// ============================================================================
// Sidecar file
// ============================================================================

#[test]
fn test_default_sidecar_is_read() {
    let temp_dir = folder_with_sidecar(DEFAULT_SIDECAR_FILE_NAME, &hex_of(b"hello"));
    let digest = DigestResolver::new()
        .resolve(temp_dir.path())
        .expect("Failed to resolve");
    assert_eq!(digest, Digest::of_bytes(b"hello"));
}

#[test]
fn test_sidecar_name_override_is_read() {
    let temp_dir = folder_with_sidecar("target-hash.txt", &hex_of(b"hello"));
    let resolver = DigestResolver::new().with_sidecar_name("target-hash.txt");

    assert_eq!(resolver.sidecar_name(), "target-hash.txt");
    let digest = resolver.resolve(temp_dir.path()).expect("Failed to resolve");
    assert_eq!(digest, Digest::of_bytes(b"hello"));
}

#[test]
fn test_sidecar_override_ignores_default_file() {
    let temp_dir = folder_with_sidecar(DEFAULT_SIDECAR_FILE_NAME, &hex_of(b"hello"));
    let err = DigestResolver::new()
        .with_sidecar_name("other.txt")
        .resolve(temp_dir.path())
        .expect_err("Override file does not exist");
    assert!(matches!(err, Error::NoDigestFound { .. }));
}

#[test]
fn test_sidecar_surrounding_whitespace_is_trimmed() {
    let text = format!("\n\n   {}   \r\n", hex_of(b"hello").to_uppercase());
    let temp_dir = folder_with_sidecar(DEFAULT_SIDECAR_FILE_NAME, &text);

    let digest = DigestResolver::new()
        .resolve(temp_dir.path())
        .expect("Failed to resolve");
    assert_eq!(digest, Digest::of_bytes(b"hello"));
}

#[test]
fn test_missing_sidecar_is_no_digest() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let err = DigestResolver::new()
        .resolve(temp_dir.path())
        .expect_err("Nothing to resolve");
    assert!(matches!(err, Error::NoDigestFound { ref folder } if folder == temp_dir.path()));
}

#[test]
fn test_sidecar_that_is_a_directory_is_no_digest() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::create_dir(temp_dir.path().join(DEFAULT_SIDECAR_FILE_NAME)).expect("Failed to create dir");

    let err = DigestResolver::new()
        .resolve(temp_dir.path())
        .expect_err("A directory is not a hash file");
    assert!(matches!(err, Error::NoDigestFound { .. }));
}

#[test]
fn test_empty_sidecar_is_no_digest() {
    let temp_dir = folder_with_sidecar(DEFAULT_SIDECAR_FILE_NAME, " \n");
    let err = DigestResolver::new()
        .resolve(temp_dir.path())
        .expect_err("Empty hash file");
    assert!(matches!(err, Error::NoDigestFound { .. }));
}

#[test]
fn test_sidecar_lookup_in_a_file_is_not_a_folder() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file = temp_dir.path().join("file.txt");
    fs::write(&file, "x").expect("Failed to write file");

    let err = DigestResolver::new()
        .resolve(&file)
        .expect_err("A file cannot hold a sidecar");
    assert!(matches!(err, Error::NotAFolder { .. }));
}

#[test]
fn test_sidecar_not_utf8_is_unreadable() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join(DEFAULT_SIDECAR_FILE_NAME), [0xff, 0xfe, 0x00])
        .expect("Failed to write sidecar");

    let err = DigestResolver::new()
        .resolve(temp_dir.path())
        .expect_err("Binary sidecar should fail");
    assert!(matches!(err, Error::SidecarUnreadable { .. }));
}

#[test]
fn test_absolute_sidecar_name_is_rejected() {
    let folder = TempDir::new().expect("Failed to create temp dir");
    let elsewhere = folder_with_sidecar("elsewhere.txt", &hex_of(b"hello"));
    let outside = elsewhere.path().join("elsewhere.txt");

    let err = DigestResolver::new()
        .with_sidecar_name(outside.to_str().expect("Temp path is UTF-8"))
        .resolve(folder.path())
        .expect_err("A hash file outside the folder must not be read");
    assert!(matches!(err, Error::SidecarOutsideFolder { .. }));
}

#[rstest]
#[case::parent("../elsewhere.txt")]
#[case::nested("sub/elsewhere.txt")]
#[case::climb_back("sub/../elsewhere.txt")]
#[case::current_dir(".")]
#[case::parent_only("..")]
fn test_sidecar_name_must_be_a_bare_file_name(#[case] name: &str) {
    let parent = TempDir::new().expect("Failed to create temp dir");
    let folder = parent.path().join("folder");
    fs::create_dir_all(folder.join("sub")).expect("Failed to create dir");
    fs::write(parent.path().join("elsewhere.txt"), hex_of(b"hello")).expect("Failed to write file");
    fs::write(folder.join("sub").join("elsewhere.txt"), hex_of(b"hello"))
        .expect("Failed to write file");
    fs::write(folder.join("elsewhere.txt"), hex_of(b"hello")).expect("Failed to write file");

    let err = DigestResolver::new()
        .with_sidecar_name(name)
        .resolve(&folder)
        .expect_err("Only a plain file name is accepted");
    assert!(matches!(err, Error::SidecarOutsideFolder { .. }));
}

#[test]
fn test_sidecar_outside_folder_message_names_the_file() {
    let folder = TempDir::new().expect("Failed to create temp dir");
    let message = DigestResolver::new()
        .with_sidecar_name("../x.txt")
        .resolve(folder.path())
        .expect_err("Relative climb is rejected")
        .to_string();
    assert!(message.contains("../x.txt"));
    assert!(message.contains("--hash-file-name"));
}

#[test]
fn test_no_digest_message_mentions_both_options() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let message = DigestResolver::new()
        .resolve(temp_dir.path())
        .expect_err("Nothing to resolve")
        .to_string();

    assert!(message.contains("--hash"));
    assert!(message.contains("--hash-file-name"));
    assert!(message.contains(DEFAULT_SIDECAR_FILE_NAME));
    assert!(message.contains(&temp_dir.path().display().to_string()));
}

// ============================================================================
// Decoding
// ============================================================================

#[rstest]
#[case::too_short("deadbeef".to_string(), 4)]
#[case::half_digest("ab".repeat(32), 32)]
#[case::one_byte_too_many("ab".repeat(65), 65)]
fn test_wrong_length_is_malformed(#[case] text: String, #[case] actual: usize) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let err = DigestResolver::new()
        .with_explicit(text)
        .resolve(temp_dir.path())
        .expect_err("Wrong length should fail");
    assert!(matches!(err, Error::MalformedDigest { actual: a, expected: 64 } if a == actual));
}

#[test]
fn test_lenient_mode_tolerates_separators() {
    let hex = hex_of(b"hello");
    let spaced: String = hex
        .as_bytes()
        .chunks(8)
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect::<Vec<_>>()
        .join(" ");

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let digest = DigestResolver::new()
        .with_explicit(spaced)
        .resolve(temp_dir.path())
        .expect("Lenient decoding skips spaces");
    assert_eq!(digest, Digest::of_bytes(b"hello"));
}

#[test]
fn test_lenient_mode_drops_trailing_odd_digit() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let digest = DigestResolver::new()
        .with_explicit(format!("{}f", hex_of(b"hello")))
        .resolve(temp_dir.path())
        .expect("Trailing odd digit is dropped");
    assert_eq!(digest, Digest::of_bytes(b"hello"));
}

#[test]
fn test_strict_mode_rejects_separators() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let err = DigestResolver::new()
        .with_explicit(format!("{}-", hex_of(b"hello")))
        .with_hex_mode(HexMode::Strict)
        .resolve(temp_dir.path())
        .expect_err("Strict decoding rejects '-'");
    assert!(matches!(err, Error::InvalidHex(_)));
}

#[test]
fn test_strict_mode_accepts_clean_hex() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let digest = DigestResolver::new()
        .with_explicit(hex_of(b"hello"))
        .with_hex_mode(HexMode::Strict)
        .resolve(temp_dir.path())
        .expect("Clean hex is fine");
    assert_eq!(digest, Digest::of_bytes(b"hello"));
}
