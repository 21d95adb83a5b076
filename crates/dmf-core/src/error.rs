//! Errors that end a run
//!
//! Every message is written for the person at the terminal: it says what
//! went wrong and how to fix it. Underlying causes are left to the source
//! chain, so print with `{:#}` to see them.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::hex::HexError;

/// Reminder of where the reference hash can come from
pub const HASH_OPTIONS_HELP: &str = "\
By default, the name of the file which contains that hash is `delete-files-matching-hashes.txt`.
You may choose a different file with the `--hash-file-name` option.
You may also provide a hash without using a file by using the `--hash` option.";

/// Errors that can occur while resolving the reference digest or scanning
#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "Whoops! You need to tell this command where a folder currently is, but it seems this is not a folder:\n{}",
        .path.display()
    )]
    NotAFolder { path: PathBuf },

    #[error(
        "Whoops! This command only looks at files in a folder. You told it which folder to look at, but that's empty:\n{}",
        .path.display()
    )]
    EmptyFolder { path: PathBuf },

    #[error(
        "Whoops! This command needs a hash to compare matching files against, but it couldn't find any.\n{}\n\nI recommend you place a file named `{}` in this folder, with the hash you want to match.\n\nAs a reminder, this folder is:\n{}",
        HASH_OPTIONS_HELP,
        crate::resolver::DEFAULT_SIDECAR_FILE_NAME,
        .folder.display()
    )]
    NoDigestFound { folder: PathBuf },

    #[error(
        "Whoops! The hash you gave decodes to {actual} bytes, but a SHA-512 hash is exactly {expected} bytes. Check that you copied the whole hash."
    )]
    MalformedDigest { actual: usize, expected: usize },

    #[error(
        "Whoops! You passed a hash to the `--hash` argument, but what you passed wasn't UTF-8. Try again with UTF-8 encoded hash data!"
    )]
    HashSourceNotUtf8,

    #[error(
        "Whoops! You gave both `--hash` and `--hash-file-name`, so it's not clear which hash to use. Pick one of them.\n{}",
        HASH_OPTIONS_HELP
    )]
    ConflictingDigestSources,

    #[error(
        "Whoops! The hash file name has to be a plain file name inside the folder, but this isn't:\n{name}\n{}",
        HASH_OPTIONS_HELP
    )]
    SidecarOutsideFolder { name: String },

    #[error("Whoops! The hash you gave isn't clean hex text")]
    InvalidHex(#[from] HexError),

    #[error("Whoops! Couldn't read the hash file:\n{}", .path.display())]
    SidecarUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Whoops! Couldn't list the contents of this folder:\n{}", .path.display())]
    Listing {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
