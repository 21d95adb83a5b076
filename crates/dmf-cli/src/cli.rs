//! Command-line surface

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use dmf_core::{
    DryRunRemover, HexMode, RelocatingRemover, Remover, RunConfig, SourcePolicy, TrashRemover,
};

use crate::logging::OutputVolume;

const LONG_ABOUT: &str = "\
This will use a file hash you choose in order to delete any files in a folder you choose which have that same hash.

***This version of this command ONLY uses UTF-8 encoded SHA-512 hashes!***

By default, the name of the file which contains that hash is `delete-files-matching-hashes.txt`.
You may choose a different file with the `--hash-file-name` option.
You may also provide a hash without using a file by using the `--hash` option.
If you provide both, `--hash` is used (or, with `--strict`, the command refuses to run).";

#[derive(Parser, Debug)]
#[command(name = "delete-matching-files")]
#[command(version, about = "Deletes all files in a folder that match a given hash", long_about = LONG_ABOUT)]
pub struct Cli {
    /// A hash which will be used instead of the hash file. If excluded, the hash file will be used
    #[arg(long, value_parser = clap::value_parser!(OsString))]
    pub hash: Option<OsString>,

    /// Overrides the default hash file name
    #[arg(long)]
    pub hash_file_name: Option<String>,

    /// The volume (amount) of output you want from this command
    #[arg(long, value_enum, default_value_t = OutputVolume::Unix)]
    pub output_volume: OutputVolume,

    /// Reject malformed hex and refuse `--hash` together with `--hash-file-name`
    #[arg(long)]
    pub strict: bool,

    /// Report matching files without removing them
    #[arg(long, conflicts_with = "trash_dir")]
    pub dry_run: bool,

    /// Move matching files into this folder instead of the system trash
    #[arg(long, value_name = "DIR")]
    pub trash_dir: Option<PathBuf>,

    /// Print the run report as JSON
    #[arg(long)]
    pub json: bool,

    /// The path to the folder which this will clean. This is required to ensure you understand that files in this folder will be deleted.
    pub folder_path: PathBuf,
}

impl Cli {
    /// Build the run configuration from the parsed arguments
    #[must_use]
    pub fn run_config(&self) -> RunConfig {
        let mut config = RunConfig::new(&self.folder_path);

        if let Some(hash) = &self.hash {
            config = config.with_explicit_hash(hash.clone());
        }
        if let Some(name) = &self.hash_file_name {
            config = config.with_sidecar_name(name.clone());
        }
        if self.strict {
            config = config
                .with_hex_mode(HexMode::Strict)
                .with_source_policy(SourcePolicy::Exclusive);
        }
        config
    }

    /// Pick the remover the arguments ask for
    #[must_use]
    pub fn remover(&self) -> Box<dyn Remover> {
        if self.dry_run {
            Box::new(DryRunRemover)
        } else if let Some(dir) = &self.trash_dir {
            Box::new(RelocatingRemover::new(dir))
        } else {
            Box::new(TrashRemover)
        }
    }
}
