//! dmf-cli library
//!
//! This module exposes the internals of the `delete-matching-files` binary
//! for testing purposes.

pub mod cli;
pub mod logging;

// Make commands module available for internal tests only
#[doc(hidden)]
pub mod commands;

pub use cli::Cli;
pub use logging::OutputVolume;
