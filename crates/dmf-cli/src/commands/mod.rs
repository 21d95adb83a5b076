//! CLI commands

pub mod clean;
