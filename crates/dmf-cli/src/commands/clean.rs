//! Clean command: Trash every file in the folder matching the hash

use anyhow::{Context, Result};
use dmf_core::{run as run_pipeline, RunReport};
use tracing::info;

use crate::cli::Cli;

/// Run the clean command
///
/// # Errors
/// Returns an error if the digest cannot be resolved, the folder is not
/// usable, or the JSON report cannot be written.
pub fn run(cli: &Cli) -> Result<RunReport> {
    let config = cli.run_config();
    let remover = cli.remover();

    let report = run_pipeline(&config, remover.as_ref())?;
    info!("{}", report.summary());

    if cli.json {
        println!("{}", render_json(&report)?);
    }

    Ok(report)
}

/// Pretty JSON rendering of a report
///
/// # Errors
/// Returns an error if serialization fails.
pub fn render_json(report: &RunReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize run report")
}
