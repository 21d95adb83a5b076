//! delete-matching-files: Trash files in a folder that match a hash

use std::process::ExitCode;

use clap::Parser;
use dmf_cli::commands::clean;
use dmf_cli::logging::setup_logging;
use dmf_cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.output_volume);

    match clean::run(&cli) {
        Ok(report) if report.is_success() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
