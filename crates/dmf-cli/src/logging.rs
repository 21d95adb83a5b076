//! Logging setup keyed by output volume
//!
//! Warnings and errors always go to stderr. Anything chattier goes to
//! stdout, up to the ceiling the chosen volume allows.

use clap::ValueEnum;
use tracing::{Level, Subscriber};
use tracing_subscriber::filter::{filter_fn, LevelFilter};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// How much this command says
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputVolume {
    /// Only speak up on errors (stderr)
    #[default]
    Unix,
    /// Everything, for debugging
    Debug,
    /// Note each file that gets trashed
    Informative,
}

impl OutputVolume {
    /// Default filter directive for this volume
    #[must_use]
    pub fn directive(self) -> &'static str {
        match self {
            Self::Unix => "warn",
            Self::Debug => "warn,dmf_core=trace,dmf_cli=trace",
            Self::Informative => "warn,dmf_core=info,dmf_cli=info",
        }
    }

    /// Most verbose level written to stdout, if any
    #[must_use]
    pub fn stdout_ceiling(self) -> Option<Level> {
        match self {
            Self::Unix => None,
            Self::Debug => Some(Level::TRACE),
            Self::Informative => Some(Level::INFO),
        }
    }
}

/// Whether an event at `level` belongs on stdout under `ceiling`
#[must_use]
pub fn routes_to_stdout(level: Level, ceiling: Option<Level>) -> bool {
    ceiling.is_some_and(|ceiling| level > Level::WARN && level <= ceiling)
}

/// `RUST_LOG` if set, otherwise the volume's directive
#[must_use]
pub fn env_filter(volume: OutputVolume) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(volume.directive()))
}

/// Build the subscriber for `volume` without installing it
pub fn subscriber(
    volume: OutputVolume,
    filter: EnvFilter,
) -> impl Subscriber + Send + Sync + 'static {
    let ceiling = volume.stdout_ceiling();

    let stdout = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(false)
        .with_filter(filter_fn(move |meta| routes_to_stdout(*meta.level(), ceiling)));

    let stderr = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(LevelFilter::WARN);

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout)
        .with(stderr)
}

/// Install the global subscriber
pub fn setup_logging(volume: OutputVolume) {
    subscriber(volume, env_filter(volume)).init();
}
