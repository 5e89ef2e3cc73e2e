//! Tracing subscriber setup for the CLI.
//!
//! Logs always go to stderr so rendered output on stdout stays parseable.
//! `RUST_LOG` overrides the configured level.

use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable selecting the log line format.
pub(crate) const LOG_FORMAT_ENV: &str = "RACK_LOG_FORMAT";

/// Filter used without `--debug`.
const DEFAULT_DIRECTIVES: &str = "warn";

/// Filter used with `--debug`; HTTP stack crates stay at `warn`.
const DEBUG_DIRECTIVES: &str = "rack_cli=debug,rack_client=debug,warn";

/// Filter directives for the `--debug` flag.
pub(crate) const fn level_directives(debug: bool) -> &'static str {
    if debug {
        DEBUG_DIRECTIVES
    } else {
        DEFAULT_DIRECTIVES
    }
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub(crate) struct LoggingConfig<'a> {
    /// Filter directives (e.g., `warn`, `rack_client=debug,warn`).
    pub(crate) level: &'a str,
    /// Output format selection for the tracing subscriber.
    pub(crate) format: LogFormat,
}

/// Available output formats for the logger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum LogFormat {
    /// Emit logs as structured JSON objects.
    Json,
    /// Emit human-readable log lines.
    #[default]
    Pretty,
}

impl LogFormat {
    /// Read the format from `RACK_LOG_FORMAT`, defaulting to pretty output.
    pub(crate) fn from_env() -> Self {
        Self::parse(std::env::var(LOG_FORMAT_ENV).ok().as_deref())
    }

    fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(value) if value.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Pretty,
        }
    }
}

/// Install the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed.
pub(crate) fn init_logging(config: &LoggingConfig<'_>) -> Result<()> {
    match config.format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(build_env_filter(config.level))
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .try_init()
            .map_err(|err| anyhow!("failed to install tracing subscriber: {err}")),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(build_env_filter(config.level))
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .try_init()
            .map_err(|err| anyhow!("failed to install tracing subscriber: {err}")),
    }
}

fn build_env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}
