//! Tracing subscriber setup
//!
//! `RUST_LOG` wins when set; otherwise the level comes from `-q`/`-v`.
//! Events go to stderr, or to `--log-file` when given. The TUI owns the
//! terminal, so it only logs when a file is configured.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// Where log events end up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error
    Stderr,
    /// The configured log file
    File,
    /// Logging disabled
    Disabled,
}

/// Picks the log target for a run
#[must_use]
pub fn log_target(config: &CliConfig, interactive_tui: bool) -> LogTarget {
    match (&config.log_file, interactive_tui) {
        (Some(_), _) => LogTarget::File,
        (None, true) => LogTarget::Disabled,
        (None, false) => LogTarget::Stderr,
    }
}

/// Builds the event filter for `config`
#[must_use]
pub fn env_filter(config: &CliConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.verbosity.filter_directive()))
}

/// Installs the global subscriber. Returns the target that was chosen.
pub fn init(config: &CliConfig, interactive_tui: bool) -> CliResult<LogTarget> {
    let target = log_target(config, interactive_tui);
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_target(false);

    let installed = match (target, &config.log_file) {
        (LogTarget::Disabled, _) => return Ok(target),
        (LogTarget::File, Some(path)) => {
            let writer = Mutex::new(open_log_file(path)?);
            let builder = builder.with_ansi(false).with_writer(writer);
            if config.log_json {
                builder.json().try_init()
            } else {
                builder.try_init()
            }
        }
        _ => {
            let builder = builder.with_writer(std::io::stderr);
            if config.log_json {
                builder.json().try_init()
            } else {
                builder.try_init()
            }
        }
    };

    installed.map_err(|e| CliError::config(format!("cannot install logger: {e}")))?;
    Ok(target)
}

fn open_log_file(path: &Path) -> CliResult<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| CliError::config(format!("cannot open log file {}: {e}", path.display())))
}
