//! calcpad CLI library
//!
//! Argument parsing, configuration, logging setup and the handlers behind the
//! `calcpad` binary.

#![warn(missing_docs)]
#![allow(clippy::missing_errors_doc)] // Error types are self-documenting

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;
mod output;

pub use commands::{Cli, ColorArg, Commands, EvalArgs, OutputFormat, ReplArgs};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{styled_display, EvalReport, TraceStep};
