//! Command handlers
//!
//! Each handler takes its parsed arguments plus the shared [`CliConfig`] and
//! writes to an injected writer, so it can be tested without a terminal.
//!
//! [`CliConfig`]: crate::CliConfig

pub mod eval;
pub mod repl;
pub mod tui;

pub use eval::{evaluate_script, execute_eval};
pub use repl::{execute_repl, run_repl};
pub use tui::execute_tui;
