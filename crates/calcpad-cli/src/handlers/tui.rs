//! `calcpad tui`: the interactive keypad

use std::io::{self, Write};

use calcpad::tui;
use tracing::info;

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::styled_display;

/// Executes the tui command.
///
/// The final display is echoed to stdout after the terminal is restored.
pub fn execute_tui(config: &CliConfig) -> CliResult<()> {
    info!("tui started");
    let app = tui::run_in_terminal()?;
    let calc = app.calculator();
    info!(display = calc.display(), "tui finished");

    if !config.verbosity.is_quiet() {
        writeln!(
            io::stdout(),
            "{}",
            styled_display(calc.display(), calc.is_error())
        )?;
    }
    Ok(())
}
