//! `calcpad repl`: key scripts from stdin, one line at a time

use std::io::{self, BufRead, IsTerminal, Write};

use calcpad::core::{parse_key_sequence, Calculator};
use console::style;
use tracing::{debug, warn};

use crate::commands::ReplArgs;
use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::styled_display;

const PROMPT: &str = "> ";

/// Lines that end the session
const EXIT_WORDS: [&str; 2] = ["quit", "exit"];

/// Counters for a finished session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplSummary {
    /// Lines that ran on the calculator
    pub evaluated: usize,
    /// Lines rejected as bad key scripts
    pub rejected: usize,
}

/// Runs the REPL over arbitrary streams.
///
/// State carries across lines, so `"5+"` followed by `"3="` prints `8`.
/// A rejected line leaves the calculator untouched.
pub fn run_repl<R, W, E>(
    args: &ReplArgs,
    input: R,
    out: &mut W,
    err: &mut E,
    prompt: bool,
) -> CliResult<ReplSummary>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut calc = Calculator::new();
    let mut summary = ReplSummary::default();

    if prompt {
        write!(out, "{PROMPT}")?;
        out.flush()?;
    }

    for line in input.lines() {
        let line = line?;
        let script = line.trim();

        if EXIT_WORDS.contains(&script) {
            break;
        }
        if !script.is_empty() {
            match parse_key_sequence(script) {
                Ok(keys) => {
                    for key in keys {
                        calc.press(key);
                    }
                    summary.evaluated += 1;
                    writeln!(out, "{}", render_line(&calc, args.show_pending))?;
                }
                Err(e) => {
                    warn!(script, error = %e, "line rejected");
                    summary.rejected += 1;
                    writeln!(err, "{} {e}", style("error:").red().bold())?;
                }
            }
        }

        if prompt {
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }
    }

    debug!(?summary, "repl finished");
    Ok(summary)
}

fn render_line(calc: &Calculator, show_pending: bool) -> String {
    let display = styled_display(calc.display(), calc.is_error());
    let pending = calc.pending_summary();
    if show_pending && !pending.is_empty() {
        format!("{display}  {}", style(format!("[{pending}]")).dim())
    } else {
        display
    }
}

/// Executes the repl command on the process stdio
pub fn execute_repl(config: &CliConfig, args: &ReplArgs) -> CliResult<()> {
    let stdin = io::stdin();
    let prompt = stdin.is_terminal() && !config.verbosity.is_quiet();
    let summary = run_repl(
        args,
        stdin.lock(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
        prompt,
    )?;

    if config.verbosity.is_verbose() {
        eprintln!(
            "{} lines evaluated, {} rejected",
            summary.evaluated, summary.rejected
        );
    }
    Ok(())
}
