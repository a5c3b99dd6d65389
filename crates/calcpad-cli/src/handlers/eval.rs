//! `calcpad eval`: run one key script headlessly

use std::io::Write;

use calcpad::core::{parse_key_sequence, Calculator};
use tracing::info;

use crate::commands::{EvalArgs, OutputFormat};
use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::{EvalReport, TraceStep};

/// Runs `script` on a fresh calculator, recording every step when `trace` is set
pub fn evaluate_script(script: &str, trace: bool) -> CliResult<EvalReport> {
    let keys = parse_key_sequence(script)?;
    let mut calc = Calculator::new();
    let mut steps = Vec::with_capacity(if trace { keys.len() } else { 0 });

    for key in keys {
        calc.press(key);
        if trace {
            steps.push(TraceStep::capture(key, &calc));
        }
    }

    info!(script, display = calc.display(), "script evaluated");
    Ok(EvalReport::new(script, &calc, steps))
}

/// Executes the eval command
pub fn execute_eval<W: Write>(config: &CliConfig, args: &EvalArgs, out: &mut W) -> CliResult<()> {
    let report = evaluate_script(&args.keys, args.trace)?;

    // Quiet still prints the answer; it only drops the trace
    let report = if config.verbosity.is_quiet() {
        EvalReport {
            steps: Vec::new(),
            ..report
        }
    } else {
        report
    };

    match args.format {
        OutputFormat::Text => writeln!(out, "{}", report.render_text())?,
        OutputFormat::Json => writeln!(out, "{}", report.render_json()?)?,
    }
    Ok(())
}
