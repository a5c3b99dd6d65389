//! Output formatting for eval and the REPL

use calcpad::core::{Calculator, Key};
use console::style;
use serde::Serialize;

/// One row of an eval trace
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceStep {
    /// Button caption of the key
    pub key: String,
    /// Display after the key
    pub display: String,
    /// Pending operation after the key, empty when none
    pub pending: String,
}

impl TraceStep {
    /// Captures the state right after `key`
    #[must_use]
    pub fn capture(key: Key, calc: &Calculator) -> Self {
        Self {
            key: key.label().to_string(),
            display: calc.display().to_string(),
            pending: calc.pending_summary(),
        }
    }
}

/// Result of running one key script
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvalReport {
    /// The script as given
    pub script: String,
    /// Final display text
    pub display: String,
    /// True when the display shows the error sentinel
    pub error: bool,
    /// Pending operation left over, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending: Option<String>,
    /// Per-key trace, when requested
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<TraceStep>,
}

impl EvalReport {
    /// Builds a report from the final engine state
    #[must_use]
    pub fn new(script: &str, calc: &Calculator, steps: Vec<TraceStep>) -> Self {
        let pending = calc.pending_summary();
        Self {
            script: script.to_string(),
            display: calc.display().to_string(),
            error: calc.is_error(),
            pending: (!pending.is_empty()).then_some(pending),
            steps,
        }
    }

    /// Renders the report as plain text
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for step in &self.steps {
            out.push_str(&render_step(step));
            out.push('\n');
        }
        out.push_str(&styled_display(&self.display, self.error));
        out
    }

    /// Renders the report as pretty JSON
    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Formats the display, red when it shows the sentinel
#[must_use]
pub fn styled_display(display: &str, error: bool) -> String {
    if error {
        style(display).red().bold().to_string()
    } else {
        style(display).bold().to_string()
    }
}

fn render_step(step: &TraceStep) -> String {
    let pending = if step.pending.is_empty() {
        String::new()
    } else {
        format!("  {}", style(format!("[{}]", step.pending)).dim())
    };
    format!(
        "{:>3}  {}{}",
        style(&step.key).yellow(),
        step.display,
        pending
    )
}
