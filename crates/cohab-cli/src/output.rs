//! Rendering for command results and errors.
//!
//! Commands hand a serializable report to [`render_mode`] along with two
//! closures, one for tab-separated text and one for the aligned human view.
//! JSON needs no closure; the report is serialized as-is.
//!
//! The mode comes from `--format` (or hidden `--json`), then the
//! `COHAB_FORMAT` env var, then whether stdout is a terminal.

use clap::ValueEnum;
use cohab_core::ErrorCode;
use serde::Serialize;
use std::io::{self, IsTerminal, Write};

const RULE: &str = "────────────────────────────────────────────────────────────────";

/// How a command writes its result to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Headings and aligned columns.
    Pretty,
    /// One record per line, tab-separated.
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl OutputMode {
    pub const fn is_json(self) -> bool {
        matches!(self, Self::Json)
    }

    fn from_env_value(value: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(value.trim(), true).ok()
    }

    fn pick(flag: Option<Self>, json: bool, env: Option<&str>, tty: bool) -> Self {
        flag.or_else(|| json.then_some(Self::Json))
            .or_else(|| env.and_then(Self::from_env_value))
            .unwrap_or(if tty { Self::Pretty } else { Self::Text })
    }
}

/// Decide the output mode for this invocation.
pub fn resolve_output_mode(flag: Option<OutputMode>, json: bool) -> OutputMode {
    let env = std::env::var("COHAB_FORMAT").ok();
    OutputMode::pick(flag, json, env.as_deref(), io::stdout().is_terminal())
}

/// Section heading underlined with a rule.
pub fn pretty_section(w: &mut dyn Write, heading: &str) -> io::Result<()> {
    writeln!(w, "{heading}")?;
    pretty_rule(w)
}

pub fn pretty_rule(w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "{RULE}")
}

/// `Key:` padded to a fixed column, then the value.
pub fn pretty_kv(w: &mut dyn Write, key: &str, value: impl AsRef<str>) -> io::Result<()> {
    let label = format!("{key}:");
    writeln!(w, "{label:<14}{}", value.as_ref())
}

/// Write `report` to stdout in `mode`.
pub fn render_mode<T: Serialize>(
    mode: OutputMode,
    report: &T,
    text: impl FnOnce(&T, &mut dyn Write) -> io::Result<()>,
    pretty: impl FnOnce(&T, &mut dyn Write) -> io::Result<()>,
) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();
    match mode {
        OutputMode::Pretty => pretty(report, &mut out)?,
        OutputMode::Text => text(report, &mut out)?,
        OutputMode::Json => {
            serde_json::to_writer_pretty(&mut out, report)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// A failed command, flattened for display.
#[derive(Debug, Serialize)]
pub struct CliError {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

impl CliError {
    /// Flatten an error chain. An [`ErrorCode`] anywhere in the chain
    /// supplies the code and hint.
    pub fn from_anyhow(err: &anyhow::Error) -> Self {
        let code = err.downcast_ref::<ErrorCode>().copied();
        Self {
            message: format!("{err:#}"),
            suggestion: code.and_then(ErrorCode::hint).map(String::from),
            error_code: code.map(|c| c.code().to_owned()),
        }
    }
}

/// Write `error` to stderr. JSON mode wraps it as `{"error": {...}}`.
pub fn render_error(mode: OutputMode, error: &CliError) -> anyhow::Result<()> {
    let mut err = io::stderr().lock();
    if mode.is_json() {
        serde_json::to_writer_pretty(&mut err, &serde_json::json!({ "error": error }))?;
        writeln!(err)?;
        return Ok(());
    }

    writeln!(err, "error: {}", error.message)?;
    if let Some(hint) = &error.suggestion {
        writeln!(err, "  hint: {hint}")?;
    }
    Ok(())
}
