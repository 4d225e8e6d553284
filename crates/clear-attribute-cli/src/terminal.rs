// crates/clear-attribute-cli/src/terminal.rs
// ============================================================================
// Module: Console Terminal
// Description: Confirmation prompt and timestamped status lines.
// Purpose: Implement the core Terminal trait over any reader and writer.
// Dependencies: clear-attribute-core
// ============================================================================

//! ## Overview
//! [`ConsoleTerminal`] asks the `[y/N]` question on its writer, reads one
//! answer line from its reader, and renders status lines as
//! `[YYYY-MM-DD HH:MM:SS] message` in UTC.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::BufRead;
use std::io::Write;

use clear_attribute_core::AttributeCode;
use clear_attribute_core::ReportKind;
use clear_attribute_core::ReportLine;
use clear_attribute_core::Terminal;
use clear_attribute_core::TerminalError;
use clear_attribute_core::gmt_date;

use crate::t;

// ============================================================================
// SECTION: Terminal
// ============================================================================

/// Terminal over a line reader and an output writer.
pub struct ConsoleTerminal<R, W> {
    /// Source of confirmation answers.
    input: R,
    /// Destination for prompts and status lines.
    output: W,
}

impl<R: BufRead, W: Write> ConsoleTerminal<R, W> {
    /// Creates a terminal over `input` and `output`.
    pub const fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
        }
    }

    /// Consumes the terminal and returns its output writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Terminal for ConsoleTerminal<R, W> {
    fn confirm(&mut self, attribute_code: &AttributeCode) -> Result<bool, TerminalError> {
        let prompt = t!("null.confirm.prompt", attribute = attribute_code);
        write!(self.output, "{prompt} ")
            .and_then(|()| self.output.flush())
            .map_err(|err| TerminalError(output_error(&err)))?;
        let mut answer = String::new();
        self.input
            .read_line(&mut answer)
            .map_err(|err| TerminalError(t!("input.read_failed", error = err)))?;
        Ok(is_affirmative(&answer))
    }

    fn report(&mut self, line: &ReportLine) -> Result<(), TerminalError> {
        let stamp =
            gmt_date(line.at).map_err(|err| TerminalError(t!("time.format_failed", error = err)))?;
        let message = render_kind(&line.kind);
        writeln!(self.output, "[{stamp}] {message}")
            .and_then(|()| self.output.flush())
            .map_err(|err| TerminalError(output_error(&err)))
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Returns true when the answer starts with `y` in any case.
pub(crate) fn is_affirmative(answer: &str) -> bool {
    answer.trim().chars().next().is_some_and(|ch| ch.eq_ignore_ascii_case(&'y'))
}

/// Renders the message text of a status line.
pub(crate) fn render_kind(kind: &ReportKind) -> String {
    match kind {
        ReportKind::Start => t!("null.start"),
        ReportKind::Setting {
            attribute_id,
            table,
        } => t!("null.setting", id = attribute_id, table = table),
        ReportKind::Finish => t!("null.finish"),
        ReportKind::AttributeNotFound => t!("null.not_found"),
        ReportKind::NullRejected => t!("null.rejected"),
        ReportKind::NullFailed {
            error,
        } => t!("null.failed", error = error),
    }
}

/// Formats a stdout write failure.
fn output_error(error: &std::io::Error) -> String {
    t!("output.write_failed", stream = t!("output.stream.stdout"), error = error)
}
