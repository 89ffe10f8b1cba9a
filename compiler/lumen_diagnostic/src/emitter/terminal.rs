//! Human-readable diagnostic output with optional ANSI colors.
//!
//! With source attached, each label is shown under its source line:
//!
//! ```text
//! error[E6001]: undefined variable `y`
//!  --> main.lm:2:1
//!   |
//! 2 | y + x
//!   | ^ not defined
//! ```

use std::io::{self, Write};

use super::{ColorMode, DiagnosticEmitter};
use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Label};

mod colors {
    pub const ERROR: &str = "\x1b[1;31m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

struct SourceContext<'s> {
    path: &'s str,
    text: &'s str,
    lines: LineOffsetTable,
}

pub struct TerminalEmitter<'s, W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceContext<'s>>,
}

impl<'s, W: Write> TerminalEmitter<'s, W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Render labels against `text`, reporting locations as `path:line:col`.
    #[must_use]
    pub fn with_source(mut self, path: &'s str, text: &'s str) -> Self {
        self.source = Some(SourceContext {
            path,
            text,
            lines: LineOffsetTable::build(text),
        });
        self
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_header(&mut self, code: &str) {
        self.write_colored("error", colors::ERROR);
        self.write_colored(&format!("[{code}]"), colors::BOLD);
    }

    fn write_bare_labels(&mut self, labels: &[Label]) {
        for label in labels {
            let _ = write!(self.writer, "  --> {:?}: ", label.span);
            self.write_colored(&label.message, colors::ERROR);
            let _ = writeln!(self.writer);
        }
    }

    fn write_snippets(&mut self, diagnostic: &Diagnostic, source: &SourceContext<'_>) {
        let Some(at) = diagnostic.primary_span() else {
            return;
        };
        let labels = &diagnostic.labels;
        let (line, col) = source.lines.offset_to_line_col(source.text, at.start);
        let gutter = labels
            .iter()
            .map(|l| source.lines.line_from_offset(l.span.start).to_string().len())
            .max()
            .unwrap_or(1);

        let _ = writeln!(
            self.writer,
            "{:gutter$}--> {}:{line}:{col}",
            "",
            source.path
        );
        let _ = writeln!(self.writer, "{:gutter$} |", "");

        for label in labels {
            let (line, col) = source.lines.offset_to_line_col(source.text, label.span.start);
            let text = source.lines.line_text(source.text, line);
            let _ = writeln!(self.writer, "{line:>gutter$} | {text}");

            // Carets cover the span's characters on this line, at least one.
            let available = text.chars().count().saturating_sub(col as usize - 1);
            let spanned = source
                .text
                .get(label.span.to_range())
                .map_or(0, |s| s.chars().count());
            let width = spanned.min(available).max(1);

            let _ = write!(
                self.writer,
                "{:gutter$} | {:pad$}",
                "",
                "",
                pad = col as usize - 1
            );
            self.write_colored(
                &format!("{} {}", "^".repeat(width), label.message),
                colors::ERROR,
            );
            let _ = writeln!(self.writer);
        }
    }
}

impl<'s> TerminalEmitter<'s, io::Stderr> {
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.write_header(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        match self.source.take() {
            Some(source) => {
                self.write_snippets(diagnostic, &source);
                self.source = Some(source);
            }
            None => self.write_bare_labels(&diagnostic.labels),
        }

        for note in &diagnostic.notes {
            let _ = writeln!(self.writer, "  = note: {note}");
        }
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}
