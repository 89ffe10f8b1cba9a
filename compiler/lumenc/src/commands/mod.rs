//! `lumen` subcommands.
//!
//! Each command returns the process exit code. Failures are rendered to
//! stderr as diagnostics before returning [`ExitCode::FAILURE`].

mod debug;
mod explain;
mod run;

use std::io::IsTerminal;
use std::process::ExitCode;

use lumen_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use lumen_diagnostic::Diagnostic;

use crate::RunOptions;

pub use debug::{lex_file, parse_file};
pub use explain::{explain, explain_error};
pub use run::run_file;

/// Parse the arguments after `lumen run`: one path plus options.
///
/// - `--max-depth=N`: closure call depth limit
/// - `--color=auto|always|never`
pub fn parse_run_args(args: &[String]) -> Result<(String, RunOptions), String> {
    let mut options = RunOptions::default();
    let mut path = None;
    for arg in args {
        if let Some(depth) = arg.strip_prefix("--max-depth=") {
            options.max_call_depth = depth
                .parse()
                .map_err(|_| format!("invalid --max-depth value '{depth}'"))?;
        } else if let Some(mode) = arg.strip_prefix("--color=") {
            options.color = ColorMode::from_flag(mode)
                .ok_or_else(|| format!("invalid --color value '{mode}'"))?;
        } else if arg.starts_with('-') {
            return Err(format!("unknown option '{arg}'"));
        } else if path.is_none() {
            path = Some(arg.clone());
        } else {
            return Err(format!("unexpected argument '{arg}'"));
        }
    }
    let path = path.ok_or_else(|| "missing file path".to_string())?;
    Ok((path, options))
}

/// Read a source file, reporting failures the way the CLI prints them.
pub(crate) fn read_file(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    })
}

/// Render `diagnostic` against `source` on stderr.
pub(crate) fn report(diagnostic: &Diagnostic, path: &str, source: &str, color: ColorMode) {
    let is_tty = std::io::stderr().is_terminal();
    let mut emitter = TerminalEmitter::stderr(color, is_tty).with_source(path, source);
    emitter.emit(diagnostic);
    emitter.flush();
}

/// Print a read error and fail.
pub(crate) fn read_failed(message: &str) -> ExitCode {
    eprintln!("error: {message}");
    ExitCode::FAILURE
}
