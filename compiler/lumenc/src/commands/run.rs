//! The `run` command: parse and evaluate a source file.

use std::process::ExitCode;

use lumen_eval::stdout_handler;
use lumen_ir::StringInterner;
use tracing::info;

use super::{read_failed, read_file, report};
use crate::{run_source, RunOptions};

/// Run `path`, printing program output to stdout and errors to stderr.
pub fn run_file(path: &str, options: &RunOptions) -> ExitCode {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(message) => return read_failed(&message),
    };
    let interner = StringInterner::new();

    match run_source(&source, &interner, options, stdout_handler()) {
        Ok(_) => {
            info!(path, "finished");
            ExitCode::SUCCESS
        }
        Err(err) => {
            report(&err.to_diagnostic(), path, &source, options.color);
            ExitCode::FAILURE
        }
    }
}
