//! Lumen driver library.
//!
//! Glue between the pipeline crates: [`run_source`] parses and evaluates a
//! program, [`problem`] turns every error type into a
//! [`Diagnostic`](lumen_diagnostic::Diagnostic), and [`commands`] implements
//! the `lumen` subcommands on top of both.

pub mod commands;
pub mod problem;
pub mod tracing_setup;

use lumen_diagnostic::emitter::ColorMode;
use lumen_diagnostic::Diagnostic;
use lumen_eval::{EvalError, InterpreterBuilder, SharedPrintHandler, Value, DEFAULT_MAX_CALL_DEPTH};
use lumen_ir::StringInterner;
use lumen_parse::SyntaxError;
use thiserror::Error;
use tracing::debug;

/// Options for `lumen run`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub max_call_depth: usize,
    pub color: ColorMode,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
            color: ColorMode::Auto,
        }
    }
}

/// Why a program failed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RunError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl RunError {
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            RunError::Syntax(err) => problem::syntax_error_to_diagnostic(err),
            RunError::Eval(err) => problem::eval_error_to_diagnostic(err),
        }
    }
}

/// Parse and evaluate `source` in a fresh interpreter.
///
/// `print` output goes to `output`. The returned value's names resolve
/// through `interner`.
pub fn run_source(
    source: &str,
    interner: &StringInterner,
    options: &RunOptions,
    output: SharedPrintHandler,
) -> Result<Value, RunError> {
    let program = lumen_parse::parse(source, interner)?;
    debug!(max_call_depth = options.max_call_depth, "evaluating");
    let mut interpreter = InterpreterBuilder::new(interner)
        .print_handler(output)
        .max_call_depth(options.max_call_depth)
        .build();
    Ok(interpreter.eval_program(&program)?)
}
