//! Debug commands: `lex` and `parse` for inspecting the front end.

use std::process::ExitCode;

use lumen_diagnostic::emitter::ColorMode;
use lumen_ir::{ast::dump, StringInterner};

use super::{read_failed, read_file, report};
use crate::problem::{lex_error_to_diagnostic, syntax_error_to_diagnostic};

/// Print one token per line as `span kind`.
pub fn lex_file(path: &str) -> ExitCode {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(message) => return read_failed(&message),
    };
    let interner = StringInterner::new();

    match lumen_lexer::lex(&source, &interner) {
        Ok(tokens) => {
            for token in tokens {
                println!("{:?} {}", token.span, token.kind.describe(&interner));
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            report(&lex_error_to_diagnostic(&err), path, &source, ColorMode::Auto);
            ExitCode::FAILURE
        }
    }
}

/// Print the program as an S-expression.
pub fn parse_file(path: &str) -> ExitCode {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(message) => return read_failed(&message),
    };
    let interner = StringInterner::new();

    match lumen_parse::parse(&source, &interner) {
        Ok(program) => {
            println!("{}", dump(&program, &interner));
            ExitCode::SUCCESS
        }
        Err(err) => {
            report(&syntax_error_to_diagnostic(&err), path, &source, ColorMode::Auto);
            ExitCode::FAILURE
        }
    }
}
