//! `lumen explain <code>`: describe a diagnostic code.

use std::process::ExitCode;

use lumen_diagnostic::ErrorCode;

/// One-line explanation of `code`, e.g. `E6001 (runtime): undefined variable`.
pub fn explain(code: &str) -> Option<String> {
    let code = ErrorCode::from_str_code(code)?;
    Some(format!("{code} ({}): {}", code.phase(), code.description()))
}

pub fn explain_error(code: &str) -> ExitCode {
    if let Some(text) = explain(code) {
        println!("{text}");
        return ExitCode::SUCCESS;
    }
    eprintln!("Unknown error code: {code}");
    eprintln!();
    eprintln!("Codes look like E0001 (lexer), E1001 (parser) or E6001 (runtime).");
    ExitCode::FAILURE
}
