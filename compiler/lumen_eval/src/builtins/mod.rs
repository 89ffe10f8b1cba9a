//! Built-in functions bound in every root environment.

use std::fs;

use lumen_ir::StringInterner;
use tracing::{debug, warn};

use crate::errors::wrong_arg_type;
use crate::{Builtin, EvalResult, PrintHandlerImpl, Value};

/// Run `builtin` on already-evaluated arguments.
///
/// Missing arguments read as `false`; extra arguments are ignored.
pub(crate) fn call_builtin(
    builtin: Builtin,
    args: &[Value],
    printer: &PrintHandlerImpl,
    interner: &StringInterner,
) -> EvalResult {
    debug!(builtin = builtin.name(), argc = args.len(), "builtin call");
    match builtin {
        Builtin::Print => {
            let value = args.first().unwrap_or(&Value::FALSE);
            printer.println(&value.display(interner).to_string());
            Ok(Value::FALSE)
        }
        Builtin::Length => match args.first() {
            Some(Value::Str(s)) => Ok(Value::Number(s.chars().count() as f64)),
            other => Err(wrong_arg_type("length", "a string", other)),
        },
        Builtin::Write => {
            write_file(args, interner);
            Ok(Value::FALSE)
        }
    }
}

/// `write(path, content)`. I/O failures are logged, never raised.
fn write_file(args: &[Value], interner: &StringInterner) {
    let path = args.first().unwrap_or(&Value::FALSE);
    let content = args.get(1).unwrap_or(&Value::FALSE);
    let path = path.display(interner).to_string();
    let content = content.display(interner).to_string();
    if let Err(error) = fs::write(&path, content) {
        warn!(%path, %error, "write failed");
    }
}

#[cfg(test)]
mod tests;
