//! `InterpreterBuilder` for configuring an [`Interpreter`].

use lumen_ir::StringInterner;

use super::{Interpreter, DEFAULT_MAX_CALL_DEPTH};
use crate::{stdout_handler, Environment, SharedPrintHandler, Value};

/// Builder for [`Interpreter`].
///
/// Defaults: output to stdout, [`DEFAULT_MAX_CALL_DEPTH`], and only the
/// built-ins in the global environment.
pub struct InterpreterBuilder<'a> {
    interner: &'a StringInterner,
    print_handler: Option<SharedPrintHandler>,
    max_call_depth: usize,
    globals: Vec<(String, Value)>,
}

impl<'a> InterpreterBuilder<'a> {
    pub fn new(interner: &'a StringInterner) -> Self {
        Self {
            interner,
            print_handler: None,
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
            globals: Vec::new(),
        }
    }

    /// Where `print` writes.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Limit on nested closure calls.
    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }

    /// Bind an extra global. Globals are defined after the built-ins, so a
    /// global named like a built-in replaces it.
    #[must_use]
    pub fn global(mut self, name: &str, value: Value) -> Self {
        self.globals.push((name.to_string(), value));
        self
    }

    pub fn build(self) -> Interpreter<'a> {
        let interpreter = Interpreter {
            interner: self.interner,
            global: Environment::new_root(),
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            max_call_depth: self.max_call_depth,
            call_depth: 0,
        };
        interpreter.register_prelude();
        for (name, value) in self.globals {
            let name = self.interner.intern(&name);
            interpreter.global.define(name, value);
        }
        interpreter
    }
}
