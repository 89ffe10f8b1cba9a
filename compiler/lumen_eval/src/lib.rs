//! Lumen evaluator.
//!
//! Walks the AST produced by `lumen_parse` directly. Variables live in
//! parent-linked [`Environment`] scopes; a `lambda` evaluates to a closure
//! holding the shared [`Lambda`](lumen_ir::Lambda) node and the environment
//! it was created in.
//!
//! The interpreter is single-threaded: environments are `Rc`/`RefCell`
//! based and values are not `Send`.

mod builtins;
mod environment;
mod errors;
mod interpreter;
mod operators;
mod print_handler;
mod value;

pub use environment::{Environment, LocalScope, Scope, UndefinedName};
pub use errors::{
    invalid_denominator, not_a_number, not_callable, stack_overflow, type_mismatch,
    undefined_variable, wrong_arg_type, EvalError, EvalErrorKind, EvalResult,
};
pub use interpreter::{Interpreter, InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, stdout_handler, PrintHandlerImpl, SharedPrintHandler,
};
pub use value::{Builtin, FunctionValue, Value, ValueDisplay};
