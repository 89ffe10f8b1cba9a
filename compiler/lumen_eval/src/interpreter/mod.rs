//! The tree-walking interpreter.

mod builder;

use std::rc::Rc;

use lumen_ir::{BinaryOp, Expr, ExprKind, Lambda, StringInterner};
use lumen_stack::ensure_sufficient_stack;
use tracing::{debug, instrument};

pub use builder::InterpreterBuilder;

use crate::builtins::call_builtin;
use crate::errors::{not_callable, stack_overflow, undefined_variable};
use crate::{
    evaluate_binary, Builtin, Environment, EvalError, EvalResult, FunctionValue,
    SharedPrintHandler, UndefinedName, Value,
};

/// Closure calls nested deeper than this fail with `StackOverflow`.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

/// Evaluates expressions against environments.
///
/// Holds the global (root) environment, seeded with the built-ins, and the
/// print handler those built-ins write to. Create one with
/// [`Interpreter::new`] or [`InterpreterBuilder`].
pub struct Interpreter<'a> {
    interner: &'a StringInterner,
    global: Environment,
    print_handler: SharedPrintHandler,
    max_call_depth: usize,
    call_depth: usize,
}

impl<'a> Interpreter<'a> {
    /// An interpreter printing to stdout with the default call depth limit.
    pub fn new(interner: &'a StringInterner) -> Self {
        InterpreterBuilder::new(interner).build()
    }

    /// Bind every [`Builtin`] under its name in the global environment.
    pub fn register_prelude(&self) {
        for builtin in Builtin::ALL {
            let name = self.interner.intern(builtin.name());
            self.global
                .define(name, Value::Function(FunctionValue::Builtin(builtin)));
        }
    }

    /// Evaluate a program in the global environment.
    pub fn eval_program(&mut self, program: &Expr) -> EvalResult {
        let global = self.global.clone();
        self.eval(program, &global)
    }

    /// Evaluate `expr` in `env`.
    pub fn eval(&mut self, expr: &Expr, env: &Environment) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(expr, env))
            .map_err(|err| err.with_span(expr.span))
    }

    fn eval_inner(&mut self, expr: &Expr, env: &Environment) -> EvalResult {
        match &expr.kind {
            ExprKind::Number(n) => Ok(Value::Number(*n)),
            ExprKind::Str(s) => Ok(Value::string(self.interner.lookup(*s))),
            ExprKind::Bool(b) => Ok(Value::Bool(*b)),
            ExprKind::Var(name) => env.get(*name).map_err(|e| self.undefined(e)),
            ExprKind::Assign { target, value } => {
                let value = self.eval(value, env)?;
                env.set(*target, value.clone())
                    .map_err(|e| self.undefined(e))?;
                Ok(value)
            }
            ExprKind::Binary { op, left, right } => self.eval_binary(*op, left, right, env),
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                if self.eval(cond, env)?.is_false() {
                    match else_branch {
                        Some(else_branch) => self.eval(else_branch, env),
                        None => Ok(Value::FALSE),
                    }
                } else {
                    self.eval(then_branch, env)
                }
            }
            ExprKind::While { cond, body } => {
                let mut last = Value::FALSE;
                while !self.eval(cond, env)?.is_false() {
                    last = self.eval(body, env)?;
                }
                Ok(last)
            }
            ExprKind::Sequence(items) => {
                let mut last = Value::FALSE;
                for item in items {
                    last = self.eval(item, env)?;
                }
                Ok(last)
            }
            ExprKind::Lambda(lambda) => Ok(Value::Function(FunctionValue::Closure {
                lambda: Rc::clone(lambda),
                env: env.clone(),
            })),
            ExprKind::Call { callee, args } => {
                let callee = self.eval(callee, env)?;
                let args = args
                    .iter()
                    .map(|arg| self.eval(arg, env))
                    .collect::<Result<Vec<_>, _>>()?;
                self.call(&callee, args)
            }
        }
    }

    /// `&&` and `||` skip the right operand when the left decides.
    fn eval_binary(
        &mut self,
        op: BinaryOp,
        left: &Expr,
        right: &Expr,
        env: &Environment,
    ) -> EvalResult {
        let left = self.eval(left, env)?;
        // `&&` stops on `false`, `||` on anything else.
        if op.is_short_circuit() && left.is_false() == (op == BinaryOp::And) {
            return Ok(left);
        }
        let right = self.eval(right, env)?;
        evaluate_binary(left, right, op)
    }

    /// Call a function value with evaluated arguments.
    pub fn call(&mut self, callee: &Value, args: Vec<Value>) -> EvalResult {
        match callee {
            Value::Function(FunctionValue::Closure { lambda, env }) => {
                self.call_closure(lambda, env, args)
            }
            Value::Function(FunctionValue::Builtin(builtin)) => {
                call_builtin(*builtin, &args, &self.print_handler, self.interner)
            }
            other => Err(not_callable(other)),
        }
    }

    /// Bind parameters in a child of the captured environment and run the
    /// body. Missing arguments are `false`; extra ones are dropped.
    #[instrument(level = "trace", skip_all, fields(depth = self.call_depth, argc = args.len()))]
    fn call_closure(
        &mut self,
        lambda: &Lambda,
        captured: &Environment,
        args: Vec<Value>,
    ) -> EvalResult {
        if self.call_depth >= self.max_call_depth {
            debug!(limit = self.max_call_depth, "call depth exceeded");
            return Err(stack_overflow(self.max_call_depth));
        }

        let scope = captured.extend();
        let mut args = args.into_iter();
        for &param in &lambda.params {
            scope.define(param, args.next().unwrap_or(Value::FALSE));
        }

        self.call_depth += 1;
        let result = self.eval(&lambda.body, &scope);
        self.call_depth -= 1;
        result
    }

    #[cold]
    fn undefined(&self, UndefinedName(name): UndefinedName) -> EvalError {
        undefined_variable(self.interner.lookup(name))
    }
}
