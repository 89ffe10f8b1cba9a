//! Runtime values.
//!
//! Every value is one of four kinds. Cloning is cheap: strings are `Rc<str>`
//! and closures share both their lambda node and their environment.

use std::fmt;
use std::rc::Rc;

use lumen_ir::{Lambda, StringInterner};

use crate::Environment;

/// A runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    Number(f64),
    Str(Rc<str>),
    Bool(bool),
    Function(FunctionValue),
}

impl Value {
    pub const FALSE: Value = Value::Bool(false);

    #[inline]
    pub fn string(s: &str) -> Self {
        Value::Str(Rc::from(s))
    }

    /// Only `false` is falsy. `0`, `""` and functions are all truthy.
    #[inline]
    pub fn is_false(&self) -> bool {
        matches!(self, Value::Bool(false))
    }

    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Bool(_) => "boolean",
            Value::Function(_) => "function",
        }
    }

    /// Strict equality: no coercion between kinds.
    ///
    /// Numbers follow IEEE 754 (`NaN` is unequal to itself). Functions are
    /// equal only to themselves: the same closure instance or the same
    /// built-in.
    pub fn strict_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a.same_as(b),
            _ => false,
        }
    }

    /// Display form used by `print` and `write`.
    ///
    /// The interner is needed to spell closure parameter names.
    pub fn display<'a>(&'a self, interner: &'a StringInterner) -> ValueDisplay<'a> {
        ValueDisplay {
            value: self,
            interner,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.strict_eq(other)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

/// Something that can be called.
#[derive(Clone)]
pub enum FunctionValue {
    /// A `lambda` together with the environment it was evaluated in.
    Closure { lambda: Rc<Lambda>, env: Environment },
    Builtin(Builtin),
}

impl FunctionValue {
    fn same_as(&self, other: &FunctionValue) -> bool {
        match (self, other) {
            (
                FunctionValue::Closure { lambda: a, env: ea },
                FunctionValue::Closure { lambda: b, env: eb },
            ) => Rc::ptr_eq(a, b) && ea.ptr_eq(eb),
            (FunctionValue::Builtin(a), FunctionValue::Builtin(b)) => a == b,
            _ => false,
        }
    }
}

// Closures can capture an environment that holds the closure itself, so the
// derived Debug would never terminate.
impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FunctionValue::Closure { lambda, .. } => f
                .debug_struct("Closure")
                .field("params", &lambda.params)
                .finish_non_exhaustive(),
            FunctionValue::Builtin(builtin) => f.debug_tuple("Builtin").field(builtin).finish(),
        }
    }
}

/// Host functions seeded into the root environment.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Builtin {
    /// `print(value)`
    Print,
    /// `length(string)`
    Length,
    /// `write(path, content)`
    Write,
}

impl Builtin {
    pub const ALL: [Builtin; 3] = [Builtin::Print, Builtin::Length, Builtin::Write];

    /// The global name the built-in is bound to.
    pub const fn name(self) -> &'static str {
        match self {
            Builtin::Print => "print",
            Builtin::Length => "length",
            Builtin::Write => "write",
        }
    }
}

/// Formatting adapter returned by [`Value::display`].
pub struct ValueDisplay<'a> {
    value: &'a Value,
    interner: &'a StringInterner,
}

impl fmt::Display for ValueDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Value::Number(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Function(FunctionValue::Closure { lambda, .. }) => {
                f.write_str("<lambda(")?;
                for (i, param) in lambda.params.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(self.interner.lookup(*param))?;
                }
                f.write_str(")>")
            }
            Value::Function(FunctionValue::Builtin(builtin)) => {
                write!(f, "<builtin {}>", builtin.name())
            }
        }
    }
}
