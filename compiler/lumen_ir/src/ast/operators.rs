//! Binary operators.

use std::fmt;

/// Binary operators. Assignment (`=`) is not a binary operator in the AST;
/// it builds [`ExprKind::Assign`](crate::ExprKind::Assign).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,

    // Comparison
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Logical
    And,
    Or,
}

impl BinaryOp {
    /// Map an operator token's spelling to a binary operator.
    pub fn from_symbol(symbol: &str) -> Option<BinaryOp> {
        Some(match symbol {
            "+" => Self::Add,
            "-" => Self::Sub,
            "*" => Self::Mul,
            "/" => Self::Div,
            "%" => Self::Mod,
            "==" => Self::Eq,
            "!=" => Self::NotEq,
            "<" => Self::Lt,
            "<=" => Self::LtEq,
            ">" => Self::Gt,
            ">=" => Self::GtEq,
            "&&" => Self::And,
            "||" => Self::Or,
            _ => return None,
        })
    }

    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::And => "&&",
            Self::Or => "||",
        }
    }

    /// Binding strength; higher binds tighter.
    ///
    /// - 20: `*` `/` `%`
    /// - 10: `+` `-`
    /// - 7: `<` `<=` `>` `>=` `==` `!=`
    /// - 3: `&&`
    /// - 2: `||`
    ///
    /// Assignment sits below all of these at 1.
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Mul | Self::Div | Self::Mod => 20,
            Self::Add | Self::Sub => 10,
            Self::Lt | Self::LtEq | Self::Gt | Self::GtEq | Self::Eq | Self::NotEq => 7,
            Self::And => 3,
            Self::Or => 2,
        }
    }

    /// `&&` and `||` evaluate their right operand lazily.
    pub const fn is_short_circuit(self) -> bool {
        matches!(self, Self::And | Self::Or)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}
