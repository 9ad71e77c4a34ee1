//! Arithmetic expression trees.
use std::fmt;

use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, Zero};

use crate::error::EvalError;

/// A binary arithmetic operator.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum BinaryOp {
    /// Addition, `+`.
    Add,
    /// Subtraction, `-`.
    Sub,
    /// Multiplication, `*`.
    Mul,
    /// Integer division rounding towards zero, `/`.
    Div,
}

impl BinaryOp {
    /// Returns the symbol used for this operator.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }

    /// Applies this operator, detecting overflow and division by zero.
    pub fn apply<I>(self, lhs: &I, rhs: &I) -> Result<I, EvalError>
    where
        I: Zero + CheckedAdd + CheckedSub + CheckedMul + CheckedDiv,
    {
        let result = match self {
            BinaryOp::Add => lhs.checked_add(rhs),
            BinaryOp::Sub => lhs.checked_sub(rhs),
            BinaryOp::Mul => lhs.checked_mul(rhs),
            BinaryOp::Div if rhs.is_zero() => return Err(EvalError::DivisionByZero),
            BinaryOp::Div => lhs.checked_div(rhs),
        };
        result.ok_or(EvalError::Overflow)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// An arithmetic expression over 64-bit integers.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Expr {
    /// A number literal.
    Number(i64),
    /// A binary operation.
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Creates a binary operation.
    pub fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary(op, Box::new(lhs), Box::new(rhs))
    }

    /// Evaluates the expression.
    pub fn eval(&self) -> Result<i64, EvalError> {
        match self {
            Expr::Number(value) => Ok(*value),
            Expr::Binary(op, lhs, rhs) => op.apply(&lhs.eval()?, &rhs.eval()?),
        }
    }
}

/// Writes the expression with every binary operation in parentheses.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(value) => write!(f, "{value}"),
            Expr::Binary(op, lhs, rhs) => write!(f, "({lhs} {op} {rhs})"),
        }
    }
}
