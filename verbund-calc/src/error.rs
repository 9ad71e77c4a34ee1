//! Error types.
pub use verbund::SyntaxError;
use thiserror::Error;

/// An error while evaluating an expression.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    /// The divisor of a division evaluated to zero.
    #[error("division by zero")]
    DivisionByZero,
    /// An intermediate result does not fit into the integer type.
    #[error("arithmetic overflow")]
    Overflow,
}

/// Either a [`SyntaxError`] or an [`EvalError`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The input is not a valid expression.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// The expression could not be evaluated.
    #[error(transparent)]
    Eval(#[from] EvalError),
}
