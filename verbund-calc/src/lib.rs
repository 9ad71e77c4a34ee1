//! Parser and evaluator for integer arithmetic expressions.
//!
//! Expressions consist of 64-bit integer literals, the binary operators `+`, `-`, `*` and `/` and
//! parentheses. Multiplication and division bind stronger than addition and subtraction, all
//! operators are left associative. Evaluation uses checked arithmetic and reports overflow and
//! division by zero as [`EvalError`].
//!
//! ```rust
//! use verbund_calc::{Calculator, Config};
//!
//! let calculator = Calculator::new(Config::default());
//! assert_eq!(calculator.evaluate("10 * (5 - 2) + 3").unwrap(), 33);
//! assert!(calculator.evaluate("88 ^ 66").is_err());
//! ```

#![warn(missing_docs)]
mod ast;
mod calculator;
mod error;

pub use ast::{BinaryOp, Expr};
pub use calculator::Calculator;
pub use error::{Error, EvalError, SyntaxError};

/// Configuration for the [`Calculator`].
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct Config {
    /// When set, whitespace is allowed around every token. (Default: `true`)
    pub whitespace: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self { whitespace: true }
    }
}

impl Config {
    #[inline]
    /// Sets the [`whitespace`][Self#structfield.whitespace] field.
    pub fn whitespace(mut self, value: bool) -> Self {
        self.whitespace = value;
        self
    }
}
