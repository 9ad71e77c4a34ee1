//! The Verbund crate provides composable parser combinators for text input.
//!
//! Parsers are values of type [`Combinator`], which are cheap to clone and can be shared between
//! threads. Larger parsers are built from smaller ones using a small algebra:
//!
//! * _Sequencing_ with [`then`][Combinator::then]: both parsers have to match one after the other.
//!   The parsed values are collected in a flat tuple, so `a.then(&b).then(&c)` and
//!   `a.then(&b.then(&c))` both produce `(A, B, C)`. A sequence is mapped with a function taking
//!   one argument per element, see [`Seq::map`].
//!
//! * _Alternation_ with [`or`][Combinator::or] and [`either`][Combinator::either]: the first
//!   alternative that matches wins, the next one is tried on the same input otherwise.
//!   Alternatives of the same type produce that type. Alternatives of different types produce a
//!   flat sum like [`Sum3<A, B, C>`][Sum3], where adding an alternative of a type that is already
//!   present keeps the sum unchanged. A sum is mapped with one function per case, see
//!   [`Alt::map`].
//!
//! * _Transformation_ with [`map`][Combinator::map].
//!
//! Everything else, like [`optional`][Combinator::optional], [`padded`][Combinator::padded] or
//! [`many`][Combinator::many], is derived from these and the primitive parsers in the crate root.
//!
//! Parsing never reports errors along the way. A parser either produces a value together with the
//! remaining input, or it falls through without consuming anything, see [`Parsed`]. Failing
//! alternatives are retried from the same position, so any amount of backtracking is possible.
//! [`parse_all`][Combinator::parse_all] turns a parser for a complete input into a function
//! returning a [`SyntaxError`] with the source location where parsing stopped.
//!
//! ## Recursive grammars
//!
//! A [`Combinator`] is a handle to a definition that can be assigned after the handle was used to
//! build other parsers. Recursive rules are declared first and defined once the rules they refer
//! to exist:
//!
//! ```rust
//! use verbund::*;
//!
//! let expr = Combinator::declare();
//! let atom = number::<i64>().or(&literal("(")
//!     .then(&expr)
//!     .then(&literal(")"))
//!     .map(|_, value, _| value));
//! expr.define(
//!     atom.then(&literal("+"))
//!         .then(&expr)
//!         .map(|lhs, _, rhs| lhs + rhs)
//!         .or(&atom),
//! );
//!
//! assert_eq!(expr.parse_all("1+(2+3)+4"), Ok(10));
//! assert!(expr.parse_all("1+").is_err());
//!
//! // The rule refers to itself, so its definition has to be reset to release it.
//! expr.reset();
//! ```

#![warn(missing_docs)]
mod combinator;
mod derived;
mod error;
mod parser;
pub mod product;
pub mod sum;
pub mod text;
pub mod token;

#[cfg(test)]
mod tests;

pub use combinator::{Alt, Combinator, Seq, Sequence};
pub use derived::{
    end, failure, identifier, literal, number, signed_number, span, success, whitespace, Ignore,
};
pub use error::{SyntaxError, SyntaxErrorKind};
pub use parser::Parsed;
pub use sum::{Sum2, Sum3, Sum4, Sum5};

pub use Parsed::*;
