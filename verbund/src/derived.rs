//! Combinators built on top of the primitives and the composition algebra.
use num_traits::{
    ops::overflowing::{OverflowingAdd, OverflowingMul, OverflowingSub},
    FromPrimitive, Zero,
};

use crate::{
    token,
    Combinator,
    Parsed::{Fallthrough, Match},
};

/// Value produced by [`Combinator::ignore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Ignore;

impl<'src, T: 'src> Combinator<'src, T> {
    /// Makes this parser optional.
    ///
    /// The result always matches. If this parser falls through, it produces `None` and consumes
    /// nothing.
    pub fn optional(&self) -> Combinator<'src, Option<T>> {
        let inner = self.clone();
        Combinator::new(move |input| inner.parse(input).optional(input))
    }

    /// Allows optional whitespace before and after this parser.
    pub fn padded(&self) -> Combinator<'src, T> {
        let blank = whitespace().optional();
        blank.then(self).then(&blank).map(|_, value, _| value)
    }

    /// Requires whitespace before and after this parser.
    pub fn spaced(&self) -> Combinator<'src, T> {
        let blank = whitespace();
        blank.then(self).then(&blank).map(|_, value, _| value)
    }

    /// Discards the parsed value.
    pub fn ignore(&self) -> Combinator<'src, Ignore> {
        self.map(|_| Ignore)
    }

    /// Applies this parser as often as it matches.
    ///
    /// The result always matches, possibly producing an empty `Vec`. Repetition also stops when
    /// this parser matches without consuming input.
    pub fn many(&self) -> Combinator<'src, Vec<T>> {
        let item = self.clone();
        Combinator::new(move |input| {
            let mut items = vec![];
            let mut rest = input;
            while let Match(value, next) = item.parse(rest) {
                items.push(value);
                if next.len() == rest.len() {
                    break;
                }
                rest = next;
            }
            Match(items, rest)
        })
    }
}

/// Parses a non-negative decimal integer, see [`token::uint`].
pub fn number<'src, I>() -> Combinator<'src, I>
where
    I: Zero + FromPrimitive + OverflowingAdd + OverflowingMul + 'src,
{
    Combinator::new(token::uint)
}

/// Parses a decimal integer with an optional leading `'-'`, see [`token::int`].
pub fn signed_number<'src, I>() -> Combinator<'src, I>
where
    I: Zero + FromPrimitive + OverflowingAdd + OverflowingSub + OverflowingMul + 'src,
{
    Combinator::new(token::int)
}

/// Parses the exact text `fixed`, producing the matched part of the input.
pub fn literal<'src>(fixed: &'src str) -> Combinator<'src, &'src str> {
    Combinator::new(move |input| token::literal(input, fixed))
}

/// Parses the longest non-empty run of characters matching `pred`.
pub fn span<'src>(pred: impl Fn(char) -> bool + Send + Sync + 'src) -> Combinator<'src, &'src str> {
    Combinator::new(move |input| token::span(input, &pred))
}

/// Parses an identifier.
pub fn identifier<'src>() -> Combinator<'src, &'src str> {
    Combinator::new(token::identifier)
}

/// Parses a non-empty run of whitespace.
pub fn whitespace<'src>() -> Combinator<'src, &'src str> {
    Combinator::new(token::whitespace)
}

/// Matches any input without consuming it, producing a clone of `value`.
pub fn success<'src, T>(value: T) -> Combinator<'src, T>
where
    T: Clone + Send + Sync + 'src,
{
    Combinator::new(move |input| Match(value.clone(), input))
}

/// Matches only at the end of the input.
pub fn end<'src>() -> Combinator<'src, ()> {
    Combinator::new(token::end)
}

/// Never matches.
pub fn failure<'src, T: 'src>() -> Combinator<'src, T> {
    Combinator::new(|_| Fallthrough)
}
