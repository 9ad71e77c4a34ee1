//! Primitive parsers.
//!
//! Each of these is a plain function from an input slice to a [`Parsed`] value that matches a
//! non-empty prefix of the input or falls through without consuming anything. They do not depend
//! on [`Combinator`][crate::Combinator]; the functions in the crate root wrap them into
//! combinators.
use num_traits::{
    ops::overflowing::{OverflowingAdd, OverflowingMul, OverflowingSub},
    FromPrimitive, Zero,
};

use crate::{
    text,
    Parsed::{self, Fallthrough, Match},
};

/// Splits `input` after `offset` bytes, matching `value` if at least one byte was passed over.
#[inline]
fn split_at<T>(input: &str, offset: usize, value: T) -> Parsed<'_, T> {
    if offset != 0 {
        Match(value, &input[offset..])
    } else {
        Fallthrough
    }
}

/// Parses a non-negative decimal integer.
///
/// Falls through when the input does not start with an ASCII digit or when the digits do not fit
/// into `I`.
#[inline]
pub fn uint<I>(input: &str) -> Parsed<'_, I>
where
    I: Zero + FromPrimitive + OverflowingAdd + OverflowingMul,
{
    match text::ascii_digits(input, 0) {
        (Some(value), offset) => split_at(input, offset, value),
        (None, _) => Fallthrough,
    }
}

/// Parses a decimal integer with an optional leading `'-'`.
///
/// A `'-'` that is not directly followed by a digit does not match.
#[inline]
pub fn int<I>(input: &str) -> Parsed<'_, I>
where
    I: Zero + FromPrimitive + OverflowingAdd + OverflowingSub + OverflowingMul,
{
    match text::signed_ascii_digits(input, 0) {
        (Some(value), offset) => split_at(input, offset, value),
        (None, _) => Fallthrough,
    }
}

/// Parses the exact text `token`, returning the matched part of the input.
///
/// An input that only starts with a prefix of `token` does not match. The empty token never
/// matches.
#[inline]
pub fn literal<'src>(input: &'src str, token: &str) -> Parsed<'src, &'src str> {
    let offset = text::fixed(input, 0, token);
    split_at(input, offset, &input[..offset])
}

/// Parses the longest non-empty run of characters for which `pred` returns `true`.
#[inline]
pub fn span(input: &str, pred: impl Fn(char) -> bool) -> Parsed<'_, &str> {
    let offset = text::span_while(input, 0, pred);
    split_at(input, offset, &input[..offset])
}

/// Parses an identifier, see [`text::identifier`].
#[inline]
pub fn identifier(input: &str) -> Parsed<'_, &str> {
    let offset = text::identifier(input, 0);
    split_at(input, offset, &input[..offset])
}

/// Parses a non-empty run of whitespace.
#[inline]
pub fn whitespace(input: &str) -> Parsed<'_, &str> {
    let offset = text::whitespace(input, 0);
    split_at(input, offset, &input[..offset])
}

/// Matches the end of the input.
///
/// This is the only primitive parser that matches without consuming input.
#[inline]
pub fn end(input: &str) -> Parsed<'_, ()> {
    if input.is_empty() {
        Match((), input)
    } else {
        Fallthrough
    }
}
