//! Offset based scanners for text input.
//!
//! These functions look at `input` starting at `offset` and return how far a certain kind of
//! text extends. They never fail, an unchanged offset means nothing was passed over. The
//! [`token`][crate::token] module builds parsers from them.
use std::fmt;

use num_traits::{
    ops::overflowing::{OverflowingAdd, OverflowingMul, OverflowingSub},
    FromPrimitive, Zero,
};

/// Accumulates the ASCII digits starting at `offset`, combining the running value with each digit
/// using `step`, which reports overflow in its second result.
#[inline]
fn fold_digits<I>(
    input: &str,
    mut offset: usize,
    step: impl Fn(&I, &I) -> (I, bool),
) -> (Option<I>, usize)
where
    I: Zero + FromPrimitive + OverflowingMul,
{
    let bytes = input.as_bytes();
    let Some(ten) = I::from_u8(10) else {
        return (None, offset);
    };
    let mut acc = I::zero();
    let mut overflow = false;

    while let Some(&byte @ b'0'..=b'9') = bytes.get(offset) {
        offset += 1;
        let (shifted, shift_overflow) = acc.overflowing_mul(&ten);
        let Some(digit) = I::from_u8(byte - b'0') else {
            overflow = true;
            continue;
        };
        let (next, step_overflow) = step(&shifted, &digit);
        overflow |= shift_overflow | step_overflow;
        acc = next;
    }

    ((!overflow).then_some(acc), offset)
}

/// Scans a run of ASCII digits as a decimal number.
///
/// Returns the number (`None` if it does not fit into `I`) and the offset past the last digit. If
/// `offset` does not point to a digit, this returns zero and the unchanged offset.
#[inline]
pub fn ascii_digits<I>(input: &str, offset: usize) -> (Option<I>, usize)
where
    I: Zero + FromPrimitive + OverflowingAdd + OverflowingMul,
{
    fold_digits(input, offset, I::overflowing_add)
}

/// Scans a run of ASCII digits as a decimal number, optionally prefixed by `'-'`.
///
/// A `'-'` only counts when a digit follows it. Negative numbers are accumulated below zero, so
/// `I`'s minimum is in range. An explicit `'+'` is not recognized.
#[inline]
pub fn signed_ascii_digits<I>(input: &str, offset: usize) -> (Option<I>, usize)
where
    I: Zero + FromPrimitive + OverflowingAdd + OverflowingSub + OverflowingMul,
{
    let bytes = input.as_bytes();
    match (bytes.get(offset), bytes.get(offset + 1)) {
        (Some(b'-'), Some(b'0'..=b'9')) => fold_digits(input, offset + 1, I::overflowing_sub),
        _ => ascii_digits(input, offset),
    }
}

/// Returns the offset past `fixed` if the text at `offset` starts with it, `offset` otherwise.
#[inline]
pub fn fixed(input: &str, offset: usize, fixed: &str) -> usize {
    match input.get(offset..) {
        Some(rest) if rest.starts_with(fixed) => offset + fixed.len(),
        _ => offset,
    }
}

/// Passes over characters matching `pred`.
///
/// Increments `offset` past every consecutive character for which `pred` returns `true` and
/// returns the resulting value.
#[inline]
pub fn span_while(input: &str, offset: usize, pred: impl Fn(char) -> bool) -> usize {
    let Some(rest) = input.get(offset..) else {
        return offset;
    };
    match rest.char_indices().find(|&(_, c)| !pred(c)) {
        Some((len, _)) => offset + len,
        None => input.len(),
    }
}

/// Passes over whitespace.
///
/// Uses [`char::is_whitespace`], so this includes newlines.
#[inline]
pub fn whitespace(input: &str, offset: usize) -> usize {
    span_while(input, offset, char::is_whitespace)
}

/// Passes over an identifier if present.
///
/// An identifier starts with an ASCII letter or `'_'` which is followed by any number of ASCII
/// letters, ASCII digits or `'_'`.
#[inline]
pub fn identifier(input: &str, offset: usize) -> usize {
    match input.as_bytes().get(offset) {
        Some(b'a'..=b'z' | b'A'..=b'Z' | b'_') => {
            span_while(input, offset + 1, |c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => offset,
    }
}

/// Returns the byte offset of `rest` within `source`.
///
/// `rest` has to be a suffix of `source`, as is the remainder of any parser invoked on `source`.
#[inline]
pub fn offset_of(source: &str, rest: &str) -> usize {
    debug_assert!(source.ends_with(rest));
    source.len() - rest.len()
}

/// A 1-based position in the input, displayed as `line:column`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct LineColumn {
    /// Line number, starting at `1`.
    pub line: usize,
    /// Column number in bytes, starting at `1`.
    ///
    /// Multi-byte characters before the position count with their UTF-8 length.
    pub column: usize,
}

impl LineColumn {
    /// Computes the location of the byte at `offset` in `source`.
    ///
    /// Lines are terminated by `'\n'`, so a `"\r\n"` line ending counts the `'\r'` as part of the
    /// preceding line. An `offset` past the end is clamped to the end of `source`.
    pub fn at_offset(source: &str, offset: usize) -> Self {
        let before = &source.as_bytes()[..offset.min(source.len())];
        let line_start = before
            .iter()
            .rposition(|&byte| byte == b'\n')
            .map_or(0, |newline| newline + 1);
        LineColumn {
            line: before.iter().filter(|&&byte| byte == b'\n').count() + 1,
            column: before.len() - line_start + 1,
        }
    }
}

impl fmt::Display for LineColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits() {
        assert_eq!(ascii_digits::<u32>("1314rest", 0), (Some(1314), 4));
        assert_eq!(ascii_digits::<u32>("x12", 1), (Some(12), 3));
        assert_eq!(ascii_digits::<u32>("abc", 0), (Some(0), 0));
        assert_eq!(ascii_digits::<u8>("255", 0), (Some(255), 3));
        assert_eq!(ascii_digits::<u8>("256", 0), (None, 3));
        assert_eq!(ascii_digits::<i64>("", 0), (Some(0), 0));
    }

    #[test]
    fn signed_digits() {
        assert_eq!(signed_ascii_digits::<i32>("-42)", 0), (Some(-42), 3));
        assert_eq!(signed_ascii_digits::<i32>("42", 0), (Some(42), 2));
        assert_eq!(signed_ascii_digits::<i32>("-x", 0), (Some(0), 0));
        assert_eq!(signed_ascii_digits::<i8>("-128", 0), (Some(-128), 4));
        assert_eq!(signed_ascii_digits::<i8>("-129", 0), (None, 4));
        assert_eq!(signed_ascii_digits::<i8>("128", 0), (None, 3));
    }

    #[test]
    fn fixed_and_spans() {
        assert_eq!(fixed("</tag>", 0, "</"), 2);
        assert_eq!(fixed("<tag>", 0, "</"), 0);
        assert_eq!(fixed("<", 0, "</"), 0);
        assert_eq!(span_while("abc1 x", 0, char::is_alphanumeric), 4);
        assert_eq!(span_while("äöü!", 0, char::is_alphabetic), "äöü".len());
        assert_eq!(span_while("abc", 1, char::is_alphabetic), 3);
        assert_eq!(whitespace(" \t\n x", 0), 4);
        assert_eq!(identifier("_a1_b+", 0), 5);
        assert_eq!(identifier("1ab", 0), 0);
        assert_eq!(identifier("x", 0), 1);
    }

    #[test]
    fn line_column() {
        let source = "<a>\n  k=v\n</a>";
        assert_eq!(LineColumn::at_offset(source, 0), LineColumn { line: 1, column: 1 });
        assert_eq!(LineColumn::at_offset(source, 6), LineColumn { line: 2, column: 3 });
        assert_eq!(LineColumn::at_offset(source, 10), LineColumn { line: 3, column: 1 });
        assert_eq!(LineColumn::at_offset(source, 100).to_string(), "3:5");
        assert_eq!(offset_of(source, &source[4..]), 4);
    }
}
