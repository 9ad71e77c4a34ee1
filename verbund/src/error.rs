//! Error types.
use thiserror::Error;

use crate::text::LineColumn;

/// The reason why parsing a complete input failed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SyntaxErrorKind {
    /// The parser fell through at the start of the input.
    #[error("input does not match")]
    NoMatch,
    /// The parser matched, but did not consume the complete input.
    #[error("unexpected trailing input")]
    TrailingInput,
}

/// Error returned by [`Combinator::parse_all`][crate::Combinator::parse_all].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{location}: {kind}")]
pub struct SyntaxError {
    /// Location of the error.
    pub location: LineColumn,
    /// Byte offset of the error.
    pub offset: usize,
    /// What went wrong.
    pub kind: SyntaxErrorKind,
}

impl SyntaxError {
    /// Creates an error for the byte at `offset` in `source`.
    pub fn new(source: &str, offset: usize, kind: SyntaxErrorKind) -> Self {
        SyntaxError {
            location: LineColumn::at_offset(source, offset),
            offset,
            kind,
        }
    }
}
