/// Return type of a parser that can fall through to another parser on unexpected input.
///
/// A parser is invoked on an input slice and either matches a prefix of it, returning the parsed
/// value together with the unconsumed remainder, or falls through. The remainder of a [`Match`] is
/// always a suffix of the slice the parser was invoked on.
///
/// A [`Fallthrough`] carries neither a value nor a position. Parsers never consume input when they
/// fall through, so a caller that wants to try another parser simply retries with the same slice
/// it passed to the failing one.
///
/// Most code does not match on `Parsed` directly but combines results using the provided
/// methods: [`and_then`][Parsed::and_then] for sequencing, [`or_parse`][Parsed::or_parse] for
/// choice and [`map`][Parsed::map] for transforming the parsed value.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parsed<'src, T> {
    /// The input matched, yielding a value and the remaining input.
    Match(T, &'src str),
    /// The input does not match the expected input of the parser.
    ///
    /// This leaves the input unchanged, so that another parser can be tried.
    Fallthrough,
}

pub use Parsed::*;

impl<'src, T> Parsed<'src, T> {
    /// Returns whether the input matched.
    #[inline]
    pub fn is_match(&self) -> bool {
        matches!(self, Match(..))
    }

    /// Returns the parsed value, discarding the remainder.
    #[inline]
    pub fn value(self) -> Option<T> {
        match self {
            Match(value, _) => Some(value),
            Fallthrough => None,
        }
    }

    /// Returns the unconsumed input following a match.
    #[inline]
    pub fn remainder(&self) -> Option<&'src str> {
        match self {
            Match(_, rest) => Some(rest),
            Fallthrough => None,
        }
    }

    /// Converts this into an `Option` of the parsed value and the remaining input.
    #[inline]
    pub fn into_option(self) -> Option<(T, &'src str)> {
        match self {
            Match(value, rest) => Some((value, rest)),
            Fallthrough => None,
        }
    }

    /// Continues parsing the remaining input when the input matched.
    ///
    /// The passed parser receives the parsed value and the remainder. When it falls through, the
    /// whole sequence falls through, no matter how much input the first parser matched.
    #[inline]
    pub fn and_then<U>(
        self,
        parse: impl FnOnce(T, &'src str) -> Parsed<'src, U>,
    ) -> Parsed<'src, U> {
        match self {
            Match(value, rest) => parse(value, rest),
            Fallthrough => Fallthrough,
        }
    }

    /// Tries a different parser when the input did not match.
    ///
    /// As a parser that falls through does not consume any input, the alternative parser is
    /// expected to start at the same position as the one that failed.
    #[inline]
    pub fn or_parse(self, parse: impl FnOnce() -> Parsed<'src, T>) -> Parsed<'src, T> {
        match self {
            Fallthrough => parse(),
            matched => matched,
        }
    }

    /// Makes the expected input of the returning parser optional.
    ///
    /// This always matches: with `None` and the unchanged `input` on fall through.
    #[inline]
    pub fn optional(self, input: &'src str) -> Parsed<'src, Option<T>> {
        match self {
            Match(value, rest) => Match(Some(value), rest),
            Fallthrough => Match(None, input),
        }
    }

    /// Turns a fall through into an error, making the expected input mandatory.
    #[inline]
    pub fn or_give_up<E>(self, err: impl FnOnce() -> E) -> Result<(T, &'src str), E> {
        match self {
            Match(value, rest) => Ok((value, rest)),
            Fallthrough => Err(err()),
        }
    }

    /// Replaces a successfully parsed value with the value returned when applying the function `f`
    /// to it.
    ///
    /// The remainder stays unchanged and a fall through is returned unchanged.
    #[inline]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Parsed<'src, U> {
        match self {
            Match(value, rest) => Match(f(value), rest),
            Fallthrough => Fallthrough,
        }
    }
}

impl<'src, T> From<Option<(T, &'src str)>> for Parsed<'src, T> {
    #[inline]
    fn from(parsed: Option<(T, &'src str)>) -> Self {
        match parsed {
            Some((value, rest)) => Match(value, rest),
            None => Fallthrough,
        }
    }
}
