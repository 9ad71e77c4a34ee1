//! Error types.
use thiserror::Error;

pub use verbund::{text::LineColumn, SyntaxError};

/// An error while reading a tagged configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input does not follow the syntax of the format.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// A section is closed using a different tag than the one that opened it.
    #[error("{location}: closing tag `{found}` does not match opening tag `{expected}`")]
    MismatchedTag {
        /// Location of the closing tag's name.
        location: LineColumn,
        /// The tag of the opened section.
        expected: String,
        /// The tag used to close the section.
        found: String,
    },
    /// A section contains the same key more than once.
    #[error("{location}: duplicate key `{key}` in section `{tag}`")]
    DuplicateKey {
        /// Location of the repeated key.
        location: LineColumn,
        /// The tag of the section containing the key.
        tag: String,
        /// The repeated key.
        key: String,
    },
}
