//! Parser for a small tagged configuration format.
//!
//! A document consists of a single section. A section starts with an opening tag `<name>`,
//! contains any number of `key=value` entries and nested sections and ends with the matching
//! closing tag `</name>`. Items are separated by optional whitespace. Values that contain
//! whitespace or angle brackets are written in double quotes:
//!
//! ```text
//! <server>
//!   host=example.org port=8080
//!   <tls> cert="/etc/my cert.pem" </tls>
//! </server>
//! ```
//!
//! Parsing produces a borrowed [`Section`] tree:
//!
//! ```rust
//! let server = verbund_tagconf::parse(
//!     "<server> port=8080 <tls> enabled=yes </tls> </server>",
//!     &Default::default(),
//! )?;
//! assert_eq!(server.get("port"), Some("8080"));
//! assert_eq!(server.child("tls").and_then(|tls| tls.get("enabled")), Some("yes"));
//! # Ok::<(), verbund_tagconf::Error>(())
//! ```

#![warn(missing_docs)]
mod error;
mod parser;
mod section;

pub use error::{Error, LineColumn, SyntaxError};
pub use parser::Parser;
pub use section::Section;

/// Configuration for the tagged configuration parser.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct Config {
    /// When set, a section has to be closed using the same tag that opened it. (Default: `true`)
    pub check_close_tags: bool,
    /// When set, a key may appear only once per section. Otherwise the first value of a repeated
    /// key is kept. (Default: `true`)
    pub reject_duplicate_keys: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            check_close_tags: true,
            reject_duplicate_keys: true,
        }
    }
}

impl Config {
    #[inline]
    /// Sets the [`check_close_tags`][Self#structfield.check_close_tags] field.
    pub fn check_close_tags(mut self, value: bool) -> Self {
        self.check_close_tags = value;
        self
    }

    #[inline]
    /// Sets the [`reject_duplicate_keys`][Self#structfield.reject_duplicate_keys] field.
    pub fn reject_duplicate_keys(mut self, value: bool) -> Self {
        self.reject_duplicate_keys = value;
        self
    }
}

/// Parses and validates a complete document.
///
/// This builds a new [`Parser`] for every call, use a parser directly to read several documents.
pub fn parse<'src>(input: &'src str, config: &Config) -> Result<Section<'src>, Error> {
    Parser::new(config.clone()).parse(input)
}
