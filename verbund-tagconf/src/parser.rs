use std::collections::btree_map;

use verbund::{identifier, literal, span, text::LineColumn, whitespace, Combinator};

use crate::{error::Error, section::Section, Config};

/// A section as parsed, before its tags and keys are validated.
#[derive(Debug)]
struct Node<'src> {
    open: &'src str,
    items: Vec<Item<'src>>,
    close: &'src str,
}

#[derive(Debug)]
enum Item<'src> {
    Entry(&'src str, &'src str),
    Child(Node<'src>),
}

/// Parser for the tagged configuration format.
///
/// The grammar is
///
/// ```text
/// document = blank? section blank?
/// section  = "<" name ">" blank? ((entry | section) blank?)* "</" name ">"
/// entry    = name "=" value
/// value    = '"' [^"]* '"' | [^ \t\n<>"]+
/// ```
///
/// where `name` is an identifier. Matching of opening and closing tags and uniqueness of keys is
/// checked after parsing, as configured by [`Config`].
#[derive(Debug)]
pub struct Parser<'src> {
    config: Config,
    section: Combinator<'src, Node<'src>>,
    document: Combinator<'src, Node<'src>>,
}

impl<'src> Parser<'src> {
    /// Builds the grammar.
    pub fn new(config: Config) -> Self {
        let section = Combinator::declare();

        let name = identifier();
        let open = literal("<")
            .then(&name)
            .then(&literal(">"))
            .map(|_, tag, _| tag);
        let close = literal("</")
            .then(&name)
            .then(&literal(">"))
            .map(|_, tag, _| tag);

        let quoted = literal("\"")
            .then(&span(|c| c != '"').optional())
            .then(&literal("\""))
            .map(|_, value, _| value.unwrap_or(""));
        let bare = span(|c| !c.is_whitespace() && !matches!(c, '<' | '>' | '"'));
        let entry = name
            .then(&literal("="))
            .then(&quoted.or(&bare))
            .map(|key, _, value| (key, value));

        let blank = whitespace().optional();
        let item = entry
            .either(&section)
            .map(|(key, value)| Item::Entry(key, value), Item::Child)
            .then(&blank)
            .map(|item, _| item);

        section.define(
            open.then(&blank)
                .then(&item.many())
                .then(&close)
                .map(|open, _, items, close| Node { open, items, close }),
        );
        let document = section.padded();

        Parser {
            config,
            section,
            document,
        }
    }

    /// Parses and validates a complete input containing a single top-level section.
    pub fn parse(&self, input: &'src str) -> Result<Section<'src>, Error> {
        let node = self.document.parse_all(input)?;
        self.validate(input, node)
    }

    fn validate(&self, input: &'src str, node: Node<'src>) -> Result<Section<'src>, Error> {
        if self.config.check_close_tags && node.open != node.close {
            return Err(Error::MismatchedTag {
                location: location(input, node.close),
                expected: node.open.to_owned(),
                found: node.close.to_owned(),
            });
        }

        let mut section = Section::new(node.open);
        for item in node.items {
            match item {
                Item::Entry(key, value) => match section.entries.entry(key) {
                    btree_map::Entry::Vacant(slot) => {
                        slot.insert(value);
                    }
                    btree_map::Entry::Occupied(_) if self.config.reject_duplicate_keys => {
                        return Err(Error::DuplicateKey {
                            location: location(input, key),
                            tag: node.open.to_owned(),
                            key: key.to_owned(),
                        });
                    }
                    btree_map::Entry::Occupied(_) => (),
                },
                Item::Child(child) => section.children.push(self.validate(input, child)?),
            }
        }
        Ok(section)
    }
}

impl<'src> Drop for Parser<'src> {
    fn drop(&mut self) {
        self.section.reset();
    }
}

/// Location of `fragment`, which must be a subslice of `input`.
fn location(input: &str, fragment: &str) -> LineColumn {
    let offset = (fragment.as_ptr() as usize).saturating_sub(input.as_ptr() as usize);
    LineColumn::at_offset(input, offset)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use verbund::SyntaxErrorKind;

    use super::*;
    use crate::parse;

    const SERVER: &str = r#"
<server>
  host=example.org port=8080
  <tls> cert="/etc/my cert.pem" enabled=yes </tls>
  <route>path=/</route>
  <route> path=/api methods="" </route>
</server>
"#;

    #[test]
    fn nested_sections() -> Result<(), Error> {
        let server = parse(SERVER, &Config::default())?;

        assert_eq!(server.tag, "server");
        assert_eq!(server.get("host"), Some("example.org"));
        assert_eq!(server.get("port"), Some("8080"));

        let tags: Vec<_> = server.children.iter().map(|child| child.tag).collect();
        assert_eq!(tags, ["tls", "route", "route"]);

        let tls = server.child("tls").unwrap();
        assert_eq!(tls.get("cert"), Some("/etc/my cert.pem"));
        assert_eq!(tls.get("enabled"), Some("yes"));

        let paths: Vec<_> = server
            .children_tagged("route")
            .filter_map(|route| route.get("path"))
            .collect();
        assert_eq!(paths, ["/", "/api"]);
        assert_eq!(server.children[2].get("methods"), Some(""));
        Ok(())
    }

    #[test]
    fn empty_sections() -> Result<(), Error> {
        let section = parse("<a></a>", &Config::default())?;
        assert_eq!(section, Section::new("a"));
        let section = parse("<a><b></b></a>", &Config::default())?;
        assert_eq!(section.children, [Section::new("b")]);
        Ok(())
    }

    #[test]
    fn blank_content() -> Result<(), Error> {
        assert_eq!(parse("<a> </a>", &Config::default())?, Section::new("a"));
        assert_eq!(parse("<a>\n</a>", &Config::default())?, Section::new("a"));

        let section = parse("<a> <b> </b> </a>", &Config::default())?;
        assert_eq!(section.children, [Section::new("b")]);

        let section = parse("<a>\n  k=v\n  <b>\n  </b>\n</a>\n", &Config::default())?;
        assert_eq!(section.get("k"), Some("v"));
        assert_eq!(section.children, [Section::new("b")]);
        Ok(())
    }

    #[test]
    fn display_round_trip() -> Result<(), Error> {
        let server = parse(SERVER, &Config::default())?;
        let written = server.to_string();
        assert_eq!(parse(&written, &Config::default())?, server);

        let mut outer = Section::new("outer");
        outer.children.push(Section::new("empty"));
        let written = outer.to_string();
        assert_eq!(written, "<outer>\n  <empty>\n  </empty>\n</outer>\n");
        assert_eq!(parse(&written, &Config::default())?, outer);
        Ok(())
    }

    #[test]
    fn mismatched_tags() -> Result<(), Error> {
        let input = "<a>\n  <b> </c>\n</a>";
        let err = parse(input, &Config::default()).unwrap_err();
        assert_matches!(
            &err,
            Error::MismatchedTag { location: LineColumn { line: 2, column: 9 }, expected, found }
                if expected == "b" && found == "c"
        );
        assert_eq!(
            err.to_string(),
            "2:9: closing tag `c` does not match opening tag `b`"
        );

        let section = parse(input, &Config::default().check_close_tags(false))?;
        assert_eq!(section.children[0].tag, "b");
        Ok(())
    }

    #[test]
    fn duplicate_keys() -> Result<(), Error> {
        let input = "<a> k=1 k=2 </a>";
        assert_matches!(
            parse(input, &Config::default()),
            Err(Error::DuplicateKey { location: LineColumn { line: 1, column: 9 }, tag, key })
                if tag == "a" && key == "k"
        );

        let section = parse(input, &Config::default().reject_duplicate_keys(false))?;
        assert_eq!(section.get("k"), Some("1"));
        Ok(())
    }

    #[test]
    fn syntax_errors() {
        assert_matches!(
            parse("<a> k= </a>", &Config::default()),
            Err(Error::Syntax(err)) if err.kind == SyntaxErrorKind::NoMatch
        );
        assert_matches!(
            parse("<a> k=\"v </a>", &Config::default()),
            Err(Error::Syntax(err)) if err.kind == SyntaxErrorKind::NoMatch
        );
        assert_matches!(
            parse("<a></a> <b></b>", &Config::default()),
            Err(Error::Syntax(err)) if err.kind == SyntaxErrorKind::TrailingInput && err.offset == 8
        );
    }

    #[test]
    fn reusable_parser() -> Result<(), Error> {
        let inputs = ["<a> x=1 </a>", "<b> y=2 </b>"];
        let parser = Parser::new(Config::default());
        for input in inputs {
            let section = parser.parse(input)?;
            assert_eq!(section.entries.len(), 1);
        }
        Ok(())
    }
}
