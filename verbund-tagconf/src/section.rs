use std::{collections::BTreeMap, fmt};

/// A tagged section containing key-value entries and nested sections.
///
/// All strings borrow from the parsed input.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct Section<'src> {
    /// The tag naming this section.
    pub tag: &'src str,
    /// The entries of this section, ordered by key.
    pub entries: BTreeMap<&'src str, &'src str>,
    /// The nested sections in input order.
    pub children: Vec<Section<'src>>,
}

impl<'src> Section<'src> {
    /// Creates an empty section.
    pub fn new(tag: &'src str) -> Self {
        Section {
            tag,
            ..Section::default()
        }
    }

    /// Returns the value for `key`.
    pub fn get(&self, key: &str) -> Option<&'src str> {
        self.entries.get(key).copied()
    }

    /// Returns the first nested section with the given tag.
    pub fn child(&self, tag: &str) -> Option<&Section<'src>> {
        self.children.iter().find(|child| child.tag == tag)
    }

    /// Returns all nested sections with the given tag.
    pub fn children_tagged<'a>(
        &'a self,
        tag: &'a str,
    ) -> impl Iterator<Item = &'a Section<'src>> + 'a {
        self.children.iter().filter(move |child| child.tag == tag)
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let width = depth * 2;
        writeln!(f, "{:width$}<{}>", "", self.tag, width = width)?;
        for (key, value) in &self.entries {
            if needs_quotes(value) {
                writeln!(f, "{:width$}{key}=\"{value}\"", "", width = width + 2)?;
            } else {
                writeln!(f, "{:width$}{key}={value}", "", width = width + 2)?;
            }
        }
        for child in &self.children {
            child.write_indented(f, depth + 1)?;
        }
        writeln!(f, "{:width$}</{}>", "", self.tag, width = width)
    }
}

fn needs_quotes(value: &str) -> bool {
    value.is_empty() || value.contains(|c: char| c.is_whitespace() || matches!(c, '<' | '>'))
}

/// Writes the section in the tagged configuration format, one item per line.
///
/// Values are quoted when necessary. A value containing `'"'` cannot be represented.
impl fmt::Display for Section<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}
