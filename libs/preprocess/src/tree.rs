//! Collaborator contracts for building output trees
//!
//! The scanner does not know the caller's node type. A [`TreeBuilder`]
//! materializes text leaves and groups, and a [`NotationParser`] turns an
//! island of math source into a subtree of the same type.

use crate::context::ScanContext;
use crate::error::Result;

/// Attribute key for the ambient font of text leaves.
pub const MATHVARIANT: &str = "mathvariant";
pub const SCRIPTLEVEL: &str = "scriptlevel";
pub const DISPLAYSTYLE: &str = "displaystyle";

/// Ordered attribute list attached to built nodes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(&'static str, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, replacing any previous value.
    pub fn set(&mut self, key: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn with(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// What a branch node produced by the scanner stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GroupKind {
    /// Wraps the tree of a single notation island.
    Atom,
    /// Groups the segments of one scan.
    Row,
    /// Pins the script level of its subtree.
    StyleScope { level: u8 },
}

/// One piece of scanned mixed content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment<N> {
    Text(String),
    Notation(N),
}

impl<N> Segment<N> {
    pub fn is_text(&self) -> bool {
        matches!(self, Segment::Text(_))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Segment::Text(text) => Some(text),
            Segment::Notation(_) => None,
        }
    }

    pub fn as_notation(&self) -> Option<&N> {
        match self {
            Segment::Notation(node) => Some(node),
            Segment::Text(_) => None,
        }
    }
}

/// Materializes output nodes.
pub trait TreeBuilder {
    type Node;

    fn text_leaf(&self, content: &str, attributes: &Attributes) -> Self::Node;

    fn group(&self, kind: GroupKind, children: Vec<Self::Node>, attributes: &Attributes)
        -> Self::Node;
}

/// Parses an island of math source.
///
/// Errors are propagated unchanged by the scanner; grammar failures should be
/// reported as [`Error::MalformedNotation`](crate::Error::MalformedNotation).
/// Implementations that scan nested mixed content (e.g. `\text{...}`) must
/// call back into the scanner with [`ScanContext::nested`].
pub trait NotationParser<N> {
    fn parse_substring(&self, text: &str, context: &ScanContext) -> Result<N>;
}

impl<N, F> NotationParser<N> for F
where
    F: Fn(&str, &ScanContext) -> Result<N>,
{
    fn parse_substring(&self, text: &str, context: &ScanContext) -> Result<N> {
        self(text, context)
    }
}
