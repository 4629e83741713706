#![allow(dead_code)]

use texkit_preprocess::{
    scan_mixed_content, Attributes, Error, GroupKind, NotationParser, Result, ScanContext,
    TreeBuilder,
};

/// Minimal output tree used to observe what the scanner builds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text {
        content: String,
        attributes: Vec<(String, String)>,
    },
    Group {
        kind: GroupKind,
        children: Vec<Node>,
        attributes: Vec<(String, String)>,
    },
    /// Island source as seen by the parser.
    Math(String),
}

impl Node {
    pub fn math(source: &str) -> Self {
        Node::Math(source.to_string())
    }

    pub fn text(content: &str) -> Self {
        Node::Text {
            content: content.to_string(),
            attributes: Vec::new(),
        }
    }

    pub fn atom(child: Node) -> Self {
        Node::Group {
            kind: GroupKind::Atom,
            children: vec![child],
            attributes: Vec::new(),
        }
    }

    pub fn row(children: Vec<Node>) -> Self {
        Node::Group {
            kind: GroupKind::Row,
            children,
            attributes: Vec::new(),
        }
    }
}

fn owned(attributes: &Attributes) -> Vec<(String, String)> {
    attributes
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub struct MockBuilder;

impl TreeBuilder for MockBuilder {
    type Node = Node;

    fn text_leaf(&self, content: &str, attributes: &Attributes) -> Node {
        Node::Text {
            content: content.to_string(),
            attributes: owned(attributes),
        }
    }

    fn group(&self, kind: GroupKind, children: Vec<Node>, attributes: &Attributes) -> Node {
        Node::Group {
            kind,
            children,
            attributes: owned(attributes),
        }
    }
}

/// Records island sources verbatim; `@bad` anywhere is a grammar error.
pub struct MockParser;

impl NotationParser<Node> for MockParser {
    fn parse_substring(&self, text: &str, _context: &ScanContext) -> Result<Node> {
        if text.contains("@bad") {
            return Err(Error::malformed_notation(
                "UndefinedControlSequence",
                vec!["@bad".to_string()],
            ));
        }
        Ok(Node::Math(text.to_string()))
    }
}

/// Re-scans every island as mixed content inside another `$...$`, so each
/// island nests one level deeper than the last.
pub struct EndlessParser;

impl NotationParser<Node> for EndlessParser {
    fn parse_substring(&self, text: &str, context: &ScanContext) -> Result<Node> {
        let wrapped = format!("${text}$");
        let mut nodes =
            scan_mixed_content(&wrapped, None, self, &MockBuilder, &context.nested())?;
        Ok(nodes.remove(0))
    }
}
