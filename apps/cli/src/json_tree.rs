//! JSON rendering of scanned mixed content
//!
//! Islands are not parsed any further than needed to show the structure: a
//! `\text{...}` island is scanned again as mixed content, anything else is
//! kept as its source.

use serde_json::{json, Map, Value};
use texkit_preprocess::{
    scan_mixed_content, Attributes, GroupKind, NotationParser, Result, ScanContext, TreeBuilder,
};

pub struct JsonBuilder;

impl TreeBuilder for JsonBuilder {
    type Node = Value;

    fn text_leaf(&self, content: &str, attributes: &Attributes) -> Value {
        json!({
            "type": "text",
            "content": content,
            "attributes": attributes_json(attributes),
        })
    }

    fn group(&self, kind: GroupKind, children: Vec<Value>, attributes: &Attributes) -> Value {
        let kind = match kind {
            GroupKind::Atom => "atom",
            GroupKind::Row => "row",
            GroupKind::StyleScope { .. } => "style",
        };
        json!({
            "type": kind,
            "attributes": attributes_json(attributes),
            "children": children,
        })
    }
}

pub struct SourceParser;

impl NotationParser<Value> for SourceParser {
    fn parse_substring(&self, text: &str, context: &ScanContext) -> Result<Value> {
        if let Some(inner) = text_argument(text) {
            let children = scan_mixed_content(inner, None, self, &JsonBuilder, &context.nested())?;
            return Ok(json!({ "type": "text-command", "children": children }));
        }
        Ok(json!({ "type": "notation", "source": text }))
    }
}

fn text_argument(source: &str) -> Option<&str> {
    source.trim().strip_prefix("\\text{")?.strip_suffix('}')
}

fn attributes_json(attributes: &Attributes) -> Value {
    let map: Map<String, Value> = attributes
        .iter()
        .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
        .collect();
    Value::Object(map)
}
