//! Human-readable outline of a parsed schema.
//!
//! Shows how every property will be generated, e.g.
//!
//! ```text
//! id: anyOf (required)
//!   - string
//!   - integer [0, 100]
//! attendees: array = [] (required)
//!   items: null
//! ```

use schema_core::{ObjectSchema, SchemaDocument, SchemaNode};
use std::fmt::Write;

const INDENT: &str = "  ";

/// Render the outline of a schema document.
pub fn describe_schema(schema: &SchemaDocument) -> String {
    let mut out = String::new();
    describe_object(schema.root(), 0, &mut out);
    out
}

fn describe_object(object: &ObjectSchema, level: usize, out: &mut String) {
    for property in &object.properties {
        push_indent(level, out);
        let _ = write!(out, "{}: {}", property.name, summary(&property.node));
        if let Some(default) = &property.default {
            let _ = write!(out, " = {default}");
        }
        if object.is_required(&property.name) {
            out.push_str(" (required)");
        }
        out.push('\n');
        describe_children(&property.node, level + 1, out);
    }
}

fn describe_children(node: &SchemaNode, level: usize, out: &mut String) {
    match node {
        SchemaNode::Array { items } => {
            push_indent(level, out);
            let _ = writeln!(out, "items: {}", summary(items));
            describe_children(items, level + 1, out);
        }
        SchemaNode::Object(object) => describe_object(object, level, out),
        SchemaNode::AnyOf(alternatives) => {
            for alternative in alternatives {
                push_indent(level, out);
                let _ = writeln!(out, "- {}", summary(alternative));
                describe_children(alternative, level + 1, out);
            }
        }
        _ => {}
    }
}

fn summary(node: &SchemaNode) -> String {
    match node {
        SchemaNode::String {
            pattern: Some(pattern),
        } => format!("string /{pattern}/"),
        SchemaNode::Integer { minimum, maximum } => format!("integer [{minimum}, {maximum}]"),
        SchemaNode::Enum(candidates) => {
            let candidates: Vec<String> = candidates.iter().map(|c| c.to_string()).collect();
            format!("enum {{{}}}", candidates.join(", "))
        }
        other => other.kind().to_string(),
    }
}

fn push_indent(level: usize, out: &mut String) {
    for _ in 0..level {
        out.push_str(INDENT);
    }
}
