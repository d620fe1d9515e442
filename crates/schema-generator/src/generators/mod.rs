//! Individual value generators and the schema walker that dispatches to them.
//!
//! [`generate_value`] resolves a [`SchemaNode`] to a JSON value. Composite
//! nodes recurse through [`GenerationContext::descend`], which tracks the
//! nesting depth and the location used in error messages.

pub mod array;
pub mod boolean;
pub mod choice;
pub mod numeric;
pub mod object;
pub mod pattern;
pub mod string;

use crate::generator::GeneratorError;
use crate::options::GeneratorOptions;
use rand::Rng;
use schema_core::SchemaNode;
use serde_json::Value;

pub use object::generate_random_data;
pub use pattern::generate_string_by_pattern;

/// Per-call state threaded through the recursive walk.
#[derive(Debug, Clone)]
pub struct GenerationContext<'a> {
    options: &'a GeneratorOptions,
    depth: usize,
    path: String,
}

impl<'a> GenerationContext<'a> {
    /// Context for the top-level document. Fails if `options` do not
    /// validate.
    pub fn new(options: &'a GeneratorOptions) -> Result<Self, GeneratorError> {
        options.validate()?;
        Ok(Self {
            options,
            depth: 0,
            path: String::new(),
        })
    }

    pub fn options(&self) -> &'a GeneratorOptions {
        self.options
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Location of the value being generated, e.g. `/attendees/2/userId`.
    pub fn path(&self) -> &str {
        if self.path.is_empty() {
            "/"
        } else {
            &self.path
        }
    }

    /// Context for a child value one level deeper.
    pub fn descend(&self, segment: &str) -> Result<Self, GeneratorError> {
        let depth = self.depth + 1;
        let path = format!("{}/{}", self.path, segment);
        if depth > self.options.max_depth {
            return Err(GeneratorError::DepthExceeded {
                limit: self.options.max_depth,
                path,
            });
        }
        Ok(Self {
            options: self.options,
            depth,
            path,
        })
    }
}

/// Generate a value matching `node`.
///
/// Never fails on schema shape; the only error is exceeding the configured
/// nesting depth.
pub fn generate_value<R: Rng>(
    node: &SchemaNode,
    rng: &mut R,
    ctx: &GenerationContext<'_>,
) -> Result<Value, GeneratorError> {
    let value = match node {
        SchemaNode::Null => Value::Null,

        SchemaNode::String { pattern: None } => {
            Value::String(string::generate_alphanumeric(rng, ctx.options().string_length))
        }

        SchemaNode::String {
            pattern: Some(pattern),
        } => Value::String(generate_string_by_pattern(pattern, rng, ctx.options())),

        SchemaNode::Integer { minimum, maximum } => {
            numeric::generate_int_range(rng, *minimum, *maximum)
        }

        SchemaNode::Boolean => Value::Bool(boolean::generate_bool(rng)),

        SchemaNode::Array { items } => Value::Array(array::generate_array(items, rng, ctx)?),

        SchemaNode::Object(object) => Value::Object(generate_random_data(object, rng, ctx)?),

        SchemaNode::Enum(candidates) => choice::choose_literal(candidates, rng),

        SchemaNode::AnyOf(alternatives) => choice::generate_any_of(alternatives, rng, ctx)?,
    };
    Ok(value)
}
