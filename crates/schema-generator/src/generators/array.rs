//! Array value generator.

use crate::generator::GeneratorError;
use crate::generators::{generate_value, GenerationContext};
use rand::Rng;
use schema_core::SchemaNode;
use serde_json::Value;

/// Generate an array whose length is drawn uniformly from the configured
/// inclusive range, each element generated independently from `items`.
pub fn generate_array<R: Rng>(
    items: &SchemaNode,
    rng: &mut R,
    ctx: &GenerationContext<'_>,
) -> Result<Vec<Value>, GeneratorError> {
    let options = ctx.options();
    let length = rng.gen_range(options.array_min_length..=options.array_max_length);

    (0..length)
        .map(|i| {
            let element_ctx = ctx.descend(&i.to_string())?;
            generate_value(items, rng, &element_ctx)
        })
        .collect()
}
