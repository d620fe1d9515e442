//! Enumeration and union generators.

use crate::generator::GeneratorError;
use crate::generators::{generate_value, GenerationContext};
use rand::seq::SliceRandom;
use rand::Rng;
use schema_core::SchemaNode;
use serde_json::Value;

/// Pick one literal uniformly from an `enum`. Empty input yields null.
pub fn choose_literal<R: Rng>(candidates: &[Value], rng: &mut R) -> Value {
    candidates.choose(rng).cloned().unwrap_or(Value::Null)
}

/// Pick one `anyOf` alternative uniformly for this call and generate from it.
/// Empty input yields null.
pub fn generate_any_of<R: Rng>(
    alternatives: &[SchemaNode],
    rng: &mut R,
    ctx: &GenerationContext<'_>,
) -> Result<Value, GeneratorError> {
    if alternatives.is_empty() {
        return Ok(Value::Null);
    }

    let idx = rng.gen_range(0..alternatives.len());
    let branch_ctx = ctx.descend(&format!("anyOf/{idx}"))?;
    generate_value(&alternatives[idx], rng, &branch_ctx)
}
