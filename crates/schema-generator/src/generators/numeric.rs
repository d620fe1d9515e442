//! Numeric value generators.

use rand::Rng;
use serde_json::Value;

/// Generate a random integer in the given range (inclusive).
///
/// `min > max` is a caller error; schema parsing rejects such bounds before
/// they reach here.
pub fn generate_int_range<R: Rng>(rng: &mut R, min: i64, max: i64) -> Value {
    Value::from(rng.gen_range(min..=max))
}
