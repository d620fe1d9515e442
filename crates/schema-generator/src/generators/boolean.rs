//! Boolean value generator.

use rand::Rng;

/// Generate `true` or `false` with equal probability.
pub fn generate_bool<R: Rng>(rng: &mut R) -> bool {
    rng.gen_bool(0.5)
}
