//! Unconstrained string generator.

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Generate `length` characters drawn uniformly, with replacement, from
/// `A-Z`, `a-z` and `0-9`.
pub fn generate_alphanumeric<R: Rng>(rng: &mut R, length: usize) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
