//! Pattern-constrained string generator.
//!
//! Synthesizing a string for an arbitrary regular expression is out of
//! reach, so resolution is best effort: the pattern is matched at the start
//! of a fixed reference string (see
//! [`GeneratorOptions::pattern_reference`]). A match yields the matched
//! prefix; anything else, including a pattern that fails to compile, yields
//! an unconstrained random string. The fallback is not guaranteed to satisfy
//! the pattern.

use crate::generators::string::generate_alphanumeric;
use crate::options::GeneratorOptions;
use rand::Rng;
use regex::Regex;
use tracing::debug;

/// Generate a string for a `pattern` node.
pub fn generate_string_by_pattern<R: Rng>(
    pattern: &str,
    rng: &mut R,
    options: &GeneratorOptions,
) -> String {
    match match_prefix(pattern, &options.pattern_reference) {
        Some(matched) => matched,
        None => generate_alphanumeric(rng, options.string_length),
    }
}

/// Match `pattern` anchored at the start of `reference`, returning the
/// matched text.
fn match_prefix(pattern: &str, reference: &str) -> Option<String> {
    let anchored = match Regex::new(&format!(r"\A(?:{pattern})")) {
        Ok(regex) => regex,
        Err(e) => {
            debug!("Pattern '{pattern}' does not compile, using random string: {e}");
            return None;
        }
    };

    match anchored.find(reference) {
        Some(m) => Some(m.as_str().to_string()),
        None => {
            debug!("Pattern '{pattern}' does not match reference, using random string");
            None
        }
    }
}
