//! Tunable generation constants.

use crate::generator::GeneratorError;
use serde::{Deserialize, Serialize};

/// String matched against `pattern` by the pattern resolver.
pub const DEFAULT_PATTERN_REFERENCE: &str = "https://example.com/api/1/json/public/123/abcABC";

/// Options controlling value generation.
///
/// Every field has a default, so a config file only needs the keys it
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorOptions {
    /// Length of unconstrained strings
    pub string_length: usize,

    /// Minimum generated array length (inclusive)
    pub array_min_length: usize,

    /// Maximum generated array length (inclusive)
    pub array_max_length: usize,

    /// Reference string the pattern resolver matches against
    pub pattern_reference: String,

    /// Deepest nesting of arrays, objects and unions before generation fails
    pub max_depth: usize,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            string_length: 10,
            array_min_length: 1,
            array_max_length: 5,
            pattern_reference: DEFAULT_PATTERN_REFERENCE.to_string(),
            max_depth: 64,
        }
    }
}

impl GeneratorOptions {
    /// Check that the options describe a usable configuration.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if self.array_min_length > self.array_max_length {
            return Err(GeneratorError::InvalidOptions(format!(
                "array_min_length ({}) > array_max_length ({})",
                self.array_min_length, self.array_max_length
            )));
        }
        if self.max_depth == 0 {
            return Err(GeneratorError::InvalidOptions(
                "max_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
