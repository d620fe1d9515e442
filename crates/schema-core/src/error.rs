//! Error types for schema loading and parsing.

/// Error type for schema operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Error reading schema file
    #[error("Failed to read schema file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing JSON
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The schema root is not a mapping
    #[error("Schema at '{path}' must be a mapping")]
    NotAMapping { path: String },

    /// A recognized keyword holds a value of the wrong kind
    #[error("Invalid '{keyword}' at '{path}': expected {expected}")]
    InvalidKeyword {
        path: String,
        keyword: &'static str,
        expected: &'static str,
    },

    /// Integer bounds describe an empty range
    #[error("Invalid integer range at '{path}': minimum {minimum} > maximum {maximum}")]
    InvalidRange {
        path: String,
        minimum: i64,
        maximum: i64,
    },
}

impl SchemaError {
    pub(crate) fn invalid(path: &str, keyword: &'static str, expected: &'static str) -> Self {
        SchemaError::InvalidKeyword {
            path: display_path(path),
            keyword,
            expected,
        }
    }
}

/// Render an empty pointer as `/` so messages never show `''`.
pub(crate) fn display_path(path: &str) -> String {
    if path.is_empty() {
        "/".to_string()
    } else {
        path.to_string()
    }
}
