//! Configuration file loading.
//!
//! The config file is TOML with a single `[generator]` table:
//!
//! ```toml
//! [generator]
//! string_length = 12
//! array_max_length = 3
//! max_depth = 16
//! ```

use anyhow::Context;
use schema_generator::GeneratorOptions;
use serde::Deserialize;
use std::path::Path;

/// Contents of a config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorOptions,
}

impl Config {
    /// Parse a config from TOML text.
    pub fn from_toml(s: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(s).context("Failed to parse config TOML")?;
        config
            .generator
            .validate()
            .context("Invalid [generator] options")?;
        Ok(config)
    }

    /// Load a config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("In config file: {}", path.display()))
    }

    /// Load `path` if given, otherwise use defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.generator, GeneratorOptions::default());
    }

    #[test]
    fn test_partial_generator_table() {
        let config = Config::from_toml(
            r#"
[generator]
string_length = 12
array_max_length = 3
"#,
        )
        .unwrap();
        assert_eq!(config.generator.string_length, 12);
        assert_eq!(config.generator.array_max_length, 3);
        assert_eq!(config.generator.array_min_length, 1);
    }

    #[test]
    fn test_invalid_options_rejected() {
        let result = Config::from_toml(
            r#"
[generator]
array_min_length = 4
array_max_length = 2
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_section_rejected() {
        assert!(Config::from_toml("[generatr]\nmax_depth = 3\n").is_err());
    }

    #[test]
    fn test_load_without_path() {
        assert_eq!(Config::load(None).unwrap(), Config::default());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("datagen.toml");
        std::fs::write(&path, "[generator]\nmax_depth = 8\n").unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.generator.max_depth, 8);
    }
}
