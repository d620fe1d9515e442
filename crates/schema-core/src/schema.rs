//! Top-level schema documents.
//!
//! A document is an object schema: its `properties` drive generation of the
//! top-level mapping. Everything else at the root (`$schema`, `definitions`,
//! `type`, ...) is kept in the raw value but not interpreted.

use crate::error::SchemaError;
use crate::node::ObjectSchema;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// A parsed schema document.
#[derive(Debug, Clone)]
pub struct SchemaDocument {
    root: ObjectSchema,
    raw: Value,
}

impl SchemaDocument {
    /// Parse a schema from an already-deserialized value.
    pub fn from_value(raw: Value) -> Result<Self, SchemaError> {
        let root = ObjectSchema::parse(&raw)?;
        Ok(Self { root, raw })
    }

    /// Parse a schema from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Parse a schema from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        Self::from_value(serde_yaml::from_str(yaml)?)
    }

    /// Load a schema file. `.yaml` and `.yml` files are read as YAML,
    /// anything else as JSON.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml(&content),
            _ => Self::from_json(&content),
        }
    }

    /// The root object schema.
    pub fn root(&self) -> &ObjectSchema {
        &self.root
    }

    /// The raw document this schema was parsed from.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Top-level property names in declaration order.
    pub fn property_names(&self) -> Vec<&str> {
        self.root.property_names()
    }
}
