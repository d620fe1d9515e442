//! Core schema types for schema-datagen.
//!
//! This crate turns a raw schema document (JSON or YAML) into a tree of
//! [`SchemaNode`] values. Shape recognition happens once, here, so the
//! generator only ever dispatches on a closed set of variants:
//!
//! ```text
//! raw document (serde_json::Value)
//!    │
//!    ▼
//! SchemaDocument ── ObjectSchema ── PropertySchema* ── SchemaNode
//!                                                       ├─ Null
//!                                                       ├─ String { pattern }
//!                                                       ├─ Integer { minimum, maximum }
//!                                                       ├─ Boolean
//!                                                       ├─ Array { items }
//!                                                       ├─ Object(ObjectSchema)
//!                                                       ├─ Enum(values)
//!                                                       └─ AnyOf(alternatives)
//! ```
//!
//! # Example
//!
//! ```rust
//! use schema_core::{SchemaDocument, SchemaNode};
//!
//! let doc = SchemaDocument::from_json(r#"{
//!     "type": "object",
//!     "properties": {
//!         "age": { "type": "integer", "minimum": 18, "maximum": 80 }
//!     }
//! }"#).unwrap();
//!
//! let age = &doc.root().properties[0];
//! assert_eq!(age.name, "age");
//! assert_eq!(age.node, SchemaNode::Integer { minimum: 18, maximum: 80 });
//! ```

pub mod error;
pub mod node;
pub mod schema;

pub use error::SchemaError;
pub use node::{
    ObjectSchema, PropertySchema, SchemaNode, DEFAULT_INTEGER_MAXIMUM, DEFAULT_INTEGER_MINIMUM,
};
pub use schema::SchemaDocument;
