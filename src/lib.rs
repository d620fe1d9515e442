//! schema-datagen library
//!
//! Generates synthetic JSON documents from a declarative schema describing
//! object shapes, field types, constraints and value distributions.
//!
//! # Crates
//!
//! - `schema_core` - schema loading and the tagged [`SchemaNode`] model
//! - `schema_generator` - the recursive value generator
//! - `populate_jsonl` - JSON Lines output with metrics
//!
//! This crate adds the pieces the `schema-datagen` binary needs on top:
//! config-file loading and a human-readable schema outline.
//!
//! # CLI Usage
//!
//! ```bash
//! # Five documents as JSON Lines on stdout
//! schema-datagen generate --schema demos/event_schema.json --count 5 --seed 42
//!
//! # Write to a file with custom generator options
//! schema-datagen generate -s schema.yaml -n 1000 -o out.jsonl --config datagen.toml
//!
//! # Check how a schema will be interpreted
//! schema-datagen inspect --schema demos/event_schema.json
//! ```

pub mod config;
pub mod inspect;

pub use populate_jsonl as jsonl;
pub use schema_core::{SchemaDocument, SchemaNode};
pub use schema_generator::{DataGenerator, GeneratorOptions};
