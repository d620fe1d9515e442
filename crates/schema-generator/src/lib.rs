//! Schema-driven random data generator.
//!
//! This crate provides the [`DataGenerator`], which walks a parsed
//! [`SchemaDocument`](schema_core::SchemaDocument) and produces a fresh JSON
//! document matching its declared shape. Randomness always comes from an
//! explicit [`rand::Rng`]; `DataGenerator` seeds one per document so runs
//! are reproducible.
//!
//! # Architecture
//!
//! ```text
//! SchemaDocument
//!        │
//!        ▼
//! ┌──────────────────────┐
//! │    DataGenerator     │
//! │  - seed, index       │
//! │  - options           │
//! └──────────┬───────────┘
//!            │ StdRng per document
//!            ▼
//!   generate_random_data ◄──────────┐   (object assembler)
//!            │                      │
//!            ▼                      │
//!     generate_value ───────────────┤   (schema walker)
//!       │   │   │   │               │
//!       │   │   │   └─ array / anyOf┘
//!       │   │   └───── enum
//!       │   └───────── pattern resolver
//!       └───────────── string / integer / boolean
//! ```
//!
//! # Example
//!
//! ```rust
//! use schema_core::SchemaDocument;
//! use schema_generator::DataGenerator;
//!
//! let schema = SchemaDocument::from_json(r#"{
//!     "properties": {
//!         "name": { "type": "string" },
//!         "age": { "type": "integer", "minimum": 18, "maximum": 80 },
//!         "tags": { "type": "array", "default": [] }
//!     }
//! }"#).unwrap();
//!
//! let mut generator = DataGenerator::new(schema, 42);
//! let document = generator.next_document().unwrap();
//! assert_eq!(document["name"].as_str().unwrap().len(), 10);
//! assert_eq!(document["tags"], serde_json::json!([]));
//! ```

pub mod generator;
pub mod generators;
pub mod options;

// Re-exports for convenience
pub use generator::{generate, DataGenerator, Document, DocumentIterator, GeneratorError};
pub use generators::{generate_value, GenerationContext};
pub use options::GeneratorOptions;
