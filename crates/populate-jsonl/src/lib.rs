//! JSONL (JSON Lines) populator for schema-datagen.
//!
//! This crate writes generated documents one per line, either to a file or
//! to any [`std::io::Write`] sink.
//!
//! # Example
//!
//! ```ignore
//! use populate_jsonl::JsonlPopulator;
//! use schema_core::SchemaDocument;
//! use schema_generator::GeneratorOptions;
//!
//! let schema = SchemaDocument::from_file("schema.json")?;
//! let mut populator = JsonlPopulator::new(schema, 42, GeneratorOptions::default())?;
//!
//! let metrics = populator.populate("output.jsonl", 1000)?;
//! println!("Generated {} documents in {:?}", metrics.documents_written, metrics.total_duration);
//! ```

pub mod args;
pub mod error;
pub mod populator;

pub use args::{GenerateArgs, OutputFormat};
pub use error::JsonlPopulatorError;
pub use populator::{JsonlPopulator, PopulateMetrics};
