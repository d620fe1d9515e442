//! Main data generator for producing documents from a schema.

use crate::generators::{generate_random_data, GenerationContext};
use crate::options::GeneratorOptions;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use schema_core::SchemaDocument;
use serde_json::{Map, Value};
use tracing::trace;

/// A generated top-level document.
pub type Document = Map<String, Value>;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Schema nesting is deeper than the configured limit
    #[error("Maximum nesting depth {limit} exceeded at '{path}'")]
    DepthExceeded { limit: usize, path: String },

    /// Generator options are inconsistent
    #[error("Invalid generator options: {0}")]
    InvalidOptions(String),

    /// Schema error
    #[error("Schema error: {0}")]
    Schema(#[from] schema_core::SchemaError),
}

/// Generate one document from `schema` with default options, drawing all
/// randomness from `rng`.
pub fn generate<R: Rng>(schema: &SchemaDocument, rng: &mut R) -> Result<Document, GeneratorError> {
    let options = GeneratorOptions::default();
    generate_random_data(schema.root(), rng, &GenerationContext::new(&options)?)
}

/// Data generator that produces reproducible documents.
///
/// Each document gets its own RNG derived from the base seed and the
/// document index, so document N is the same whether it is generated first
/// or after a million others.
pub struct DataGenerator {
    /// Schema driving generation
    schema: SchemaDocument,
    /// Generation tunables
    options: GeneratorOptions,
    /// Base seed
    seed: u64,
    /// Index of the next document
    index: u64,
}

impl DataGenerator {
    /// Create a new data generator with the given schema and seed.
    pub fn new(schema: SchemaDocument, seed: u64) -> Self {
        Self {
            schema,
            options: GeneratorOptions::default(),
            seed,
            index: 0,
        }
    }

    /// Replace the default options.
    pub fn with_options(mut self, options: GeneratorOptions) -> Result<Self, GeneratorError> {
        options.validate()?;
        self.options = options;
        Ok(self)
    }

    /// Set the index of the next document to generate.
    pub fn with_start_index(mut self, index: u64) -> Self {
        self.index = index;
        self
    }

    /// Compute the RNG seed for a specific document index.
    fn compute_rng_seed_for_index(&self, index: u64) -> u64 {
        self.seed
            .wrapping_add(index.wrapping_mul(0x9E3779B97F4A7C15))
    }

    /// Get the index of the next document.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Get the base seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get a reference to the schema.
    pub fn schema(&self) -> &SchemaDocument {
        &self.schema
    }

    /// Get a reference to the options.
    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Generate the next document.
    pub fn next_document(&mut self) -> Result<Document, GeneratorError> {
        let mut rng = StdRng::seed_from_u64(self.compute_rng_seed_for_index(self.index));
        let document = self.generate_with(&mut rng)?;
        trace!("Generated document {}", self.index);
        self.index += 1;
        Ok(document)
    }

    /// Generate a document using a caller-supplied random source. Does not
    /// advance the document index.
    pub fn generate_with<R: Rng>(&self, rng: &mut R) -> Result<Document, GeneratorError> {
        let ctx = GenerationContext::new(&self.options)?;
        generate_random_data(self.schema.root(), rng, &ctx)
    }

    /// Generate multiple documents.
    ///
    /// Returns an iterator that lazily generates documents.
    pub fn documents(&mut self, count: u64) -> DocumentIterator<'_> {
        DocumentIterator {
            generator: self,
            remaining: count,
        }
    }
}

/// Iterator that lazily generates documents.
pub struct DocumentIterator<'a> {
    generator: &'a mut DataGenerator,
    remaining: u64,
}

impl Iterator for DocumentIterator<'_> {
    type Item = Result<Document, GeneratorError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.next_document())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DocumentIterator<'_> {}
