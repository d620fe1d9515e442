//! JSONL populator.

use crate::args::OutputFormat;
use crate::error::JsonlPopulatorError;
use schema_core::SchemaDocument;
use schema_generator::{DataGenerator, GeneratorOptions};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for JSONL writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// How often progress is logged, in documents.
const PROGRESS_INTERVAL: u64 = 10_000;

/// Metrics from a populate operation.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Number of documents written.
    pub documents_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Time spent generating data.
    pub generation_duration: Duration,
    /// Time spent writing data.
    pub write_duration: Duration,
    /// Bytes written by this operation.
    pub bytes_written: u64,
}

impl PopulateMetrics {
    /// Calculate documents per second.
    pub fn documents_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.documents_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Calculate bytes per second.
    pub fn bytes_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.bytes_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Populator that writes generated documents as JSON Lines.
pub struct JsonlPopulator {
    generator: DataGenerator,
    format: OutputFormat,
}

impl JsonlPopulator {
    /// Create a new JSONL populator.
    ///
    /// # Arguments
    ///
    /// * `schema` - Schema the documents are generated from
    /// * `seed` - Random seed for deterministic generation
    /// * `options` - Generator options
    pub fn new(
        schema: SchemaDocument,
        seed: u64,
        options: GeneratorOptions,
    ) -> Result<Self, JsonlPopulatorError> {
        let generator = DataGenerator::new(schema, seed).with_options(options)?;
        Ok(Self {
            generator,
            format: OutputFormat::Jsonl,
        })
    }

    /// Set the starting index for generation (for resumed population).
    pub fn with_start_index(mut self, index: u64) -> Self {
        self.generator = self.generator.with_start_index(index);
        self
    }

    /// Set the output layout.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Get the current generation index.
    pub fn current_index(&self) -> u64 {
        self.generator.current_index()
    }

    /// Write `count` documents to a new (or truncated) file.
    pub fn populate<P: AsRef<Path>>(
        &mut self,
        output_path: P,
        count: u64,
    ) -> Result<PopulateMetrics, JsonlPopulatorError> {
        let output_path = output_path.as_ref();
        info!(
            "Generating JSONL file '{}' with {} documents",
            output_path.display(),
            count
        );

        let file = File::create(output_path)?;
        self.populate_to_writer(BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file), count)
    }

    /// Append `count` documents to a file, creating it if needed.
    ///
    /// Continues from the current generator index.
    pub fn populate_append<P: AsRef<Path>>(
        &mut self,
        output_path: P,
        count: u64,
    ) -> Result<PopulateMetrics, JsonlPopulatorError> {
        let output_path = output_path.as_ref();
        info!(
            "Appending {} documents to JSONL file '{}' starting at index {}",
            count,
            output_path.display(),
            self.generator.current_index()
        );

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(output_path)?;
        self.populate_to_writer(BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file), count)
    }

    /// Write `count` documents to any writer.
    pub fn populate_to_writer<W: Write>(
        &mut self,
        writer: W,
        count: u64,
    ) -> Result<PopulateMetrics, JsonlPopulatorError> {
        let start_time = Instant::now();
        let mut metrics = PopulateMetrics::default();
        let mut writer = CountingWriter::new(writer);

        let mut generation_time = Duration::ZERO;
        let mut write_time = Duration::ZERO;

        for _ in 0..count {
            let gen_start = Instant::now();
            let document = self.generator.next_document()?;
            generation_time += gen_start.elapsed();

            let write_start = Instant::now();
            match self.format {
                OutputFormat::Jsonl => serde_json::to_writer(&mut writer, &document)?,
                OutputFormat::Pretty => serde_json::to_writer_pretty(&mut writer, &document)?,
            }
            writeln!(writer)?;
            write_time += write_start.elapsed();

            metrics.documents_written += 1;

            if metrics.documents_written % PROGRESS_INTERVAL == 0 {
                debug!("Written {} documents", metrics.documents_written);
            }
        }

        writer.flush()?;

        metrics.bytes_written = writer.bytes_written();
        metrics.total_duration = start_time.elapsed();
        metrics.generation_duration = generation_time;
        metrics.write_duration = write_time;

        info!(
            "JSONL generation complete: {} documents, {} bytes in {:?} ({:.2} documents/sec)",
            metrics.documents_written,
            metrics.bytes_written,
            metrics.total_duration,
            metrics.documents_per_second()
        );

        Ok(metrics)
    }
}

/// Writer adapter that counts the bytes passing through it.
struct CountingWriter<W> {
    inner: W,
    count: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, count: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.count
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.count += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
