//! Asynchronous batch-reading strategy
//!
//! Reads the player sheet on a tokio multi-threaded runtime through csv-async,
//! `batch_size` rows at a time, then settles on the calling thread once the
//! runtime has finished reading.
//!
//! # Architecture
//!
//! ```text
//! AsyncProcessingStrategy
//!     ├── BatchConfig (batch_size, max_concurrent_batches)
//!     ├── AsyncReader (batch CSV reading over tokio::fs::File)
//!     └── settle_players (shared with the sync strategy)
//! ```
//!
//! Settlement itself is not parallel: the netting order is part of the output,
//! so both strategies produce byte-identical results for the same sheet.

use crate::cli::OutputFormat;
use crate::io::async_reader::AsyncReader;
use crate::io::sync_reader::open_error;
use crate::strategy::{settle_players, write_output, ProcessingStrategy};
use crate::types::SettlementError;
use std::io::Write;
use std::path::Path;

/// Configuration for batch reading
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchConfig {
    /// Number of player rows per batch
    pub batch_size: usize,
    /// Number of runtime worker threads
    pub max_concurrent_batches: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            batch_size: 1000,
            max_concurrent_batches: num_cpus::get(),
        }
    }
}

impl BatchConfig {
    /// Create a new BatchConfig with custom values
    ///
    /// A zero for either value falls back to its default with a warning.
    pub fn new(batch_size: usize, max_concurrent_batches: usize) -> Self {
        let default = Self::default();

        let batch_size = if batch_size == 0 {
            tracing::warn!(
                requested = batch_size,
                fallback = default.batch_size,
                "Invalid batch_size, using default"
            );
            default.batch_size
        } else {
            batch_size
        };

        let max_concurrent_batches = if max_concurrent_batches == 0 {
            tracing::warn!(
                requested = max_concurrent_batches,
                fallback = default.max_concurrent_batches,
                "Invalid max_concurrent_batches, using default"
            );
            default.max_concurrent_batches
        } else {
            max_concurrent_batches
        };

        Self {
            batch_size,
            max_concurrent_batches,
        }
    }
}

/// Asynchronous batch-reading strategy
#[derive(Debug, Clone)]
pub struct AsyncProcessingStrategy {
    config: BatchConfig,
    format: OutputFormat,
}

impl AsyncProcessingStrategy {
    /// Create a new AsyncProcessingStrategy with the specified configuration
    pub fn new(config: BatchConfig, format: OutputFormat) -> Self {
        Self { config, format }
    }
}

impl ProcessingStrategy for AsyncProcessingStrategy {
    /// Read the sheet in batches on a tokio runtime, then settle it
    ///
    /// Fatal errors (file not found, malformed rows, runtime creation) are
    /// returned before anything is written to `output`.
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), SettlementError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(self.config.max_concurrent_batches)
            .build()
            .map_err(|e| SettlementError::IoError {
                message: format!("Failed to create tokio runtime: {}", e),
            })?;

        let players = runtime.block_on(async {
            let file = tokio::fs::File::open(input_path)
                .await
                .map_err(|e| open_error(input_path, e))?;

            // csv-async reads through the futures io traits
            let compat_file = tokio_util::compat::TokioAsyncReadCompatExt::compat(file);

            let mut reader = AsyncReader::new(compat_file);
            reader.read_all(self.config.batch_size).await
        })?;
        tracing::debug!(
            players = players.len(),
            batch_size = self.config.batch_size,
            path = %input_path.display(),
            "Read player sheet"
        );

        let transfers = settle_players(&players)?;

        write_output(self.format, &transfers, output)
    }
}
