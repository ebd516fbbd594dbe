//! Asynchronous CSV reader with batch interface
//!
//! Reads a player sheet through csv-async so the async strategy never blocks
//! a runtime worker on file I/O.
//!
//! # Architecture
//!
//! ```text
//! tokio File → compat → AsyncReader → batches of PlayerRecords
//!                           ↓
//!                  csv_format module
//!               (CsvRecord, convert_csv_record)
//! ```

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::{PlayerRecord, SettlementError};
use csv_async::AsyncReaderBuilder;
use futures::io::AsyncRead;
use futures::stream::StreamExt;

/// Asynchronous player-sheet reader
pub struct AsyncReader<R: AsyncRead + Unpin> {
    csv_reader: csv_async::AsyncDeserializer<R>,
    line_num: u64,
}

impl<R: AsyncRead + Unpin + Send + 'static> AsyncReader<R> {
    /// Create a new AsyncReader from an async reader
    pub fn new(reader: R) -> Self {
        let csv_reader = AsyncReaderBuilder::new()
            .flexible(true)
            .trim(csv_async::Trim::All)
            .create_deserializer(reader);

        Self {
            csv_reader,
            line_num: 1,
        }
    }

    /// Read a batch of player records
    ///
    /// Reads up to `batch_size` rows. Returns an empty vector once the end of
    /// the sheet is reached.
    ///
    /// # Errors
    ///
    /// The first malformed row aborts the read with a
    /// `SettlementError::ParseError` carrying its line number.
    pub async fn read_batch(
        &mut self,
        batch_size: usize,
    ) -> Result<Vec<PlayerRecord>, SettlementError> {
        let mut batch = Vec::with_capacity(batch_size);
        let mut records = self.csv_reader.deserialize::<CsvRecord>();

        while batch.len() < batch_size {
            let Some(result) = records.next().await else {
                break;
            };
            self.line_num += 1;
            let line = self.line_num;

            let csv_record =
                result.map_err(|e| SettlementError::parse_error(Some(line), e.to_string()))?;
            let player = convert_csv_record(csv_record)
                .map_err(|e| SettlementError::parse_error(Some(line), e))?;
            batch.push(player);
        }

        Ok(batch)
    }

    /// Read every remaining row, `batch_size` rows at a time
    pub async fn read_all(
        &mut self,
        batch_size: usize,
    ) -> Result<Vec<PlayerRecord>, SettlementError> {
        let mut players = Vec::new();

        loop {
            let batch = self.read_batch(batch_size).await?;
            if batch.is_empty() {
                break;
            }
            tracing::debug!(rows = batch.len(), line = self.line_num, "Read player batch");
            players.extend(batch);
        }

        Ok(players)
    }
}
