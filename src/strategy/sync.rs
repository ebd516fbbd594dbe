//! Synchronous processing strategy
//!
//! Reads the player sheet with `SyncReader` on the calling thread, then hands
//! the rows to the shared settlement pipeline.
//!
//! # Design
//!
//! The SyncProcessingStrategy focuses on orchestration, delegating:
//! - CSV parsing to `SyncReader` (iterator interface)
//! - Netting to `settle_players` (balances, settlement, conservation check)
//! - Output to `write_output` (csv or text)

use crate::cli::OutputFormat;
use crate::io::sync_reader::SyncReader;
use crate::strategy::{settle_players, write_output, ProcessingStrategy};
use crate::types::{PlayerRecord, SettlementError};
use std::io::Write;
use std::path::Path;

/// Synchronous processing strategy
///
/// # Examples
///
/// ```no_run
/// use cashgame_settlement::cli::OutputFormat;
/// use cashgame_settlement::strategy::{ProcessingStrategy, SyncProcessingStrategy};
/// use std::path::Path;
/// use std::io;
///
/// let strategy = SyncProcessingStrategy::new(OutputFormat::Text);
/// let mut output = io::stdout();
///
/// strategy.process(Path::new("game.csv"), &mut output)
///     .expect("Settlement failed");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SyncProcessingStrategy {
    format: OutputFormat,
}

impl SyncProcessingStrategy {
    /// Create a new SyncProcessingStrategy writing the given format
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl Default for SyncProcessingStrategy {
    fn default() -> Self {
        Self::new(OutputFormat::Csv)
    }
}

impl ProcessingStrategy for SyncProcessingStrategy {
    /// Settle the sheet at `input_path`
    ///
    /// The first malformed row stops processing; nothing is written to
    /// `output` unless the whole sheet settles.
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), SettlementError> {
        let reader = SyncReader::new(input_path)?;

        let players = reader.collect::<Result<Vec<PlayerRecord>, _>>()?;
        tracing::debug!(players = players.len(), path = %input_path.display(), "Read player sheet");

        let transfers = settle_players(&players)?;

        write_output(self.format, &transfers, output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary CSV file for testing
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_sync_strategy_settles_game() {
        let csv_content = "name,buyin,end\n\
                          Moun,20,25\n\
                          Jim,20,23\n\
                          Sandy,20,19\n\
                          Sam,20,18\n\
                          Sach,20,15\n";
        let file = create_temp_csv(csv_content);

        let strategy = SyncProcessingStrategy::default();
        let mut output = Vec::new();

        strategy.process(file.path(), &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "from,to,amount\nSach,Moun,5.00\nSam,Jim,2.00\nSandy,Jim,1.00\n"
        );
    }

    #[test]
    fn test_sync_strategy_text_format() {
        let file = create_temp_csv("name,buyin,end\nA,10,0\nB,0,10\n");

        let strategy = SyncProcessingStrategy::new(OutputFormat::Text);
        let mut output = Vec::new();

        strategy.process(file.path(), &mut output).unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "A pays B: 10.00\n");
    }

    #[test]
    fn test_sync_strategy_handles_missing_file() {
        let strategy = SyncProcessingStrategy::default();
        let mut output = Vec::new();

        let result = strategy.process(Path::new("nonexistent.csv"), &mut output);
        assert_eq!(
            result,
            Err(SettlementError::FileNotFound {
                path: "nonexistent.csv".to_string()
            })
        );
    }

    #[test]
    fn test_sync_strategy_stops_on_malformed_record() {
        let csv_content = "name,buyin,end\n\
                          A,10,0\n\
                          B,ten,0\n\
                          C,0,10\n";
        let file = create_temp_csv(csv_content);

        let strategy = SyncProcessingStrategy::default();
        let mut output = Vec::new();

        let result = strategy.process(file.path(), &mut output);

        assert!(matches!(
            result,
            Err(SettlementError::ParseError { line: Some(3), .. })
        ));
        assert!(output.is_empty());
    }

    #[test]
    fn test_sync_strategy_rejects_unbalanced_sheet() {
        let file = create_temp_csv("name,buyin,end\nA,10,0\nB,0,9\n");

        let strategy = SyncProcessingStrategy::default();
        let mut output = Vec::new();

        let result = strategy.process(file.path(), &mut output);

        assert!(matches!(result, Err(SettlementError::UnbalancedInput { .. })));
        assert!(output.is_empty());
    }

    #[test]
    fn test_sync_strategy_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SyncProcessingStrategy>();
    }
}
