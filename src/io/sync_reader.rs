//! Synchronous CSV reader with iterator interface
//!
//! Provides a streaming iterator over player records from a player sheet.
//! Delegates CSV format concerns to the csv_format module.
//!
//! # Iterator Interface
//!
//! SyncReader implements the Iterator trait, yielding
//! `Result<PlayerRecord, SettlementError>` for each CSV row:
//!
//! ```no_run
//! use cashgame_settlement::io::sync_reader::SyncReader;
//! use std::path::Path;
//!
//! let reader = SyncReader::new(Path::new("game.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(player) => println!("Read player: {:?}", player),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Individual row errors are yielded as `SettlementError::ParseError`
//!   carrying the 1-based line number (the header is line 1)

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::{PlayerRecord, SettlementError};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

/// Synchronous player-sheet reader
#[derive(Debug)]
pub struct SyncReader {
    reader: csv::Reader<File>,
    line_num: u64,
}

impl SyncReader {
    /// Create a new SyncReader from a file path
    ///
    /// The CSV reader is configured to:
    /// - Trim whitespace from all fields
    /// - Allow flexible field counts (trailing numeric columns may be omitted)
    /// - Use an 8KB buffer for efficient I/O
    ///
    /// # Errors
    ///
    /// * `SettlementError::FileNotFound` if the path does not exist
    /// * `SettlementError::IoError` for any other open failure
    pub fn new(path: &Path) -> Result<Self, SettlementError> {
        let file = File::open(path).map_err(|e| open_error(path, e))?;

        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(file);

        Ok(Self {
            reader,
            line_num: 1,
        })
    }
}

/// Map a file-open failure to the matching error variant
pub(crate) fn open_error(path: &Path, error: std::io::Error) -> SettlementError {
    if error.kind() == ErrorKind::NotFound {
        SettlementError::FileNotFound {
            path: path.display().to_string(),
        }
    } else {
        SettlementError::IoError {
            message: format!("Failed to open file '{}': {}", path.display(), error),
        }
    }
}

impl Iterator for SyncReader {
    type Item = Result<PlayerRecord, SettlementError>;

    /// Read and convert the next player row
    ///
    /// # Returns
    ///
    /// * `Some(Ok(PlayerRecord))` - Successfully parsed row
    /// * `Some(Err(SettlementError))` - Parse or conversion error with line number
    /// * `None` - End of file reached
    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<CsvRecord>();
        let result = deserializer.next()?;
        self.line_num += 1;
        let line = self.line_num;

        Some(match result {
            Ok(csv_record) => convert_csv_record(csv_record)
                .map_err(|e| SettlementError::parse_error(Some(line), e)),
            Err(e) => Err(SettlementError::parse_error(Some(line), e.to_string())),
        })
    }
}
