//! I/O module
//!
//! Handles player-sheet parsing and transfer output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (record conversion, transfer serialization)
//! - `text_format` - Plain-text transfer report
//! - `sync_reader` - Synchronous CSV reader with iterator interface
//! - `async_reader` - Asynchronous CSV reader with batch reading interface

pub mod async_reader;
pub mod csv_format;
pub mod sync_reader;
pub mod text_format;

pub use async_reader::AsyncReader;
pub use csv_format::{convert_csv_record, order_by_payer, write_transfers_csv, CsvRecord};
pub use sync_reader::SyncReader;
pub use text_format::write_transfers_text;
