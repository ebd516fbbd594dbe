//! CSV format handling for player sheets and transfer output
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV records to player records
//! - Transfer output serialization
//!
//! All functions are pure (no I/O beyond the supplied writer) for easy testing.

use crate::types::{PlayerRecord, SettlementError, Transfer};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// CSV record structure for deserialization
///
/// Matches the player sheet with columns: name, buyin, end.
/// The numeric columns are optional: a freshly added row starts at zero.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    pub name: String,
    pub buyin: Option<String>,
    pub end: Option<String>,
}

/// Parse one numeric column of a player row
fn parse_amount(field: &str, value: Option<&str>, player: &str) -> Result<Decimal, String> {
    let value = match value.map(str::trim) {
        Some(value) if !value.is_empty() => value,
        _ => return Ok(Decimal::ZERO),
    };

    let amount = Decimal::from_str(value)
        .map_err(|_| format!("Invalid {} '{}' for player '{}'", field, value, player))?;

    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(format!(
            "Negative {} '{}' for player '{}'",
            field, value, player
        ));
    }

    Ok(amount)
}

/// Convert a CsvRecord to a PlayerRecord
///
/// This function:
/// - Rejects rows without a name
/// - Parses buy-in and end stack into Decimals, treating blanks as zero
/// - Rejects negative buy-ins and end stacks
///
/// # Returns
///
/// Result containing either:
/// - Ok(PlayerRecord) - Successfully converted record
/// - Err(String) - Error message describing the conversion failure
pub fn convert_csv_record(csv_record: CsvRecord) -> Result<PlayerRecord, String> {
    let name = csv_record.name.trim();
    if name.is_empty() {
        return Err("Player name is required".to_string());
    }

    let buyin = parse_amount("buyin", csv_record.buyin.as_deref(), name)?;
    let end = parse_amount("end", csv_record.end.as_deref(), name)?;

    Ok(PlayerRecord {
        name: name.to_string(),
        buyin,
        end,
    })
}

fn write_error(what: &str, error: csv::Error) -> SettlementError {
    SettlementError::IoError {
        message: format!("Failed to write {}: {}", what, error),
    }
}

/// Order transfers by payer name
///
/// The sort is stable, so transfers from the same payer keep the order the
/// netter derived them in.
pub fn order_by_payer(transfers: &[Transfer]) -> Vec<Transfer> {
    let mut ordered = transfers.to_vec();
    ordered.sort_by(|a, b| a.from.cmp(&b.from));
    ordered
}

/// Write transfers in CSV format
///
/// Writes transfers with columns: from, to, amount. Transfers are ordered by
/// payer for deterministic output; amounts carry two decimal places.
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(SettlementError)` if a write error occurred
pub fn write_transfers_csv(
    transfers: &[Transfer],
    output: &mut dyn Write,
) -> Result<(), SettlementError> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    writer
        .write_record(["from", "to", "amount"])
        .map_err(|e| write_error("CSV header", e))?;

    for transfer in order_by_payer(transfers) {
        writer
            .write_record(&[
                transfer.from,
                transfer.to,
                format!("{:.2}", transfer.amount),
            ])
            .map_err(|e| write_error("transfer record", e))?;
    }

    writer.flush()?;

    Ok(())
}
