//! Human-readable transfer report
//!
//! Renders transfers the way they are read out at the table, one line per
//! payment, grouped by payer:
//!
//! ```text
//! Sach pays Moun: 5.00
//! Sam pays Jim: 2.00
//! Sandy pays Jim: 1.00
//! ```

use crate::io::csv_format::order_by_payer;
use crate::types::{SettlementError, Transfer};
use std::io::Write;

/// Line written when nobody owes anything
pub const NOTHING_TO_SETTLE: &str = "No transfers needed";

/// Write transfers as plain text, one "`from` pays `to`: `amount`" line each
pub fn write_transfers_text(
    transfers: &[Transfer],
    output: &mut dyn Write,
) -> Result<(), SettlementError> {
    if transfers.is_empty() {
        writeln!(output, "{}", NOTHING_TO_SETTLE)?;
        return Ok(());
    }

    for transfer in order_by_payer(transfers) {
        writeln!(
            output,
            "{} pays {}: {:.2}",
            transfer.from, transfer.to, transfer.amount
        )?;
    }

    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn render(transfers: &[Transfer]) -> String {
        let mut output = Vec::new();
        write_transfers_text(transfers, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_text_report_groups_by_payer() {
        let transfers = vec![
            Transfer::new("Sach", "Moun", Decimal::new(5, 0)),
            Transfer::new("Sandy", "Jim", Decimal::new(1, 0)),
            Transfer::new("Sam", "Jim", Decimal::new(2, 0)),
            Transfer::new("Sach", "Jim", Decimal::new(50, 2)),
        ];

        assert_eq!(
            render(&transfers),
            "Sach pays Moun: 5.00\nSach pays Jim: 0.50\nSam pays Jim: 2.00\nSandy pays Jim: 1.00\n"
        );
    }

    #[test]
    fn test_text_report_empty() {
        assert_eq!(render(&[]), "No transfers needed\n");
    }
}
