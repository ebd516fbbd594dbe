//! Processing strategy module for settling a cash game
//!
//! This module defines the Strategy pattern for the complete settlement
//! pipeline: reading the player sheet, netting balances and writing the
//! transfer list. The sheet can be read synchronously or through an async
//! batch reader; everything after reading is shared.

use crate::cli::{OutputFormat, StrategyType};
use crate::core::{verify_conservation, BalanceNetter};
use crate::io::{write_transfers_csv, write_transfers_text};
use crate::types::{Balance, PlayerRecord, SettlementError, Transfer};
use std::io::Write;
use std::path::Path;

pub mod r#async;
pub mod sync;

pub use self::r#async::{AsyncProcessingStrategy, BatchConfig};
pub use sync::SyncProcessingStrategy;

/// Processing strategy trait for complete settlement pipelines
///
/// Each strategy reads player rows from a CSV sheet, settles the resulting
/// balances and writes the transfers to output.
pub trait ProcessingStrategy: Send + Sync {
    /// Settle the player sheet at `input_path` and write transfers to `output`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input file cannot be opened
    /// - A row is malformed (the error carries its line number)
    /// - The balances do not sum to zero or names are blank or repeated
    /// - Output cannot be written
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), SettlementError>;
}

/// Net the players of one game into a transfer list
///
/// Converts every row to a balance (buy-in minus end stack), settles them and
/// checks the result against the balances before handing it back.
pub fn settle_players(players: &[PlayerRecord]) -> Result<Vec<Transfer>, SettlementError> {
    let balances: Vec<Balance> = players.iter().map(PlayerRecord::balance).collect();
    tracing::debug!(players = balances.len(), "Settling balances");

    let transfers = BalanceNetter::settle(&balances)?;
    verify_conservation(&balances, &transfers)?;

    tracing::debug!(transfers = transfers.len(), "Settlement complete");
    Ok(transfers)
}

/// Write transfers in the requested output format
pub fn write_output(
    format: OutputFormat,
    transfers: &[Transfer],
    output: &mut dyn Write,
) -> Result<(), SettlementError> {
    match format {
        OutputFormat::Csv => write_transfers_csv(transfers, output),
        OutputFormat::Text => write_transfers_text(transfers, output),
    }
}

/// Create a processing strategy based on the specified strategy type
///
/// `config` only applies to the async strategy; `None` selects
/// `BatchConfig::default()`.
pub fn create_strategy(
    strategy_type: StrategyType,
    format: OutputFormat,
    config: Option<BatchConfig>,
) -> Box<dyn ProcessingStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncProcessingStrategy::new(format)),
        StrategyType::Async => {
            let config = config.unwrap_or_default();
            Box::new(AsyncProcessingStrategy::new(config, format))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn player(name: &str, buyin: i64, end: i64) -> PlayerRecord {
        PlayerRecord {
            name: name.to_string(),
            buyin: Decimal::new(buyin, 0),
            end: Decimal::new(end, 0),
        }
    }

    #[test]
    fn test_settle_players_uses_buyin_minus_end() {
        let players = vec![player("Winner", 10, 30), player("Loser", 20, 0)];

        let transfers = settle_players(&players).unwrap();

        assert_eq!(
            transfers,
            vec![Transfer::new("Loser", "Winner", Decimal::new(20, 0))]
        );
    }

    #[test]
    fn test_settle_players_rejects_unbalanced_sheet() {
        let players = vec![player("A", 20, 25), player("B", 20, 16)];

        let result = settle_players(&players);

        assert_eq!(
            result,
            Err(SettlementError::unbalanced_input(Decimal::new(-1, 0)))
        );
    }

    #[test]
    fn test_settle_players_empty_sheet() {
        assert_eq!(settle_players(&[]), Ok(vec![]));
    }

    #[test]
    fn test_write_output_text() {
        let transfers = vec![Transfer::new("B", "A", Decimal::new(3, 0))];
        let mut output = Vec::new();

        write_output(OutputFormat::Text, &transfers, &mut output).unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "B pays A: 3.00\n");
    }

    #[test]
    fn test_create_strategy_missing_file() {
        for kind in [StrategyType::Sync, StrategyType::Async] {
            let strategy = create_strategy(kind, OutputFormat::Csv, None);
            let mut output = Vec::new();

            let result = strategy.process(Path::new("no-such-game.csv"), &mut output);

            assert!(matches!(result, Err(SettlementError::FileNotFound { .. })));
            assert!(output.is_empty());
        }
    }
}
