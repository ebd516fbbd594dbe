//! End-to-end integration tests
//!
//! These tests run the complete settlement pipeline on predefined player
//! sheets. Each fixture test:
//! 1. Reads input.csv from a fixture directory
//! 2. Settles the game through the selected strategy
//! 3. Compares the CSV output with expected.csv
//!
//! Test fixtures are located in tests/fixtures/ and cover:
//! - Exact pairs, three-party cancellation and the largest-remaining fallback
//! - Players who broke even
//! - Sheets that are rejected (malformed rows, unbalanced totals, repeated names)
//!
//! Each test is run twice: once with the synchronous reader and once with the async reader.

#[cfg(test)]
mod tests {
    use cashgame_settlement::cli::{OutputFormat, StrategyType};
    use cashgame_settlement::strategy::{create_strategy, BatchConfig};
    use cashgame_settlement::SettlementError;
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::fs;
    use std::io::Write;
    use std::path::Path;
    use tempfile::NamedTempFile;

    fn fixture_path(fixture_name: &str, file: &str) -> String {
        format!("tests/fixtures/{}/{}", fixture_name, file)
    }

    /// Settle `tests/fixtures/{fixture_name}/input.csv` and compare with expected.csv
    fn run_test_fixture(fixture_name: &str, strategy_type: StrategyType) {
        let input_path = fixture_path(fixture_name, "input.csv");
        let expected_path = fixture_path(fixture_name, "expected.csv");

        assert!(
            Path::new(&input_path).exists(),
            "Input file not found: {}",
            input_path
        );

        // Small batches so the async reader crosses batch boundaries
        let strategy = create_strategy(strategy_type, OutputFormat::Csv, Some(BatchConfig::new(2, 2)));

        let mut temp_output = NamedTempFile::new().expect("Failed to create temp file");
        strategy
            .process(Path::new(&input_path), &mut temp_output)
            .unwrap_or_else(|e| panic!("Failed to settle {}: {}", fixture_name, e));
        temp_output.flush().expect("Failed to flush temp file");

        let actual_output = fs::read_to_string(temp_output.path())
            .unwrap_or_else(|e| panic!("Failed to read temp output file: {}", e));
        let expected_output = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read expected file {}: {}", expected_path, e));

        assert_eq!(
            actual_output, expected_output,
            "\n\nOutput mismatch for fixture: {} (strategy: {:?})\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            fixture_name, strategy_type, actual_output, expected_output
        );
    }

    fn run_failing_fixture(fixture_name: &str, strategy_type: StrategyType) -> SettlementError {
        let input_path = fixture_path(fixture_name, "input.csv");
        let strategy = create_strategy(strategy_type, OutputFormat::Csv, None);
        let mut output = Vec::new();

        let error = strategy
            .process(Path::new(&input_path), &mut output)
            .expect_err("sheet should be rejected");
        assert!(output.is_empty(), "nothing may be written for a rejected sheet");
        error
    }

    #[rstest]
    #[case("simple_pair")]
    #[case("mixed_game")]
    #[case("three_party")]
    #[case("fallback_chain")]
    #[case("zero_balance_players")]
    #[case("nothing_to_settle")]
    fn test_fixtures(
        #[case] fixture: &str,
        #[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType,
    ) {
        run_test_fixture(fixture, strategy);
    }

    #[rstest]
    fn test_malformed_row_is_fatal(
        #[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType,
    ) {
        let error = run_failing_fixture("malformed_row", strategy);

        match error {
            SettlementError::ParseError { line, message } => {
                assert_eq!(line, Some(3));
                assert!(message.contains("Invalid buyin 'twenty'"), "{}", message);
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[rstest]
    fn test_unbalanced_game_is_rejected(
        #[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType,
    ) {
        let error = run_failing_fixture("unbalanced_game", strategy);

        assert_eq!(error, SettlementError::unbalanced_input(Decimal::new(-1, 0)));
        assert!(error.is_validation());
    }

    #[rstest]
    fn test_duplicate_names_are_rejected(
        #[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType,
    ) {
        let error = run_failing_fixture("duplicate_names", strategy);

        assert_eq!(error, SettlementError::duplicate_name("Moun"));
    }

    #[rstest]
    fn test_text_format_report(
        #[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType,
    ) {
        let input_path = fixture_path("mixed_game", "input.csv");
        let strategy = create_strategy(strategy, OutputFormat::Text, None);
        let mut output = Vec::new();

        strategy.process(Path::new(&input_path), &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Sach pays Moun: 5.00\nSam pays Jim: 2.00\nSandy pays Jim: 1.00\n"
        );
    }

    #[rstest]
    fn test_text_format_nothing_to_settle(
        #[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType,
    ) {
        let input_path = fixture_path("nothing_to_settle", "input.csv");
        let strategy = create_strategy(strategy, OutputFormat::Text, None);
        let mut output = Vec::new();

        strategy.process(Path::new(&input_path), &mut output).unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "No transfers needed\n");
    }
}
