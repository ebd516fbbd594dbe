//! Cash Game Settlement CLI
//!
//! Command-line interface for settling a cash game from a CSV player sheet.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- game.csv > transfers.csv
//! cargo run -- --format text game.csv
//! cargo run -- --strategy async --batch-size 500 --max-concurrent 2 game.csv
//! RUST_LOG=debug cargo run -- game.csv
//! ```
//!
//! Transfers go to stdout. Diagnostics go to stderr through `tracing`
//! (level `warn` unless `RUST_LOG` says otherwise).
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, unreadable sheet, unbalanced game, etc.)

use cashgame_settlement::cli;
use cashgame_settlement::strategy;
use std::process;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_tracing();

    let args = cli::parse_args();

    let strategy = {
        let config = if matches!(args.strategy, cli::StrategyType::Async) {
            Some(args.to_batch_config())
        } else {
            None
        };
        strategy::create_strategy(args.strategy, args.format, config)
    };

    let mut output = std::io::stdout();
    if let Err(e) = strategy.process(&args.input_file, &mut output) {
        if !e.is_validation() {
            tracing::error!(error = %e, input = %args.input_file.display(), "Settlement failed");
        }
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
