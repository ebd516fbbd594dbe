//! Cash Game Settlement Library
//! # Overview
//!
//! This library turns a cash game's player sheet (buy-in and end stack per
//! player) into a short list of transfers that settles every balance, with
//! both a sync and an async reading strategy.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (Balance, Transfer, PlayerRecord, errors)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Settlement logic:
//!   - [`core::netter`] - Validation and the settlement loop
//!   - [`core::matching`] - Exact pairs, three-party cancellation, largest remaining
//!   - [`core::working_set`] - The ordered set of unsettled balances
//!   - [`core::conservation`] - Checks transfers against the balances they settle
//! - [`io`] - Player-sheet readers and transfer writers
//! - [`strategy`] - Sync and async pipelines
//!
//! # Balances
//!
//! A player's balance is `buyin - end`. A positive balance owes money, a
//! negative one is owed. Balances must sum to exactly zero; amounts are
//! `rust_decimal::Decimal`, so there is no floating-point tolerance.
//!
//! # Settlement Order
//!
//! Until nothing is left, the netter applies the first step that makes
//! progress:
//!
//! 1. **Exact pairs**: a payer and a receiver with equal magnitude settle directly
//! 2. **Three-party cancellation**: one balance cancels two of the opposite sign
//! 3. **Largest remaining**: the largest debt is paid by the biggest payer that fits

pub mod cli;
pub mod core;
pub mod io;
pub mod strategy;
pub mod types;

pub use core::{verify_conservation, BalanceNetter};
pub use io::{write_transfers_csv, write_transfers_text};
pub use types::{Balance, PartyName, PlayerRecord, SettlementError, Transfer};
