//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `balance`: Participant balances and player-sheet rows
//! - `transfer`: Payment instructions produced by the netter
//! - `error`: Error types for the settlement engine

pub mod balance;
pub mod error;
pub mod transfer;

pub use balance::{Balance, PartyName, PlayerRecord};
pub use error::SettlementError;
pub use transfer::Transfer;
