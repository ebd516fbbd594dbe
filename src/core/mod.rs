//! Core settlement logic
//!
//! This module contains the balance-netting components:
//! - `working_set` - Ordered container of unsettled balances
//! - `matching` - The three matching strategies
//! - `netter` - Validation and the settlement loop
//! - `conservation` - Post-settlement conservation check

pub mod conservation;
pub mod matching;
pub mod netter;
pub mod working_set;

pub use conservation::verify_conservation;
pub use matching::{match_equal_pairs, match_largest, match_triple};
pub use netter::BalanceNetter;
pub use working_set::WorkingSet;
