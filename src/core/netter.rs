//! Balance netting
//!
//! This module provides the `BalanceNetter`, which turns a set of named
//! balances summing to zero into an ordered list of transfers that clears
//! every balance.
//!
//! The netter is a pure function of its input: it copies the balances into a
//! private [`WorkingSet`], never touches the caller's slice, does no I/O and
//! keeps no state between calls.
//!
//! # Algorithm
//!
//! After validation, zero balances are dropped and the rest sorted ascending.
//! Then, until the working set is empty, the first strategy that makes
//! progress is applied:
//!
//! 1. exact-pair cancellation ([`match_equal_pairs`])
//! 2. three-party cancellation ([`match_triple`])
//! 3. largest-remaining-match fallback ([`match_largest`])
//!
//! Every step removes at least one entry, so the loop always terminates. The
//! result is a greedy heuristic, not a guaranteed minimum number of transfers.

use crate::core::matching::{match_equal_pairs, match_largest, match_triple};
use crate::core::working_set::WorkingSet;
use crate::types::{Balance, SettlementError, Transfer};
use rust_decimal::Decimal;
use std::collections::HashSet;

/// Greedy debt-netting engine
#[derive(Debug, Clone, Copy, Default)]
pub struct BalanceNetter;

impl BalanceNetter {
    /// Settle a set of balances
    ///
    /// # Arguments
    ///
    /// * `balances` - Named net positions; positive pays, negative receives
    ///
    /// # Returns
    ///
    /// Transfers in the order they were derived. Applying them (payer minus
    /// amount, receiver plus amount) brings every balance to zero.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - a name is empty or repeated
    /// - the balances do not sum to exactly zero
    /// - the sum overflows
    /// - the fallback strategy hits a malformed working set (a defect)
    pub fn settle(balances: &[Balance]) -> Result<Vec<Transfer>, SettlementError> {
        Self::validate(balances)?;

        let mut set = WorkingSet::from_balances(balances);
        let mut transfers = Vec::with_capacity(set.len());

        while !set.is_empty() {
            transfers = Self::step(&mut set, transfers)?;
        }

        Ok(transfers)
    }

    /// Check names and the zero-sum precondition
    pub fn validate(balances: &[Balance]) -> Result<(), SettlementError> {
        let mut seen = HashSet::with_capacity(balances.len());
        for (position, balance) in balances.iter().enumerate() {
            if balance.name.trim().is_empty() {
                return Err(SettlementError::empty_name(position));
            }
            if !seen.insert(balance.name.as_str()) {
                return Err(SettlementError::duplicate_name(&balance.name));
            }
        }

        let total = balances
            .iter()
            .try_fold(Decimal::ZERO, |acc, balance| acc.checked_add(balance.amount))
            .ok_or_else(|| SettlementError::arithmetic_overflow("balance sum"))?;

        if !total.is_zero() {
            return Err(SettlementError::unbalanced_input(total));
        }

        Ok(())
    }

    /// Apply the first strategy that makes progress, appending its transfers
    fn step(
        set: &mut WorkingSet,
        mut transfers: Vec<Transfer>,
    ) -> Result<Vec<Transfer>, SettlementError> {
        let pairs = match_equal_pairs(set);
        if !pairs.is_empty() {
            transfers.extend(pairs);
            return Ok(transfers);
        }

        if let Some(triple) = match_triple(set) {
            transfers.extend(triple);
            return Ok(transfers);
        }

        transfers.extend(match_largest(set)?);
        Ok(transfers)
    }
}
