//! Working set of unsettled balances
//!
//! The `WorkingSet` owns the balances still in play during a single
//! settlement. It is an index-addressable ordered container: matched entries
//! are removed and every other entry keeps its relative position.
//!
//! Invariants maintained by the netter while it drives a working set:
//! - no entry has a zero amount
//! - every negative entry precedes every positive entry
//! - the amounts sum to zero

use crate::types::Balance;
use rust_decimal::Decimal;

/// Ordered, owned collection of not-yet-settled balances
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorkingSet {
    entries: Vec<Balance>,
}

impl WorkingSet {
    /// Build a working set from a caller's balances
    ///
    /// Copies the input, drops zero balances and stable-sorts ascending by
    /// amount (most negative first).
    pub fn from_balances(balances: &[Balance]) -> Self {
        let mut entries: Vec<Balance> = balances
            .iter()
            .filter(|balance| !balance.amount.is_zero())
            .cloned()
            .collect();
        entries.sort_by(|a, b| a.amount.cmp(&b.amount));

        WorkingSet { entries }
    }

    /// Wrap entries exactly as given, without filtering or sorting
    ///
    /// Lets callers drive a single matching step on a hand-built set.
    pub fn from_entries(entries: Vec<Balance>) -> Self {
        WorkingSet { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Balance> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[Balance] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<Balance> {
        self.entries
    }

    /// Shift an entry's amount by `delta`
    pub fn adjust(&mut self, index: usize, delta: Decimal) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.amount += delta;
        }
    }

    /// Remove the entries at the given indices, keeping the rest in order
    ///
    /// Indices may be given in any order; unknown indices are ignored.
    pub fn remove_indices(&mut self, indices: &[usize]) {
        let mut position = 0;
        self.entries.retain(|_| {
            let keep = !indices.contains(&position);
            position += 1;
            keep
        });
    }

    /// Sum of all remaining amounts, `None` on overflow
    pub fn total(&self) -> Option<Decimal> {
        self.entries
            .iter()
            .try_fold(Decimal::ZERO, |acc, entry| acc.checked_add(entry.amount))
    }
}
