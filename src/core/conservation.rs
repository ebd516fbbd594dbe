//! Conservation check for a computed settlement
//!
//! Invariant enforced on every settlement before it is written out:
//! ```text
//! ∀ party X: paid(X) - received(X) == balance(X)
//! ```
//! together with: every transfer is strictly positive, never a self-payment,
//! and only names parties that appear in the balances.

use crate::types::{Balance, SettlementError, Transfer};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Verify that `transfers` settle `balances` exactly
///
/// # Errors
///
/// - [`SettlementError::InvalidTransfer`] for a non-positive amount, a
///   self-payment or an unknown party
/// - [`SettlementError::ConservationViolation`] for the first party (in input
///   order) whose transfers do not net to its balance
/// - [`SettlementError::ArithmeticOverflow`] if the running totals overflow
pub fn verify_conservation(
    balances: &[Balance],
    transfers: &[Transfer],
) -> Result<(), SettlementError> {
    let mut net: HashMap<&str, Decimal> = balances
        .iter()
        .map(|balance| (balance.name.as_str(), Decimal::ZERO))
        .collect();

    for transfer in transfers {
        let invalid = || {
            SettlementError::invalid_transfer(&transfer.from, &transfer.to, transfer.amount)
        };

        if transfer.amount <= Decimal::ZERO || transfer.from == transfer.to {
            return Err(invalid());
        }
        if !net.contains_key(transfer.from.as_str()) || !net.contains_key(transfer.to.as_str()) {
            return Err(invalid());
        }

        for (party, delta) in [
            (transfer.from.as_str(), transfer.amount),
            (transfer.to.as_str(), -transfer.amount),
        ] {
            if let Some(total) = net.get_mut(party) {
                *total = total
                    .checked_add(delta)
                    .ok_or_else(|| SettlementError::arithmetic_overflow("conservation check"))?;
            }
        }
    }

    for balance in balances {
        let actual = net
            .get(balance.name.as_str())
            .copied()
            .unwrap_or(Decimal::ZERO);
        if actual != balance.amount {
            return Err(SettlementError::conservation_violation(
                &balance.name,
                balance.amount,
                actual,
            ));
        }
    }

    Ok(())
}
