//! Matching strategies for the balance netter
//!
//! Each strategy inspects a [`WorkingSet`], settles what it can, removes the
//! settled entries and returns the transfers it produced. The netter tries them
//! in this order on every iteration:
//!
//! 1. [`match_equal_pairs`] - two balances that cancel exactly
//! 2. [`match_triple`] - one balance cancelled by two of the opposite sign
//! 3. [`match_largest`] - pay down the first (most negative) entry
//!
//! All searches are first-found in a fixed scan order, so the same working set
//! always yields the same transfers.

use crate::core::working_set::WorkingSet;
use crate::types::{Balance, SettlementError, Transfer};
use rust_decimal::Decimal;

/// Build the transfer that settles `receiver` with `payer`'s money
fn pay(payer: &Balance, receiver: &Balance, amount: Decimal) -> Transfer {
    Transfer::new(payer.name.clone(), receiver.name.clone(), amount)
}

fn opposes(a: &Balance, b: &Balance) -> bool {
    (a.is_payer() && b.is_receiver()) || (a.is_receiver() && b.is_payer())
}

/// Exact-pair cancellation
///
/// Walks the set with one cursor from the front and one from the back. When
/// the two amounts cancel, the positive party pays the negative party in full
/// and both cursors move inward. Otherwise the cursor on the smaller absolute
/// amount moves; on a tie the right cursor moves.
///
/// Every pair found in one pass is removed before returning. Returns an empty
/// vector when nothing cancels.
pub fn match_equal_pairs(set: &mut WorkingSet) -> Vec<Transfer> {
    let mut transfers = Vec::new();
    if set.len() < 2 {
        return transfers;
    }

    let entries = set.entries();
    let mut matched = Vec::new();
    let mut left = 0;
    let mut right = entries.len() - 1;

    while left < right {
        let low = &entries[left];
        let high = &entries[right];

        let cancels = opposes(low, high)
            && low
                .amount
                .checked_add(high.amount)
                .is_some_and(|sum| sum.is_zero());

        if cancels {
            let (payer, receiver) = if high.is_payer() { (high, low) } else { (low, high) };
            transfers.push(pay(payer, receiver, payer.amount));
            matched.push(left);
            matched.push(right);
            left += 1;
            right -= 1;
        } else if low.amount.abs() < high.amount.abs() {
            left += 1;
        } else {
            right -= 1;
        }
    }

    set.remove_indices(&matched);
    transfers
}

/// Locate the first `(anchor, first, second)` triple in scan order
///
/// `first` and `second` both sit on the opposite side of `anchor`, and their
/// amounts add up to exactly `-anchor.amount`.
fn find_triple(entries: &[Balance]) -> Option<(usize, usize, usize)> {
    for (anchor, p) in entries.iter().enumerate() {
        let target = -p.amount;
        let candidates: Vec<usize> = entries
            .iter()
            .enumerate()
            .filter(|(i, other)| *i != anchor && opposes(p, other))
            .map(|(i, _)| i)
            .collect();

        for (n, &first) in candidates.iter().enumerate() {
            for &second in &candidates[n + 1..] {
                let sum = entries[first].amount.checked_add(entries[second].amount);
                if sum == Some(target) {
                    return Some((anchor, first, second));
                }
            }
        }
    }

    None
}

/// Three-party cancellation
///
/// For each entry `p` in working-set order, looks for two other entries on the
/// opposite side whose amounts together cancel `p`. The first triple found is
/// settled with two transfers, each for the matched entry's full balance:
/// - `p` negative: both matched parties pay `p`
/// - `p` positive: `p` pays both matched parties
///
/// Returns `None` when no triple exists; the set is left untouched then.
pub fn match_triple(set: &mut WorkingSet) -> Option<Vec<Transfer>> {
    let entries = set.entries();
    let (anchor, first, second) = find_triple(entries)?;

    let p = &entries[anchor];
    let transfers: Vec<Transfer> = [first, second]
        .iter()
        .map(|&i| {
            let other = &entries[i];
            if p.is_receiver() {
                pay(other, p, other.amount)
            } else {
                pay(p, other, other.amount.abs())
            }
        })
        .collect();

    set.remove_indices(&[anchor, first, second]);
    Some(transfers)
}

/// Largest-remaining-match fallback
///
/// Anchors on the first entry, which must be negative. Scanning from the back,
/// the first positive entry that does not exceed the anchor's debt pays its
/// whole balance to the anchor and leaves the set; the anchor moves toward zero
/// and leaves too once cleared.
///
/// When every positive entry is larger than the debt, the smallest of them pays
/// the anchor's full debt instead: the anchor leaves and the payer keeps the
/// remainder.
///
/// Returns `Ok(None)` on an empty set.
///
/// # Errors
///
/// - [`SettlementError::MalformedAnchor`] if the first entry is not negative
/// - [`SettlementError::NoMatchingPayment`] if no positive entry is left
pub fn match_largest(set: &mut WorkingSet) -> Result<Option<Transfer>, SettlementError> {
    let Some(anchor) = set.get(0).cloned() else {
        return Ok(None);
    };

    if !anchor.is_receiver() {
        return Err(SettlementError::malformed_anchor(&anchor.name, anchor.amount));
    }

    let debt = anchor.amount.abs();
    let entries = set.entries();

    let fitting = (1..entries.len())
        .rev()
        .find(|&i| entries[i].is_payer() && entries[i].amount <= debt);

    if let Some(index) = fitting {
        let payer = entries[index].clone();
        set.adjust(0, payer.amount);

        let mut settled = vec![index];
        if set.get(0).is_some_and(|entry| entry.amount.is_zero()) {
            settled.push(0);
        }
        set.remove_indices(&settled);

        return Ok(Some(pay(&payer, &anchor, payer.amount)));
    }

    let smallest = (1..entries.len())
        .filter(|&i| entries[i].is_payer())
        .min_by_key(|&i| entries[i].amount);

    match smallest {
        Some(index) => {
            let payer = entries[index].clone();
            set.adjust(index, -debt);
            set.remove_indices(&[0]);
            Ok(Some(pay(&payer, &anchor, debt)))
        }
        None => Err(SettlementError::no_matching_payment(
            &anchor.name,
            anchor.amount,
        )),
    }
}
