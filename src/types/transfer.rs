//! Transfer type for the settlement engine

use super::balance::PartyName;
use rust_decimal::Decimal;

/// A directed payment instruction
///
/// `from` pays `to` the given amount. Produced by the netter, never modified
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transfer {
    /// The paying party (held a positive balance)
    pub from: PartyName,

    /// The receiving party (held a negative balance)
    pub to: PartyName,

    /// Amount paid, always strictly positive
    pub amount: Decimal,
}

impl Transfer {
    /// Create a transfer from `from` to `to`
    pub fn new(from: impl Into<PartyName>, to: impl Into<PartyName>, amount: Decimal) -> Self {
        Transfer {
            from: from.into(),
            to: to.into(),
            amount,
        }
    }
}
