//! Balance-related types for the settlement engine
//!
//! This module defines the net position of a single participant and the
//! player-sheet row it is derived from.

use rust_decimal::Decimal;

/// Participant name
///
/// Names identify parties in transfers, so they must be non-empty and unique
/// within one settlement.
pub type PartyName = String;

/// Net position of one participant
///
/// `amount` is buy-in minus end stack:
/// - positive: the participant lost chips and pays
/// - negative: the participant won chips and receives
/// - zero: already settled, never appears in a transfer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Balance {
    /// Participant name
    pub name: PartyName,

    /// Net amount (buy-in minus end stack)
    pub amount: Decimal,
}

impl Balance {
    /// Create a balance for the named participant
    pub fn new(name: impl Into<PartyName>, amount: Decimal) -> Self {
        Balance {
            name: name.into(),
            amount,
        }
    }

    /// Whether this participant still has money to pay
    pub fn is_payer(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }

    /// Whether this participant is still owed money
    pub fn is_receiver(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }
}

/// One row of the player sheet
///
/// Mirrors what a player enters at the table: how much they bought in for and
/// what they walked away with.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRecord {
    /// Player name
    pub name: PartyName,

    /// Total buy-in (non-negative)
    pub buyin: Decimal,

    /// Ending stack (non-negative)
    pub end: Decimal,
}

impl PlayerRecord {
    /// Derive the player's net balance (`buyin - end`)
    pub fn balance(&self) -> Balance {
        Balance::new(self.name.clone(), self.buyin - self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::loser(Decimal::new(20, 0), Decimal::new(15, 0), Decimal::new(5, 0))]
    #[case::winner(Decimal::new(20, 0), Decimal::new(25, 0), Decimal::new(-5, 0))]
    #[case::even(Decimal::new(20, 0), Decimal::new(20, 0), Decimal::ZERO)]
    #[case::cents(Decimal::new(3050, 2), Decimal::new(1025, 2), Decimal::new(2025, 2))]
    fn test_player_balance(#[case] buyin: Decimal, #[case] end: Decimal, #[case] expected: Decimal) {
        let player = PlayerRecord {
            name: "Sam".to_string(),
            buyin,
            end,
        };

        let balance = player.balance();
        assert_eq!(balance.name, "Sam");
        assert_eq!(balance.amount, expected);
    }

    #[rstest]
    #[case::positive(Decimal::new(5, 0), true, false)]
    #[case::negative(Decimal::new(-5, 0), false, true)]
    #[case::zero(Decimal::ZERO, false, false)]
    fn test_balance_side(#[case] amount: Decimal, #[case] payer: bool, #[case] receiver: bool) {
        let balance = Balance::new("Jim", amount);
        assert_eq!(balance.is_payer(), payer);
        assert_eq!(balance.is_receiver(), receiver);
    }
}
