//! Error types for the settlement engine
//!
//! This module defines every error that can occur while reading a player sheet
//! or settling its balances. Errors are designed to be descriptive and
//! user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **Input Errors**: File not found, I/O failures, malformed player rows
//! - **Validation Errors**: Unbalanced sheet, empty or duplicate names
//! - **Invariant Violations**: Malformed working set during the fallback match,
//!   invalid transfers, conservation check failures
//! - **Arithmetic Errors**: Decimal overflow while summing balances
//!
//! None of these are transient: the engine never retries.

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the settlement engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettlementError {
    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading input or writing output
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// A player sheet row could not be parsed
    ///
    /// Fatal: settling with a player silently dropped would produce
    /// wrong transfers.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// Balances do not sum to zero
    ///
    /// Raised before any transfer is computed.
    #[error("balances must sum to zero (total: {total})")]
    UnbalancedInput {
        /// The actual sum of all balances
        total: Decimal,
    },

    /// A balance has an empty name
    #[error("balance at position {position} has an empty name")]
    EmptyName {
        /// Zero-based index in the caller's input
        position: usize,
    },

    /// The same name appears on more than one balance
    #[error("duplicate participant name '{name}'")]
    DuplicateName {
        /// The repeated name
        name: String,
    },

    /// The fallback anchor is not negative
    #[error("expected first entry to be negative: {name} has {amount}")]
    MalformedAnchor {
        /// Name of the anchor entry
        name: String,
        /// Its (non-negative) amount
        amount: Decimal,
    },

    /// No entry can pay down the fallback anchor
    #[error("no suitable payment found for {name} ({amount})")]
    NoMatchingPayment {
        /// Name of the anchor entry
        name: String,
        /// Its outstanding amount
        amount: Decimal,
    },

    /// Decimal arithmetic overflow
    #[error("Arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
    },

    /// A transfer is non-positive, a self-payment, or names an unknown party
    #[error("invalid transfer {from} -> {to}: {amount}")]
    InvalidTransfer {
        /// Paying party
        from: String,
        /// Receiving party
        to: String,
        /// Transfer amount
        amount: Decimal,
    },

    /// Applying the transfers does not reproduce a party's balance
    #[error("conservation violated for {name}: expected {expected}, transfers net {actual}")]
    ConservationViolation {
        /// Party whose books do not balance
        name: String,
        /// Balance the transfers should net to
        expected: Decimal,
        /// Paid minus received across all transfers
        actual: Decimal,
    },
}

// Conversion from io::Error to SettlementError
impl From<std::io::Error> for SettlementError {
    fn from(error: std::io::Error) -> Self {
        SettlementError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to SettlementError
impl From<csv::Error> for SettlementError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        SettlementError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl From<csv_async::Error> for SettlementError {
    fn from(error: csv_async::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        SettlementError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl SettlementError {
    /// Create an UnbalancedInput error
    pub fn unbalanced_input(total: Decimal) -> Self {
        SettlementError::UnbalancedInput { total }
    }

    /// Create an EmptyName error
    pub fn empty_name(position: usize) -> Self {
        SettlementError::EmptyName { position }
    }

    /// Create a DuplicateName error
    pub fn duplicate_name(name: &str) -> Self {
        SettlementError::DuplicateName {
            name: name.to_string(),
        }
    }

    /// Create a MalformedAnchor error
    pub fn malformed_anchor(name: &str, amount: Decimal) -> Self {
        SettlementError::MalformedAnchor {
            name: name.to_string(),
            amount,
        }
    }

    /// Create a NoMatchingPayment error
    pub fn no_matching_payment(name: &str, amount: Decimal) -> Self {
        SettlementError::NoMatchingPayment {
            name: name.to_string(),
            amount,
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str) -> Self {
        SettlementError::ArithmeticOverflow {
            operation: operation.to_string(),
        }
    }

    /// Create a ConservationViolation error
    pub fn conservation_violation(name: &str, expected: Decimal, actual: Decimal) -> Self {
        SettlementError::ConservationViolation {
            name: name.to_string(),
            expected,
            actual,
        }
    }

    /// Create an InvalidTransfer error
    pub fn invalid_transfer(from: &str, to: &str, amount: Decimal) -> Self {
        SettlementError::InvalidTransfer {
            from: from.to_string(),
            to: to.to_string(),
            amount,
        }
    }

    /// Create a ParseError error
    pub fn parse_error(line: Option<u64>, message: impl Into<String>) -> Self {
        SettlementError::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Whether this error means the sheet itself is wrong, as opposed to a
    /// defect in the engine or the environment
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SettlementError::UnbalancedInput { .. }
                | SettlementError::EmptyName { .. }
                | SettlementError::DuplicateName { .. }
                | SettlementError::ParseError { .. }
        )
    }
}
