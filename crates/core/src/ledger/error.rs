//! Ledger error types for transaction construction.
//!
//! Report generation never fails; these errors only arise when a caller
//! builds a transaction pair before handing it to the entry store.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while constructing a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Debit and credit sides differ.
    #[error("Transaction is not balanced. Debit: {debit}, Credit: {credit}")]
    UnbalancedTransaction {
        /// Debit amount.
        debit: Decimal,
        /// Credit amount.
        credit: Decimal,
    },

    /// An account name was left empty.
    #[error("Both the debit and the credit account must be named")]
    MissingAccount,

    /// An amount is negative.
    #[error("Entry amount cannot be negative")]
    NegativeAmount,

    /// An adjustment amount is zero or negative.
    #[error("Adjustment amount must be positive")]
    NonPositiveAmount,
}
