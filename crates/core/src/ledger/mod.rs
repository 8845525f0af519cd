//! Double-entry bookkeeping logic.
//!
//! This module implements the general ledger:
//! - Journal entries (one debit or credit line per account)
//! - Transaction pairs with balance validation
//! - Per-account running balances
//! - Ledger construction from a flat journal
//! - Error types for transaction construction

pub mod balance;
pub mod builder;
pub mod entry;
pub mod error;
pub mod transaction;

pub use balance::{LedgerAccount, LedgerLine};
pub use builder::{Ledger, LedgerBuilder};
pub use entry::JournalEntry;
pub use error::LedgerError;
pub use transaction::{AdjustmentInput, TransactionInput};
