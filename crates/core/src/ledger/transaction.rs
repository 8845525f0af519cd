//! Transaction pairs: the balanced debit/credit lines a caller posts.
//!
//! The report pipeline accepts any list of lines, balanced or not. Callers
//! that record new transactions go through these inputs so that every pair
//! they store has equal debit and credit sides.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::entry::JournalEntry;
use super::error::LedgerError;

/// A general-journal transaction: one debit line and one credit line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionInput {
    /// Transaction date.
    pub date: NaiveDate,
    /// Account debited.
    pub debit_account: String,
    /// Amount debited.
    pub debit_amount: Decimal,
    /// Account credited.
    pub credit_account: String,
    /// Amount credited.
    pub credit_amount: Decimal,
    /// Memo shared by both lines.
    #[serde(default)]
    pub memo: String,
}

impl TransactionInput {
    /// Validates the pair and returns `[debit line, credit line]`.
    ///
    /// # Errors
    ///
    /// - `NegativeAmount` if either amount is below zero
    /// - `UnbalancedTransaction` if the amounts differ
    /// - `MissingAccount` if either account name is empty
    pub fn into_entries(self) -> Result<[JournalEntry; 2], LedgerError> {
        if self.debit_amount < Decimal::ZERO || self.credit_amount < Decimal::ZERO {
            return Err(LedgerError::NegativeAmount);
        }
        if self.debit_amount != self.credit_amount {
            return Err(LedgerError::UnbalancedTransaction {
                debit: self.debit_amount,
                credit: self.credit_amount,
            });
        }
        if self.debit_account.is_empty() || self.credit_account.is_empty() {
            return Err(LedgerError::MissingAccount);
        }

        Ok(pair(
            self.date,
            self.debit_account,
            self.credit_account,
            self.debit_amount,
            self.memo,
        ))
    }
}

/// An adjusting entry: a single amount moved from one account to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustmentInput {
    /// Adjustment date.
    pub date: NaiveDate,
    /// Account debited.
    pub debit_account: String,
    /// Account credited.
    pub credit_account: String,
    /// Amount (must be positive).
    pub amount: Decimal,
    /// Memo shared by both lines.
    #[serde(default)]
    pub memo: String,
}

impl AdjustmentInput {
    /// Validates the adjustment and returns `[debit line, credit line]`.
    ///
    /// # Errors
    ///
    /// - `MissingAccount` if either account name is empty
    /// - `NonPositiveAmount` if the amount is zero or negative
    pub fn into_entries(self) -> Result<[JournalEntry; 2], LedgerError> {
        if self.debit_account.is_empty() || self.credit_account.is_empty() {
            return Err(LedgerError::MissingAccount);
        }
        if self.amount <= Decimal::ZERO {
            return Err(LedgerError::NonPositiveAmount);
        }

        Ok(pair(
            self.date,
            self.debit_account,
            self.credit_account,
            self.amount,
            self.memo,
        ))
    }
}

fn pair(
    date: NaiveDate,
    debit_account: String,
    credit_account: String,
    amount: Decimal,
    memo: String,
) -> [JournalEntry; 2] {
    [
        JournalEntry::debit_line(Some(date), debit_account, amount, memo.clone()),
        JournalEntry::credit_line(Some(date), credit_account, amount, memo),
    ]
}
