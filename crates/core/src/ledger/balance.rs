//! Per-account running balances.
//!
//! Balances are always debit-normal: `movement = debit - credit`, so a
//! positive running balance is a debit balance and a negative one a credit
//! balance, whatever kind of account it is.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::entry::JournalEntry;

/// A journal line as it appears in an account's ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerLine {
    /// The original journal line.
    #[serde(flatten)]
    pub entry: JournalEntry,
    /// Debit minus credit for this line.
    pub movement: Decimal,
    /// Balance after this line.
    pub running_balance: Decimal,
}

impl LedgerLine {
    /// Creates the first line of an account.
    #[must_use]
    pub fn first(entry: JournalEntry) -> Self {
        let movement = entry.movement();
        Self {
            entry,
            movement,
            running_balance: movement,
        }
    }

    /// Creates the line following `previous`.
    ///
    /// `running_balance[N] = running_balance[N-1] + movement[N]`, saturating at
    /// the bounds of `Decimal`.
    #[must_use]
    pub fn next(previous: &Self, entry: JournalEntry) -> Self {
        let movement = entry.movement();
        Self {
            entry,
            movement,
            running_balance: previous.running_balance.saturating_add(movement),
        }
    }
}

/// One account of the general ledger: its lines in posting order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerAccount {
    /// Account name (the grouping key).
    pub name: String,
    /// Lines sorted by date.
    pub lines: Vec<LedgerLine>,
}

impl LedgerAccount {
    /// Builds an account from lines already in posting order.
    #[must_use]
    pub fn from_sorted(name: String, entries: Vec<JournalEntry>) -> Self {
        let mut lines: Vec<LedgerLine> = Vec::with_capacity(entries.len());
        for entry in entries {
            let line = match lines.last() {
                Some(previous) => LedgerLine::next(previous, entry),
                None => LedgerLine::first(entry),
            };
            lines.push(line);
        }
        Self { name, lines }
    }

    /// Balance after the last line (zero for an account without lines).
    #[must_use]
    pub fn final_balance(&self) -> Decimal {
        self.lines
            .last()
            .map_or(Decimal::ZERO, |line| line.running_balance)
    }

    /// Sum of all debits posted to the account.
    #[must_use]
    pub fn debit_total(&self) -> Decimal {
        self.lines
            .iter()
            .map(|line| line.entry.debit)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    /// Sum of all credits posted to the account.
    #[must_use]
    pub fn credit_total(&self) -> Decimal {
        self.lines
            .iter()
            .map(|line| line.entry.credit)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }
}
