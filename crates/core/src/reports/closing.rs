//! Closing entry synthesis.
//!
//! Closing moves the period's revenue and expense through the income summary
//! account into capital. Three independent blocks are emitted, always in the
//! order revenue, expense, net income, each as `[debit row, credit row]`:
//!
//! 1. `revenue > 0`: Dr revenue account / Cr income summary
//! 2. `expense > 0`: Dr income summary / Cr expense account
//! 3. `net_income != 0`: Dr income summary / Cr capital
//!
//! A negative net income is passed through as negative amounts rather than
//! swapping sides. Every block balances on its own, so the whole set does too.

use rust_decimal::Decimal;
use serde::Serialize;
use siklus_shared::ClosingConfig;

use crate::ledger::JournalEntry;

/// Account names and memos used by the closing entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClosingAccounts {
    /// Account debited when closing revenue.
    pub revenue: String,
    /// Account credited when closing expenses.
    pub expense: String,
    /// Income summary (temporary clearing) account.
    pub income_summary: String,
    /// Capital account.
    pub capital: String,
    /// Memo of the revenue block.
    pub revenue_memo: String,
    /// Memo of the expense block.
    pub expense_memo: String,
    /// Memo of the net-income block.
    pub net_income_memo: String,
}

impl From<&ClosingConfig> for ClosingAccounts {
    fn from(config: &ClosingConfig) -> Self {
        Self {
            revenue: config.revenue_account.clone(),
            expense: config.expense_account.clone(),
            income_summary: config.income_summary_account.clone(),
            capital: config.capital_account.clone(),
            revenue_memo: config.revenue_memo.clone(),
            expense_memo: config.expense_memo.clone(),
            net_income_memo: config.net_income_memo.clone(),
        }
    }
}

impl Default for ClosingAccounts {
    fn default() -> Self {
        Self::from(&ClosingConfig::default())
    }
}

/// Produces the closing journal for a period.
#[derive(Debug, Clone, Default)]
pub struct ClosingEntrySynthesizer {
    accounts: ClosingAccounts,
}

impl ClosingEntrySynthesizer {
    /// Creates a synthesizer writing to the given accounts.
    #[must_use]
    pub fn new(accounts: ClosingAccounts) -> Self {
        Self { accounts }
    }

    /// Synthesizes the closing entries. Rows are undated.
    #[must_use]
    pub fn synthesize(
        &self,
        revenue: Decimal,
        expense: Decimal,
        net_income: Decimal,
    ) -> Vec<JournalEntry> {
        let accounts = &self.accounts;
        let mut rows = Vec::with_capacity(6);

        if revenue > Decimal::ZERO {
            rows.push(JournalEntry::debit_line(
                None,
                &accounts.revenue,
                revenue,
                &accounts.revenue_memo,
            ));
            rows.push(JournalEntry::credit_line(
                None,
                &accounts.income_summary,
                revenue,
                &accounts.revenue_memo,
            ));
        }

        if expense > Decimal::ZERO {
            rows.push(JournalEntry::debit_line(
                None,
                &accounts.income_summary,
                expense,
                &accounts.expense_memo,
            ));
            rows.push(JournalEntry::credit_line(
                None,
                &accounts.expense,
                expense,
                &accounts.expense_memo,
            ));
        }

        if !net_income.is_zero() {
            rows.push(JournalEntry::debit_line(
                None,
                &accounts.income_summary,
                net_income,
                &accounts.net_income_memo,
            ));
            rows.push(JournalEntry::credit_line(
                None,
                &accounts.capital,
                net_income,
                &accounts.net_income_memo,
            ));
        }

        rows
    }
}
