//! Report data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::{JournalEntry, Ledger};

/// One account's net position in a trial balance.
///
/// At most one of `debit` and `credit` is non-zero. Missing fields
/// deserialize to an empty name and zero amounts; an empty name matches no
/// classification keyword.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrialBalanceRow {
    /// Account name.
    #[serde(alias = "Akun")]
    pub account: String,
    /// Debit balance.
    #[serde(alias = "Debit")]
    pub debit: Decimal,
    /// Credit balance.
    #[serde(alias = "Kredit")]
    pub credit: Decimal,
}

impl TrialBalanceRow {
    /// Splits a debit-normal balance into its debit or credit side.
    #[must_use]
    pub fn from_balance(account: impl Into<String>, balance: Decimal) -> Self {
        Self {
            account: account.into(),
            debit: balance.max(Decimal::ZERO),
            credit: (-balance).max(Decimal::ZERO),
        }
    }

    /// Debit minus credit.
    #[must_use]
    pub fn net(&self) -> Decimal {
        self.debit.saturating_sub(self.credit)
    }
}

/// Trial balance totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalanceTotals {
    /// Total debit.
    pub total_debit: Decimal,
    /// Total credit.
    pub total_credit: Decimal,
    /// Whether debits equal credits.
    pub is_balanced: bool,
}

impl TrialBalanceTotals {
    /// Computes totals over `rows`.
    #[must_use]
    pub fn from_rows(rows: &[TrialBalanceRow]) -> Self {
        let total_debit = rows
            .iter()
            .map(|r| r.debit)
            .fold(Decimal::ZERO, Decimal::saturating_add);
        let total_credit = rows
            .iter()
            .map(|r| r.credit)
            .fold(Decimal::ZERO, Decimal::saturating_add);
        Self {
            total_debit,
            total_credit,
            is_balanced: total_debit == total_credit,
        }
    }
}

/// Trial balance report.
///
/// The three columns are fixed by the row type, so an empty trial balance
/// still has a well-defined shape (see [`TrialBalance::COLUMNS`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrialBalance {
    /// One row per account, in ledger order.
    pub rows: Vec<TrialBalanceRow>,
    /// Totals.
    pub totals: TrialBalanceTotals,
}

impl TrialBalance {
    /// Column headers of the tabular form, in field order.
    pub const COLUMNS: [&'static str; 3] = ["Akun", "Debit", "Kredit"];

    /// Creates a trial balance from rows, computing totals.
    #[must_use]
    pub fn from_rows(rows: Vec<TrialBalanceRow>) -> Self {
        let totals = TrialBalanceTotals::from_rows(&rows);
        Self { rows, totals }
    }

    /// Returns true if there are no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Looks up a row by exact account name.
    #[must_use]
    pub fn row(&self, account: &str) -> Option<&TrialBalanceRow> {
        self.rows.iter().find(|r| r.account == account)
    }

    /// Total debit minus total credit.
    #[must_use]
    pub fn net(&self) -> Decimal {
        self.totals.total_debit.saturating_sub(self.totals.total_credit)
    }
}

/// Income statement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeStatement {
    /// Sum of credit balances of revenue accounts.
    pub revenue: Decimal,
    /// Sum of debit balances of expense accounts.
    pub expense: Decimal,
    /// Revenue minus expense (negative for a loss).
    pub net_income: Decimal,
}

impl IncomeStatement {
    /// Creates an income statement, deriving net income.
    #[must_use]
    pub fn new(revenue: Decimal, expense: Decimal) -> Self {
        Self {
            revenue,
            expense,
            net_income: revenue.saturating_sub(expense),
        }
    }
}

/// Statement of changes in capital.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapitalStatement {
    /// Capital at the start of the period.
    pub opening_capital: Decimal,
    /// Net income for the period.
    pub net_income: Decimal,
    /// Owner drawings.
    pub drawings: Decimal,
    /// Opening capital plus net income minus drawings.
    pub ending_capital: Decimal,
}

/// Balance sheet totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSheet {
    /// Sum of debit balances of asset accounts.
    pub total_assets: Decimal,
    /// Sum of credit balances of liability accounts.
    pub total_liabilities: Decimal,
    /// Ending capital from the capital statement.
    pub ending_capital: Decimal,
    /// Liabilities plus ending capital.
    pub liabilities_and_capital: Decimal,
    /// Whether assets equal liabilities plus capital.
    pub is_balanced: bool,
}

/// A ledger together with the trial balance derived from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LedgerSnapshot {
    /// General ledger.
    pub ledger: Ledger,
    /// Trial balance of `ledger`.
    pub trial_balance: TrialBalance,
}

/// Inputs of one report run.
///
/// The keys of the stored per-user journal (`jurnal`, `jurnal_penyesuaian`)
/// and of the capital form (`modal_awal`, `prive`) are accepted as aliases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportRequest {
    /// General journal lines.
    #[serde(alias = "jurnal")]
    pub entries: Vec<JournalEntry>,
    /// Adjusting journal lines.
    #[serde(alias = "jurnal_penyesuaian")]
    pub adjusting_entries: Vec<JournalEntry>,
    /// Capital at the start of the period.
    #[serde(alias = "modal_awal")]
    pub opening_capital: Decimal,
    /// Owner drawings.
    #[serde(alias = "prive")]
    pub drawings: Decimal,
}

/// Everything one run of the accounting cycle produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportBundle {
    /// General journal, as given.
    pub journal: Vec<JournalEntry>,
    /// Adjusting journal, as given.
    pub adjusting_journal: Vec<JournalEntry>,
    /// Ledger and trial balance before adjustments.
    pub opening: LedgerSnapshot,
    /// Ledger and trial balance after adjustments.
    pub adjusted: LedgerSnapshot,
    /// Income statement from the adjusted trial balance.
    pub income_statement: IncomeStatement,
    /// Capital statement.
    pub capital_statement: CapitalStatement,
    /// Balance sheet totals.
    pub balance_sheet: BalanceSheet,
    /// Closing entries (undated).
    pub closing_entries: Vec<JournalEntry>,
    /// Ledger and trial balance after closing.
    pub post_closing: LedgerSnapshot,
}
