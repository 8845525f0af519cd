//! Tabular (workbook) form of a report bundle.
//!
//! An export collaborator writes each [`Sheet`] as one spreadsheet tab; the
//! core only fixes sheet names, column order and cell types.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::ledger::JournalEntry;

use super::types::{ReportBundle, TrialBalance};

/// Sheet name of the general journal.
pub const GENERAL_JOURNAL_SHEET: &str = "Jurnal Umum";
/// Sheet name of the adjusting journal.
pub const ADJUSTING_JOURNAL_SHEET: &str = "Jurnal Penyesuaian";
/// Sheet name of the opening trial balance.
pub const OPENING_TRIAL_BALANCE_SHEET: &str = "Neraca Awal";
/// Sheet name of the adjusted trial balance.
pub const ADJUSTED_TRIAL_BALANCE_SHEET: &str = "Neraca Disesuaikan";
/// Sheet name of the closing entries.
pub const CLOSING_ENTRIES_SHEET: &str = "Jurnal Penutup";
/// Sheet name of the post-closing trial balance.
pub const POST_CLOSING_TRIAL_BALANCE_SHEET: &str = "Neraca Akhir";

/// Journal columns, in field order.
pub const JOURNAL_COLUMNS: [&str; 5] = ["Tanggal", "Akun", "Debit", "Kredit", "Keterangan"];
/// Closing-entry columns (closing rows carry no date).
pub const CLOSING_COLUMNS: [&str; 4] = ["Akun", "Debit", "Kredit", "Keterangan"];

/// A single cell value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    /// Text (dates are rendered as `YYYY-MM-DD`).
    Text(String),
    /// Monetary amount.
    Amount(Decimal),
    /// No value.
    Empty,
}

/// One named table of the workbook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sheet {
    /// Tab name.
    pub name: &'static str,
    /// Column headers.
    pub columns: Vec<&'static str>,
    /// Rows, each with one cell per column.
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    fn journal(name: &'static str, entries: &[JournalEntry]) -> Self {
        let rows = entries
            .iter()
            .map(|e| {
                vec![
                    e.date
                        .map_or(Cell::Empty, |d| Cell::Text(d.format("%Y-%m-%d").to_string())),
                    Cell::Text(e.account.clone()),
                    Cell::Amount(e.debit),
                    Cell::Amount(e.credit),
                    Cell::Text(e.memo.clone()),
                ]
            })
            .collect();

        Self {
            name,
            columns: JOURNAL_COLUMNS.to_vec(),
            rows,
        }
    }

    fn closing(entries: &[JournalEntry]) -> Self {
        let rows = entries
            .iter()
            .map(|e| {
                vec![
                    Cell::Text(e.account.clone()),
                    Cell::Amount(e.debit),
                    Cell::Amount(e.credit),
                    Cell::Text(e.memo.clone()),
                ]
            })
            .collect();

        Self {
            name: CLOSING_ENTRIES_SHEET,
            columns: CLOSING_COLUMNS.to_vec(),
            rows,
        }
    }

    fn trial_balance(name: &'static str, trial_balance: &TrialBalance) -> Self {
        let rows = trial_balance
            .rows
            .iter()
            .map(|r| {
                vec![
                    Cell::Text(r.account.clone()),
                    Cell::Amount(r.debit),
                    Cell::Amount(r.credit),
                ]
            })
            .collect();

        Self {
            name,
            columns: TrialBalance::COLUMNS.to_vec(),
            rows,
        }
    }
}

impl ReportBundle {
    /// Returns the exportable tables in workbook order.
    #[must_use]
    pub fn workbook(&self) -> Vec<Sheet> {
        vec![
            Sheet::journal(GENERAL_JOURNAL_SHEET, &self.journal),
            Sheet::journal(ADJUSTING_JOURNAL_SHEET, &self.adjusting_journal),
            Sheet::trial_balance(OPENING_TRIAL_BALANCE_SHEET, &self.opening.trial_balance),
            Sheet::trial_balance(ADJUSTED_TRIAL_BALANCE_SHEET, &self.adjusted.trial_balance),
            Sheet::closing(&self.closing_entries),
            Sheet::trial_balance(
                POST_CLOSING_TRIAL_BALANCE_SHEET,
                &self.post_closing.trial_balance,
            ),
        ]
    }
}
