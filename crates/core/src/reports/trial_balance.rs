//! Trial balance generation.

use tracing::warn;

use crate::ledger::Ledger;

use super::types::{TrialBalance, TrialBalanceRow};

/// Reduces a ledger to one net figure per account.
pub struct TrialBalanceGenerator;

impl TrialBalanceGenerator {
    /// Summarizes `ledger` into a trial balance.
    ///
    /// Each account's final running balance is split into a debit
    /// (`max(balance, 0)`) or credit (`max(-balance, 0)`) figure. Rows follow
    /// the ledger's account order. An unbalanced result is reported through
    /// `is_balanced` and a warning, never as an error.
    #[must_use]
    pub fn summarize(ledger: &Ledger) -> TrialBalance {
        let rows: Vec<TrialBalanceRow> = ledger
            .iter()
            .map(|account| TrialBalanceRow::from_balance(account.name.clone(), account.final_balance()))
            .collect();

        let trial_balance = TrialBalance::from_rows(rows);
        if !trial_balance.totals.is_balanced {
            warn!(
                total_debit = %trial_balance.totals.total_debit,
                total_credit = %trial_balance.totals.total_credit,
                "trial balance does not balance"
            );
        }
        trial_balance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{JournalEntry, LedgerBuilder};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn entry(account: &str, debit: Decimal, credit: Decimal) -> JournalEntry {
        JournalEntry::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            account,
            debit,
            credit,
            "",
        )
    }

    #[test]
    fn test_empty_ledger_gives_empty_trial_balance() {
        let tb = TrialBalanceGenerator::summarize(&LedgerBuilder::build(&[]));

        assert!(tb.is_empty());
        assert_eq!(tb.totals.total_debit, Decimal::ZERO);
        assert_eq!(tb.totals.total_credit, Decimal::ZERO);
        assert!(tb.totals.is_balanced);
        assert_eq!(TrialBalance::COLUMNS, ["Akun", "Debit", "Kredit"]);
    }

    #[test]
    fn test_opening_capital_example() {
        let ledger = LedgerBuilder::build(&[
            entry("Kas", dec!(1000), dec!(0)),
            entry("Modal", dec!(0), dec!(1000)),
        ]);
        let tb = TrialBalanceGenerator::summarize(&ledger);

        assert_eq!(
            tb.rows,
            vec![
                TrialBalanceRow {
                    account: "Kas".to_string(),
                    debit: dec!(1000),
                    credit: Decimal::ZERO,
                },
                TrialBalanceRow {
                    account: "Modal".to_string(),
                    debit: Decimal::ZERO,
                    credit: dec!(1000),
                },
            ]
        );
        assert!(tb.totals.is_balanced);
    }

    #[test]
    fn test_account_netting_to_zero_shows_zero_on_both_sides() {
        let ledger = LedgerBuilder::build(&[
            entry("Kas", dec!(500), dec!(0)),
            entry("Kas", dec!(0), dec!(500)),
        ]);
        let row = TrialBalanceGenerator::summarize(&ledger).rows.remove(0);

        assert_eq!(row.debit, Decimal::ZERO);
        assert_eq!(row.credit, Decimal::ZERO);
    }

    #[test]
    fn test_unbalanced_journal_is_tolerated() {
        let ledger = LedgerBuilder::build(&[
            entry("Kas", dec!(1000), dec!(0)),
            entry("Modal", dec!(0), dec!(900)),
        ]);
        let tb = TrialBalanceGenerator::summarize(&ledger);

        assert!(!tb.totals.is_balanced);
        assert_eq!(tb.net(), dec!(100));
    }
}
