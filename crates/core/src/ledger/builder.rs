//! General ledger construction.
//!
//! Turns a flat journal into per-account ledgers with running balances.

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use super::balance::LedgerAccount;
use super::entry::JournalEntry;

/// The general ledger: accounts in the order they first appear in the journal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    accounts: Vec<LedgerAccount>,
    index: HashMap<String, usize>,
}

impl Ledger {
    /// Returns true if the ledger has no accounts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Number of distinct accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Looks up an account by its exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&LedgerAccount> {
        self.index.get(name).map(|&i| &self.accounts[i])
    }

    /// Iterates accounts in first-seen order.
    pub fn iter(&self) -> std::slice::Iter<'_, LedgerAccount> {
        self.accounts.iter()
    }

    /// Account names in first-seen order.
    pub fn account_names(&self) -> impl Iterator<Item = &str> {
        self.accounts.iter().map(|account| account.name.as_str())
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a LedgerAccount;
    type IntoIter = std::slice::Iter<'a, LedgerAccount>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for Ledger {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.accounts.serialize(serializer)
    }
}

/// Builds general ledgers from journal lines.
pub struct LedgerBuilder;

impl LedgerBuilder {
    /// Groups `entries` by account and computes running balances.
    ///
    /// - Accounts are matched by exact, case-sensitive name.
    /// - Lines within an account are stably sorted by date; lines sharing a
    ///   date keep their journal order and undated lines come last.
    /// - The input is only read; building twice yields equal ledgers.
    #[must_use]
    pub fn build(entries: &[JournalEntry]) -> Ledger {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut groups: Vec<(String, Vec<JournalEntry>)> = Vec::new();

        for entry in entries {
            let slot = match index.get(entry.account.as_str()) {
                Some(&slot) => slot,
                None => {
                    index.insert(entry.account.clone(), groups.len());
                    groups.push((entry.account.clone(), Vec::new()));
                    groups.len() - 1
                }
            };
            groups[slot].1.push(entry.clone());
        }

        let accounts = groups
            .into_iter()
            .map(|(name, mut lines)| {
                lines.sort_by(|a, b| compare_dates(a.date, b.date));
                LedgerAccount::from_sorted(name, lines)
            })
            .collect();

        Ledger { accounts, index }
    }
}

/// Chronological order with undated lines after every dated one.
fn compare_dates(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn entry(d: &str, account: &str, debit: Decimal, credit: Decimal, memo: &str) -> JournalEntry {
        JournalEntry::new(date(d), account, debit, credit, memo)
    }

    #[test]
    fn test_empty_journal_builds_empty_ledger() {
        let ledger = LedgerBuilder::build(&[]);
        assert!(ledger.is_empty());
        assert_eq!(ledger.len(), 0);
    }

    #[test]
    fn test_running_balance_example() {
        let ledger = LedgerBuilder::build(&[
            entry("2024-01-01", "Kas", dec!(100), dec!(0), ""),
            entry("2024-01-02", "Kas", dec!(0), dec!(40), ""),
        ]);

        let kas = ledger.get("Kas").unwrap();
        let balances: Vec<Decimal> = kas.lines.iter().map(|l| l.running_balance).collect();
        assert_eq!(balances, vec![dec!(100), dec!(60)]);
    }

    #[test]
    fn test_lines_sorted_by_date_within_account() {
        let ledger = LedgerBuilder::build(&[
            entry("2024-01-03", "Kas", dec!(0), dec!(30), "late"),
            entry("2024-01-01", "Kas", dec!(100), dec!(0), "early"),
        ]);

        let kas = ledger.get("Kas").unwrap();
        let memos: Vec<&str> = kas.lines.iter().map(|l| l.entry.memo.as_str()).collect();
        assert_eq!(memos, vec!["early", "late"]);
        assert_eq!(kas.lines[0].running_balance, dec!(100));
        assert_eq!(kas.lines[1].running_balance, dec!(70));
    }

    #[test]
    fn test_equal_dates_keep_journal_order() {
        let ledger = LedgerBuilder::build(&[
            entry("2024-01-02", "Kas", dec!(10), dec!(0), "first"),
            entry("2024-01-01", "Kas", dec!(5), dec!(0), "earliest"),
            entry("2024-01-02", "Kas", dec!(20), dec!(0), "second"),
            entry("2024-01-02", "Kas", dec!(0), dec!(1), "third"),
        ]);

        let memos: Vec<&str> = ledger
            .get("Kas")
            .unwrap()
            .lines
            .iter()
            .map(|l| l.entry.memo.as_str())
            .collect();
        assert_eq!(memos, vec!["earliest", "first", "second", "third"]);
    }

    #[test]
    fn test_undated_lines_sort_last() {
        let ledger = LedgerBuilder::build(&[
            JournalEntry::debit_line(None, "Modal", dec!(300), "Tutup laba"),
            entry("2024-01-01", "Modal", dec!(0), dec!(1000), "Setoran"),
        ]);

        let modal = ledger.get("Modal").unwrap();
        assert_eq!(modal.lines[0].entry.memo, "Setoran");
        assert_eq!(modal.lines[1].entry.memo, "Tutup laba");
        assert_eq!(modal.final_balance(), dec!(-700));
    }

    #[test]
    fn test_account_names_are_exact_keys() {
        let ledger = LedgerBuilder::build(&[
            entry("2024-01-01", "Kas", dec!(1), dec!(0), ""),
            entry("2024-01-01", "kas", dec!(2), dec!(0), ""),
            entry("2024-01-01", "Kas ", dec!(3), dec!(0), ""),
        ]);

        assert_eq!(ledger.len(), 3);
        assert_eq!(ledger.get("Kas").unwrap().final_balance(), dec!(1));
        assert_eq!(ledger.get("kas").unwrap().final_balance(), dec!(2));
        assert_eq!(ledger.get("Kas ").unwrap().final_balance(), dec!(3));
    }

    #[test]
    fn test_accounts_in_first_seen_order() {
        let ledger = LedgerBuilder::build(&[
            entry("2024-01-05", "Modal", dec!(0), dec!(1000), ""),
            entry("2024-01-01", "Kas", dec!(1000), dec!(0), ""),
            entry("2024-01-02", "Modal", dec!(0), dec!(50), ""),
            entry("2024-01-02", "Beban Sewa", dec!(50), dec!(0), ""),
        ]);

        let names: Vec<&str> = ledger.account_names().collect();
        assert_eq!(names, vec!["Modal", "Kas", "Beban Sewa"]);
    }

    #[test]
    fn test_build_is_idempotent_and_does_not_touch_input() {
        let journal = vec![
            entry("2024-01-02", "Kas", dec!(0), dec!(40), ""),
            entry("2024-01-01", "Kas", dec!(100), dec!(0), ""),
            entry("2024-01-01", "Modal", dec!(0), dec!(60), ""),
        ];
        let snapshot = journal.clone();

        let first = LedgerBuilder::build(&journal);
        let second = LedgerBuilder::build(&journal);

        assert_eq!(first, second);
        assert_eq!(journal, snapshot);
    }

    #[test]
    fn test_ledger_serializes_as_account_list() {
        let ledger = LedgerBuilder::build(&[entry("2024-01-01", "Kas", dec!(100), dec!(0), "")]);
        let json = serde_json::to_value(&ledger).unwrap();

        assert_eq!(json[0]["name"], "Kas");
        assert_eq!(json[0]["lines"][0]["account"], "Kas");
        assert_eq!(json[0]["lines"][0]["running_balance"], "100");
    }
}
