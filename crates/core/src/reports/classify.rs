//! Account classification by name keyword.
//!
//! There is no chart of accounts, so an account's role is inferred from its
//! name: an account is "revenue" if its name contains a revenue keyword,
//! case-insensitively. This is a plain substring test; `Pendapatan` also
//! matches `Utang Pendapatan Diterima Dimuka`.

use rust_decimal::Decimal;
use serde::Serialize;
use siklus_shared::ClassificationConfig;

use super::types::TrialBalanceRow;

/// A set of case-insensitive substring keywords.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KeywordSet {
    keywords: Vec<String>,
}

impl KeywordSet {
    /// Creates a keyword set. Keywords are trimmed; blank ones are dropped.
    #[must_use]
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        Self { keywords }
    }

    /// Returns true if `account` contains any keyword, ignoring case.
    #[must_use]
    pub fn matches(&self, account: &str) -> bool {
        if self.keywords.is_empty() {
            return false;
        }
        let account = account.to_lowercase();
        self.keywords.iter().any(|k| account.contains(k.as_str()))
    }

    /// Returns true if the set has no keywords.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Sums `side` over the rows whose account matches.
    pub fn sum_matching<'a, I, F>(&self, rows: I, side: F) -> Decimal
    where
        I: IntoIterator<Item = &'a TrialBalanceRow>,
        F: Fn(&TrialBalanceRow) -> Decimal,
    {
        rows.into_iter()
            .filter(|row| self.matches(&row.account))
            .map(side)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }
}

/// Keyword sets for every account role the reports need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountClassifier {
    /// Revenue accounts.
    pub revenue: KeywordSet,
    /// Expense accounts.
    pub expense: KeywordSet,
    /// Asset accounts (cash, receivables, inventory).
    pub asset: KeywordSet,
    /// Liability accounts (payables).
    pub liability: KeywordSet,
}

impl From<&ClassificationConfig> for AccountClassifier {
    fn from(config: &ClassificationConfig) -> Self {
        Self {
            revenue: KeywordSet::new(&config.revenue),
            expense: KeywordSet::new(&config.expense),
            asset: KeywordSet::new(&config.asset),
            liability: KeywordSet::new(&config.liability),
        }
    }
}

impl Default for AccountClassifier {
    fn default() -> Self {
        Self::from(&ClassificationConfig::default())
    }
}
