//! Journal entry domain type.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single journal line: one debit or credit tied to an account.
///
/// Lines are immutable values. The free-form `account` name is the only
/// grouping key; there is no chart of accounts, and names are compared exactly
/// (case and whitespace matter).
///
/// Every field is optional on input. A record with missing, null or mistyped
/// fields still yields a usable line: no date, numeric names rendered as text,
/// unparseable amounts as zero. The column names of the stored journal
/// (`Tanggal`, `Akun`, `Debit`, `Kredit`, `Keterangan`) are accepted alongside
/// the English ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JournalEntry {
    /// Posting date. Closing entries carry none.
    #[serde(alias = "Tanggal", deserialize_with = "lenient::date")]
    pub date: Option<NaiveDate>,
    /// Account name.
    #[serde(alias = "Akun", deserialize_with = "lenient::text")]
    pub account: String,
    /// Debit amount (non-negative).
    #[serde(alias = "Debit", deserialize_with = "lenient::amount")]
    pub debit: Decimal,
    /// Credit amount (non-negative).
    #[serde(alias = "Kredit", deserialize_with = "lenient::amount")]
    pub credit: Decimal,
    /// Free-text memo.
    #[serde(alias = "Keterangan", deserialize_with = "lenient::text")]
    pub memo: String,
}

impl JournalEntry {
    /// Creates a dated journal line.
    #[must_use]
    pub fn new(
        date: NaiveDate,
        account: impl Into<String>,
        debit: Decimal,
        credit: Decimal,
        memo: impl Into<String>,
    ) -> Self {
        Self {
            date: Some(date),
            account: account.into(),
            debit,
            credit,
            memo: memo.into(),
        }
    }

    /// Creates a debit-only line.
    #[must_use]
    pub fn debit_line(
        date: Option<NaiveDate>,
        account: impl Into<String>,
        amount: Decimal,
        memo: impl Into<String>,
    ) -> Self {
        Self {
            date,
            account: account.into(),
            debit: amount,
            credit: Decimal::ZERO,
            memo: memo.into(),
        }
    }

    /// Creates a credit-only line.
    #[must_use]
    pub fn credit_line(
        date: Option<NaiveDate>,
        account: impl Into<String>,
        amount: Decimal,
        memo: impl Into<String>,
    ) -> Self {
        Self {
            date,
            account: account.into(),
            debit: Decimal::ZERO,
            credit: amount,
            memo: memo.into(),
        }
    }

    /// Returns the signed effect on the account (debit minus credit).
    #[must_use]
    pub fn movement(&self) -> Decimal {
        self.debit.saturating_sub(self.credit)
    }
}

/// Deserializers that turn null, mistyped or unparseable values into defaults.
mod lenient {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use serde::de::IgnoredAny;
    use serde::{Deserialize, Deserializer};

    /// Any scalar a stored journal cell may hold.
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Cell {
        Text(String),
        Number(Decimal),
        Flag(bool),
        Other(IgnoredAny),
    }

    impl Cell {
        fn into_text(self) -> Option<String> {
            match self {
                Self::Text(text) => Some(text),
                Self::Number(number) => Some(number.to_string()),
                Self::Flag(flag) => Some(flag.to_string()),
                Self::Other(IgnoredAny) => None,
            }
        }
    }

    /// Numbers and numeric strings become amounts; anything else is zero.
    pub(super) fn amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Cell::deserialize(deserializer)? {
            Cell::Number(number) => number,
            Cell::Text(text) => text.trim().parse().unwrap_or_default(),
            Cell::Flag(_) | Cell::Other(IgnoredAny) => Decimal::ZERO,
        })
    }

    /// Strings are kept as-is, numbers and booleans are rendered as text.
    pub(super) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Cell::deserialize(deserializer)?
            .into_text()
            .unwrap_or_default())
    }

    /// Accepts `YYYY-MM-DD`, optionally followed by a time part.
    pub(super) fn date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Cell::Text(raw) = Cell::deserialize(deserializer)? else {
            return Ok(None);
        };
        let raw = raw.trim();
        let parsed = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().or_else(|| {
            raw.get(..10)
                .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
        });
        Ok(parsed)
    }
}
