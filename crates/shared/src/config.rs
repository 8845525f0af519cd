//! Application configuration management.
//!
//! Every field has a default, so an empty environment yields the bookkeeping
//! conventions of an Indonesian trading-company ledger (`Pendapatan`, `Beban`,
//! `Modal`, ...).

use serde::Deserialize;

/// Keys whose environment values are comma-separated lists.
const LIST_KEYS: [&str; 4] = [
    "classification.revenue",
    "classification.expense",
    "classification.asset",
    "classification.liability",
];

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Account-name keywords used to classify trial-balance rows.
    pub classification: ClassificationConfig,
    /// Account names and memos used when synthesizing closing entries.
    pub closing: ClosingConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Keyword sets for classifying accounts by name.
///
/// Matching is a case-insensitive substring test against the account name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClassificationConfig {
    /// Keywords identifying revenue accounts.
    pub revenue: Vec<String>,
    /// Keywords identifying expense accounts.
    pub expense: Vec<String>,
    /// Keywords identifying asset accounts (cash, receivables, inventory).
    pub asset: Vec<String>,
    /// Keywords identifying liability accounts (payables).
    pub liability: Vec<String>,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            revenue: vec!["Pendapatan".to_string()],
            expense: vec!["Beban".to_string()],
            asset: vec![
                "Kas".to_string(),
                "Piutang".to_string(),
                "Persediaan".to_string(),
            ],
            liability: vec!["Utang".to_string()],
        }
    }
}

/// Accounts and memos written by the closing entries.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClosingConfig {
    /// Account debited when closing revenue.
    pub revenue_account: String,
    /// Account credited when closing expenses.
    pub expense_account: String,
    /// Temporary clearing account (income summary).
    pub income_summary_account: String,
    /// Capital account receiving net income.
    pub capital_account: String,
    /// Memo for the revenue-closing rows.
    pub revenue_memo: String,
    /// Memo for the expense-closing rows.
    pub expense_memo: String,
    /// Memo for the net-income-closing rows.
    pub net_income_memo: String,
}

impl Default for ClosingConfig {
    fn default() -> Self {
        Self {
            revenue_account: "Pendapatan".to_string(),
            expense_account: "Beban".to_string(),
            income_summary_account: "Ikhtisar Laba Rugi".to_string(),
            capital_account: "Modal".to_string(),
            revenue_memo: "Tutup pendapatan".to_string(),
            expense_memo: "Tutup beban".to_string(),
            net_income_memo: "Tutup laba".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default `EnvFilter` directive when `RUST_LOG` is unset.
    pub filter: String,
    /// Emit JSON log lines instead of human-readable ones.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "siklus=info".to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, lowest precedence first: `config/default`, `config/{RUN_MODE}`,
    /// then `SIKLUS__*` environment variables (keyword lists are comma-separated,
    /// e.g. `SIKLUS__CLASSIFICATION__ASSET=Kas,Bank`).
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let environment = LIST_KEYS.iter().fold(
            config::Environment::with_prefix("SIKLUS")
                .separator("__")
                .list_separator(",")
                .try_parsing(true),
            |env, key| env.with_list_parse_key(key),
        );

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(environment)
            .build()?;

        config.try_deserialize()
    }
}
