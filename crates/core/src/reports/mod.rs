//! Financial report generation.
//!
//! This module provides pure business logic for the accounting cycle:
//! - Trial Balance (opening, adjusted, post-closing)
//! - Income Statement
//! - Capital Statement and Balance Sheet
//! - Closing Entries
//! - Workbook (sheet) form for export

pub mod classify;
pub mod closing;
pub mod export;
pub mod income;
pub mod service;
pub mod trial_balance;
pub mod types;


pub use classify::{AccountClassifier, KeywordSet};
pub use closing::{ClosingAccounts, ClosingEntrySynthesizer};
pub use export::{Cell, Sheet};
pub use income::IncomeStatementCalculator;
pub use service::ReportService;
pub use trial_balance::TrialBalanceGenerator;
pub use types::*;
