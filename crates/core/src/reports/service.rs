//! Report generation service: the full accounting cycle.

use rust_decimal::Decimal;
use siklus_shared::AppConfig;
use tracing::{debug, info};

use crate::ledger::{JournalEntry, LedgerBuilder};

use super::classify::AccountClassifier;
use super::closing::{ClosingAccounts, ClosingEntrySynthesizer};
use super::income::IncomeStatementCalculator;
use super::trial_balance::TrialBalanceGenerator;
use super::types::{LedgerSnapshot, ReportBundle, ReportRequest};

/// Service for generating the accounting-cycle reports.
///
/// Holds only immutable configuration, so one instance can serve concurrent
/// requests from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct ReportService {
    calculator: IncomeStatementCalculator,
    closing: ClosingEntrySynthesizer,
}

impl ReportService {
    /// Creates a service with explicit keyword sets and closing accounts.
    #[must_use]
    pub fn new(classifier: AccountClassifier, closing_accounts: ClosingAccounts) -> Self {
        Self {
            calculator: IncomeStatementCalculator::new(classifier),
            closing: ClosingEntrySynthesizer::new(closing_accounts),
        }
    }

    /// Creates a service from application configuration.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            AccountClassifier::from(&config.classification),
            ClosingAccounts::from(&config.closing),
        )
    }

    /// Builds a ledger and its trial balance from `entries`.
    #[must_use]
    pub fn snapshot(entries: &[JournalEntry]) -> LedgerSnapshot {
        let ledger = LedgerBuilder::build(entries);
        let trial_balance = TrialBalanceGenerator::summarize(&ledger);
        LedgerSnapshot {
            ledger,
            trial_balance,
        }
    }

    /// Runs the cycle for a [`ReportRequest`].
    #[must_use]
    pub fn generate_request(&self, request: &ReportRequest) -> ReportBundle {
        self.generate(
            &request.entries,
            &request.adjusting_entries,
            request.opening_capital,
            request.drawings,
        )
    }

    /// Runs the accounting cycle.
    ///
    /// 1. Opening ledger and trial balance from `entries`
    /// 2. Adjusted ledger and trial balance from `entries` then `adjusting_entries`
    /// 3. Income statement from the adjusted trial balance
    /// 4. Capital statement and balance sheet
    /// 5. Closing entries
    /// 6. Post-closing ledger and trial balance from all three journals
    ///
    /// Inputs are only read. Unbalanced journals produce unbalanced trial
    /// balances, not errors.
    #[must_use]
    pub fn generate(
        &self,
        entries: &[JournalEntry],
        adjusting_entries: &[JournalEntry],
        opening_capital: Decimal,
        drawings: Decimal,
    ) -> ReportBundle {
        debug!(
            entries = entries.len(),
            adjusting_entries = adjusting_entries.len(),
            "generating accounting cycle reports"
        );

        let opening = Self::snapshot(entries);

        let mut adjusted_journal = Vec::with_capacity(entries.len() + adjusting_entries.len());
        adjusted_journal.extend_from_slice(entries);
        adjusted_journal.extend_from_slice(adjusting_entries);
        let adjusted = Self::snapshot(&adjusted_journal);

        let income_statement = self.calculator.compute(&adjusted.trial_balance);
        let capital_statement = IncomeStatementCalculator::capital_statement(
            opening_capital,
            income_statement.net_income,
            drawings,
        );
        let balance_sheet = self
            .calculator
            .balance_sheet(&adjusted.trial_balance, capital_statement.ending_capital);
        debug!(
            revenue = %income_statement.revenue,
            expense = %income_statement.expense,
            net_income = %income_statement.net_income,
            "income statement computed"
        );

        let closing_entries = self.closing.synthesize(
            income_statement.revenue,
            income_statement.expense,
            income_statement.net_income,
        );

        let mut final_journal = adjusted_journal;
        final_journal.extend_from_slice(&closing_entries);
        let post_closing = Self::snapshot(&final_journal);

        info!(
            accounts = post_closing.ledger.len(),
            closing_entries = closing_entries.len(),
            ending_capital = %capital_statement.ending_capital,
            "accounting cycle complete"
        );

        ReportBundle {
            journal: entries.to_vec(),
            adjusting_journal: adjusting_entries.to_vec(),
            opening,
            adjusted,
            income_statement,
            capital_statement,
            balance_sheet,
            closing_entries,
            post_closing,
        }
    }
}
