//! Income statement, capital statement and balance sheet.

use rust_decimal::Decimal;

use super::classify::AccountClassifier;
use super::types::{BalanceSheet, CapitalStatement, IncomeStatement, TrialBalance};

/// Computes the financial statements from a trial balance.
#[derive(Debug, Clone, Default)]
pub struct IncomeStatementCalculator {
    classifier: AccountClassifier,
}

impl IncomeStatementCalculator {
    /// Creates a calculator using the given keyword sets.
    #[must_use]
    pub fn new(classifier: AccountClassifier) -> Self {
        Self { classifier }
    }

    /// Computes revenue, expense and net income.
    ///
    /// Revenue sums the credit side of revenue-keyword rows and expense the
    /// debit side of expense-keyword rows. An empty trial balance yields all
    /// zeros.
    #[must_use]
    pub fn compute(&self, trial_balance: &TrialBalance) -> IncomeStatement {
        let revenue = self
            .classifier
            .revenue
            .sum_matching(&trial_balance.rows, |row| row.credit);
        let expense = self
            .classifier
            .expense
            .sum_matching(&trial_balance.rows, |row| row.debit);

        IncomeStatement::new(revenue, expense)
    }

    /// Computes the capital statement: `opening + net_income - drawings`.
    #[must_use]
    pub fn capital_statement(
        opening_capital: Decimal,
        net_income: Decimal,
        drawings: Decimal,
    ) -> CapitalStatement {
        CapitalStatement {
            opening_capital,
            net_income,
            drawings,
            ending_capital: opening_capital
                .saturating_add(net_income)
                .saturating_sub(drawings),
        }
    }

    /// Computes balance sheet totals.
    ///
    /// Assets sum the debit side of asset-keyword rows, liabilities the credit
    /// side of liability-keyword rows.
    #[must_use]
    pub fn balance_sheet(&self, trial_balance: &TrialBalance, ending_capital: Decimal) -> BalanceSheet {
        let total_assets = self
            .classifier
            .asset
            .sum_matching(&trial_balance.rows, |row| row.debit);
        let total_liabilities = self
            .classifier
            .liability
            .sum_matching(&trial_balance.rows, |row| row.credit);
        let liabilities_and_capital = total_liabilities.saturating_add(ending_capital);

        BalanceSheet {
            total_assets,
            total_liabilities,
            ending_capital,
            liabilities_and_capital,
            is_balanced: total_assets == liabilities_and_capital,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::classify::KeywordSet;
    use crate::reports::types::TrialBalanceRow;
    use rust_decimal_macros::dec;

    fn row(account: &str, debit: Decimal, credit: Decimal) -> TrialBalanceRow {
        TrialBalanceRow {
            account: account.to_string(),
            debit,
            credit,
        }
    }

    #[test]
    fn test_empty_trial_balance_gives_zeros() {
        let statement = IncomeStatementCalculator::default().compute(&TrialBalance::default());
        assert_eq!(statement, IncomeStatement::default());
        assert_eq!(statement.net_income, Decimal::ZERO);
    }

    #[test]
    fn test_service_revenue_and_rent_expense_example() {
        let tb = TrialBalance::from_rows(vec![
            row("Pendapatan Jasa", dec!(0), dec!(500)),
            row("Beban Sewa", dec!(200), dec!(0)),
        ]);

        let statement = IncomeStatementCalculator::default().compute(&tb);

        assert_eq!(statement.revenue, dec!(500));
        assert_eq!(statement.expense, dec!(200));
        assert_eq!(statement.net_income, dec!(300));
    }

    #[test]
    fn test_unclassified_accounts_are_ignored() {
        let tb = TrialBalance::from_rows(vec![
            row("Kas", dec!(700), dec!(0)),
            row("Modal", dec!(0), dec!(1000)),
            row("Pendapatan Jasa", dec!(0), dec!(500)),
            row("Beban Gaji", dec!(800), dec!(0)),
        ]);

        let statement = IncomeStatementCalculator::default().compute(&tb);

        assert_eq!(statement.revenue, dec!(500));
        assert_eq!(statement.expense, dec!(800));
        assert_eq!(statement.net_income, dec!(-300));
    }

    #[test]
    fn test_revenue_uses_credit_side_only() {
        // A revenue account with a debit balance contributes nothing.
        let tb = TrialBalance::from_rows(vec![row("Pendapatan Lain", dec!(50), dec!(0))]);
        let statement = IncomeStatementCalculator::default().compute(&tb);
        assert_eq!(statement.revenue, Decimal::ZERO);
    }

    #[test]
    fn test_rows_without_account_name_match_nothing() {
        let tb: TrialBalance =
            serde_json::from_str(r#"{"rows":[{"Debit":10},{"Kredit":20}]}"#).unwrap();

        let statement = IncomeStatementCalculator::default().compute(&tb);
        assert_eq!(statement, IncomeStatement::default());
    }

    #[test]
    fn test_injected_keywords() {
        let classifier = AccountClassifier {
            revenue: KeywordSet::new(["Sales"]),
            expense: KeywordSet::new(["Cost"]),
            asset: KeywordSet::new(["Cash"]),
            liability: KeywordSet::new(["Payable"]),
        };
        let tb = TrialBalance::from_rows(vec![
            row("Sales", dec!(0), dec!(900)),
            row("Cost of Sales", dec!(400), dec!(0)),
        ]);

        let statement = IncomeStatementCalculator::new(classifier).compute(&tb);

        // "Cost of Sales" also contains "Sales" but sits on the debit side.
        assert_eq!(statement.revenue, dec!(900));
        assert_eq!(statement.expense, dec!(400));
    }

    #[test]
    fn test_capital_statement() {
        let capital =
            IncomeStatementCalculator::capital_statement(dec!(10000), dec!(300), dec!(100));
        assert_eq!(capital.ending_capital, dec!(10200));

        let loss = IncomeStatementCalculator::capital_statement(dec!(10000), dec!(-500), dec!(0));
        assert_eq!(loss.ending_capital, dec!(9500));
    }

    #[test]
    fn test_balance_sheet_totals() {
        let tb = TrialBalance::from_rows(vec![
            row("Kas", dec!(6000), dec!(0)),
            row("Piutang Usaha", dec!(2000), dec!(0)),
            row("Persediaan", dec!(3000), dec!(0)),
            row("Peralatan", dec!(4000), dec!(0)),
            row("Utang Usaha", dec!(0), dec!(1000)),
            row("Modal", dec!(0), dec!(14000)),
        ]);

        let sheet = IncomeStatementCalculator::default().balance_sheet(&tb, dec!(10000));

        assert_eq!(sheet.total_assets, dec!(11000));
        assert_eq!(sheet.total_liabilities, dec!(1000));
        assert_eq!(sheet.liabilities_and_capital, dec!(11000));
        assert!(sheet.is_balanced);
    }
}
