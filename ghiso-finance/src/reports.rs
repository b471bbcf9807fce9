//! Month-level rollups behind the balance and summary replies.

use ghiso_core::{Money, TransactionType};
use serde::Serialize;

use crate::store::StoredTransaction;

/// Summary remark thresholds (VND of expense in the month)
pub const HIGH_SPENDING: Money = 5_000_000.0;
pub const SAVING_SPENDING: Money = 2_000_000.0;

const TOP_CATEGORIES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BalanceReport {
    pub income: Money,
    pub expense: Money,
    pub balance: Money,
}

/// How the month is going, as the balance reply phrases it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceStanding {
    /// More than half the income is left
    Comfortable,
    Positive,
    Deficit,
}

impl BalanceReport {
    pub fn from_transactions(transactions: &[StoredTransaction]) -> Self {
        let mut income = 0.0;
        let mut expense = 0.0;
        for t in transactions {
            match t.record.kind {
                TransactionType::Income => income += t.record.amount,
                TransactionType::Expense => expense += t.record.amount,
            }
        }
        Self {
            income,
            expense,
            balance: income - expense,
        }
    }

    pub fn standing(&self) -> BalanceStanding {
        if self.balance < 0.0 {
            BalanceStanding::Deficit
        } else if self.balance > self.income * 0.5 {
            BalanceStanding::Comfortable
        } else {
            BalanceStanding::Positive
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpendingLevel {
    High,
    Saving,
    Reasonable,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub name: &'static str,
    pub amount: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryReport {
    /// Calendar month (1-12) the report covers
    pub month: u32,
    pub top_expenses: Vec<CategoryTotal>,
    pub transaction_count: usize,
    pub expense_count: usize,
    pub income_count: usize,
    pub total_expense: Money,
}

impl SummaryReport {
    /// Expense totals are grouped by category display name. Ties keep the
    /// order in which categories first appeared.
    pub fn from_transactions(month: u32, transactions: &[StoredTransaction]) -> Self {
        let mut by_category: Vec<CategoryTotal> = Vec::new();
        let mut expense_count = 0;
        let mut income_count = 0;

        for t in transactions {
            match t.record.kind {
                TransactionType::Expense => {
                    expense_count += 1;
                    let name = t.record.category_id.display_name();
                    match by_category.iter_mut().find(|c| c.name == name) {
                        Some(total) => total.amount += t.record.amount,
                        None => by_category.push(CategoryTotal {
                            name,
                            amount: t.record.amount,
                        }),
                    }
                }
                TransactionType::Income => income_count += 1,
            }
        }

        let total_expense = by_category.iter().map(|c| c.amount).sum();
        by_category.sort_by(|a, b| b.amount.total_cmp(&a.amount));
        by_category.truncate(TOP_CATEGORIES);

        Self {
            month,
            top_expenses: by_category,
            transaction_count: transactions.len(),
            expense_count,
            income_count,
            total_expense,
        }
    }

    pub fn level(&self) -> SpendingLevel {
        if self.total_expense > HIGH_SPENDING {
            SpendingLevel::High
        } else if self.total_expense < SAVING_SPENDING {
            SpendingLevel::Saving
        } else {
            SpendingLevel::Reasonable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::TransactionDraft;
    use chrono::{NaiveDate, TimeZone, Utc};
    use ghiso_core::CategoryId;

    fn txn(kind: TransactionType, amount: Money, category: CategoryId) -> StoredTransaction {
        StoredTransaction {
            id: "txn-0001".to_string(),
            record: TransactionDraft {
                kind,
                category_id: category,
                ..TransactionDraft::expense(
                    "x",
                    amount,
                    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                    Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
                )
                .by("Minh Đan")
            },
        }
    }

    #[test]
    fn test_balance_sums() {
        let report = BalanceReport::from_transactions(&[
            txn(TransactionType::Income, 10_000_000.0, CategoryId::Salary),
            txn(TransactionType::Expense, 3_000_000.0, CategoryId::Housing),
            txn(TransactionType::Expense, 500_000.0, CategoryId::FoodAndDrink),
        ]);
        assert_eq!(report.income, 10_000_000.0);
        assert_eq!(report.expense, 3_500_000.0);
        assert_eq!(report.balance, 6_500_000.0);
        assert_eq!(report.standing(), BalanceStanding::Comfortable);
    }

    #[test]
    fn test_balance_standing() {
        let positive = BalanceReport { income: 1000.0, expense: 800.0, balance: 200.0 };
        assert_eq!(positive.standing(), BalanceStanding::Positive);
        let deficit = BalanceReport { income: 0.0, expense: 50.0, balance: -50.0 };
        assert_eq!(deficit.standing(), BalanceStanding::Deficit);
        let empty = BalanceReport::from_transactions(&[]);
        assert_eq!(empty.standing(), BalanceStanding::Positive);
    }

    #[test]
    fn test_summary_top_three() {
        let report = SummaryReport::from_transactions(
            6,
            &[
                txn(TransactionType::Expense, 100.0, CategoryId::Transport),
                txn(TransactionType::Expense, 400.0, CategoryId::FoodAndDrink),
                txn(TransactionType::Expense, 300.0, CategoryId::Shopping),
                txn(TransactionType::Expense, 200.0, CategoryId::Health),
                txn(TransactionType::Expense, 250.0, CategoryId::Transport),
                txn(TransactionType::Income, 9000.0, CategoryId::Salary),
            ],
        );
        let names: Vec<&str> = report.top_expenses.iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec![
                CategoryId::FoodAndDrink.display_name(),
                CategoryId::Transport.display_name(),
                CategoryId::Shopping.display_name(),
            ]
        );
        assert_eq!(report.top_expenses[1].amount, 350.0);
        assert_eq!(report.transaction_count, 6);
        assert_eq!(report.expense_count, 5);
        assert_eq!(report.income_count, 1);
        assert_eq!(report.total_expense, 1250.0);
        assert_eq!(report.level(), SpendingLevel::Saving);
    }

    #[test]
    fn test_spending_levels() {
        let high = SummaryReport::from_transactions(
            6,
            &[txn(TransactionType::Expense, 5_000_001.0, CategoryId::Housing)],
        );
        assert_eq!(high.level(), SpendingLevel::High);
        let reasonable = SummaryReport::from_transactions(
            6,
            &[txn(TransactionType::Expense, 2_000_000.0, CategoryId::Housing)],
        );
        assert_eq!(reasonable.level(), SpendingLevel::Reasonable);
    }
}
