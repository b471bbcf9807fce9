//! Record emitter: turns a parsed chat intent into ledger-ready transaction drafts.

use chrono::{DateTime, NaiveDate, Utc};
use ghiso_core::{month_year, CategoryId, Money, ParsedIntent, PaymentSource, TransactionType};
use serde::{Deserialize, Serialize};

use crate::category_rules::{guess_expense_category, guess_income_category};
use crate::error::DraftError;

pub const EXPENSE_PLACEHOLDER: &str = "Chi tiêu";
pub const INCOME_PLACEHOLDER: &str = "Thu nhập";

/// A transaction the ledger has not stored yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDraft {
    pub description: String,
    pub amount: Money,
    /// Date of the transaction (YYYY-MM-DD)
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category_id: CategoryId,
    pub payment_source: PaymentSource,
    /// Household member who made the transaction
    pub performed_by: String,
    pub created_at: DateTime<Utc>,
    /// YYYY-MM, derived from `date`
    pub month_year: String,
}

impl TransactionDraft {
    /// Expense paid in cash, category guessed from the description.
    pub fn expense(description: &str, amount: Money, date: NaiveDate, created_at: DateTime<Utc>) -> Self {
        Self::with_kind(TransactionType::Expense, description, amount, date, created_at)
    }

    /// Income into the bank account, category guessed from the description.
    pub fn income(description: &str, amount: Money, date: NaiveDate, created_at: DateTime<Utc>) -> Self {
        Self::with_kind(TransactionType::Income, description, amount, date, created_at)
    }

    fn with_kind(
        kind: TransactionType,
        description: &str,
        amount: Money,
        date: NaiveDate,
        created_at: DateTime<Utc>,
    ) -> Self {
        let (category_id, payment_source) = match kind {
            TransactionType::Expense => (guess_expense_category(description), PaymentSource::Cash),
            TransactionType::Income => (guess_income_category(description), PaymentSource::Bank),
        };
        Self {
            description: description.to_string(),
            amount,
            date,
            kind,
            category_id,
            payment_source,
            performed_by: String::new(),
            created_at,
            month_year: month_year(date),
        }
    }

    pub fn category(mut self, category_id: CategoryId) -> Self {
        self.category_id = category_id;
        self
    }

    pub fn paid_with(mut self, payment_source: PaymentSource) -> Self {
        self.payment_source = payment_source;
        self
    }

    pub fn by(mut self, performed_by: impl Into<String>) -> Self {
        self.performed_by = performed_by.into();
        self
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }
}

/// Builds drafts from intents
pub struct RecordEmitter;

impl RecordEmitter {
    /// Drafts for every transaction the intent describes.
    ///
    /// Income always lands in the bank account. Multi-expense fragments share
    /// the message date.
    pub fn drafts(
        intent: &ParsedIntent,
        performed_by: &str,
        created_at: DateTime<Utc>,
    ) -> Result<Vec<TransactionDraft>, DraftError> {
        match intent {
            ParsedIntent::SingleExpense {
                amount,
                description,
                date,
                payment_source,
            } => {
                if *amount <= 0.0 {
                    return Err(DraftError::MissingAmount);
                }
                let description = non_empty(description, EXPENSE_PLACEHOLDER);
                Ok(vec![
                    TransactionDraft::expense(description, *amount, *date, created_at)
                        .paid_with(*payment_source)
                        .by(performed_by),
                ])
            }

            ParsedIntent::SingleIncome {
                amount,
                description,
                date,
            } => {
                if *amount <= 0.0 {
                    return Err(DraftError::MissingAmount);
                }
                let description = non_empty(description, INCOME_PLACEHOLDER);
                Ok(vec![
                    TransactionDraft::income(description, *amount, *date, created_at)
                        .by(performed_by),
                ])
            }

            ParsedIntent::MultiExpense { items, date } => {
                if items.is_empty() {
                    return Err(DraftError::NoFragments);
                }
                Ok(items
                    .iter()
                    .map(|item| {
                        let description = non_empty(&item.description, EXPENSE_PLACEHOLDER);
                        TransactionDraft::expense(description, item.amount, *date, created_at)
                            .paid_with(item.payment_source)
                            .by(performed_by)
                    })
                    .collect())
            }

            other => Err(DraftError::NotATransaction(other.kind())),
        }
    }
}

fn non_empty<'a>(description: &'a str, placeholder: &'a str) -> &'a str {
    if description.trim().is_empty() {
        placeholder
    } else {
        description
    }
}
