//! Structured result of reading one chat message.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::finance::{Money, PaymentSource};

/// One amount + description unit inside a multi-transaction message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseFragment {
    pub amount: Money,
    pub description: String,
    pub payment_source: PaymentSource,
}

/// What the user meant. Built fresh per message and handed straight to the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum ParsedIntent {
    Greeting,
    BalanceInquiry,
    SummaryRequest,
    Unclassified,
    Pushback,
    /// `amount == 0.0` means the message carried no amount
    SingleExpense {
        amount: Money,
        description: String,
        date: NaiveDate,
        payment_source: PaymentSource,
    },
    SingleIncome {
        amount: Money,
        description: String,
        date: NaiveDate,
    },
    /// Always holds at least two fragments
    MultiExpense {
        items: Vec<ExpenseFragment>,
        date: NaiveDate,
    },
}

impl ParsedIntent {
    /// Short machine name, used in logs and CLI output
    pub fn kind(&self) -> &'static str {
        match self {
            ParsedIntent::Greeting => "greeting",
            ParsedIntent::BalanceInquiry => "balance_inquiry",
            ParsedIntent::SummaryRequest => "summary_request",
            ParsedIntent::Unclassified => "unclassified",
            ParsedIntent::Pushback => "pushback",
            ParsedIntent::SingleExpense { .. } => "single_expense",
            ParsedIntent::SingleIncome { .. } => "single_income",
            ParsedIntent::MultiExpense { .. } => "multi_expense",
        }
    }

    /// True for the variants that should end up in the ledger
    pub fn is_transaction(&self) -> bool {
        matches!(
            self,
            ParsedIntent::SingleExpense { .. }
                | ParsedIntent::SingleIncome { .. }
                | ParsedIntent::MultiExpense { .. }
        )
    }

    /// True when a transaction intent has nothing to record
    pub fn is_missing_amount(&self) -> bool {
        match self {
            ParsedIntent::SingleExpense { amount, .. } | ParsedIntent::SingleIncome { amount, .. } => {
                *amount <= 0.0
            }
            _ => false,
        }
    }
}
