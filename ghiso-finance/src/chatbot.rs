//! The household ledger chatbot: classify a message, write what it describes,
//! answer in the bot's voice.

use chrono::{DateTime, Datelike, TimeZone, Utc};
use ghiso_core::{month_year, ParsedIntent};
use ghiso_intent::IntentParser;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{DraftError, StoreError};
use crate::records::RecordEmitter;
use crate::replies;
use crate::reports::{BalanceReport, SummaryReport};
use crate::store::{StoredTransaction, TransactionStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyKind {
    Text,
    /// At least one transaction was written
    Transaction,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatReply {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: ReplyKind,
    pub transactions: Vec<StoredTransaction>,
    pub intent: ParsedIntent,
}

impl ChatReply {
    fn text(intent: ParsedIntent, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: ReplyKind::Text,
            transactions: Vec::new(),
            intent,
        }
    }

    fn recorded(intent: ParsedIntent, text: String, transactions: Vec<StoredTransaction>) -> Self {
        Self {
            text,
            kind: ReplyKind::Transaction,
            transactions,
            intent,
        }
    }
}

pub struct Chatbot<S, R> {
    parser: IntentParser,
    store: S,
    rng: R,
    performed_by: String,
}

impl<S: TransactionStore, R: Rng> Chatbot<S, R> {
    pub fn new(parser: IntentParser, store: S, rng: R, performed_by: impl Into<String>) -> Self {
        Self {
            parser,
            store,
            rng,
            performed_by: performed_by.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Answer one chat message. `now` fixes both "today" for date phrases and
    /// the month the balance and summary cover.
    pub fn respond<Tz: TimeZone>(&mut self, message: &str, now: &DateTime<Tz>) -> ChatReply {
        let intent = self.parser.classify(message, now);
        let created_at = now.with_timezone(&Utc);

        match intent {
            ParsedIntent::SingleExpense { .. } => self.record_expense(intent, created_at),
            ParsedIntent::MultiExpense { .. } => self.record_many(intent, created_at),
            ParsedIntent::SingleIncome { .. } => self.record_income(intent, created_at),
            ParsedIntent::BalanceInquiry => {
                let text = match self.balance(&month_year(now.date_naive())) {
                    Ok(report) => replies::balance_reply(&report, &mut self.rng),
                    Err(e) => {
                        warn!(error = %e, "could not read month for balance");
                        replies::BALANCE_FAILED.to_string()
                    }
                };
                ChatReply::text(intent, text)
            }
            ParsedIntent::SummaryRequest => {
                let text = match self.summary(now) {
                    Ok(report) => replies::summary_reply(&report),
                    Err(e) => {
                        warn!(error = %e, "could not read month for summary");
                        replies::SUMMARY_FAILED.to_string()
                    }
                };
                ChatReply::text(intent, text)
            }
            ParsedIntent::Greeting => {
                let text = replies::pick_response(replies::GREETINGS, &mut self.rng);
                ChatReply::text(intent, text)
            }
            ParsedIntent::Pushback => {
                let text = replies::pick_response(replies::PUSHBACK_REPLIES, &mut self.rng);
                ChatReply::text(intent, text)
            }
            ParsedIntent::Unclassified => {
                let text = replies::pick_response(replies::CLARIFICATIONS, &mut self.rng);
                ChatReply::text(intent, text)
            }
        }
    }

    /// Income, expense and balance for a YYYY-MM month.
    pub fn balance(&self, month_year: &str) -> Result<BalanceReport, StoreError> {
        let transactions = self.store.transactions_for_month(month_year)?;
        Ok(BalanceReport::from_transactions(&transactions))
    }

    /// Category breakdown for the month containing `now`.
    pub fn summary<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Result<SummaryReport, StoreError> {
        let today = now.date_naive();
        let transactions = self.store.transactions_for_month(&month_year(today))?;
        Ok(SummaryReport::from_transactions(today.month(), &transactions))
    }

    fn record_expense(&mut self, intent: ParsedIntent, created_at: DateTime<Utc>) -> ChatReply {
        let draft = match RecordEmitter::drafts(&intent, &self.performed_by, created_at) {
            Ok(mut drafts) if drafts.len() == 1 => drafts.remove(0),
            Ok(_) => return ChatReply::text(intent, replies::EXPENSE_FAILED),
            Err(DraftError::MissingAmount) => {
                return ChatReply::text(intent, replies::MISSING_EXPENSE_AMOUNT);
            }
            Err(e) => {
                debug!(error = %e, "expense intent produced no draft");
                return ChatReply::text(intent, replies::EXPENSE_FAILED);
            }
        };

        let (amount, source) = (draft.amount, draft.payment_source);
        let description = draft.description.clone();
        match self.store.add_transaction(draft) {
            Ok(stored) => {
                let text = replies::expense_reply(amount, source, &description, &mut self.rng);
                ChatReply::recorded(intent, text, vec![stored])
            }
            Err(e) => {
                warn!(error = %e, amount, "expense may not have been saved");
                let text =
                    replies::expense_unsaved_reply(amount, source, &description, &mut self.rng);
                ChatReply::text(intent, text)
            }
        }
    }

    fn record_many(&mut self, intent: ParsedIntent, created_at: DateTime<Utc>) -> ChatReply {
        let drafts = match RecordEmitter::drafts(&intent, &self.performed_by, created_at) {
            Ok(drafts) => drafts,
            Err(DraftError::NoFragments) => return ChatReply::text(intent, replies::NO_FRAGMENTS),
            Err(e) => {
                debug!(error = %e, "multi-expense intent produced no drafts");
                return ChatReply::text(intent, replies::MULTI_FAILED);
            }
        };

        let mut stored = Vec::with_capacity(drafts.len());
        for draft in &drafts {
            match self.store.add_transaction(draft.clone()) {
                Ok(s) => stored.push(s),
                Err(e) => {
                    warn!(
                        error = %e,
                        saved = stored.len(),
                        total = drafts.len(),
                        "multi-expense write stopped early"
                    );
                    return ChatReply::text(intent, replies::MULTI_FAILED);
                }
            }
        }

        let text = replies::multi_expense_reply(&drafts, &mut self.rng);
        ChatReply::recorded(intent, text, stored)
    }

    fn record_income(&mut self, intent: ParsedIntent, created_at: DateTime<Utc>) -> ChatReply {
        let draft = match RecordEmitter::drafts(&intent, &self.performed_by, created_at) {
            Ok(mut drafts) if drafts.len() == 1 => drafts.remove(0),
            Ok(_) => return ChatReply::text(intent, replies::INCOME_FAILED),
            Err(DraftError::MissingAmount) => {
                return ChatReply::text(intent, replies::MISSING_INCOME_AMOUNT);
            }
            Err(e) => {
                debug!(error = %e, "income intent produced no draft");
                return ChatReply::text(intent, replies::INCOME_FAILED);
            }
        };

        let (amount, description) = (draft.amount, draft.description.clone());
        match self.store.add_transaction(draft) {
            Ok(stored) => {
                let text = replies::income_reply(amount, &description, &mut self.rng);
                ChatReply::recorded(intent, text, vec![stored])
            }
            Err(e) => {
                warn!(error = %e, amount, "income was not saved");
                ChatReply::text(intent, replies::INCOME_FAILED)
            }
        }
    }
}
