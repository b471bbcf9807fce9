//! ghiso-finance: category rules, record drafting, the ledger store seam,
//! month reports and the chatbot that ties them together.

pub mod category_rules;
pub mod chatbot;
pub mod error;
pub mod records;
pub mod replies;
pub mod reports;
pub mod store;

pub use category_rules::{guess_expense_category, guess_income_category};
pub use chatbot::{ChatReply, Chatbot, ReplyKind};
pub use error::{DraftError, StoreError};
pub use records::{RecordEmitter, TransactionDraft};
pub use replies::{format_vnd, pick_response};
pub use reports::{BalanceReport, BalanceStanding, SpendingLevel, SummaryReport};
pub use store::{MemoryStore, StoredTransaction, TransactionStore};
