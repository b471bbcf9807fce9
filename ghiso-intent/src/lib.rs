//! ghiso-intent: turns a free-text Vietnamese chat message into a structured
//! ledger intent (expense, income, multi-expense, inquiry, ...).
//!
//! Everything here is pure and synchronous. No input makes it fail.

pub mod classifier;
pub mod parsers;
pub mod types;

pub use classifier::{classify, normalize_message, IntentParser};
pub use parsers::{
    extract_amount, extract_amount_with, extract_date, extract_description,
    extract_payment_source, split_multiple, split_multiple_with, FALLBACK_DESCRIPTION,
};
pub use types::{AmountMode, ParserOptions};
