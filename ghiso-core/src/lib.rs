//! ghiso-core: shared types for the household ledger chatbot

pub mod finance;
pub mod intent;
pub mod time;

pub use finance::{CategoryId, Money, PaymentSource, TransactionType};
pub use intent::{ExpenseFragment, ParsedIntent};
pub use time::{month_year, now_in, parse_timezone, DEFAULT_TIMEZONE};
