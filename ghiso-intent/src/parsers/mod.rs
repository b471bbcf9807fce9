//! Extractors for the individual pieces of a chat message.

pub mod amount;
pub mod date;
pub mod description;
pub mod payment_source;
pub mod splitter;

pub use amount::{extract_amount, extract_amount_with, has_amount_pattern};
pub use date::extract_date;
pub use description::{extract_description, FALLBACK_DESCRIPTION};
pub use payment_source::extract_payment_source;
pub use splitter::{split_multiple, split_multiple_with};
