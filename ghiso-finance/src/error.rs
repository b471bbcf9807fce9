use thiserror::Error;

/// Why an intent could not be turned into ledger records.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DraftError {
    #[error("message has no amount")]
    MissingAmount,

    #[error("message has no usable transactions")]
    NoFragments,

    #[error("intent {0} does not describe a transaction")]
    NotATransaction(&'static str),
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("store rejected record: {0}")]
    Rejected(String),
}
