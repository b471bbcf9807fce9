//! The ledger seam: wherever transactions end up living.

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::records::TransactionDraft;

/// A draft the ledger accepted, with its assigned id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredTransaction {
    pub id: String,
    #[serde(flatten)]
    pub record: TransactionDraft,
}

/// Persistence contract the chatbot writes through.
pub trait TransactionStore {
    /// Store one record and hand back the stored form.
    fn add_transaction(&mut self, draft: TransactionDraft) -> Result<StoredTransaction, StoreError>;

    /// Everything recorded for a YYYY-MM month.
    fn transactions_for_month(&self, month_year: &str) -> Result<Vec<StoredTransaction>, StoreError>;
}

/// Vec-backed store. Ids are `txn-0001`, `txn-0002`, ...
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<StoredTransaction>,
    next_id: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from previously stored records; new ids continue after the highest one.
    pub fn from_records(records: Vec<StoredTransaction>) -> Self {
        let next_id = records
            .iter()
            .filter_map(|r| r.id.strip_prefix("txn-")?.parse::<usize>().ok())
            .max()
            .unwrap_or(0);
        Self { records, next_id }
    }

    pub fn records(&self) -> &[StoredTransaction] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl TransactionStore for MemoryStore {
    fn add_transaction(&mut self, draft: TransactionDraft) -> Result<StoredTransaction, StoreError> {
        if !draft.amount.is_finite() || draft.amount <= 0.0 {
            return Err(StoreError::Rejected(format!("amount {}", draft.amount)));
        }
        self.next_id += 1;
        let stored = StoredTransaction {
            id: format!("txn-{:04}", self.next_id),
            record: draft,
        };
        self.records.push(stored.clone());
        Ok(stored)
    }

    fn transactions_for_month(&self, month_year: &str) -> Result<Vec<StoredTransaction>, StoreError> {
        Ok(self
            .records
            .iter()
            .filter(|r| r.record.month_year == month_year)
            .cloned()
            .collect())
    }
}
