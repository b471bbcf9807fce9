use anyhow::{Context, Result};
use ghiso_finance::{MemoryStore, StoreError, StoredTransaction, TransactionDraft, TransactionStore};
use std::fs;
use std::path::{Path, PathBuf};

/// `$GHISO_HOME`, or `~/.ghiso`.
pub fn ghiso_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("GHISO_HOME") {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".ghiso"))
}

pub fn ensure_ghiso_home() -> Result<PathBuf> {
    let dir = ghiso_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

pub fn transactions_path() -> Result<PathBuf> {
    Ok(ensure_ghiso_home()?.join("transactions.json"))
}

/// Ledger kept as one pretty-printed JSON array, rewritten after every add.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    inner: MemoryStore,
}

impl JsonFileStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let records: Vec<StoredTransaction> = if path.exists() {
            let s = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
            if s.trim().is_empty() {
                Vec::new()
            } else {
                serde_json::from_str(&s).with_context(|| format!("parse {}", path.display()))?
            }
        } else {
            Vec::new()
        };
        Ok(Self {
            path,
            inner: MemoryStore::from_records(records),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> &[StoredTransaction] {
        self.inner.records()
    }

    fn persist(&self, records: &[StoredTransaction]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl TransactionStore for JsonFileStore {
    fn add_transaction(&mut self, draft: TransactionDraft) -> Result<StoredTransaction, StoreError> {
        // Only commit once the file holds the new record.
        let mut candidate = self.inner.clone();
        let stored = candidate.add_transaction(draft)?;
        self.persist(candidate.records())?;
        self.inner = candidate;
        Ok(stored)
    }

    fn transactions_for_month(&self, month_year: &str) -> Result<Vec<StoredTransaction>, StoreError> {
        self.inner.transactions_for_month(month_year)
    }
}
