//! The calculation store handle.
//!
//! An explicitly passed, lifecycle-scoped handle over the calculation
//! history. Backed either by a JSON file on disk or by plain memory
//! (for tests and `--no-store` runs). There is no global state: every
//! caller owns its handle, and clearing history is an explicit
//! operation rather than a startup side effect.

use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::error::StoreError;
use crate::record::CalculationRecord;

/// Keyed store of calculation records.
///
/// Records are held in insertion order and persisted after every
/// mutating operation when a backing file is configured. Opening an
/// existing file appends to its history; nothing is discarded until
/// [`clear`](Self::clear) is called.
///
/// # Examples
/// ```no_run
/// use optionlab_store::CalculationStore;
///
/// let mut store = CalculationStore::open("calculations.json").unwrap();
/// println!("{} records on file", store.len());
/// store.clear().unwrap();
/// ```
#[derive(Debug)]
pub struct CalculationStore {
    path: Option<PathBuf>,
    records: Vec<CalculationRecord>,
}

impl CalculationStore {
    /// Opens a file-backed store, loading any existing history.
    ///
    /// A missing file is treated as an empty store and created on the
    /// first write.
    ///
    /// # Errors
    /// - `StoreError::Io` if the file exists but cannot be read
    /// - `StoreError::Format` if the file is not valid store JSON
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let records = if path.exists() {
            let contents = fs::read_to_string(&path)?;
            serde_json::from_str(&contents)?
        } else {
            Vec::new()
        };
        Ok(Self {
            path: Some(path),
            records,
        })
    }

    /// Creates a memory-only store that never touches disk.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            records: Vec::new(),
        }
    }

    /// Returns the backing file path, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[CalculationRecord] {
        &self.records
    }

    /// Inserts a record and persists, returning its identifier.
    ///
    /// # Errors
    /// - `StoreError::Io` / `StoreError::Format` if persisting fails;
    ///   the in-memory state keeps the record either way
    pub fn insert(&mut self, record: CalculationRecord) -> Result<Uuid, StoreError> {
        let id = record.id;
        self.records.push(record);
        self.persist()?;
        Ok(id)
    }

    /// Looks up a record by identifier.
    ///
    /// # Errors
    /// - `StoreError::NotFound` if no record carries `id`
    pub fn get(&self, id: &Uuid) -> Result<&CalculationRecord, StoreError> {
        self.records
            .iter()
            .find(|record| record.id == *id)
            .ok_or(StoreError::NotFound { id: *id })
    }

    /// Removes all records and persists the empty history.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.records.clear();
        self.persist()
    }

    fn persist(&self) -> Result<(), StoreError> {
        if let Some(path) = &self.path {
            let json = serde_json::to_vec_pretty(&self.records)?;
            fs::write(path, json)?;
        }
        Ok(())
    }
}
