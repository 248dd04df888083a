//! Record store implementations.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing::debug;

use crate::model::InterviewRecord;
use crate::traits::RecordStore;

/// Keeps records in memory for the lifetime of the process.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    records: Mutex<Vec<InterviewRecord>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for InMemoryRecordStore {
    fn append(&self, record: InterviewRecord) -> Result<()> {
        self.records
            .lock()
            .map_err(|_| anyhow!("record store lock poisoned"))?
            .push(record);
        Ok(())
    }

    fn list_all(&self) -> Result<Vec<InterviewRecord>> {
        Ok(self
            .records
            .lock()
            .map_err(|_| anyhow!("record store lock poisoned"))?
            .clone())
    }
}

/// Stores all records as one pretty-printed JSON array in a file.
///
/// Every append rewrites the whole file. A missing file reads as an empty
/// list.
#[derive(Debug)]
pub struct JsonFileRecordStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileRecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Vec<InterviewRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read records from {}", self.path.display()))?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse records in {}", self.path.display()))
    }
}

impl RecordStore for JsonFileRecordStore {
    fn append(&self, record: InterviewRecord) -> Result<()> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| anyhow!("record store lock poisoned"))?;

        let mut records = self.read()?;
        debug!(record_id = %record.id, path = %self.path.display(), "appending record");
        records.push(record);

        let json = serde_json::to_string_pretty(&records).context("failed to serialize records")?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, json)
            .with_context(|| format!("failed to write records to {}", self.path.display()))?;
        Ok(())
    }

    fn list_all(&self) -> Result<Vec<InterviewRecord>> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| anyhow!("record store lock poisoned"))?;
        self.read()
    }
}
