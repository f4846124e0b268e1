//! In-memory audit recorder for tests and embedded use.

use std::sync::Mutex;

use shared_types::{AuditError, AuditRecord, AuditRecorder};

/// Appends records to a mutex-guarded vector. Never fails.
#[derive(Debug, Default)]
pub struct MemoryRecorder {
    records: Mutex<Vec<AuditRecord>>,
}

impl MemoryRecorder {
    /// Snapshot of everything recorded so far, in append order.
    pub fn records(&self) -> Vec<AuditRecord> {
        self.records.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl AuditRecorder for MemoryRecorder {
    fn record(&self, record: AuditRecord) -> Result<(), AuditError> {
        self.records
            .lock()
            .map_err(|_| AuditError::StoreUnavailable("recorder mutex poisoned".to_string()))?
            .push(record);
        Ok(())
    }
}
