//! Append-only audit records for queries and evaluations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::types::{Category, ProgramKind};

/// What happened: a knowledge-base query or a compliance evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AuditEntry {
    Query {
        question: String,
        category: Category,
        /// Topic id of the answer that was served, e.g. `programs/fgts`.
        topic: String,
        /// Rendered text of the answer that was served.
        answer: String,
    },
    Evaluation {
        program: Option<ProgramKind>,
        score: f64,
        passed: bool,
        impediments: u32,
        warnings: u32,
        /// Serialized `EvaluationResult` snapshot.
        snapshot: String,
    },
}

/// Immutable, timestamped snapshot of one request. Written once, never
/// mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub user: String,
    pub entry: AuditEntry,
}

impl AuditRecord {
    pub fn new(user: &str, entry: AuditEntry) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            user: user.to_string(),
            entry,
        }
    }
}

#[derive(Debug, Error)]
pub enum AuditError {
    #[error("audit store unavailable: {0}")]
    StoreUnavailable(String),
    #[error("audit snapshot could not be serialized: {0}")]
    Snapshot(#[from] serde_json::Error),
}

/// Collaborator that persists audit records.
///
/// One append per request; ordering across requests is not significant and
/// at-least-once delivery is acceptable. A failing recorder must never
/// invalidate an already-computed answer or evaluation - callers degrade to
/// "unaudited" and surface the error alongside the result.
pub trait AuditRecorder: Send + Sync {
    fn record(&self, record: AuditRecord) -> Result<(), AuditError>;
}
