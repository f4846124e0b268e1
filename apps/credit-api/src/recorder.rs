//! Sqlite-backed audit recorder.
//!
//! Records go through an unbounded channel into a background writer task,
//! so a slow disk never blocks a request. `record` only fails when the
//! writer task is gone; individual insert failures are logged by the task
//! and the row is dropped (the contract is at-least-once, not exactly-once).

use sqlx::SqlitePool;
use tokio::sync::mpsc;

use shared_types::{AuditEntry, AuditError, AuditRecord, AuditRecorder};

pub struct SqliteRecorder {
    tx: mpsc::UnboundedSender<AuditRecord>,
}

impl SqliteRecorder {
    /// Spawn the writer task on the current tokio runtime.
    pub fn spawn(pool: SqlitePool) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<AuditRecord>();
        tokio::spawn(async move {
            while let Some(record) = rx.recv().await {
                if let Err(e) = insert_record(&pool, &record).await {
                    tracing::error!("failed to persist audit record {}: {}", record.id, e);
                }
            }
        });
        Self { tx }
    }
}

impl AuditRecorder for SqliteRecorder {
    fn record(&self, record: AuditRecord) -> Result<(), AuditError> {
        self.tx
            .send(record)
            .map_err(|_| AuditError::StoreUnavailable("audit writer task stopped".to_string()))
    }
}

async fn insert_record(pool: &SqlitePool, record: &AuditRecord) -> Result<(), sqlx::Error> {
    match &record.entry {
        AuditEntry::Query {
            question,
            category,
            topic,
            answer,
        } => {
            sqlx::query(
                r#"
                INSERT INTO consultas (id, timestamp, usuario, categoria, pergunta, topico, resposta)
                VALUES (?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(&record.id)
            .bind(record.timestamp.to_rfc3339())
            .bind(&record.user)
            .bind(category.to_string())
            .bind(question)
            .bind(topic)
            .bind(answer)
            .execute(pool)
            .await?;
        }
        AuditEntry::Evaluation {
            program,
            score,
            passed,
            impediments,
            warnings,
            snapshot,
        } => {
            sqlx::query(
                r#"
                INSERT INTO analises_conformidade
                    (id, timestamp, usuario, tipo_operacao, score, aprovado, impedimentos, alertas, resultado)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(&record.id)
            .bind(record.timestamp.to_rfc3339())
            .bind(&record.user)
            .bind(program.map(|p| p.to_string()))
            .bind(score)
            .bind(passed)
            .bind(impediments)
            .bind(warnings)
            .bind(snapshot)
            .execute(pool)
            .await?;
        }
    }
    Ok(())
}
