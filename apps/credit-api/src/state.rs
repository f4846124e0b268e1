//! Application state: knowledge base, agent and audit store.

use anyhow::{Context, Result};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::sync::Arc;

use credit_agent::CreditAgent;
use knowledge_base::KnowledgeBase;

use crate::recorder::SqliteRecorder;

pub struct AppState {
    pub db: SqlitePool,
    pub agent: CreditAgent<SqliteRecorder>,
}

impl AppState {
    pub async fn new() -> Result<Self> {
        // A knowledge-base validation failure is a startup error, never a
        // per-request one.
        let kb = Arc::new(KnowledgeBase::load().context("knowledge base failed validation")?);

        let db_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:agente_credito.db?mode=rwc".to_string());

        tracing::info!("Connecting to audit store: {}", db_url);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(&db_url)
            .await?;

        Self::run_migrations(&pool).await?;

        let recorder = SqliteRecorder::spawn(pool.clone());
        let agent = CreditAgent::new(kb, recorder);

        Ok(Self { db: pool, agent })
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        tracing::info!("Running audit store migrations...");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS consultas (
                id TEXT PRIMARY KEY,
                timestamp TEXT NOT NULL,
                usuario TEXT NOT NULL,
                categoria TEXT NOT NULL,
                pergunta TEXT NOT NULL,
                topico TEXT NOT NULL,
                resposta TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS analises_conformidade (
                id TEXT PRIMARY KEY,
                timestamp TEXT NOT NULL,
                usuario TEXT NOT NULL,
                tipo_operacao TEXT,
                score REAL NOT NULL,
                aprovado INTEGER NOT NULL,
                impedimentos INTEGER NOT NULL,
                alertas INTEGER NOT NULL,
                resultado TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        // Indexes for the report queries
        sqlx::query("CREATE INDEX IF NOT EXISTS idx_consultas_ts ON consultas(timestamp)")
            .execute(pool)
            .await?;
        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_analises_ts ON analises_conformidade(timestamp)",
        )
        .execute(pool)
        .await?;

        Ok(())
    }
}
