//! HTTP handlers: consultations, evaluations and audit reports.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{Duration, Utc};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

use crate::error::ApiError;
use crate::models::{
    ConsultRequest, ConsultResponse, EvaluateRequest, EvaluateResponse, ReportParams,
    ReportSummary,
};
use crate::state::AppState;

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "credit-api",
    }))
}

pub async fn consult(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ConsultRequest>,
) -> Result<Json<ConsultResponse>, ApiError> {
    if req.question.trim().is_empty() {
        return Err(ApiError::InvalidRequest(
            "question must not be empty".to_string(),
        ));
    }

    let outcome = state.agent.consult(&req.question, &req.user);
    info!(
        category = %outcome.answer.category,
        topic = %outcome.answer.topic,
        "Consultation answered"
    );

    let rendered = outcome.answer.render();
    Ok(Json(ConsultResponse {
        category: outcome.answer.category,
        rendered,
        audited: outcome.audit_error.is_none(),
        audit_error: outcome.audit_error,
        answer: outcome.answer,
    }))
}

pub async fn evaluate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<EvaluateRequest>,
) -> Result<Json<EvaluateResponse>, ApiError> {
    let outcome = state.agent.evaluate_operation(&req.operation, &req.user);
    info!(
        score = outcome.result.score,
        passed = outcome.result.passed,
        "Operation evaluated"
    );

    Ok(Json(EvaluateResponse {
        result: outcome.result,
        audited: outcome.audit_error.is_none(),
        audit_error: outcome.audit_error,
    }))
}

pub async fn report_summary(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ReportParams>,
) -> Result<Json<ReportSummary>, ApiError> {
    if params.days < 1 {
        return Err(ApiError::InvalidRequest(
            "days must be at least 1".to_string(),
        ));
    }

    let cutoff = (Utc::now() - Duration::days(params.days)).to_rfc3339();

    let consultations: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM consultas WHERE timestamp >= ?")
            .bind(&cutoff)
            .fetch_one(&state.db)
            .await?;

    let evaluations: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM analises_conformidade WHERE timestamp >= ?")
            .bind(&cutoff)
            .fetch_one(&state.db)
            .await?;

    // AVG returns NULL over an empty window.
    let average_score: Option<f64> =
        sqlx::query_scalar("SELECT AVG(score) FROM analises_conformidade WHERE timestamp >= ?")
            .bind(&cutoff)
            .fetch_one(&state.db)
            .await?;

    let approval_rate: Option<f64> = sqlx::query_scalar(
        "SELECT AVG(CAST(aprovado AS REAL)) FROM analises_conformidade WHERE timestamp >= ?",
    )
    .bind(&cutoff)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(ReportSummary {
        period_days: params.days,
        consultations,
        evaluations,
        average_score,
        approval_rate,
    }))
}
