//! Request and response types for the credit API.

use credit_agent::DEFAULT_USER;
use serde::{Deserialize, Serialize};
use shared_types::{AnswerRecord, Category, EvaluationResult, OperationDescriptor};

fn default_user() -> String {
    DEFAULT_USER.to_string()
}

#[derive(Debug, Deserialize)]
pub struct ConsultRequest {
    pub question: String,
    #[serde(default = "default_user")]
    pub user: String,
}

#[derive(Debug, Serialize)]
pub struct ConsultResponse {
    pub category: Category,
    pub answer: AnswerRecord,
    pub rendered: String,
    pub audited: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit_error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub operation: OperationDescriptor,
    #[serde(default = "default_user")]
    pub user: String,
}

#[derive(Debug, Serialize)]
pub struct EvaluateResponse {
    #[serde(flatten)]
    pub result: EvaluationResult,
    pub audited: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit_error: Option<String>,
}

fn default_days() -> i64 {
    30
}

#[derive(Debug, Deserialize)]
pub struct ReportParams {
    #[serde(default = "default_days")]
    pub days: i64,
}

#[derive(Debug, Serialize)]
pub struct ReportSummary {
    pub period_days: i64,
    pub consultations: i64,
    pub evaluations: i64,
    /// Average compliance score over the period, absent when no evaluations exist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_score: Option<f64>,
    /// Fraction of evaluations that passed, absent when no evaluations exist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_rate: Option<f64>,
}
