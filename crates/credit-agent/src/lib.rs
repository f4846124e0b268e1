//! The agent facade: composes classifier + retriever into `consult`, and
//! evaluator + score into `evaluate_operation`, appending one audit record
//! per request through an injected [`AuditRecorder`].
//!
//! Compute first, audit second: a recorder failure degrades the outcome to
//! "unaudited" with the error surfaced, never a failed request.

pub mod recorder;

use std::sync::Arc;

use compliance_engine::ComplianceEngine;
use knowledge_base::{classify, retrieve, KnowledgeBase};
use shared_types::{
    AnswerRecord, AuditEntry, AuditError, AuditRecord, AuditRecorder, EvaluationResult,
    OperationDescriptor,
};

pub use recorder::MemoryRecorder;

/// User attributed to requests that carry no explicit user id.
pub const DEFAULT_USER: &str = "sistema";

#[derive(Debug, Clone)]
pub struct ConsultOutcome {
    pub answer: AnswerRecord,
    /// Set when the audit append failed; the answer itself is still valid.
    pub audit_error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct EvaluateOutcome {
    pub result: EvaluationResult,
    pub audit_error: Option<String>,
}

pub struct CreditAgent<R: AuditRecorder> {
    kb: Arc<KnowledgeBase>,
    engine: ComplianceEngine,
    recorder: R,
}

impl<R: AuditRecorder> CreditAgent<R> {
    pub fn new(kb: Arc<KnowledgeBase>, recorder: R) -> Self {
        let engine = ComplianceEngine::new(kb.clone());
        Self {
            kb,
            engine,
            recorder,
        }
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    /// Classify the question, render the answer, append a query record.
    pub fn consult(&self, question: &str, user: &str) -> ConsultOutcome {
        let category = classify(question);
        let answer = retrieve(&self.kb, category, question);

        let record = AuditRecord::new(
            user,
            AuditEntry::Query {
                question: question.to_string(),
                category,
                topic: answer.topic.clone(),
                answer: answer.render(),
            },
        );
        let audit_error = self.recorder.record(record).err().map(|e| e.to_string());

        ConsultOutcome {
            answer,
            audit_error,
        }
    }

    /// Evaluate the operation, append an evaluation record.
    pub fn evaluate_operation(&self, op: &OperationDescriptor, user: &str) -> EvaluateOutcome {
        let result = self.engine.evaluate(op);
        let audit_error = self
            .audit_evaluation(op, &result, user)
            .err()
            .map(|e| e.to_string());

        EvaluateOutcome {
            result,
            audit_error,
        }
    }

    fn audit_evaluation(
        &self,
        op: &OperationDescriptor,
        result: &EvaluationResult,
        user: &str,
    ) -> Result<(), AuditError> {
        let snapshot = serde_json::to_string(result)?;
        let record = AuditRecord::new(
            user,
            AuditEntry::Evaluation {
                program: op.program_kind(),
                score: result.score,
                passed: result.passed,
                impediments: result.impediments.len() as u32,
                warnings: result.warnings.len() as u32,
                snapshot,
            },
        );
        self.recorder.record(record)
    }
}
