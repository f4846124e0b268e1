//! Shared types for the housing-credit policy agent.
//!
//! The data model is deliberately closed: categories, program kinds and
//! seller kinds are enums, and operation descriptors are typed structs with
//! explicit optionality instead of free-form maps.

pub mod audit;
pub mod types;

pub use audit::{AuditEntry, AuditError, AuditRecord, AuditRecorder};
pub use types::{
    AnswerRecord, AnswerSection, BorrowerFacts, Category, DocumentationFacts, EvaluationResult,
    Finding, OperationDescriptor, ProgramFacts, ProgramKind, PropertyFacts, SectionBody,
    SellerFacts, SellerKind, Severity,
};
