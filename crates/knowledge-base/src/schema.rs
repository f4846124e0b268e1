//! Typed records for each section of the manual.
//!
//! The original material is a nested free-form mapping; here every section
//! has a fixed field set so retrieval never needs defensive lookups.

use serde::Serialize;

use shared_types::ProgramKind;

/// One lending program (PMCMV, FGTS, SBPE, Recursos Livres).
#[derive(Debug, Clone, Serialize)]
pub struct ProgramEntry {
    pub kind: ProgramKind,
    pub full_name: String,
    pub operations: Vec<String>,
    /// Mandatory eligibility requirements, where the program has them.
    pub requirements: Vec<String>,
    /// Framing criteria (enquadramento).
    pub framing: Vec<String>,
    pub funding_sources: Vec<String>,
    /// Interest-rate reduction fact, e.g. the FGTS quota-holder reduction.
    pub rate_reduction: Option<String>,
    pub normative_ref: Option<String>,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BorrowerRequirements {
    pub general: Vec<String>,
    pub cca_restrictions: Vec<String>,
    pub special_situations: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SellerRequirements {
    /// Natural person (PF) requirements.
    pub individual: Vec<String>,
    /// Legal entity (PJ) requirements.
    pub company: Vec<String>,
    pub special_situations: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PropertyRequirements {
    pub basic: Vec<String>,
    pub accepted: Vec<String>,
    /// Canonical prohibited-condition list. The compliance evaluator matches
    /// reported property conditions against these exact strings.
    pub prohibited: Vec<String>,
    /// Additional requirements for properties in the Distrito Federal.
    pub df_specific: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConstructionModalities {
    pub individual: IndividualConstruction,
    pub renovation: Renovation,
}

#[derive(Debug, Clone, Serialize)]
pub struct IndividualConstruction {
    pub max_execution: String,
    pub schedule: String,
    pub oversight: String,
    pub documents: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Renovation {
    pub kinds: Vec<String>,
    pub requirements: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FinancingParameters {
    pub rate_modes: Vec<String>,
    pub indexers: Vec<String>,
    pub amortization_systems: Vec<String>,
    pub guarantees: Vec<String>,
    pub mandatory_insurance: Vec<String>,
    pub grace_note: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentationChecklists {
    pub borrower: Vec<String>,
    pub seller: Vec<String>,
    pub property: Vec<String>,
    pub fgts_specific: Vec<String>,
    pub pmcmv_specific: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeeEntry {
    /// Stable key for dispatch, e.g. `tao`.
    pub key: &'static str,
    pub name: String,
    pub applies_to: String,
    pub note: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComplianceCheck {
    pub key: &'static str,
    pub name: String,
    pub requirement: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct OperationalProcedures {
    pub qualification: Vec<String>,
    pub formalization: Vec<String>,
    pub servicing: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceChannel {
    pub key: &'static str,
    pub name: String,
    pub details: Vec<String>,
}
