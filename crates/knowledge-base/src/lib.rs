//! Immutable knowledge base extracted from the CAIXA housing-credit manual,
//! plus the keyword classifier and the answer retriever that read from it.
//!
//! The base is constructed once at startup via [`KnowledgeBase::load`] and
//! validated there; a missing required field is a configuration error at
//! load time, never a per-request error. All engine functions are pure reads
//! over the loaded structure.

pub mod classifier;
mod entries;
pub mod keywords;
pub mod retriever;
pub mod schema;

use thiserror::Error;

use shared_types::ProgramKind;

pub use classifier::classify;
pub use retriever::retrieve;
pub use schema::{
    BorrowerRequirements, ComplianceCheck, ConstructionModalities, DocumentationChecklists,
    FeeEntry, FinancingParameters, IndividualConstruction, OperationalProcedures, ProgramEntry,
    PropertyRequirements, Renovation, SellerRequirements, ServiceChannel,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("knowledge base is missing program entry `{0}`")]
    MissingProgram(ProgramKind),
    #[error("knowledge base section `{section}` is missing required field `{field}`")]
    MissingField {
        section: &'static str,
        field: &'static str,
    },
    #[error("knowledge base section `{0}` is empty")]
    EmptySection(&'static str),
}

/// The loaded policy manual. Immutable for the process lifetime; share it
/// behind an `Arc` and call the engines from as many tasks as needed.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    pub programs: Vec<ProgramEntry>,
    pub borrower: BorrowerRequirements,
    pub seller: SellerRequirements,
    pub property: PropertyRequirements,
    pub construction: ConstructionModalities,
    pub financing: FinancingParameters,
    pub documentation: DocumentationChecklists,
    pub fees: Vec<FeeEntry>,
    pub compliance: Vec<ComplianceCheck>,
    pub procedures: OperationalProcedures,
    pub channels: Vec<ServiceChannel>,
    pub sustainability: Vec<String>,
}

impl KnowledgeBase {
    /// Build and validate the embedded manual content.
    pub fn load() -> Result<Self, ConfigError> {
        let kb = entries::build();
        kb.validate()?;
        Ok(kb)
    }

    pub fn program(&self, kind: ProgramKind) -> Option<&ProgramEntry> {
        self.programs.iter().find(|p| p.kind == kind)
    }

    /// The manual's canonical list of prohibited property conditions.
    pub fn prohibited_property_conditions(&self) -> &[String] {
        &self.property.prohibited
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for kind in [
            ProgramKind::Pmcmv,
            ProgramKind::Fgts,
            ProgramKind::Sbpe,
            ProgramKind::RecursosLivres,
        ] {
            let program = self
                .program(kind)
                .ok_or(ConfigError::MissingProgram(kind))?;
            if program.operations.is_empty() {
                return Err(ConfigError::MissingField {
                    section: "programs",
                    field: "operations",
                });
            }
        }

        // The FGTS rate-reduction fact is load-bearing for retrieval.
        if let Some(fgts) = self.program(ProgramKind::Fgts) {
            if fgts.rate_reduction.is_none() {
                return Err(ConfigError::MissingField {
                    section: "programs/fgts",
                    field: "rate_reduction",
                });
            }
            if fgts.requirements.is_empty() {
                return Err(ConfigError::MissingField {
                    section: "programs/fgts",
                    field: "requirements",
                });
            }
        }

        if self.borrower.general.is_empty() {
            return Err(ConfigError::EmptySection("borrower.general"));
        }
        if self.seller.individual.is_empty() || self.seller.company.is_empty() {
            return Err(ConfigError::EmptySection("seller"));
        }
        if self.property.basic.is_empty() {
            return Err(ConfigError::EmptySection("property.basic"));
        }
        if self.property.prohibited.is_empty() {
            return Err(ConfigError::EmptySection("property.prohibited"));
        }
        if self.documentation.borrower.is_empty()
            || self.documentation.seller.is_empty()
            || self.documentation.property.is_empty()
        {
            return Err(ConfigError::EmptySection("documentation"));
        }
        if self.fees.is_empty() {
            return Err(ConfigError::EmptySection("fees"));
        }
        if self.compliance.is_empty() {
            return Err(ConfigError::EmptySection("compliance"));
        }
        if self.channels.is_empty() {
            return Err(ConfigError::EmptySection("channels"));
        }

        Ok(())
    }
}
