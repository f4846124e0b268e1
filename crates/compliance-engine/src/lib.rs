//! Compliance evaluation for loan operations.
//!
//! Each entity section of an [`OperationDescriptor`] runs through its own
//! rule table; findings accumulate into impediments and warnings, and the
//! score calculator derives the bounded score and the verdict. Absent
//! sections are simply not evaluated.

pub mod rules;
pub mod score;

use std::sync::Arc;

use knowledge_base::KnowledgeBase;
use shared_types::{EvaluationResult, Finding, OperationDescriptor, Severity};

/// Stateless evaluator over a shared, immutable knowledge base.
pub struct ComplianceEngine {
    kb: Arc<KnowledgeBase>,
}

impl ComplianceEngine {
    pub fn new(kb: Arc<KnowledgeBase>) -> Self {
        Self { kb }
    }

    /// Run every applicable entity check and derive score and verdict.
    ///
    /// Pure accumulation: no side effects beyond the returned result. The
    /// score/impediment decoupling is intentional - one impediment costs 25
    /// points (score 75), yet still fails the operation.
    pub fn evaluate(&self, op: &OperationDescriptor) -> EvaluationResult {
        let mut findings: Vec<Finding> = Vec::new();

        if let Some(borrower) = &op.tomador {
            findings.extend(rules::borrower::check_borrower(borrower));
        }
        if let Some(seller) = &op.vendedor {
            findings.extend(rules::seller::check_seller(seller));
        }
        if let Some(property) = &op.imovel {
            findings.extend(rules::property::check_property(
                property,
                self.kb.prohibited_property_conditions(),
            ));
        }
        if let Some(program) = &op.programa {
            findings.extend(rules::program::check_program(program));
        }
        if let Some(documentation) = &op.documentacao {
            findings.extend(rules::documentation::check_documentation(documentation));
        }

        let mut impediments = Vec::new();
        let mut warnings = Vec::new();
        for finding in findings {
            match finding.severity {
                Severity::Impediment => impediments.push(finding.message),
                Severity::Warning => warnings.push(finding.message),
            }
        }

        let score = score::compliance_score(impediments.len(), warnings.len());
        let passed = score::passes(score, impediments.len());
        let recommendations = recommendations(&impediments, &warnings);

        EvaluationResult {
            passed,
            score,
            impediments,
            warnings,
            recommendations,
        }
    }
}

fn recommendations(impediments: &[String], warnings: &[String]) -> Vec<String> {
    let mut recs = Vec::new();
    if !impediments.is_empty() {
        recs.push(
            "Resolve the listed impediments before submitting the proposal for contracting"
                .to_string(),
        );
    }
    if !warnings.is_empty() {
        recs.push(
            "Review the warned items; they lower the compliance score but do not block approval"
                .to_string(),
        );
    }
    recs
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{
        BorrowerFacts, DocumentationFacts, ProgramFacts, ProgramKind, PropertyFacts, SellerFacts,
        SellerKind,
    };

    fn engine() -> ComplianceEngine {
        ComplianceEngine::new(Arc::new(KnowledgeBase::load().unwrap()))
    }

    fn compliant_borrower() -> BorrowerFacts {
        BorrowerFacts {
            cpf_regular: Some(true),
            brasileiro: Some(true),
            rnm_valida: None,
            idoneidade_cadastral: Some(true),
            residencia_brasil: Some(true),
        }
    }

    #[test]
    fn empty_descriptor_scores_100_and_passes() {
        let result = engine().evaluate(&OperationDescriptor::default());
        assert_eq!(result.impediments.len(), 0);
        assert_eq!(result.warnings.len(), 0);
        assert_eq!(result.score, 100.0);
        assert!(result.passed);
        assert!(result.recommendations.is_empty());
    }

    #[test]
    fn irregular_cpf_alone_fails_despite_score_75() {
        let op = OperationDescriptor {
            tomador: Some(BorrowerFacts {
                cpf_regular: Some(false),
                brasileiro: Some(true),
                ..Default::default()
            }),
            ..Default::default()
        };
        let result = engine().evaluate(&op);
        assert_eq!(result.impediments.len(), 1);
        assert_eq!(result.warnings.len(), 0);
        assert_eq!(result.score, 75.0);
        assert!(!result.passed, "impediments fail the operation regardless of score");
    }

    #[test]
    fn lien_alone_is_a_warning_and_still_passes() {
        let op = OperationDescriptor {
            imovel: Some(PropertyFacts {
                area_urbana: Some(true),
                infraestrutura_completa: Some(true),
                possui_onus: Some(true),
                matricula_regular: Some(true),
                impedimentos: Vec::new(),
            }),
            ..Default::default()
        };
        let result = engine().evaluate(&op);
        assert_eq!(result.impediments.len(), 0);
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.score, 95.0);
        assert!(result.passed);
    }

    #[test]
    fn fully_compliant_operation_passes_clean() {
        let op = OperationDescriptor {
            tomador: Some(compliant_borrower()),
            vendedor: Some(SellerFacts {
                tipo: Some(SellerKind::Pf),
                maior_idade: Some(true),
                cpf_regular: Some(true),
                cnpj_regular: None,
            }),
            imovel: Some(PropertyFacts {
                area_urbana: Some(true),
                infraestrutura_completa: Some(true),
                possui_onus: Some(false),
                matricula_regular: Some(true),
                impedimentos: Vec::new(),
            }),
            programa: Some(ProgramFacts {
                tipo: Some(ProgramKind::Fgts),
                tempo_fgts_anos: Some(5),
                saldo_suficiente: Some(true),
                renda_familiar_compativel: None,
            }),
            documentacao: Some(DocumentationFacts {
                tomador_completa: Some(true),
                vendedor_completa: Some(true),
                imovel_completa: Some(true),
            }),
        };
        let result = engine().evaluate(&op);
        assert_eq!(result.impediments, Vec::<String>::new());
        assert_eq!(result.warnings, Vec::<String>::new());
        assert_eq!(result.score, 100.0);
        assert!(result.passed);
    }

    #[test]
    fn prohibited_property_condition_adds_prefixed_impediment() {
        let op = OperationDescriptor {
            imovel: Some(PropertyFacts {
                area_urbana: Some(true),
                infraestrutura_completa: Some(true),
                possui_onus: Some(false),
                matricula_regular: Some(true),
                impedimentos: vec!["Gravado com cláusula de usufruto".to_string()],
            }),
            ..Default::default()
        };
        let result = engine().evaluate(&op);
        assert_eq!(
            result.impediments,
            vec!["Property: Gravado com cláusula de usufruto".to_string()]
        );
        assert!(!result.passed);
    }

    #[test]
    fn many_findings_floor_the_score_at_zero() {
        let op = OperationDescriptor {
            tomador: Some(BorrowerFacts::default()),
            imovel: Some(PropertyFacts {
                area_urbana: Some(false),
                infraestrutura_completa: Some(false),
                possui_onus: Some(true),
                matricula_regular: Some(false),
                impedimentos: vec![
                    "Gravado com cláusula de usufruto".to_string(),
                    "Sob regime de ocupação".to_string(),
                ],
            }),
            ..Default::default()
        };
        let result = engine().evaluate(&op);
        assert!(result.impediments.len() >= 4);
        assert_eq!(result.score, 0.0);
        assert!(!result.passed);
    }

    #[test]
    fn recommendations_follow_findings() {
        let op = OperationDescriptor {
            documentacao: Some(DocumentationFacts {
                tomador_completa: Some(false),
                ..Default::default()
            }),
            ..Default::default()
        };
        let result = engine().evaluate(&op);
        assert_eq!(result.recommendations.len(), 1);
        assert!(result.recommendations[0].contains("warned items"));
    }
}
