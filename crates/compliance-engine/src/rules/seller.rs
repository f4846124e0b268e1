//! Seller (vendedor) eligibility checks, dispatched on legal nature.
//!
//! An unknown or missing `tipo` yields a warning-level "unclassified"
//! finding rather than silently skipping the PF/PJ checks.

use shared_types::{Finding, SellerFacts, SellerKind};

pub fn check_seller(facts: &SellerFacts) -> Vec<Finding> {
    let mut findings = Vec::new();

    match facts.tipo {
        Some(SellerKind::Pf) => {
            if !facts.maior_idade.unwrap_or(false) {
                findings.push(Finding::impediment(
                    "Seller is underage and not emancipated",
                ));
            }
            if !facts.cpf_regular.unwrap_or(false) {
                findings.push(Finding::impediment(
                    "Seller CPF is irregular with the federal revenue service",
                ));
            }
        }
        Some(SellerKind::Pj) => {
            if !facts.cnpj_regular.unwrap_or(false) {
                findings.push(Finding::impediment(
                    "Seller CNPJ is irregular with the federal revenue service",
                ));
            }
        }
        Some(SellerKind::Other) | None => {
            findings.push(Finding::warning(
                "Seller type is unclassified; PF/PJ checks were not applied",
            ));
        }
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::Severity;

    #[test]
    fn compliant_pf_seller_has_no_findings() {
        let facts = SellerFacts {
            tipo: Some(SellerKind::Pf),
            maior_idade: Some(true),
            cpf_regular: Some(true),
            cnpj_regular: None,
        };
        assert!(check_seller(&facts).is_empty());
    }

    #[test]
    fn pf_seller_missing_facts_fails_closed() {
        let facts = SellerFacts {
            tipo: Some(SellerKind::Pf),
            ..Default::default()
        };
        let findings = check_seller(&facts);
        assert_eq!(findings.len(), 2);
        assert!(findings.iter().all(|f| f.severity == Severity::Impediment));
    }

    #[test]
    fn pj_seller_checks_cnpj_only() {
        let facts = SellerFacts {
            tipo: Some(SellerKind::Pj),
            cnpj_regular: Some(true),
            ..Default::default()
        };
        assert!(check_seller(&facts).is_empty());

        let irregular = SellerFacts {
            tipo: Some(SellerKind::Pj),
            cnpj_regular: Some(false),
            ..Default::default()
        };
        assert_eq!(check_seller(&irregular).len(), 1);
    }

    #[test]
    fn unknown_type_surfaces_as_warning_not_silence() {
        let facts = SellerFacts {
            tipo: Some(SellerKind::Other),
            ..Default::default()
        };
        let findings = check_seller(&facts);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Warning);
    }

    #[test]
    fn missing_type_is_also_unclassified() {
        let findings = check_seller(&SellerFacts::default());
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Warning);
    }
}
