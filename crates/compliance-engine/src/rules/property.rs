//! Property (imóvel) checks, including the match against the manual's
//! canonical prohibited-condition list.

use shared_types::{Finding, PropertyFacts};

pub fn check_property(facts: &PropertyFacts, prohibited: &[String]) -> Vec<Finding> {
    let mut findings = Vec::new();

    if !facts.area_urbana.unwrap_or(true) {
        findings.push(Finding::impediment(
            "Property is not located in an urban area",
        ));
    }

    if !facts.infraestrutura_completa.unwrap_or(true) {
        findings.push(Finding::warning(
            "Verify basic infrastructure (water, sewage, power)",
        ));
    }

    if facts.possui_onus.unwrap_or(false) {
        findings.push(Finding::warning(
            "Property carries a lien; verify whether it blocks the operation",
        ));
    }

    if !facts.matricula_regular.unwrap_or(true) {
        findings.push(Finding::impediment(
            "Property registry record (matrícula) is irregular or missing",
        ));
    }

    // One impediment per reported condition present in the canonical list.
    for condition in &facts.impedimentos {
        if prohibited.iter().any(|p| p == condition) {
            findings.push(Finding::impediment(format!("Property: {}", condition)));
        }
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::Severity;

    fn prohibited() -> Vec<String> {
        vec![
            "Gravado com cláusula de usufruto".to_string(),
            "Sob regime de ocupação".to_string(),
        ]
    }

    fn compliant() -> PropertyFacts {
        PropertyFacts {
            area_urbana: Some(true),
            infraestrutura_completa: Some(true),
            possui_onus: Some(false),
            matricula_regular: Some(true),
            impedimentos: Vec::new(),
        }
    }

    #[test]
    fn compliant_property_has_no_findings() {
        assert!(check_property(&compliant(), &prohibited()).is_empty());
    }

    #[test]
    fn empty_facts_fail_open() {
        // All property flags default to the compliant value.
        assert!(check_property(&PropertyFacts::default(), &prohibited()).is_empty());
    }

    #[test]
    fn rural_location_and_bad_registry_are_impediments() {
        let facts = PropertyFacts {
            area_urbana: Some(false),
            matricula_regular: Some(false),
            ..compliant()
        };
        let findings = check_property(&facts, &prohibited());
        assert_eq!(findings.len(), 2);
        assert!(findings.iter().all(|f| f.severity == Severity::Impediment));
    }

    #[test]
    fn lien_and_missing_infrastructure_are_warnings() {
        let facts = PropertyFacts {
            infraestrutura_completa: Some(false),
            possui_onus: Some(true),
            ..compliant()
        };
        let findings = check_property(&facts, &prohibited());
        assert_eq!(findings.len(), 2);
        assert!(findings.iter().all(|f| f.severity == Severity::Warning));
    }

    #[test]
    fn canonical_conditions_match_one_impediment_each() {
        let facts = PropertyFacts {
            impedimentos: vec![
                "Gravado com cláusula de usufruto".to_string(),
                "Sob regime de ocupação".to_string(),
                "Condição desconhecida".to_string(),
            ],
            ..compliant()
        };
        let findings = check_property(&facts, &prohibited());
        assert_eq!(findings.len(), 2);
        assert!(findings
            .iter()
            .all(|f| f.message.starts_with("Property: ")));
    }

    #[test]
    fn non_canonical_conditions_are_ignored() {
        let facts = PropertyFacts {
            impedimentos: vec!["Pintura descascada".to_string()],
            ..compliant()
        };
        assert!(check_property(&facts, &prohibited()).is_empty());
    }
}
