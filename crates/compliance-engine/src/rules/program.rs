//! Program-specific eligibility checks.
//!
//! FGTS requires at least 3 years under the FGTS regime; the 10%-balance
//! requirement is a warning because the exact balance is verified later in
//! the pipeline. SBPE and Recursos Livres have no program-level checks.

use shared_types::{Finding, ProgramFacts, ProgramKind};

/// Minimum years of work under the FGTS regime.
pub const FGTS_MIN_YEARS: u32 = 3;

pub fn check_program(facts: &ProgramFacts) -> Vec<Finding> {
    let mut findings = Vec::new();

    match facts.tipo {
        Some(ProgramKind::Fgts) => {
            if facts.tempo_fgts_anos.unwrap_or(0) < FGTS_MIN_YEARS {
                findings.push(Finding::impediment(
                    "FGTS: less than 3 years of work under the FGTS regime",
                ));
            }
            if !facts.saldo_suficiente.unwrap_or(false) {
                findings.push(Finding::warning(
                    "FGTS: verify minimum balance of 10% of the appraisal value",
                ));
            }
        }
        Some(ProgramKind::Pmcmv) => {
            if !facts.renda_familiar_compativel.unwrap_or(true) {
                findings.push(Finding::warning(
                    "PMCMV: verify family income compatibility with the program bracket",
                ));
            }
        }
        Some(ProgramKind::Sbpe) | Some(ProgramKind::RecursosLivres) => {}
        Some(ProgramKind::Other) | None => {
            findings.push(Finding::warning(
                "Program type is unclassified; program checks were not applied",
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
    fn fgts_with_tenure_and_balance_is_clean() {
        let facts = ProgramFacts {
            tipo: Some(ProgramKind::Fgts),
            tempo_fgts_anos: Some(5),
            saldo_suficiente: Some(true),
            renda_familiar_compativel: None,
        };
        assert!(check_program(&facts).is_empty());
    }

    #[test]
    fn fgts_short_tenure_is_an_impediment() {
        let facts = ProgramFacts {
            tipo: Some(ProgramKind::Fgts),
            tempo_fgts_anos: Some(2),
            saldo_suficiente: Some(true),
            ..Default::default()
        };
        let findings = check_program(&facts);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Impediment);
    }

    #[test]
    fn fgts_missing_tenure_fails_closed() {
        let facts = ProgramFacts {
            tipo: Some(ProgramKind::Fgts),
            saldo_suficiente: Some(true),
            ..Default::default()
        };
        assert_eq!(check_program(&facts).len(), 1);
    }

    #[test]
    fn fgts_exact_threshold_is_enough() {
        let facts = ProgramFacts {
            tipo: Some(ProgramKind::Fgts),
            tempo_fgts_anos: Some(FGTS_MIN_YEARS),
            saldo_suficiente: Some(true),
            ..Default::default()
        };
        assert!(check_program(&facts).is_empty());
    }

    #[test]
    fn fgts_unverified_balance_is_a_warning() {
        let facts = ProgramFacts {
            tipo: Some(ProgramKind::Fgts),
            tempo_fgts_anos: Some(4),
            ..Default::default()
        };
        let findings = check_program(&facts);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Warning);
    }

    #[test]
    fn pmcmv_income_mismatch_is_a_warning() {
        let facts = ProgramFacts {
            tipo: Some(ProgramKind::Pmcmv),
            renda_familiar_compativel: Some(false),
            ..Default::default()
        };
        let findings = check_program(&facts);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Warning);
    }

    #[test]
    fn sbpe_has_no_program_checks() {
        let facts = ProgramFacts {
            tipo: Some(ProgramKind::Sbpe),
            ..Default::default()
        };
        assert!(check_program(&facts).is_empty());
    }

    #[test]
    fn unknown_program_surfaces_as_warning() {
        let facts = ProgramFacts {
            tipo: Some(ProgramKind::Other),
            ..Default::default()
        };
        let findings = check_program(&facts);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Warning);
    }
}
