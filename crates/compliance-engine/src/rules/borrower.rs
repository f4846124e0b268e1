//! Borrower (tomador) eligibility checks.
//!
//! Default policy is asymmetric on purpose: identity facts (`cpf_regular`,
//! nationality) fail closed when absent, while general-status facts
//! (`idoneidade_cadastral`, `residencia_brasil`) fail open and only count
//! against the borrower when explicitly false.

use shared_types::{BorrowerFacts, Finding};

pub fn check_borrower(facts: &BorrowerFacts) -> Vec<Finding> {
    let mut findings = Vec::new();

    if !facts.cpf_regular.unwrap_or(false) {
        findings.push(Finding::impediment(
            "Borrower CPF is irregular with the federal revenue service",
        ));
    }

    let brazilian = facts.brasileiro.unwrap_or(false);
    let valid_foreign_registration = facts.rnm_valida.unwrap_or(false);
    if !brazilian && !valid_foreign_registration {
        findings.push(Finding::impediment(
            "Foreign borrower without a valid RNM/RNE registration",
        ));
    }

    if !facts.idoneidade_cadastral.unwrap_or(true) {
        findings.push(Finding::impediment(
            "Borrower lacks registry good standing (idoneidade cadastral)",
        ));
    }

    if !facts.residencia_brasil.unwrap_or(true) {
        findings.push(Finding::impediment(
            "Borrower does not prove residence in Brazil",
        ));
    }

    findings
}
