//! Documentation completeness checks. Incomplete documentation never blocks
//! by itself; each incomplete party costs a warning.

use shared_types::{DocumentationFacts, Finding};

pub fn check_documentation(facts: &DocumentationFacts) -> Vec<Finding> {
    let mut findings = Vec::new();

    if !facts.tomador_completa.unwrap_or(true) {
        findings.push(Finding::warning("Borrower documentation is incomplete"));
    }
    if !facts.vendedor_completa.unwrap_or(true) {
        findings.push(Finding::warning("Seller documentation is incomplete"));
    }
    if !facts.imovel_completa.unwrap_or(true) {
        findings.push(Finding::warning("Property documentation is incomplete"));
    }

    findings
}
