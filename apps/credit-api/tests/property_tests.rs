//! Property-based tests for credit-api
//!
//! Tests classification totality and scoring invariants using proptest.

use proptest::prelude::*;

use compliance_engine::ComplianceEngine;
use knowledge_base::{classify, retrieve, KnowledgeBase};
use shared_types::{BorrowerFacts, OperationDescriptor, PropertyFacts};
use std::sync::Arc;

fn kb() -> Arc<KnowledgeBase> {
    Arc::new(KnowledgeBase::load().unwrap())
}

/// An operation descriptor with an arbitrary mix of borrower flags.
fn borrower_facts() -> impl Strategy<Value = BorrowerFacts> {
    (
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
    )
        .prop_map(|(cpf, nat, ido, res)| BorrowerFacts {
            cpf_regular: cpf,
            brasileiro: nat,
            idoneidade_cadastral: ido,
            residencia_brasil: res,
            ..Default::default()
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================================
    // Classification
    // ============================================================

    #[test]
    fn classification_is_total(question in ".{0,200}") {
        // Any string, including empty and non-ASCII, classifies without panic.
        let _ = classify(&question);
    }

    #[test]
    fn retrieval_is_total_and_idempotent(question in ".{0,200}") {
        let kb = kb();
        let category = classify(&question);
        let first = retrieve(&kb, category, &question);
        let second = retrieve(&kb, category, &question);
        prop_assert_eq!(&first.topic, &second.topic);
        prop_assert_eq!(first.render(), second.render());
    }

    // ============================================================
    // Evaluation invariants
    // ============================================================

    #[test]
    fn score_is_bounded(facts in borrower_facts()) {
        let engine = ComplianceEngine::new(kb());
        let op = OperationDescriptor {
            tomador: Some(facts),
            ..Default::default()
        };
        let result = engine.evaluate(&op);
        prop_assert!(result.score >= 0.0);
        prop_assert!(result.score <= 100.0);
    }

    #[test]
    fn passed_requires_score_and_no_impediments(facts in borrower_facts()) {
        let engine = ComplianceEngine::new(kb());
        let op = OperationDescriptor {
            tomador: Some(facts),
            ..Default::default()
        };
        let result = engine.evaluate(&op);
        prop_assert_eq!(
            result.passed,
            result.score >= 70.0 && result.impediments.is_empty()
        );
    }

    #[test]
    fn impediments_match_score_deduction(
        facts in borrower_facts(),
        lien in proptest::option::of(any::<bool>()),
    ) {
        let engine = ComplianceEngine::new(kb());
        let op = OperationDescriptor {
            tomador: Some(facts),
            imovel: Some(PropertyFacts {
                possui_onus: lien,
                ..Default::default()
            }),
            ..Default::default()
        };
        let result = engine.evaluate(&op);
        let expected = (100.0
            - 25.0 * result.impediments.len() as f64
            - 5.0 * result.warnings.len() as f64)
            .max(0.0);
        prop_assert_eq!(result.score, expected);
    }

    // ============================================================
    // Descriptor serialization
    // ============================================================

    #[test]
    fn descriptor_json_round_trips(facts in borrower_facts()) {
        let op = OperationDescriptor {
            tomador: Some(facts),
            ..Default::default()
        };
        let json = serde_json::to_string(&op).unwrap();
        let back: OperationDescriptor = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(serde_json::to_string(&back).unwrap(), json);
    }
}
