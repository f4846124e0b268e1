//! Question-to-category routing by keyword membership.

use shared_types::Category;

use crate::keywords::CATEGORY_TRIGGERS;

/// Classify a free-text question into exactly one [`Category`].
///
/// Lowercases the input and walks the trigger table in declaration order;
/// the first category with any trigger substring present wins. Total
/// function: anything unmatched resolves to [`Category::General`].
pub fn classify(question: &str) -> Category {
    let question = question.to_lowercase();
    for (category, triggers) in CATEGORY_TRIGGERS {
        if triggers.iter().any(|kw| question.contains(kw)) {
            return *category;
        }
    }
    Category::General
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_program_questions() {
        assert_eq!(
            classify("Quais são os programas disponíveis?"),
            Category::Programs
        );
        assert_eq!(classify("como funciona o FGTS?"), Category::Programs);
        assert_eq!(classify("Minha Casa Minha Vida"), Category::Programs);
    }

    #[test]
    fn routes_each_category() {
        assert_eq!(classify("exigências do tomador"), Category::Borrower);
        assert_eq!(classify("quem pode ser vendedor?"), Category::Seller);
        assert_eq!(classify("o imóvel precisa de matrícula?"), Category::Property);
        assert_eq!(classify("regras para obra"), Category::Construction);
        assert_eq!(classify("qual o prazo máximo?"), Category::Financing);
        assert_eq!(classify("quais certidão preciso?"), Category::Documentation);
        assert_eq!(classify("qual a tarifa de avaliação?"), Category::Fees);
        assert_eq!(classify("como funciona o pld?"), Category::Compliance);
        assert_eq!(classify("qual o fluxo de contratação?"), Category::Procedures);
        assert_eq!(classify("como acessar o siopi?"), Category::Channels);
    }

    #[test]
    fn unmatched_questions_fall_back_to_general() {
        assert_eq!(classify("bom dia"), Category::General);
        assert_eq!(classify(""), Category::General);
        assert_eq!(classify("qwerty 12345 !!!"), Category::General);
    }

    #[test]
    fn first_declared_category_wins_on_ties() {
        // "taxa" triggers both Financing and Fees; Financing is declared first.
        assert_eq!(classify("qual a taxa?"), Category::Financing);
        // "fgts" (Programs) beats "documento" (Documentation).
        assert_eq!(classify("documento do fgts"), Category::Programs);
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(classify("SBPE"), Category::Programs);
        assert_eq!(classify("TOMADOR"), Category::Borrower);
    }
}
