//! Trigger keywords for question routing.
//!
//! Order is significant: the classifier walks [`CATEGORY_TRIGGERS`] top to
//! bottom and the first category with a matching substring wins. A keyword
//! that appears in two sets (e.g. "taxa" under financing and fees) therefore
//! always resolves to the earlier category. Accented and unaccented variants
//! are listed separately; there is no normalization beyond lowercasing.

use shared_types::Category;

/// Program-related triggers.
pub const PROGRAM_KEYWORDS: &[&str] = &[
    "programa",
    "pmcmv",
    "fgts",
    "sbpe",
    "recursos livres",
    "minha casa",
];

/// Borrower (proponente) triggers.
pub const BORROWER_KEYWORDS: &[&str] = &["tomador", "cliente", "proponente", "mutuário", "renda"];

/// Seller triggers.
pub const SELLER_KEYWORDS: &[&str] = &["vendedor", "venda", "pessoa física", "pessoa jurídica"];

/// Property triggers.
pub const PROPERTY_KEYWORDS: &[&str] =
    &["imóvel", "imovel", "propriedade", "garantia", "terreno"];

/// Construction triggers.
pub const CONSTRUCTION_KEYWORDS: &[&str] =
    &["construção", "construcao", "obra", "reforma", "ampliação"];

/// Financing triggers.
pub const FINANCING_KEYWORDS: &[&str] =
    &["financiamento", "taxa", "juros", "amortização", "prazo"];

/// Documentation triggers.
pub const DOCUMENTATION_KEYWORDS: &[&str] =
    &["documento", "documentação", "certidão", "comprovação"];

/// Fee triggers.
pub const FEE_KEYWORDS: &[&str] = &["tarifa", "custo", "taxa", "valor", "preço"];

/// Compliance triggers.
pub const COMPLIANCE_KEYWORDS: &[&str] = &["compliance", "conformidade", "pld", "legitimidade"];

/// Procedure triggers.
pub const PROCEDURE_KEYWORDS: &[&str] = &["procedimento", "processo", "fluxo", "operacional"];

/// Service-channel triggers.
pub const CHANNEL_KEYWORDS: &[&str] = &["app", "siopi", "agência", "atendimento", "canal"];

/// Ordered routing table. `General` is absent on purpose: it is the
/// fallback, not a matchable category.
pub const CATEGORY_TRIGGERS: &[(Category, &[&str])] = &[
    (Category::Programs, PROGRAM_KEYWORDS),
    (Category::Borrower, BORROWER_KEYWORDS),
    (Category::Seller, SELLER_KEYWORDS),
    (Category::Property, PROPERTY_KEYWORDS),
    (Category::Construction, CONSTRUCTION_KEYWORDS),
    (Category::Financing, FINANCING_KEYWORDS),
    (Category::Documentation, DOCUMENTATION_KEYWORDS),
    (Category::Fees, FEE_KEYWORDS),
    (Category::Compliance, COMPLIANCE_KEYWORDS),
    (Category::Procedures, PROCEDURE_KEYWORDS),
    (Category::Channels, CHANNEL_KEYWORDS),
];
