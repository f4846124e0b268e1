//! Answer retrieval: secondary keyword dispatch within a category, then a
//! fixed projection of the selected entry into an [`AnswerRecord`].
//!
//! Pure function of (category, question, knowledge base). No randomness, no
//! mutation; identical inputs produce byte-identical rendered answers.

use shared_types::{AnswerRecord, Category, ProgramKind};

use crate::schema::ProgramEntry;
use crate::KnowledgeBase;

/// Select and render the knowledge entry for an already-classified question.
///
/// When the question matches no sub-topic within the category, the
/// category's overview entry is returned. `General` yields the fixed help
/// record listing every category with example questions.
pub fn retrieve(kb: &KnowledgeBase, category: Category, question: &str) -> AnswerRecord {
    let q = question.to_lowercase();
    match category {
        Category::Programs => programs_answer(kb, &q),
        Category::Borrower => borrower_answer(kb, &q),
        Category::Seller => seller_answer(kb, &q),
        Category::Property => property_answer(kb, &q),
        Category::Construction => construction_answer(kb, &q),
        Category::Financing => financing_answer(kb, &q),
        Category::Documentation => documentation_answer(kb, &q),
        Category::Fees => fees_answer(kb, &q),
        Category::Compliance => compliance_answer(kb, &q),
        Category::Procedures => procedures_answer(kb, &q),
        Category::Channels => channels_answer(kb, &q),
        Category::General => help_answer(kb),
    }
}

fn contains_any(q: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| q.contains(n))
}

fn programs_answer(kb: &KnowledgeBase, q: &str) -> AnswerRecord {
    let kind = if contains_any(q, &["pmcmv", "minha casa"]) {
        Some(ProgramKind::Pmcmv)
    } else if contains_any(q, &["fgts", "pró-cotista", "pro-cotista"]) {
        Some(ProgramKind::Fgts)
    } else if q.contains("sbpe") {
        Some(ProgramKind::Sbpe)
    } else if q.contains("recursos livres") {
        Some(ProgramKind::RecursosLivres)
    } else {
        None
    };

    match kind.and_then(|k| kb.program(k)) {
        Some(entry) => program_entry_answer(entry),
        None => programs_overview(kb),
    }
}

fn program_topic(kind: ProgramKind) -> &'static str {
    match kind {
        ProgramKind::Pmcmv => "programs/pmcmv",
        ProgramKind::Fgts => "programs/fgts",
        ProgramKind::Sbpe => "programs/sbpe",
        ProgramKind::RecursosLivres => "programs/recursos_livres",
        ProgramKind::Other => "programs/overview",
    }
}

fn program_entry_answer(entry: &ProgramEntry) -> AnswerRecord {
    let mut record = AnswerRecord::new(
        Category::Programs,
        program_topic(entry.kind),
        entry.full_name.clone(),
    )
    .with_lines("Operações disponíveis", entry.operations.clone());

    if !entry.requirements.is_empty() {
        record = record.with_lines("Requisitos obrigatórios", entry.requirements.clone());
    }
    if !entry.framing.is_empty() {
        record = record.with_lines("Enquadramento", entry.framing.clone());
    }
    if !entry.funding_sources.is_empty() {
        record = record.with_lines("Recursos utilizados", entry.funding_sources.clone());
    }
    if let Some(reduction) = &entry.rate_reduction {
        record = record.with_text("Redutor de taxa", reduction.clone());
    }
    if let Some(norm) = &entry.normative_ref {
        record = record.with_text("Referência normativa", norm.clone());
    }
    if !entry.notes.is_empty() {
        record = record.with_lines("Observações", entry.notes.clone());
    }
    record
}

fn programs_overview(kb: &KnowledgeBase) -> AnswerRecord {
    let listing = kb
        .programs
        .iter()
        .map(|p| format!("{}: {}", p.kind, p.full_name))
        .collect::<Vec<_>>();
    AnswerRecord::new(
        Category::Programs,
        "programs/overview",
        "Programas Habitacionais CAIXA",
    )
    .with_lines("Programas", listing)
    .with_text(
        "Orientação",
        "Para informações específicas, pergunte sobre o programa desejado",
    )
}

fn borrower_answer(kb: &KnowledgeBase, q: &str) -> AnswerRecord {
    if contains_any(q, &["cca", "correspondente"]) {
        return AnswerRecord::new(
            Category::Borrower,
            "borrower/cca",
            "Restrições do Correspondente CAIXA Aqui",
        )
        .with_lines("Restrições", kb.borrower.cca_restrictions.clone());
    }
    if contains_any(q, &["especial", "incapaz", "curatela"]) {
        return AnswerRecord::new(
            Category::Borrower,
            "borrower/special",
            "Situações especiais do tomador",
        )
        .with_lines("Situações especiais", kb.borrower.special_situations.clone());
    }
    AnswerRecord::new(
        Category::Borrower,
        "borrower/overview",
        "Exigências do Tomador",
    )
    .with_lines("Requisitos gerais", kb.borrower.general.clone())
    .with_lines("Situações especiais", kb.borrower.special_situations.clone())
}

fn seller_answer(kb: &KnowledgeBase, q: &str) -> AnswerRecord {
    if contains_any(q, &["jurídica", "juridica", "cnpj", "pj"]) {
        return AnswerRecord::new(
            Category::Seller,
            "seller/company",
            "Vendedor Pessoa Jurídica",
        )
        .with_lines("Exigências", kb.seller.company.clone());
    }
    if contains_any(q, &["física", "fisica", "cpf", "pf"]) {
        return AnswerRecord::new(
            Category::Seller,
            "seller/individual",
            "Vendedor Pessoa Física",
        )
        .with_lines("Exigências", kb.seller.individual.clone());
    }
    AnswerRecord::new(Category::Seller, "seller/overview", "Exigências do Vendedor")
        .with_lines("Pessoa física", kb.seller.individual.clone())
        .with_lines("Pessoa jurídica", kb.seller.company.clone())
        .with_lines("Situações especiais", kb.seller.special_situations.clone())
}

fn property_answer(kb: &KnowledgeBase, q: &str) -> AnswerRecord {
    if q.contains("impedimento") {
        return AnswerRecord::new(
            Category::Property,
            "property/prohibited",
            "Impedimentos do Imóvel",
        )
        .with_lines("Impedimentos", kb.property.prohibited.clone());
    }
    if q.contains("aceit") {
        return AnswerRecord::new(
            Category::Property,
            "property/accepted",
            "Situações aceitas para o imóvel",
        )
        .with_lines("Situações aceitas", kb.property.accepted.clone());
    }
    if contains_any(q, &["distrito federal", " df", "df?"]) {
        return AnswerRecord::new(
            Category::Property,
            "property/df",
            "Exigências específicas para o Distrito Federal",
        )
        .with_lines("Exigências específicas", kb.property.df_specific.clone());
    }
    AnswerRecord::new(Category::Property, "property/overview", "Exigências do Imóvel")
        .with_lines("Requisitos básicos", kb.property.basic.clone())
        .with_lines("Situações aceitas", kb.property.accepted.clone())
        .with_lines("Impedimentos", kb.property.prohibited.clone())
}

fn construction_answer(kb: &KnowledgeBase, q: &str) -> AnswerRecord {
    if contains_any(q, &["reforma", "ampliação", "ampliacao"]) {
        return AnswerRecord::new(
            Category::Construction,
            "construction/renovation",
            "Reforma e Ampliação",
        )
        .with_lines("Tipos disponíveis", kb.construction.renovation.kinds.clone())
        .with_lines("Exigências", kb.construction.renovation.requirements.clone());
    }
    if contains_any(q, &["individual", "terreno próprio", "terreno proprio"]) {
        let ind = &kb.construction.individual;
        return AnswerRecord::new(
            Category::Construction,
            "construction/individual",
            "Construção Individual",
        )
        .with_text("Percentual máximo de execução", ind.max_execution.clone())
        .with_text("Prazo de construção", ind.schedule.clone())
        .with_text("Acompanhamento", ind.oversight.clone())
        .with_lines("Documentos necessários", ind.documents.clone());
    }
    AnswerRecord::new(
        Category::Construction,
        "construction/overview",
        "Modalidades de Construção",
    )
    .with_text(
        "Construção individual",
        format!(
            "Até {} de execução, {}",
            kb.construction.individual.max_execution,
            kb.construction.individual.oversight.to_lowercase()
        ),
    )
    .with_lines("Reforma e ampliação", kb.construction.renovation.kinds.clone())
}

fn financing_answer(kb: &KnowledgeBase, q: &str) -> AnswerRecord {
    if q.contains("amortiza") {
        return AnswerRecord::new(
            Category::Financing,
            "financing/amortization",
            "Sistemas de Amortização",
        )
        .with_lines("Sistemas", kb.financing.amortization_systems.clone());
    }
    if q.contains("seguro") {
        return AnswerRecord::new(
            Category::Financing,
            "financing/insurance",
            "Seguros Obrigatórios",
        )
        .with_lines("Seguros", kb.financing.mandatory_insurance.clone());
    }
    if contains_any(q, &["index", "tr", "ipca"]) {
        return AnswerRecord::new(Category::Financing, "financing/indexers", "Indexadores")
            .with_lines("Indexadores", kb.financing.indexers.clone());
    }
    AnswerRecord::new(
        Category::Financing,
        "financing/overview",
        "Parâmetros de Financiamento",
    )
    .with_lines("Modalidades de taxa", kb.financing.rate_modes.clone())
    .with_lines("Indexadores", kb.financing.indexers.clone())
    .with_lines("Sistemas de amortização", kb.financing.amortization_systems.clone())
    .with_lines("Garantias", kb.financing.guarantees.clone())
    .with_lines("Seguros obrigatórios", kb.financing.mandatory_insurance.clone())
    .with_text("Carência", kb.financing.grace_note.clone())
}

fn documentation_answer(kb: &KnowledgeBase, q: &str) -> AnswerRecord {
    if q.contains("vendedor") {
        return AnswerRecord::new(
            Category::Documentation,
            "documentation/seller",
            "Documentação do Vendedor",
        )
        .with_lines("Documentos", kb.documentation.seller.clone());
    }
    if contains_any(q, &["imóvel", "imovel"]) {
        return AnswerRecord::new(
            Category::Documentation,
            "documentation/property",
            "Documentação do Imóvel",
        )
        .with_lines("Documentos", kb.documentation.property.clone());
    }
    if q.contains("fgts") {
        return AnswerRecord::new(
            Category::Documentation,
            "documentation/fgts",
            "Documentação específica FGTS",
        )
        .with_lines("Documentos", kb.documentation.fgts_specific.clone());
    }
    if contains_any(q, &["pmcmv", "minha casa"]) {
        return AnswerRecord::new(
            Category::Documentation,
            "documentation/pmcmv",
            "Documentação específica PMCMV",
        )
        .with_lines("Documentos", kb.documentation.pmcmv_specific.clone());
    }
    AnswerRecord::new(
        Category::Documentation,
        "documentation/overview",
        "Documentação Necessária",
    )
    .with_lines("Tomador", kb.documentation.borrower.clone())
    .with_lines("Vendedor", kb.documentation.seller.clone())
    .with_lines("Imóvel", kb.documentation.property.clone())
    .with_lines("Específica FGTS", kb.documentation.fgts_specific.clone())
    .with_lines("Específica PMCMV", kb.documentation.pmcmv_specific.clone())
}

fn fees_answer(kb: &KnowledgeBase, q: &str) -> AnswerRecord {
    let key = if q.contains("reavalia") {
        Some("reavaliacao")
    } else if q.contains("avalia") {
        Some("avaliacao")
    } else if q.contains("tao") {
        Some("tao")
    } else if q.contains("seguro") {
        Some("analise_seguro")
    } else if q.contains("administra") {
        Some("administracao")
    } else {
        None
    };

    if let Some(fee) = key.and_then(|k| kb.fees.iter().find(|f| f.key == k)) {
        return AnswerRecord::new(
            Category::Fees,
            format!("fees/{}", fee.key),
            fee.name.clone(),
        )
        .with_text("Aplicação", fee.applies_to.clone())
        .with_text("Observação", fee.note.clone());
    }

    let listing = kb
        .fees
        .iter()
        .map(|f| format!("{} ({})", f.name, f.applies_to))
        .collect::<Vec<_>>();
    AnswerRecord::new(Category::Fees, "fees/overview", "Tarifas e Custos")
        .with_lines("Tarifas", listing)
}

fn compliance_answer(kb: &KnowledgeBase, q: &str) -> AnswerRecord {
    for check in &kb.compliance {
        if q.contains(check.key) || q.contains(&check.name.to_lowercase()) {
            return AnswerRecord::new(
                Category::Compliance,
                format!("compliance/{}", check.key),
                check.name.clone(),
            )
            .with_text("Obrigatoriedade", check.requirement.clone());
        }
    }
    let listing = kb
        .compliance
        .iter()
        .map(|c| format!("{}: {}", c.name, c.requirement))
        .collect::<Vec<_>>();
    AnswerRecord::new(
        Category::Compliance,
        "compliance/overview",
        "Compliance e Conformidade",
    )
    .with_lines("Verificações", listing)
}

fn procedures_answer(kb: &KnowledgeBase, q: &str) -> AnswerRecord {
    if q.contains("formaliza") {
        return AnswerRecord::new(
            Category::Procedures,
            "procedures/formalization",
            "Formalização",
        )
        .with_lines("Etapas", kb.procedures.formalization.clone());
    }
    if q.contains("acompanha") {
        return AnswerRecord::new(
            Category::Procedures,
            "procedures/servicing",
            "Acompanhamento",
        )
        .with_lines("Etapas", kb.procedures.servicing.clone());
    }
    AnswerRecord::new(
        Category::Procedures,
        "procedures/overview",
        "Procedimentos Operacionais",
    )
    .with_lines("Qualificação da proposta", kb.procedures.qualification.clone())
    .with_lines("Formalização", kb.procedures.formalization.clone())
    .with_lines("Acompanhamento", kb.procedures.servicing.clone())
}

fn channels_answer(kb: &KnowledgeBase, q: &str) -> AnswerRecord {
    for channel in &kb.channels {
        if q.contains(channel.key) {
            return AnswerRecord::new(
                Category::Channels,
                format!("channels/{}", channel.key),
                channel.name.clone(),
            )
            .with_lines("Funcionalidades", channel.details.clone());
        }
    }
    let listing = kb.channels.iter().map(|c| c.name.clone()).collect::<Vec<_>>();
    AnswerRecord::new(Category::Channels, "channels/overview", "Canais de Atendimento")
        .with_lines("Canais", listing)
}

fn help_answer(kb: &KnowledgeBase) -> AnswerRecord {
    let topics = Category::ALL
        .iter()
        .filter(|c| **c != Category::General)
        .map(|c| c.label().to_string())
        .collect::<Vec<_>>();
    AnswerRecord::new(
        Category::General,
        "general/help",
        "Agente de Crédito Imobiliário",
    )
    .with_text(
        "Aviso",
        "Não encontrei informações específicas para sua consulta",
    )
    .with_lines("Tópicos disponíveis", topics)
    .with_lines(
        "Exemplos de perguntas",
        [
            "Quais são os programas disponíveis?",
            "Quais exigências para o tomador?",
            "Que imóveis são aceitos?",
            "Quais documentos necessários?",
            "Como funciona o redutor FGTS?",
        ]
        .iter()
        .map(|s| s.to_string()),
    )
    .with_lines("Facilidades ao cliente", kb.sustainability.clone())
}
