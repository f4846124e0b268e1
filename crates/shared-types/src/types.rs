use serde::{Deserialize, Serialize};

/// Topic categories a question can be routed to.
///
/// Declaration order matters: the classifier checks categories in this order
/// and the first match wins. `General` is the fallback and carries no
/// trigger keywords of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Programs,
    Borrower,
    Seller,
    Property,
    Construction,
    Financing,
    Documentation,
    Fees,
    Compliance,
    Procedures,
    Channels,
    General,
}

impl Category {
    /// All categories in classifier order.
    pub const ALL: [Category; 12] = [
        Category::Programs,
        Category::Borrower,
        Category::Seller,
        Category::Property,
        Category::Construction,
        Category::Financing,
        Category::Documentation,
        Category::Fees,
        Category::Compliance,
        Category::Procedures,
        Category::Channels,
        Category::General,
    ];

    /// Human-readable label, in the language of the policy manual.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Programs => "Programas habitacionais",
            Category::Borrower => "Exigências do tomador",
            Category::Seller => "Exigências do vendedor",
            Category::Property => "Exigências do imóvel",
            Category::Construction => "Modalidades de construção",
            Category::Financing => "Parâmetros de financiamento",
            Category::Documentation => "Documentação necessária",
            Category::Fees => "Tarifas e custos",
            Category::Compliance => "Compliance e conformidade",
            Category::Procedures => "Procedimentos operacionais",
            Category::Channels => "Canais de atendimento",
            Category::General => "Consulta geral",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            Category::Programs => "programs",
            Category::Borrower => "borrower",
            Category::Seller => "seller",
            Category::Property => "property",
            Category::Construction => "construction",
            Category::Financing => "financing",
            Category::Documentation => "documentation",
            Category::Fees => "fees",
            Category::Compliance => "compliance",
            Category::Procedures => "procedures",
            Category::Channels => "channels",
            Category::General => "general",
        };
        write!(f, "{}", tag)
    }
}

/// Lending programs covered by the manual.
///
/// `Other` absorbs unknown discriminator values on deserialization; the
/// evaluator surfaces it as a warning instead of silently skipping checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProgramKind {
    #[serde(rename = "PMCMV")]
    Pmcmv,
    #[serde(rename = "FGTS")]
    Fgts,
    #[serde(rename = "SBPE")]
    Sbpe,
    #[serde(rename = "RECURSOS_LIVRES")]
    RecursosLivres,
    #[serde(other)]
    Other,
}

impl std::fmt::Display for ProgramKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            ProgramKind::Pmcmv => "PMCMV",
            ProgramKind::Fgts => "FGTS",
            ProgramKind::Sbpe => "SBPE",
            ProgramKind::RecursosLivres => "RECURSOS_LIVRES",
            ProgramKind::Other => "UNKNOWN",
        };
        write!(f, "{}", tag)
    }
}

/// Seller legal nature: natural person (PF) or legal entity (PJ).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SellerKind {
    #[serde(rename = "PF")]
    Pf,
    #[serde(rename = "PJ")]
    Pj,
    #[serde(other)]
    Other,
}

/// One rendered answer, structured so callers can display it however they
/// want without re-parsing prose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub category: Category,
    /// Stable topic id, e.g. `programs/fgts` or `general/help`.
    pub topic: String,
    pub title: String,
    pub sections: Vec<AnswerSection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerSection {
    pub label: String,
    pub body: SectionBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionBody {
    Lines(Vec<String>),
    Text(String),
}

impl AnswerRecord {
    pub fn new(category: Category, topic: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            category,
            topic: topic.into(),
            title: title.into(),
            sections: Vec::new(),
        }
    }

    pub fn with_lines(
        mut self,
        label: impl Into<String>,
        lines: impl IntoIterator<Item = String>,
    ) -> Self {
        self.sections.push(AnswerSection {
            label: label.into(),
            body: SectionBody::Lines(lines.into_iter().collect()),
        });
        self
    }

    pub fn with_text(mut self, label: impl Into<String>, text: impl Into<String>) -> Self {
        self.sections.push(AnswerSection {
            label: label.into(),
            body: SectionBody::Text(text.into()),
        });
        self
    }

    /// Deterministic textual projection: title, then each section as a
    /// labeled line or bulleted list. Same input always yields the same
    /// bytes.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.title);
        out.push('\n');
        for section in &self.sections {
            out.push('\n');
            match &section.body {
                SectionBody::Text(text) => {
                    out.push_str(&format!("{}: {}\n", section.label, text));
                }
                SectionBody::Lines(lines) => {
                    out.push_str(&format!("{}:\n", section.label));
                    for line in lines {
                        out.push_str(&format!("• {}\n", line));
                    }
                }
            }
        }
        out
    }
}

/// Structured description of a loan operation submitted for evaluation.
///
/// Every section is optional; an absent section is simply not evaluated.
/// Field names keep the manual's Portuguese keys so descriptors round-trip
/// with existing tooling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OperationDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tomador: Option<BorrowerFacts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendedor: Option<SellerFacts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imovel: Option<PropertyFacts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub programa: Option<ProgramFacts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentacao: Option<DocumentationFacts>,
}

impl OperationDescriptor {
    /// Program kind, if a program section is present.
    pub fn program_kind(&self) -> Option<ProgramKind> {
        self.programa.as_ref().and_then(|p| p.tipo)
    }
}

/// Borrower facts. Identity checks (`cpf_regular`, nationality) fail closed
/// when absent; general-status checks (`idoneidade_cadastral`,
/// `residencia_brasil`) fail open. The asymmetry is intentional: an unproven
/// identity is an impediment, an unasserted status is not.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BorrowerFacts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpf_regular: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brasileiro: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rnm_valida: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idoneidade_cadastral: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub residencia_brasil: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SellerFacts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tipo: Option<SellerKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maior_idade: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpf_regular: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cnpj_regular: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyFacts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_urbana: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infraestrutura_completa: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub possui_onus: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matricula_regular: Option<bool>,
    /// Conditions reported for the property, matched against the manual's
    /// canonical prohibited-condition list.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub impedimentos: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgramFacts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tipo: Option<ProgramKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tempo_fgts_anos: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saldo_suficiente: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renda_familiar_compativel: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentationFacts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tomador_completa: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendedor_completa: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imovel_completa: Option<bool>,
}

/// Severity of a single rule finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Blocks approval unconditionally, regardless of score.
    Impediment,
    /// Lowers the score but does not by itself block approval.
    Warning,
}

/// One rule finding produced by an entity check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    pub fn impediment(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Impediment,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}

/// Outcome of a compliance evaluation.
///
/// `passed` requires both `score >= 70` and zero impediments; a single
/// impediment fails the operation even though it only costs 25 points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub passed: bool,
    pub score: f64,
    pub impediments: Vec<String>,
    pub warnings: Vec<String>,
    pub recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn render_is_deterministic() {
        let record = AnswerRecord::new(Category::Programs, "programs/fgts", "Carta de Crédito FGTS")
            .with_lines("Operações", vec!["Aquisição".to_string(), "Construção".to_string()])
            .with_text("Redutor", "0,5% na taxa");

        assert_eq!(record.render(), record.render());
        assert!(record.render().contains("• Aquisição"));
        assert!(record.render().contains("Redutor: 0,5% na taxa"));
    }

    #[test]
    fn descriptor_deserializes_partial_sections() {
        let op: OperationDescriptor =
            serde_json::from_str(r#"{"tomador": {"cpf_regular": false}}"#).unwrap();
        assert_eq!(op.tomador.unwrap().cpf_regular, Some(false));
        assert!(op.vendedor.is_none());
        assert!(op.imovel.is_none());
    }

    #[test]
    fn unknown_program_kind_maps_to_other() {
        let facts: ProgramFacts = serde_json::from_str(r#"{"tipo": "CONSORCIO"}"#).unwrap();
        assert_eq!(facts.tipo, Some(ProgramKind::Other));
    }

    #[test]
    fn unknown_seller_kind_maps_to_other() {
        let facts: SellerFacts = serde_json::from_str(r#"{"tipo": "MEI"}"#).unwrap();
        assert_eq!(facts.tipo, Some(SellerKind::Other));
    }

    #[test]
    fn category_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Category::Programs).unwrap(), "\"programs\"");
        assert_eq!(serde_json::to_string(&Category::General).unwrap(), "\"general\"");
    }
}
