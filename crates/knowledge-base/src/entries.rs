//! Embedded content of the housing-credit manual.
//!
//! Strings are carried verbatim from the manual (Portuguese). The compliance
//! evaluator matches against the prohibited-condition list by exact string,
//! so entries here are canonical.

use shared_types::ProgramKind;

use crate::schema::*;
use crate::KnowledgeBase;

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub(crate) fn build() -> KnowledgeBase {
    KnowledgeBase {
        programs: programs(),
        borrower: borrower(),
        seller: seller(),
        property: property(),
        construction: construction(),
        financing: financing(),
        documentation: documentation(),
        fees: fees(),
        compliance: compliance(),
        procedures: procedures(),
        channels: channels(),
        sustainability: lines(&[
            "Possibilidade de carência para pagamento dos encargos",
            "Financiamento das despesas cartoriais",
            "Simulador na internet com informações detalhadas",
            "Cartilha com orientações sobre financiamento habitacional",
            "Cursos de Educação Financeira",
            "Responsabilidade Social, Ambiental e Climática",
        ]),
    }
}

fn programs() -> Vec<ProgramEntry> {
    vec![
        ProgramEntry {
            kind: ProgramKind::Pmcmv,
            full_name: "Programa Minha Casa, Minha Vida".to_string(),
            operations: lines(&[
                "Aquisição Imóvel Novo ou Usado",
                "Aquisição de Terreno e Construção",
                "Construção em Terreno Próprio",
                "Conclusão, Ampliação, Reforma ou Melhoria (exceto Classe Média)",
                "Reforma ou Melhoria PCD (Exceto Classe Média)",
                "Imóveis Caixa/AMV (Adjudicados, arrematados em Leilão Caixa)",
            ]),
            requirements: Vec::new(),
            framing: lines(&[
                "Determinado pelo valor do imóvel (valor de venda e compra ou investimento), recorte populacional/territorial, e renda familiar",
            ]),
            funding_sources: lines(&["FGTS", "SBPE", "Fundo Social"]),
            rate_reduction: None,
            normative_ref: Some("MN, MO30824".to_string()),
            notes: lines(&["Modalidades específicas para cada faixa de renda"]),
        },
        ProgramEntry {
            kind: ProgramKind::Fgts,
            full_name: "Carta de Crédito FGTS/Programa Pró-cotista".to_string(),
            operations: lines(&[
                "Aquisição Imóvel Novo ou Usado",
                "Aquisição de Terreno e Construção",
                "Construção em Terreno Próprio",
            ]),
            requirements: lines(&[
                "Ser titular de CV FGTS com mínimo de 3 anos de trabalho sob o regime do FGTS",
                "Contrato de trabalho ativo sob regime do FGTS ou saldo em CV, de, no mínimo, 10% do valor da avaliação do imóvel",
            ]),
            framing: Vec::new(),
            funding_sources: lines(&["FGTS"]),
            rate_reduction: Some("0,5% na taxa de juros para cotista do FGTS".to_string()),
            normative_ref: None,
            notes: Vec::new(),
        },
        ProgramEntry {
            kind: ProgramKind::Sbpe,
            full_name: "Carta de Crédito SBPE".to_string(),
            operations: lines(&[
                "Aquisição de Imóvel Novo ou Usado (Residencial ou Comercial/Misto)",
                "Aquisição de Terreno e Construção (somente residencial)",
                "Construção em Terreno Próprio (somente residencial)",
                "Reforma Casa com Garantia de Imóvel (somente residencial)",
                "Aquisição de Lote Urbanizado Alocação de Recursos (somente residencial)",
                "Aquisição de Imóvel CAIXA/AMV",
            ]),
            requirements: Vec::new(),
            framing: Vec::new(),
            funding_sources: lines(&["SBPE"]),
            rate_reduction: None,
            normative_ref: Some("MN, MO30769".to_string()),
            notes: lines(&[
                "Não há critérios específicos para enquadramento",
                "Fim da restrição de financiamento de segundo imóvel",
            ]),
        },
        ProgramEntry {
            kind: ProgramKind::RecursosLivres,
            full_name: "Recursos Livres".to_string(),
            operations: lines(&["Aquisição de Imóvel Novo ou Usado (Residencial)"]),
            requirements: Vec::new(),
            framing: lines(&[
                "Imóveis com valor de avaliação acima de 1,5 milhão",
                "Cliente que já possua financiamento imobiliário ativo na CAIXA, mesmo que o imóvel tenha valor de avaliação inferior a 1,5 milhão",
            ]),
            funding_sources: Vec::new(),
            rate_reduction: None,
            normative_ref: None,
            notes: Vec::new(),
        },
    ]
}

fn borrower() -> BorrowerRequirements {
    BorrowerRequirements {
        general: lines(&[
            "Ter idoneidade cadastral",
            "Inscrição obrigatória no CPF com situação regular junto à Receita Federal do Brasil",
            "Comprovar residência no Brasil",
            "Não ser sócio ou dirigente de empresas da construção civil para aquisição de imóveis na planta objeto de incorporação ou construção da empresa da qual faz parte",
            "Ser brasileiro nato ou naturalizado ou estrangeiro(s) detentor(es) de Carteira de Registro Nacional Migratório - RNM ou Carteira de Registro Nacional de Estrangeiro - RNE válida e CPF regular junto à Receita Federal",
        ]),
        cca_restrictions: lines(&[
            "É vedado ao CCA atuar na contratação de propostas habitacionais e comerciais cuja comprovação de renda seja de emissão do próprio Correspondente CAIXA Aqui e sócios, exceto para abertura de contas correntes, com a finalidade de crédito salário",
        ]),
        special_situations: lines(&[
            "Para modalidade de construção, é permitido que o Responsável Técnico pela Obra figure como proponente ou cônjuge do proponente, devendo as vistorias de obra ocorrer obrigatoriamente na forma presencial, com emissão do RAE",
            "É permitido financiamento à pessoa incapaz para os atos da vida civil, que se encontre sob curatela, sendo considerada somente a renda do incapaz, vedada a aceitação da renda familiar do seu curador",
            "Admite-se a concessão de financiamento com utilização da renda familiar do proponente incapaz mediante a apresentação de autorização judicial",
        ]),
    }
}

fn seller() -> SellerRequirements {
    SellerRequirements {
        individual: lines(&[
            "Ter capacidade civil",
            "Ser maior de 18 anos ou ser menor emancipado com idade igual ou superior a 16 anos completos",
            "Ter CPF com situação regular junto à Receita Federal do Brasil",
            "Comprovação de estado civil",
            "Ser brasileiro nato, naturalizado ou estrangeiro(s) detentor(es) de RNM ou RNE válida e CPF regular",
        ]),
        company: lines(&[
            "Ter CNPJ com situação regular junto à Receita Federal do Brasil",
            "Para fundos de Investimento, documento deliberando sobre a constituição do Fundo e regulamento, registrados em Cartório de Títulos e Documentos ou na CVM",
            "Sócio/representante legal ser brasileiro nato ou naturalizado ou estrangeiro(s) detentor(es) de RNM ou RNE válida e CPF regular",
        ]),
        special_situations: lines(&[
            "Se vendedor(es) emancipado(s) (idade entre 16 e 18 anos incompletos), analfabetos e deficientes visuais, que tenham endereço residencial ou comercial no exterior – encaminhar o cliente à Agência e PA de vinculação",
            "Se o(s) vendedor(es) for(em) ascendente(s) do comprador(es), deve ser encaminhado à Agência/PA de vinculação para contratação",
        ]),
    }
}

fn property() -> PropertyRequirements {
    PropertyRequirements {
        basic: lines(&[
            "Estar localizado em área urbana",
            "Possuir vias de acesso, soluções para abastecimento de água, esgoto pluvial e sanitário e energia elétrica (pública e domiciliar)",
            "Estar livre e desembaraçado de quaisquer ônus",
            "Possuir Certidão Individualizada e Atualizada de Inteiro Teor da Matrícula registrada junto ao RI",
            "Ser aceito pela CAIXA como garantia",
        ]),
        accepted: lines(&[
            "Com parte de área edificada não averbada",
            "Com parte de área de uso comercial (imóvel misto)",
            "Sob regime de enfiteuse ou aforamento de imóveis de particulares (registrado até 10/01/2003)",
            "Sob regime de enfiteuse administrativa/aforamento exclusivamente para os imóveis da União",
            "Sob regime de aforamento exclusivamente para os terrenos de marinha e acrescidos",
            "Imóvel de marinha com até 60% da área sob Regime de Ocupação (condições específicas)",
            "Oriundo de empreendimento financiado pela CAIXA",
            "Com concessão de Direito Real de Uso (CDRU) concedida pelo poder público local",
            "Com 'habite-se parcial'",
            "Submetido ao regime de afetação",
            "Localizado em condomínio de lotes",
            "Imóvel CAIXA/AMV",
            "De madeira, casa pré-fabricada ou com outras tecnologias construtivas",
        ]),
        prohibited: lines(&[
            "Bens ou imóveis com contaminação por substâncias químicas",
            "Bens de hospitais filantrópicos e Santas Casas de Misericórdia",
            "Propriedade(s) cuja(s) matrícula(s) haja averbação de cancelamento, suspensão ou bloqueio",
            "Gravado com cláusula de usufruto",
            "Tombado ou em fase de tombamento pelo Patrimônio Histórico e Artístico",
            "Alienado/hipotecado em garantia de operação de crédito em outra instituição",
            "Gravado com cláusula de inalienabilidade ou outro ônus",
            "Com destinação agrícola, inclusive sítios, glebas ou granjas",
            "Com características de imóvel multifamiliar",
            "Próprio da União, Estado, Município ou Autarquia",
            "Que já tenha sido de propriedade do proponente nos últimos 02 anos",
            "Cujo vendedor seja pessoa jurídica e o proponente seja sócio ou representante legal",
            "Sem nenhuma área construída averbada (exceto lote urbanizado)",
            "Localizado em condomínio com características de loteamento irregular",
            "Sob regime de ocupação",
            "Registrados como imóvel do tipo 'Laje'",
            "Cuja edificação possua característica de hotel/apart hotel",
            "Sob regime de enfiteuse não permitida",
        ]),
        df_specific: lines(&[
            "Declaração de Capacidade de Atendimento das Ligações Individuais",
            "Declaração de Execução de Elementos Construtivos – DEEC",
            "Verificação pela engenharia da CAIXA das exigências técnicas",
        ]),
    }
}

fn construction() -> ConstructionModalities {
    ConstructionModalities {
        individual: IndividualConstruction {
            max_execution: "70%".to_string(),
            schedule: "Conforme cronograma aprovado".to_string(),
            oversight: "Vistorias obrigatórias".to_string(),
            documents: lines(&[
                "Projeto arquitetônico aprovado",
                "Licenciamento de obra",
                "Cronograma físico-financeiro",
                "ART/RRT do responsável técnico",
            ]),
        },
        renovation: Renovation {
            kinds: lines(&[
                "Reforma com ampliação",
                "Reforma sem ampliação",
                "Reforma PCD",
            ]),
            requirements: lines(&[
                "Projeto de reforma aprovado",
                "Licenciamento quando necessário",
                "Cronograma de execução",
            ]),
        },
    }
}

fn financing() -> FinancingParameters {
    FinancingParameters {
        rate_modes: lines(&["Taxa fixa", "Taxa variável indexada", "Taxa customizada"]),
        indexers: lines(&[
            "TR (Taxa Referencial)",
            "IPCA (Índice de Preços ao Consumidor Amplo)",
            "Poupança",
        ]),
        amortization_systems: lines(&[
            "SAC (Sistema de Amortização Constante)",
            "PRICE (Sistema Francês)",
        ]),
        guarantees: lines(&["Hipoteca do imóvel financiado", "Alienação fiduciária"]),
        mandatory_insurance: lines(&[
            "MIP (Morte e Invalidez Permanente)",
            "DFI (Danos Físicos ao Imóvel)",
            "DFC (Danos Físicos ao Conteúdo) - opcional",
        ]),
        grace_note: "Possível para unidades vinculadas ao empreendimento Ilha Pura".to_string(),
    }
}

fn documentation() -> DocumentationChecklists {
    DocumentationChecklists {
        borrower: lines(&[
            "Documentos pessoais (RG, CPF)",
            "Comprovação de renda",
            "Comprovação de residência",
            "Certidões negativas",
            "Comprovação de estado civil",
        ]),
        seller: lines(&[
            "Documentos pessoais (PF) ou empresariais (PJ)",
            "Comprovação de capacidade civil",
            "Certidões negativas",
        ]),
        property: lines(&[
            "Certidão de matrícula individualizada e atualizada",
            "IPTU",
            "Escritura ou contrato de compra e venda",
            "Planta aprovada (para construção)",
            "Licenciamento de obra (quando aplicável)",
        ]),
        fgts_specific: lines(&[
            "Comprovação de residência ou trabalho",
            "Extrato da conta vinculada FGTS",
            "Comprovação de tempo de trabalho sob regime FGTS",
        ]),
        pmcmv_specific: lines(&[
            "Documentação fator social",
            "Comprovação de renda familiar",
            "Declarações específicas do programa",
        ]),
    }
}

fn fees() -> Vec<FeeEntry> {
    vec![
        FeeEntry {
            key: "avaliacao",
            name: "Tarifa de Avaliação de Bens Recebidos em Garantia".to_string(),
            applies_to: "Todas as operações".to_string(),
            note: "Recolhimento obrigatório".to_string(),
        },
        FeeEntry {
            key: "tao",
            name: "TAO - Tarifa de Acompanhamento da Operação".to_string(),
            applies_to: "Construção FGTS/PMCMV".to_string(),
            note: "Acompanhamento de obras".to_string(),
        },
        FeeEntry {
            key: "reavaliacao",
            name: "Tarifa de Reavaliação de Bens Recebidos em Garantia".to_string(),
            applies_to: "SBPE".to_string(),
            note: "Quando necessária reavaliação".to_string(),
        },
        FeeEntry {
            key: "analise_seguro",
            name: "Tarifa para Análise de Apólice Individual de Seguros".to_string(),
            applies_to: "MIP, DFI e DFC".to_string(),
            note: "Análise de apólices individuais".to_string(),
        },
        FeeEntry {
            key: "administracao",
            name: "TA - Tarifa de Administração de Contrato".to_string(),
            applies_to: "Administração mensal do contrato".to_string(),
            note: "Periodicidade mensal".to_string(),
        },
        FeeEntry {
            key: "outros",
            name: "Outros custos".to_string(),
            applies_to: "Conforme a operação".to_string(),
            note: "IOF conforme legislação vigente; primeiros prêmios de seguro obrigatórios; despesas cartoriais (podem ser financiadas)".to_string(),
        },
    ]
}

fn compliance() -> Vec<ComplianceCheck> {
    vec![
        ComplianceCheck {
            key: "pld",
            name: "Prevenção à Lavagem de Dinheiro, ao Financiamento do Terrorismo e da Proliferação de Armas de Destruição em Massa".to_string(),
            requirement: "Verificação obrigatória em todas as operações".to_string(),
        },
        ComplianceCheck {
            key: "conflito_interesse",
            name: "Conflito de Interesse".to_string(),
            requirement: "Identificação de conflitos entre partes envolvidas".to_string(),
        },
        ComplianceCheck {
            key: "legitimidade",
            name: "Legitimidade da Contratação/Prestação de Serviços".to_string(),
            requirement: "Verificação da legitimidade da operação".to_string(),
        },
        ComplianceCheck {
            key: "pesquisas_cadastrais",
            name: "Realização das Pesquisas Cadastrais".to_string(),
            requirement: "Consultas obrigatórias antes da formalização".to_string(),
        },
        ComplianceCheck {
            key: "conformidade_proativa",
            name: "Conformidade Proativa".to_string(),
            requirement: "Obrigatória antes da formalização da contratação".to_string(),
        },
    ]
}

fn procedures() -> OperationalProcedures {
    OperationalProcedures {
        qualification: lines(&[
            "Oferta do produto adequado ao cliente",
            "Comunicação ao cliente",
            "Entrevista e constatação da renda",
            "Avaliação de risco do tomador",
            "Avaliação do imóvel",
            "Análise jurídica",
            "Análise de alçada",
        ]),
        formalization: lines(&[
            "Assinatura do contrato",
            "Registro do contrato",
            "Crédito dos recursos",
            "Conformidade do registro",
        ]),
        servicing: lines(&[
            "Cobrança do encargo mensal",
            "Acompanhamento de obras (construção)",
            "Gestão de garantias",
            "Atendimento ao cliente",
        ]),
    }
}

fn channels() -> Vec<ServiceChannel> {
    vec![
        ServiceChannel {
            key: "app",
            name: "APP Habitação CAIXA".to_string(),
            details: lines(&[
                "Simulação de financiamento",
                "Acompanhamento de proposta",
                "Formalização de contrato",
                "Consulta de saldo devedor",
            ]),
        },
        ServiceChannel {
            key: "siopi",
            name: "Sistema SIOPI".to_string(),
            details: lines(&[
                "Cadastramento e acompanhamento de propostas",
                "Acesso pela internet",
            ]),
        },
        ServiceChannel {
            key: "agencias",
            name: "Agências e Postos de Atendimento".to_string(),
            details: lines(&["Não é permitido encaminhamento para Agências Digitais"]),
        },
    ]
}
