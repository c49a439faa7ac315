//! Static registry of the legal agent personas.
//!
//! Each agent carries its own literal endpoint path fragment. The backend
//! routes are not uniform (`contract_analyzer` is reached under a hyphenated
//! path, the others under their underscore ids), so the mapping is an explicit
//! per-agent table rather than anything derived from the id.

pub const DEFAULT_AGENT: AgentId = AgentId::ContractAnalyzer;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AgentId {
    ContractAnalyzer,
    DevilAdvocate,
    AgenteCivil,
    AgentePenal,
}

impl AgentId {
    pub const ALL: [AgentId; 4] = [
        AgentId::ContractAnalyzer,
        AgentId::DevilAdvocate,
        AgentId::AgenteCivil,
        AgentId::AgentePenal,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AgentId::ContractAnalyzer => "contract_analyzer",
            AgentId::DevilAdvocate => "devil_advocate",
            AgentId::AgenteCivil => "agente_civil",
            AgentId::AgentePenal => "agente_penal",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "contract_analyzer" => Some(AgentId::ContractAnalyzer),
            "devil_advocate" => Some(AgentId::DevilAdvocate),
            "agente_civil" => Some(AgentId::AgenteCivil),
            "agente_penal" => Some(AgentId::AgentePenal),
            _ => None,
        }
    }

    pub fn descriptor(self) -> &'static AgentDescriptor {
        match self {
            AgentId::ContractAnalyzer => &CONTRACT_ANALYZER,
            AgentId::DevilAdvocate => &DEVIL_ADVOCATE,
            AgentId::AgenteCivil => &AGENTE_CIVIL,
            AgentId::AgentePenal => &AGENTE_PENAL,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct AgentDescriptor {
    pub id: AgentId,
    pub name: &'static str,
    pub description: &'static str,
    /// Pre-formatted markup shown as the first agent message of a session.
    pub welcome_message: &'static str,
    pub has_file_upload: bool,
    /// Literal path fragment under `/agent/chat/`.
    pub endpoint_path: &'static str,
}

/// Resolve an agent id string to its descriptor. Unknown ids are never valid
/// session targets.
pub fn lookup(agent_id: &str) -> Option<&'static AgentDescriptor> {
    AgentId::parse(agent_id).map(AgentId::descriptor)
}

static CONTRACT_ANALYZER: AgentDescriptor = AgentDescriptor {
    id: AgentId::ContractAnalyzer,
    name: "Analisador de Contratos",
    description: "Faça upload de um contrato para análise de riscos e cláusulas.",
    welcome_message: r#"Olá! Sou seu especialista em análise de contratos. Minhas principais funções são:
<ul style="margin-top: 10px; padding-left: 20px;">
    <li>Analisar o contrato</li>
    <li>Identificar falhas e riscos</li>
    <li>Apontar oportunidades de melhoria</li>
    <li>Esclarecer dúvidas sobre cláusulas</li>
</ul>
<p style="margin-top: 10px;">Para começar, <strong>envie um arquivo (PDF ou DOCX)</strong>, cole o texto do contrato ou me faça uma pergunta.</p>"#,
    has_file_upload: true,
    endpoint_path: "contract-analyzer",
};

static DEVIL_ADVOCATE: AgentDescriptor = AgentDescriptor {
    id: AgentId::DevilAdvocate,
    name: "Advogado do Diabo",
    description: "Apresente sua tese ou petição para encontrar os pontos fracos.",
    welcome_message: r#"<p>Apresente sua tese, argumentação ou petição. Irei atuar como a oposição, buscando implacavelmente por falhas, lacunas e vulnerabilidades em sua estratégia.</p>
<p style="margin-top: 10px;">Meu objetivo é preparar você para os piores contra-argumentos. <strong>Cole sua tese abaixo para começar.</strong></p>"#,
    has_file_upload: false,
    endpoint_path: "devil_advocate",
};

static AGENTE_CIVIL: AgentDescriptor = AgentDescriptor {
    id: AgentId::AgenteCivil,
    name: "Agente Civil",
    description: "Especialista em Direito Civil brasileiro, incluindo contratos, responsabilidade civil, direitos reais e obrigações.",
    welcome_message: r#"<p>Olá! Sou seu assistente especializado no <strong>Código Civil Brasileiro</strong>.</p>
<p style="margin-top: 10px;">Posso ajudá-lo com questões sobre direito civil material, interpretação de artigos e aplicação das normas civis. Como posso auxiliá-lo hoje?</p>"#,
    has_file_upload: false,
    endpoint_path: "agente_civil",
};

static AGENTE_PENAL: AgentDescriptor = AgentDescriptor {
    id: AgentId::AgentePenal,
    name: "Agente Penal",
    description: "Especialista em Direito Penal e Processual Penal brasileiro, crimes, penas, procedimentos e execução penal.",
    welcome_message: r#"<p>Olá! Sou seu assistente especializado em Direito Penal e Processual Penal brasileiro.</p>
<p style="margin-top: 10px;">Posso ajudá-lo com questões sobre crimes, penas, procedimentos e execução penal. Como posso auxiliá-lo hoje?</p>"#,
    has_file_upload: false,
    endpoint_path: "agente_penal",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_resolves_all_known_ids() {
        for id in AgentId::ALL {
            let descriptor = lookup(id.as_str()).expect("known agent must resolve");
            assert_eq!(descriptor.id, id);
        }
    }

    #[test]
    fn lookup_rejects_unknown_ids() {
        assert!(lookup("agente_trabalhista").is_none());
        assert!(lookup("").is_none());
        assert!(lookup("contract-analyzer").is_none());
    }

    #[test]
    fn endpoint_paths_are_literal_per_agent() {
        assert_eq!(
            AgentId::ContractAnalyzer.descriptor().endpoint_path,
            "contract-analyzer"
        );
        assert_eq!(
            AgentId::DevilAdvocate.descriptor().endpoint_path,
            "devil_advocate"
        );
        assert_eq!(
            AgentId::AgenteCivil.descriptor().endpoint_path,
            "agente_civil"
        );
        assert_eq!(
            AgentId::AgentePenal.descriptor().endpoint_path,
            "agente_penal"
        );
    }

    #[test]
    fn only_contract_analyzer_accepts_files() {
        for id in AgentId::ALL {
            let expects = id == AgentId::ContractAnalyzer;
            assert_eq!(id.descriptor().has_file_upload, expects);
        }
    }
}
