use std::env;
use std::time::Duration;

use once_cell::sync::Lazy;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::agents::AgentId;

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";

/// Generous cap so a hung backend cannot pin the composer forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

const GENERIC_BACKEND_ERROR: &str = "Ocorreu um erro na comunicação com o servidor.";

// One connection pool for the whole process; `AgentApi` handles are cheap
// clones over it.
static HTTP_CLIENT: Lazy<Client> = Lazy::new(Client::new);

#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with a non-success status. Carries the `detail`
    /// field of the error body when one was present.
    #[error("{0}")]
    Backend(String),
    /// No response was received at all.
    #[error("o servidor não respondeu")]
    Connectivity,
}

impl ApiError {
    /// Wording shown in the chat window; connectivity failures must read
    /// differently from backend errors.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Backend(detail) => {
                format!("Desculpe, não consegui processar sua mensagem. Motivo: {detail}")
            }
            ApiError::Connectivity => {
                "Não foi possível conectar ao servidor. Verifique se o backend está em execução."
                    .to_string()
            }
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
    session_id: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    response: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

#[derive(Clone)]
pub struct AgentApi {
    client: Client,
    base_url: String,
}

impl AgentApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: HTTP_CLIENT.clone(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Backend base URL from `MMDIREITO_BACKEND_URL`, defaulting to the local
    /// development server.
    pub fn from_env() -> Self {
        let base = env::var("MMDIREITO_BACKEND_URL")
            .unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());
        Self::new(base)
    }

    pub fn endpoint(&self, agent: AgentId) -> String {
        format!(
            "{}/agent/chat/{}",
            self.base_url,
            agent.descriptor().endpoint_path
        )
    }

    /// Send one user message for the given session and return the agent's
    /// reply text. A single, non-retried request.
    pub async fn send(
        &self,
        agent: AgentId,
        session_id: &str,
        message: &str,
    ) -> Result<String, ApiError> {
        let response = self
            .client
            .post(self.endpoint(agent))
            .timeout(REQUEST_TIMEOUT)
            .json(&ChatRequest {
                message,
                session_id,
            })
            .send()
            .await
            .map_err(|err| {
                warn!(agent = agent.as_str(), %err, "agent request failed to send");
                ApiError::Connectivity
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|err| {
            warn!(agent = agent.as_str(), %err, "agent response body unreadable");
            ApiError::Connectivity
        })?;

        if !status.is_success() {
            return Err(decode_error(status, &body));
        }
        decode_reply(&body)
    }
}

fn decode_reply(body: &str) -> Result<String, ApiError> {
    serde_json::from_str::<ChatResponse>(body)
        .map(|data| data.response)
        .map_err(|err| {
            warn!(%err, "agent reply body missing `response` field");
            ApiError::Backend(GENERIC_BACKEND_ERROR.to_string())
        })
}

fn decode_error(status: StatusCode, body: &str) -> ApiError {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.detail);
    match detail {
        Some(detail) if !detail.is_empty() => ApiError::Backend(detail),
        _ => {
            warn!(%status, "agent error body had no detail");
            ApiError::Backend(GENERIC_BACKEND_ERROR.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_use_the_per_agent_literal_paths() {
        let api = AgentApi::new("http://127.0.0.1:8000/");
        assert_eq!(
            api.endpoint(AgentId::ContractAnalyzer),
            "http://127.0.0.1:8000/agent/chat/contract-analyzer"
        );
        assert_eq!(
            api.endpoint(AgentId::DevilAdvocate),
            "http://127.0.0.1:8000/agent/chat/devil_advocate"
        );
        assert_eq!(
            api.endpoint(AgentId::AgenteCivil),
            "http://127.0.0.1:8000/agent/chat/agente_civil"
        );
        assert_eq!(
            api.endpoint(AgentId::AgentePenal),
            "http://127.0.0.1:8000/agent/chat/agente_penal"
        );
    }

    #[test]
    fn error_detail_is_surfaced_verbatim() {
        let err = decode_error(StatusCode::BAD_REQUEST, r#"{"detail":"Erro X"}"#);
        assert!(matches!(&err, ApiError::Backend(detail) if detail == "Erro X"));
        assert!(err.user_message().contains("Erro X"));
    }

    #[test]
    fn missing_detail_falls_back_to_generic_message() {
        for body in ["{}", "", "not json", r#"{"detail":""}"#] {
            let err = decode_error(StatusCode::INTERNAL_SERVER_ERROR, body);
            assert!(matches!(&err, ApiError::Backend(detail) if detail == GENERIC_BACKEND_ERROR));
        }
    }

    #[test]
    fn reply_body_yields_response_field() {
        let reply = decode_reply(r#"{"response":"Olá, advogado!"}"#).unwrap();
        assert_eq!(reply, "Olá, advogado!");
        assert!(decode_reply(r#"{"answer":"x"}"#).is_err());
    }

    #[test]
    fn connectivity_wording_differs_from_backend_wording() {
        let backend = ApiError::Backend("Erro X".to_string()).user_message();
        let connectivity = ApiError::Connectivity.user_message();
        assert_ne!(backend, connectivity);
        assert!(connectivity.contains("conectar"));
    }

    #[test]
    fn request_body_shape_matches_the_wire_contract() {
        let body = serde_json::to_value(ChatRequest {
            message: "Olá",
            session_id: "session_1_abc",
        })
        .unwrap();
        assert_eq!(body["message"], "Olá");
        assert_eq!(body["session_id"], "session_1_abc");
        assert_eq!(body.as_object().unwrap().len(), 2);
    }
}
