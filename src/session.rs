//! Chat session state: the active agent and its correlation token.
//!
//! The session id is regenerated on every agent switch so the backend treats
//! each switch as a brand-new conversation. Nothing here is persisted across
//! restarts.

use rand::Rng;
use time::OffsetDateTime;
use tracing::info;

use crate::agents::{AgentId, DEFAULT_AGENT};

const SESSION_SUFFIX_LEN: usize = 7;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub id: String,
    pub agent: AgentId,
}

/// Outcome of [`SessionController::switch_agent`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// The requested agent was already active with a live session; history and
    /// session id are untouched.
    Unchanged,
    /// A new session was started for the (possibly same-named) agent. The
    /// caller is expected to clear the display and emit the welcome message.
    Switched(Session),
}

#[derive(Clone, Debug, Default)]
pub struct SessionController {
    session: Option<Session>,
}

impl SessionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Resolve `requested` against the registry, falling back to the default
    /// agent when absent or invalid, and start a fresh session for it.
    pub fn initialize(&mut self, requested: Option<&str>) -> &Session {
        let agent = requested
            .and_then(AgentId::parse)
            .unwrap_or(DEFAULT_AGENT);
        self.start_session(agent)
    }

    /// Switch to `agent`. Re-selecting the active agent with a live session is
    /// a no-op so an accidental click does not wipe the conversation.
    pub fn switch_agent(&mut self, agent: AgentId) -> SwitchOutcome {
        if let Some(session) = &self.session
            && session.agent == agent
        {
            return SwitchOutcome::Unchanged;
        }
        SwitchOutcome::Switched(self.start_session(agent).clone())
    }

    fn start_session(&mut self, agent: AgentId) -> &Session {
        let id = generate_session_id();
        info!(agent = agent.as_str(), session_id = %id, "starting chat session");
        self.session.insert(Session { id, agent })
    }
}

/// `session_<unix-millis>_<7 base36 chars>`; practically unique per call.
fn generate_session_id() -> String {
    let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
    let mut rng = rand::thread_rng();
    let suffix: String = (0..SESSION_SUFFIX_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    format!("session_{millis}_{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_falls_back_to_default_agent() {
        let mut controller = SessionController::new();
        assert_eq!(controller.initialize(None).agent, AgentId::ContractAnalyzer);
        assert_eq!(
            controller.initialize(Some("not_an_agent")).agent,
            AgentId::ContractAnalyzer
        );
        assert_eq!(
            controller.initialize(Some("agente_penal")).agent,
            AgentId::AgentePenal
        );
    }

    #[test]
    fn session_id_has_expected_shape() {
        let id = generate_session_id();
        let mut parts = id.splitn(3, '_');
        assert_eq!(parts.next(), Some("session"));
        let millis = parts.next().expect("timestamp part");
        assert!(millis.chars().all(|c| c.is_ascii_digit()));
        let suffix = parts.next().expect("random part");
        assert_eq!(suffix.len(), SESSION_SUFFIX_LEN);
        assert!(suffix.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn switching_agents_regenerates_the_session_id() {
        let mut controller = SessionController::new();
        let first = controller.initialize(None).id.clone();
        match controller.switch_agent(AgentId::AgenteCivil) {
            SwitchOutcome::Switched(session) => {
                assert_ne!(session.id, first);
                assert_eq!(session.agent, AgentId::AgenteCivil);
            }
            SwitchOutcome::Unchanged => panic!("expected a new session"),
        }
    }

    #[test]
    fn reselecting_the_active_agent_is_a_noop() {
        let mut controller = SessionController::new();
        let first = controller.initialize(None).id.clone();
        assert_eq!(
            controller.switch_agent(AgentId::ContractAnalyzer),
            SwitchOutcome::Unchanged
        );
        assert_eq!(controller.session().unwrap().id, first);
    }

    #[test]
    fn switch_on_empty_controller_starts_a_session() {
        let mut controller = SessionController::new();
        match controller.switch_agent(AgentId::DevilAdvocate) {
            SwitchOutcome::Switched(session) => {
                assert_eq!(session.agent, AgentId::DevilAdvocate)
            }
            SwitchOutcome::Unchanged => panic!("expected a session to start"),
        }
    }
}
