//! HTTP transport to the agent backend.
//!
//! Every chat turn is a single POST to `/agent/chat/{agent-path}` carrying the
//! session id and the user message. Backend failures and connectivity
//! failures are reported as distinct error variants so the chat surface can
//! word them differently.

mod client;

pub use client::{AgentApi, ApiError, DEFAULT_BACKEND_URL};
