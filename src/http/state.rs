use crate::llm::TextGeneration;
use crate::session::{SessionConfig, SessionTracker};
use crate::speech::SpeechTransport;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Active sessions (session_id → live counters)
    pub sessions: Arc<RwLock<HashMap<String, Arc<SessionTracker>>>>,

    /// Recognition transport shared by all sessions
    pub transport: Arc<dyn SpeechTransport>,

    /// Text-generation backend shared by all sessions
    pub generation: Arc<dyn TextGeneration>,

    /// Template for per-connection session configs; the session id is
    /// replaced with a fresh one on each connection
    pub session_config: SessionConfig,
}

impl AppState {
    pub fn new(
        transport: Arc<dyn SpeechTransport>,
        generation: Arc<dyn TextGeneration>,
        session_config: SessionConfig,
    ) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            transport,
            generation,
            session_config,
        }
    }
}
