use crate::speech::RecognitionConfig;
use std::time::Duration;

/// Configuration for one analysis session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Unique session identifier (e.g. "session-2026-08-06-demo")
    pub session_id: String,

    /// Minimum wall-clock gap between live feedback reports
    /// Default: 5 seconds
    pub live_feedback_interval: Duration,

    /// Fixed delay before reopening a failed recognition stream
    /// Default: 1 second
    pub reconnect_delay: Duration,

    /// Follow-up questions requested for live reports
    pub live_question_total: usize,

    /// Follow-up questions requested for the final report
    pub final_question_total: usize,

    /// Recognition stream settings passed to the transport
    pub recognition: RecognitionConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session_id: format!("session-{}", uuid::Uuid::new_v4()),
            live_feedback_interval: Duration::from_secs(5),
            reconnect_delay: Duration::from_secs(1),
            live_question_total: 6,
            final_question_total: 8,
            recognition: RecognitionConfig::default(),
        }
    }
}
