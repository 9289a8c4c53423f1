use crate::analysis::{AnalysisMode, AnalysisReport};
use serde::{Deserialize, Serialize};

/// Commands accepted from the client over the session's duplex channel
#[derive(Debug, Clone)]
pub enum SessionCommand {
    /// Raw audio bytes for the recognizer. Dropped silently while the
    /// recognition stream is closed or mid-reconnect.
    SubmitAudio(Vec<u8>),

    /// End the stream and run the awaited final analysis
    EndStream,

    /// Change the coaching focus for subsequent analysis runs
    SetAnalysisMode(AnalysisMode),
}

/// Events produced for the client
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum SessionEvent {
    /// Finalized words were appended to the transcript
    TranscriptUpdate { text: String },

    /// Interim recognition hypothesis for real-time display
    InterimTranscript { text: String },

    /// Periodic best-effort report over the in-progress transcript
    LiveFeedback { report: AnalysisReport },

    /// The authoritative report computed at end-of-stream
    FinalAnalysis { report: AnalysisReport },

    /// Final analysis failed; no report will follow
    AnalysisError { message: String },

    /// Advisory recognition trouble; the stream self-heals and continues
    TranscriptionError { message: String },
}
