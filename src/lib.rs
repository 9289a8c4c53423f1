pub mod analysis;
pub mod config;
pub mod followup;
pub mod http;
pub mod llm;
pub mod session;
pub mod speech;

pub use analysis::{
    AnalysisError, AnalysisMode, AnalysisReport, QualitativeFeedback, TranscriptAnalyzer,
};
pub use config::Config;
pub use followup::{FollowupGenerator, FollowupSet, FollowupWindow};
pub use http::{create_router, AppState};
pub use llm::{GenerationError, GenerationOptions, OpenAiGeneration, TextGeneration};
pub use session::{
    PresentationSession, SessionCommand, SessionConfig, SessionEvent, SessionStats, SessionTracker,
};
pub use speech::{
    NatsSpeechTransport, RecognitionConfig, SpeechEvent, SpeechStream, SpeechTransport, TimedWord,
};
