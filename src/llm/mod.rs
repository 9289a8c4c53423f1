//! Text-generation capability
//!
//! Used for the qualitative coaching paragraph and for follow-up question
//! phrasing. The backend is an opaque request/response service that can
//! fail or be unavailable; callers are expected to degrade to labeled
//! fallbacks rather than propagate these errors.

mod openai;

pub use openai::OpenAiGeneration;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("generation request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("generation API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("malformed generation response: {0}")]
    MalformedResponse(String),
}

/// Knobs for a single completion request
#[derive(Debug, Clone, Copy)]
pub struct GenerationOptions {
    pub temperature: f32,
    pub max_tokens: u32,
    /// Ask the backend to return a JSON object
    pub structured: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            temperature: 0.4,
            max_tokens: 800,
            structured: false,
        }
    }
}

/// Stateless request/response text generation; safe to share across
/// concurrent sessions.
#[async_trait]
pub trait TextGeneration: Send + Sync {
    async fn complete(
        &self,
        system: &str,
        user: &str,
        options: GenerationOptions,
    ) -> Result<String, GenerationError>;
}
