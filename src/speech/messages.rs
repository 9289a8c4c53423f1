use super::transport::TimedWord;
use serde::{Deserialize, Serialize};

/// Audio frame published to the recognizer
#[derive(Debug, Serialize, Deserialize)]
pub struct AudioFrameMessage {
    pub stream_id: String,
    pub sequence: u32,
    pub audio: String, // Base64-encoded audio bytes
    pub sample_rate: u32,
    pub encoding: String,
    pub language_code: String,
    pub word_time_offsets: bool,
    pub automatic_punctuation: bool,
    #[serde(rename = "final")]
    pub final_frame: bool,
}

/// Recognition result received from the recognizer
///
/// Interim hypotheses carry `partial = true` with the running `text`;
/// finalized results carry `words` with per-word offsets. A recognizer
/// failure arrives as `error`, and `ended` marks the graceful end of the
/// stream after a final frame has been processed.
#[derive(Debug, Serialize, Deserialize)]
pub struct WordEventMessage {
    pub stream_id: String,
    #[serde(default)]
    pub partial: bool,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub words: Vec<TimedWord>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub ended: bool,
}
