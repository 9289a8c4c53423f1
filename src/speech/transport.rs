use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// A transcribed word with start/end offsets in seconds relative to
/// stream start. Produced only by the recognition transport; ordering is
/// non-decreasing in `start_time` within a stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimedWord {
    pub text: String,
    pub start_time: f64,
    pub end_time: f64,
}

/// Configuration for a recognition stream
#[derive(Debug, Clone)]
pub struct RecognitionConfig {
    /// Sample rate of the incoming audio in Hz
    pub sample_rate: u32,
    /// Audio encoding label understood by the recognizer (e.g. "linear16")
    pub encoding: String,
    /// BCP-47 language code
    pub language_code: String,
    /// Request per-word start/end offsets
    pub word_time_offsets: bool,
    /// Request automatic punctuation in results
    pub automatic_punctuation: bool,
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            sample_rate: 16000,
            encoding: "linear16".to_string(),
            language_code: "en-US".to_string(),
            word_time_offsets: true,
            automatic_punctuation: true,
        }
    }
}

/// Asynchronous events emitted by an open recognition stream
#[derive(Debug, Clone)]
pub enum SpeechEvent {
    /// A finalized batch of words with timing offsets
    WordsFinalized(Vec<TimedWord>),
    /// An interim (non-final) hypothesis for real-time display
    Interim(String),
    /// The stream failed; it will not produce further results
    Error(String),
    /// The stream ended gracefully; all results have been flushed
    Ended,
}

/// Factory for recognition streams
#[async_trait]
pub trait SpeechTransport: Send + Sync {
    /// Open a recognition stream.
    ///
    /// Returns a write handle and the channel on which the stream's
    /// events are delivered.
    async fn open(
        &self,
        config: &RecognitionConfig,
    ) -> Result<(Box<dyn SpeechStream>, mpsc::Receiver<SpeechEvent>)>;
}

/// Write side of an open recognition stream
#[async_trait]
pub trait SpeechStream: Send + Sync {
    /// Forward raw audio bytes to the recognizer.
    ///
    /// Silently ignored once the stream is closed; never fails back to
    /// the caller.
    async fn write(&mut self, audio: &[u8]);

    /// End the stream gracefully, allowing already-in-flight results to
    /// flush. `SpeechEvent::Ended` is delivered once the flush is done.
    async fn close(&mut self);
}
