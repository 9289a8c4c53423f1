use super::messages::{AudioFrameMessage, WordEventMessage};
use super::transport::{RecognitionConfig, SpeechEvent, SpeechStream, SpeechTransport};
use anyhow::{Context, Result};
use async_nats::Client;
use async_trait::async_trait;
use base64::Engine;
use futures::StreamExt;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tracing::{info, warn};

/// How long to keep draining recognizer results after a graceful close
const FLUSH_GRACE: Duration = Duration::from_millis(500);

/// NATS-backed speech-recognition transport.
///
/// Audio frames are published to `speech.audio.<stream>`; the recognizer
/// publishes word events on `speech.words.<stream>`. A background task
/// pumps those events into the typed channel handed out by `open`.
pub struct NatsSpeechTransport {
    client: Client,
}

impl NatsSpeechTransport {
    /// Connect to the NATS server backing the recognizer
    pub async fn connect(url: &str) -> Result<Self> {
        info!("Connecting to NATS at {}", url);

        let client = async_nats::connect(url)
            .await
            .context("Failed to connect to NATS")?;

        info!("Connected to NATS successfully");

        Ok(Self { client })
    }
}

#[async_trait]
impl SpeechTransport for NatsSpeechTransport {
    async fn open(
        &self,
        config: &RecognitionConfig,
    ) -> Result<(Box<dyn SpeechStream>, mpsc::Receiver<SpeechEvent>)> {
        let stream_id = uuid::Uuid::new_v4().to_string();
        let words_subject = format!("speech.words.{}", stream_id);

        let subscriber = self
            .client
            .subscribe(words_subject)
            .await
            .context("Failed to subscribe to recognizer results")?;

        let (event_tx, event_rx) = mpsc::channel(64);
        let (closed_tx, closed_rx) = oneshot::channel();

        tokio::spawn(pump_events(
            subscriber,
            stream_id.clone(),
            event_tx,
            closed_rx,
        ));

        info!("Opened recognition stream {}", stream_id);

        let stream = NatsSpeechStream {
            client: self.client.clone(),
            audio_subject: format!("speech.audio.{}", stream_id),
            stream_id,
            config: config.clone(),
            sequence: 0,
            open: true,
            closed_tx: Some(closed_tx),
        };

        Ok((Box::new(stream), event_rx))
    }
}

/// Write handle for one recognition stream
struct NatsSpeechStream {
    client: Client,
    audio_subject: String,
    stream_id: String,
    config: RecognitionConfig,
    sequence: u32,
    open: bool,
    closed_tx: Option<oneshot::Sender<()>>,
}

impl NatsSpeechStream {
    fn frame(&self, audio: &[u8], final_frame: bool) -> AudioFrameMessage {
        AudioFrameMessage {
            stream_id: self.stream_id.clone(),
            sequence: self.sequence,
            audio: base64::engine::general_purpose::STANDARD.encode(audio),
            sample_rate: self.config.sample_rate,
            encoding: self.config.encoding.clone(),
            language_code: self.config.language_code.clone(),
            word_time_offsets: self.config.word_time_offsets,
            automatic_punctuation: self.config.automatic_punctuation,
            final_frame,
        }
    }

    async fn publish_frame(&self, frame: &AudioFrameMessage) {
        let payload = match serde_json::to_vec(frame) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Failed to encode audio frame: {}", e);
                return;
            }
        };

        if let Err(e) = self
            .client
            .publish(self.audio_subject.clone(), payload.into())
            .await
        {
            warn!("Failed to publish audio frame: {}", e);
        }
    }
}

#[async_trait]
impl SpeechStream for NatsSpeechStream {
    async fn write(&mut self, audio: &[u8]) {
        if !self.open {
            return;
        }

        let frame = self.frame(audio, false);
        self.sequence += 1;
        self.publish_frame(&frame).await;
    }

    async fn close(&mut self) {
        if !self.open {
            return;
        }
        self.open = false;

        // The final marker lets the recognizer flush its last results
        let frame = self.frame(&[], true);
        self.publish_frame(&frame).await;

        if let Some(tx) = self.closed_tx.take() {
            let _ = tx.send(());
        }

        info!("Closed recognition stream {}", self.stream_id);
    }
}

/// Pump recognizer messages into the stream's typed event channel.
///
/// Runs until the recognizer signals the end of the stream, the
/// subscription drops, or the event receiver goes away. A graceful close
/// keeps draining for a short grace period so in-flight final results
/// still reach the session.
async fn pump_events(
    mut subscriber: async_nats::Subscriber,
    stream_id: String,
    events: mpsc::Sender<SpeechEvent>,
    mut closed: oneshot::Receiver<()>,
) {
    loop {
        tokio::select! {
            maybe = subscriber.next() => match maybe {
                Some(msg) => {
                    if !dispatch(&msg.payload, &stream_id, &events).await {
                        return;
                    }
                }
                None => {
                    let _ = events.send(SpeechEvent::Ended).await;
                    return;
                }
            },
            _ = &mut closed => {
                let deadline = tokio::time::Instant::now() + FLUSH_GRACE;
                loop {
                    match tokio::time::timeout_at(deadline, subscriber.next()).await {
                        Ok(Some(msg)) => {
                            if !dispatch(&msg.payload, &stream_id, &events).await {
                                return;
                            }
                        }
                        Ok(None) | Err(_) => break,
                    }
                }
                let _ = events.send(SpeechEvent::Ended).await;
                return;
            }
        }
    }
}

/// Translate one recognizer message into a `SpeechEvent`.
///
/// Returns false when pumping should stop (stream ended or the session
/// dropped its receiver).
async fn dispatch(payload: &[u8], stream_id: &str, events: &mpsc::Sender<SpeechEvent>) -> bool {
    let msg: WordEventMessage = match serde_json::from_slice(payload) {
        Ok(msg) => msg,
        Err(e) => {
            warn!("Failed to parse recognizer message: {}", e);
            return true;
        }
    };

    // Subjects are per-stream; ignore results addressed to any other stream
    if msg.stream_id != stream_id {
        return true;
    }

    if msg.ended {
        let _ = events.send(SpeechEvent::Ended).await;
        return false;
    }

    let event = if let Some(cause) = msg.error {
        SpeechEvent::Error(cause)
    } else if msg.partial {
        SpeechEvent::Interim(msg.text)
    } else if !msg.words.is_empty() {
        SpeechEvent::WordsFinalized(msg.words)
    } else {
        return true;
    };

    events.send(event).await.is_ok()
}
