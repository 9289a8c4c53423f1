use super::config::SessionConfig;
use super::events::{SessionCommand, SessionEvent};
use super::stats::SessionTracker;
use crate::analysis::{coaching_feedback, AnalysisMode, AnalysisReport, TranscriptAnalyzer};
use crate::followup::FollowupGenerator;
use crate::llm::TextGeneration;
use crate::speech::{SpeechEvent, SpeechStream, SpeechTransport, TimedWord};
use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{error, info, warn};

/// Per-connection orchestrator for live transcript analysis.
///
/// Owns the recognition-stream lifecycle, accumulates finalized words into
/// the session transcript, gates live analysis on a wall-clock interval,
/// and runs the awaited final analysis at end-of-stream. One session per
/// connection; no state is shared across sessions.
pub struct PresentationSession {
    config: SessionConfig,
    transport: Arc<dyn SpeechTransport>,
    generation: Arc<dyn TextGeneration>,
    tracker: Arc<SessionTracker>,
    events: mpsc::Sender<SessionEvent>,

    transcript: Vec<TimedWord>,
    mode: AnalysisMode,
    /// Words have arrived since the last live report was launched
    words_pending: bool,
    stream: Option<Box<dyn SpeechStream>>,
    speech_events: Option<mpsc::Receiver<SpeechEvent>>,
    reconnect_at: Option<Instant>,
    live_task: Option<JoinHandle<()>>,
}

impl PresentationSession {
    pub fn new(
        config: SessionConfig,
        transport: Arc<dyn SpeechTransport>,
        generation: Arc<dyn TextGeneration>,
        tracker: Arc<SessionTracker>,
        events: mpsc::Sender<SessionEvent>,
    ) -> Self {
        Self {
            config,
            transport,
            generation,
            tracker,
            events,
            transcript: Vec::new(),
            mode: AnalysisMode::default(),
            words_pending: false,
            stream: None,
            speech_events: None,
            reconnect_at: None,
            live_task: None,
        }
    }

    /// Drive the session until the command channel closes (client
    /// disconnect). The recognition stream is opened on entry and
    /// re-opened after transport failures; the transcript survives
    /// reconnects and is cleared only at end-of-stream or disconnect.
    pub async fn run(mut self, mut commands: mpsc::Receiver<SessionCommand>) {
        info!("session {} started", self.config.session_id);

        if let Err(e) = self.open_stream().await {
            error!("failed to open recognition stream: {:#}", e);
            self.schedule_reconnect();
        }

        // The live gate is a periodic timer rather than a timestamp check
        // on every word event; an analysis pass outlasting the period
        // delays the next tick instead of bursting.
        let period = self.config.live_feedback_interval.max(Duration::from_millis(1));
        let mut feedback_timer = tokio::time::interval(period);
        feedback_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                cmd = commands.recv() => match cmd {
                    Some(SessionCommand::SubmitAudio(bytes)) => self.submit_audio(&bytes).await,
                    Some(SessionCommand::SetAnalysisMode(mode)) => {
                        info!("analysis mode set to {}", mode.as_str());
                        self.mode = mode;
                        self.tracker.set_mode(mode);
                    }
                    Some(SessionCommand::EndStream) => self.finalize().await,
                    None => break,
                },
                event = next_speech_event(&mut self.speech_events) => match event {
                    Some(event) => self.handle_speech_event(event).await,
                    None => {
                        warn!("recognition event stream closed unexpectedly");
                        self.stream = None;
                        self.speech_events = None;
                        self.schedule_reconnect();
                    }
                },
                _ = feedback_timer.tick() => self.maybe_trigger_live_analysis(),
                _ = wait_until(self.reconnect_at) => {
                    self.reconnect_at = None;
                    if let Err(e) = self.open_stream().await {
                        error!("recognition stream reopen failed: {:#}", e);
                        self.schedule_reconnect();
                    }
                }
            }
        }

        self.teardown().await;
    }

    /// Forward audio to the recognizer.
    ///
    /// Audio arriving while the stream is closed or mid-reconnect is
    /// dropped rather than buffered; this is a documented gap inherited
    /// from the reference behavior, not a retry point.
    async fn submit_audio(&mut self, bytes: &[u8]) {
        if let Some(stream) = self.stream.as_mut() {
            stream.write(bytes).await;
        }
    }

    async fn open_stream(&mut self) -> Result<()> {
        let (stream, events) = self.transport.open(&self.config.recognition).await?;
        self.stream = Some(stream);
        self.speech_events = Some(events);
        self.tracker.set_streaming(true);
        info!("recognition stream open for session {}", self.config.session_id);
        Ok(())
    }

    fn schedule_reconnect(&mut self) {
        self.tracker.set_streaming(false);
        self.reconnect_at = Some(Instant::now() + self.config.reconnect_delay);
    }

    async fn handle_speech_event(&mut self, event: SpeechEvent) {
        match event {
            SpeechEvent::WordsFinalized(words) => {
                if words.is_empty() {
                    return;
                }

                let text = words
                    .iter()
                    .map(|w| w.text.as_str())
                    .collect::<Vec<_>>()
                    .join(" ");

                self.transcript.extend(words);
                self.tracker.set_word_count(self.transcript.len());
                self.words_pending = true;
                self.emit(SessionEvent::TranscriptUpdate { text }).await;
            }
            SpeechEvent::Interim(text) => {
                if !text.trim().is_empty() {
                    self.emit(SessionEvent::InterimTranscript { text }).await;
                }
            }
            SpeechEvent::Error(cause) => {
                warn!("recognition stream error: {}; reconnecting", cause);
                self.emit(SessionEvent::TranscriptionError {
                    message: "Speech recognition interrupted; reconnecting.".to_string(),
                })
                .await;
                self.stream = None;
                self.speech_events = None;
                self.schedule_reconnect();
            }
            SpeechEvent::Ended => {
                // An end we did not request means the recognizer went away
                warn!("recognition stream ended upstream; reconnecting");
                self.stream = None;
                self.speech_events = None;
                self.schedule_reconnect();
            }
        }
    }

    /// Launch a live analysis over the current transcript snapshot when
    /// the gate fires. At most one live task is in flight per session; a
    /// tick firing while one runs is a no-op (dropped, not queued). The
    /// task never blocks ingestion of further audio or words.
    fn maybe_trigger_live_analysis(&mut self) {
        if !self.words_pending || self.transcript.is_empty() {
            return;
        }

        if let Some(task) = &self.live_task {
            if !task.is_finished() {
                return;
            }
        }

        let snapshot = self.transcript.clone();
        let generation = Arc::clone(&self.generation);
        let events = self.events.clone();
        let mode = self.mode;
        let total = self.config.live_question_total;

        self.live_task = Some(tokio::spawn(async move {
            let report = build_report(&snapshot, generation, mode, total).await;
            match report {
                Ok(report) => {
                    // Ignored if the session is already gone
                    let _ = events.send(SessionEvent::LiveFeedback { report }).await;
                }
                Err(e) => warn!("live analysis failed: {:#}", e),
            }
        }));

        self.words_pending = false;
    }

    /// End-of-stream: close the transport gracefully, flush remaining
    /// word events, then run the final analysis. The session is not
    /// considered closed until the final report (or its failure) has
    /// been emitted.
    async fn finalize(&mut self) {
        info!("end of stream for session {}; running final analysis", self.config.session_id);
        self.reconnect_at = None;
        self.tracker.set_streaming(false);

        if let Some(mut stream) = self.stream.take() {
            stream.close().await;
        }

        if let Some(mut events) = self.speech_events.take() {
            while let Some(event) = events.recv().await {
                match event {
                    SpeechEvent::WordsFinalized(words) if !words.is_empty() => {
                        let text = words
                            .iter()
                            .map(|w| w.text.as_str())
                            .collect::<Vec<_>>()
                            .join(" ");
                        self.transcript.extend(words);
                        self.tracker.set_word_count(self.transcript.len());
                        self.emit(SessionEvent::TranscriptUpdate { text }).await;
                    }
                    SpeechEvent::Ended => break,
                    _ => {}
                }
            }
        }

        if self.transcript.is_empty() {
            self.emit(SessionEvent::AnalysisError {
                message: "No transcript was generated to analyze.".to_string(),
            })
            .await;
        } else {
            let result = build_report(
                &self.transcript,
                Arc::clone(&self.generation),
                self.mode,
                self.config.final_question_total,
            )
            .await;

            match result {
                Ok(report) => self.emit(SessionEvent::FinalAnalysis { report }).await,
                Err(e) => {
                    error!("final analysis failed: {:#}", e);
                    self.emit(SessionEvent::AnalysisError {
                        message: "Failed to analyze the presentation.".to_string(),
                    })
                    .await;
                }
            }
        }

        // Clear for the next stream on this connection
        self.transcript.clear();
        self.words_pending = false;
        self.tracker.set_word_count(0);
    }

    /// Disconnect: discard all state. A live-analysis task still in
    /// flight is aborted so its result is never delivered to the closed
    /// channel.
    async fn teardown(mut self) {
        if let Some(task) = self.live_task.take() {
            task.abort();
        }
        if let Some(mut stream) = self.stream.take() {
            stream.close().await;
        }
        self.transcript.clear();
        self.tracker.set_streaming(false);
        info!("session {} closed", self.config.session_id);
    }

    async fn emit(&self, event: SessionEvent) {
        // Send failures mean the client is gone; nothing to do
        let _ = self.events.send(event).await;
    }
}

/// Full analysis over one snapshot: deterministic metrics, qualitative
/// coaching paragraph, and LLM-backed follow-up questions with fallback.
async fn build_report(
    snapshot: &[TimedWord],
    generation: Arc<dyn TextGeneration>,
    mode: AnalysisMode,
    question_total: usize,
) -> Result<AnalysisReport> {
    let analyzer = TranscriptAnalyzer::new(snapshot)?;
    let mut report = analyzer.run_full_analysis();

    report.qualitative_feedback =
        Some(coaching_feedback(generation.as_ref(), analyzer.full_text(), mode).await);

    let followups = FollowupGenerator::new(generation)
        .generate(snapshot, mode, question_total)
        .await;
    if !followups.questions.is_empty() {
        report.follow_up_questions = followups.questions;
        report.follow_up_details = followups.details;
    }

    Ok(report)
}

/// Next event from the recognition stream, or never when no stream is
/// open (keeps the branch inert in the session's select loop).
async fn next_speech_event(events: &mut Option<mpsc::Receiver<SpeechEvent>>) -> Option<SpeechEvent> {
    match events {
        Some(events) => events.recv().await,
        None => std::future::pending().await,
    }
}

/// Sleep until the reconnect deadline, or never when none is scheduled.
async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
