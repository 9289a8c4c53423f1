use crate::analysis::AnalysisMode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, AtomicU8, AtomicUsize, Ordering};

/// Statistics snapshot for one analysis session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStats {
    /// Whether a recognition stream is currently open
    pub streaming: bool,

    /// When the session was established
    pub started_at: DateTime<Utc>,

    /// Seconds since the session was established
    pub duration_secs: f64,

    /// Words accumulated in the transcript so far
    pub word_count: usize,

    /// Coaching focus currently in effect
    pub analysis_mode: AnalysisMode,
}

/// Live counters shared between a running session and the HTTP registry
#[derive(Debug)]
pub struct SessionTracker {
    started_at: DateTime<Utc>,
    streaming: AtomicBool,
    word_count: AtomicUsize,
    mode: AtomicU8,
}

impl SessionTracker {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            streaming: AtomicBool::new(false),
            word_count: AtomicUsize::new(0),
            mode: AtomicU8::new(mode_to_u8(AnalysisMode::default())),
        }
    }

    pub fn set_streaming(&self, streaming: bool) {
        self.streaming.store(streaming, Ordering::SeqCst);
    }

    pub fn set_word_count(&self, count: usize) {
        self.word_count.store(count, Ordering::SeqCst);
    }

    pub fn set_mode(&self, mode: AnalysisMode) {
        self.mode.store(mode_to_u8(mode), Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> SessionStats {
        let duration = Utc::now().signed_duration_since(self.started_at);

        SessionStats {
            streaming: self.streaming.load(Ordering::SeqCst),
            started_at: self.started_at,
            duration_secs: duration.num_milliseconds() as f64 / 1000.0,
            word_count: self.word_count.load(Ordering::SeqCst),
            analysis_mode: mode_from_u8(self.mode.load(Ordering::SeqCst)),
        }
    }
}

impl Default for SessionTracker {
    fn default() -> Self {
        Self::new()
    }
}

fn mode_to_u8(mode: AnalysisMode) -> u8 {
    match mode {
        AnalysisMode::General => 0,
        AnalysisMode::Teaching => 1,
        AnalysisMode::Interview => 2,
        AnalysisMode::Academic => 3,
    }
}

fn mode_from_u8(value: u8) -> AnalysisMode {
    match value {
        1 => AnalysisMode::Teaching,
        2 => AnalysisMode::Interview,
        3 => AnalysisMode::Academic,
        _ => AnalysisMode::General,
    }
}
