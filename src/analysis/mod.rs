//! Transcript metrics engine
//!
//! Pure, deterministic analysis over an ordered word-timestamp sequence:
//! pacing, filler-word density, pause analysis, readability, sentiment,
//! and a deterministic keyword fallback for follow-up questions. The
//! `coaching` submodule adds the LLM-backed qualitative paragraph, which
//! degrades to a labeled fallback when the backend is unavailable.

mod analyzer;
mod coaching;
mod lexicon;
mod readability;
mod report;

pub use analyzer::{AnalysisError, TranscriptAnalyzer};
pub use coaching::{coaching_feedback, coaching_prompt};
pub use report::{
    AnalysisMode, AnalysisReport, FeedbackSource, FillerScore, FillerWordReport, PacingReport,
    PacingScore, PauseReport, PauseScore, QualitativeFeedback, ReadabilityReport,
    ReadabilityScore, SentimentReport, SentimentScore,
};
