use crate::followup::FollowupDetail;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Coaching focus selected by the client; applies to subsequent analysis
/// runs, not retroactively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    #[default]
    General,
    Teaching,
    Interview,
    Academic,
}

impl AnalysisMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisMode::General => "general",
            AnalysisMode::Teaching => "teaching",
            AnalysisMode::Interview => "interview",
            AnalysisMode::Academic => "academic",
        }
    }
}

/// One full analysis result, built fresh for each live or final trigger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub pacing: PacingReport,
    pub filler_words: FillerWordReport,
    pub pauses: PauseReport,
    pub readability: ReadabilityReport,
    pub sentiment: SentimentReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualitative_feedback: Option<QualitativeFeedback>,
    pub follow_up_questions: Vec<String>,
    pub follow_up_details: Vec<FollowupDetail>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PacingScore {
    TooSlow,
    Good,
    TooFast,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PacingReport {
    pub wpm: u32,
    pub score: PacingScore,
    pub feedback: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillerScore {
    Good,
    Okay,
    NeedsImprovement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillerWordReport {
    pub count: usize,
    /// Share of all words that are fillers, rounded to two decimals
    pub percentage: f64,
    /// Per-word occurrence counts, kept for diagnostic display
    pub words: BTreeMap<String, usize>,
    pub score: FillerScore,
    pub feedback: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PauseScore {
    Good,
    NeedsImprovement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PauseReport {
    pub long_pause_count: usize,
    pub score: PauseScore,
    pub feedback: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadabilityScore {
    Simple,
    Good,
    Moderate,
    Complex,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityReport {
    /// Approximate SMOG index, rounded to one decimal
    pub smog_index: f64,
    pub polysyllable_count: usize,
    pub sentence_count: usize,
    pub score: ReadabilityScore,
    pub feedback: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentScore {
    Negative,
    Neutral,
    Positive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentReport {
    /// Lexicon polarity in [-1, 1]; 0 when no sentiment words were found
    pub polarity: f64,
    pub score: SentimentScore,
    pub feedback: String,
}

/// Where the qualitative paragraph came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackSource {
    /// Generated by the text-generation backend
    Model,
    /// Backend failed or returned nothing; text is a labeled fallback
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualitativeFeedback {
    pub text: String,
    pub source: FeedbackSource,
}
