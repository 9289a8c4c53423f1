use super::windows::{chunk_windows, single_window, FollowupWindow, WINDOW_MAX_CHARS, WINDOW_SECS};
use crate::analysis::AnalysisMode;
use crate::llm::{GenerationOptions, TextGeneration};
use crate::speech::TimedWord;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::warn;

/// Cap on how many windows are sent in one generation request
const MAX_WINDOWS: usize = 60;

const SYSTEM_PROMPT: &str = "You are an expert presentation coach. Produce incisive follow-up questions grounded in the presenter's words.";

const GENERAL_PRESET: &str = "Write a few probing, respectful questions that:
- Clarify assumptions/definitions/scope
- Pressure-test evidence, metrics, and tradeoffs
- Identify risks/unknowns/stakeholders
- Drive next steps and accountability
Keep each under 18 words. Limit to 5 questions at most.";

const TEACHING_PRESET: &str = "Write a few learner-centered questions that:
- Elicit reasoning and misconceptions
- Connect concepts to examples and edge cases
- Scaffold reflection and self-explanation
Keep each under 18 words. Limit to 5 questions at most.";

const INTERVIEW_PRESET: &str = "Write a few interviewer-style questions that:
- Probe impact, decisions, constraints, and alternatives
- Ask for quantification and personal contribution
- Surface failure modes and next steps
Keep each under 18 words. Limit to 5 questions at most.";

const FALLBACK_QUESTIONS: &[&str] = &[
    "What key assumption underlies your approach?",
    "Which risks could derail this plan?",
    "What evidence supports your main claim?",
    "How would this scale or fail at 10\u{00d7}?",
    "Whose perspective is missing here?",
    "What are your next measurable steps?",
];

/// Time-range anchor tying a question back to a transcript window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionAnchor {
    #[serde(rename = "windowIndex")]
    pub window_index: usize,
    pub start: f64,
    pub end: f64,
}

/// One generated question with its metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowupDetail {
    pub text: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default, rename = "why", skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
    #[serde(default)]
    pub anchor: Option<QuestionAnchor>,
}

/// Result of one generation run: plain question texts for display plus
/// the rich per-question metadata when the backend produced any.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FollowupSet {
    pub questions: Vec<String>,
    pub details: Vec<FollowupDetail>,
}

#[derive(Debug, Deserialize)]
struct QuestionsEnvelope {
    #[serde(default)]
    questions: Vec<FollowupDetail>,
}

/// LLM-backed follow-up question generator with a static fallback.
pub struct FollowupGenerator {
    generation: Arc<dyn TextGeneration>,
}

impl FollowupGenerator {
    pub fn new(generation: Arc<dyn TextGeneration>) -> Self {
        Self { generation }
    }

    /// Generate up to `total` questions grounded in the timed transcript.
    pub async fn generate(
        &self,
        transcript: &[TimedWord],
        mode: AnalysisMode,
        total: usize,
    ) -> FollowupSet {
        let mut windows = chunk_windows(transcript, WINDOW_SECS, WINDOW_MAX_CHARS);
        windows.truncate(MAX_WINDOWS);
        self.generate_for_windows(&windows, mode, total).await
    }

    /// Generate from raw untimed text, treated as a single window.
    pub async fn generate_from_text(
        &self,
        text: &str,
        mode: AnalysisMode,
        total: usize,
    ) -> FollowupSet {
        if text.trim().is_empty() {
            return FollowupSet::default();
        }
        let windows = vec![single_window(text)];
        self.generate_for_windows(&windows, mode, total).await
    }

    async fn generate_for_windows(
        &self,
        windows: &[FollowupWindow],
        mode: AnalysisMode,
        total: usize,
    ) -> FollowupSet {
        if windows.is_empty() {
            return FollowupSet::default();
        }

        let prompt = build_prompt(windows, mode, total);
        let options = GenerationOptions {
            temperature: 0.4,
            max_tokens: 800,
            structured: true,
        };

        let raw = match self
            .generation
            .complete(SYSTEM_PROMPT, &prompt, options)
            .await
        {
            Ok(raw) => raw,
            Err(e) => {
                warn!("follow-up generation failed: {}", e);
                return fallback_set(total);
            }
        };

        match parse_questions(&raw) {
            Some(rich) => postprocess(rich, total),
            None => {
                warn!("follow-up generation returned an unparseable response");
                fallback_set(total)
            }
        }
    }
}

fn preset(mode: AnalysisMode) -> &'static str {
    match mode {
        AnalysisMode::General | AnalysisMode::Academic => GENERAL_PRESET,
        AnalysisMode::Teaching => TEACHING_PRESET,
        AnalysisMode::Interview => INTERVIEW_PRESET,
    }
}

fn build_prompt(windows: &[FollowupWindow], mode: AnalysisMode, total: usize) -> String {
    let mut listing = String::new();
    for (i, w) in windows.iter().enumerate() {
        listing.push_str(&format!(
            "[{}] {:.1}\u{2192}{:.1}s: {}\n",
            i, w.start, w.end, w.text
        ));
    }

    format!(
        r#"You will receive the transcript in time windows.
Mode: "{mode}"
Target: {total} questions.

Guidelines:
{preset}

Rules:
- Vary categories (include clarify, evidence, scope, risk, next-steps at minimum).
- Be specific; reference the claim/metric/decision you're probing.
- No generic filler or compliments.
- Keep each question under ~18 words.
- Return ONLY JSON:
{{
  "questions": [
    {{
      "text": "string (the question)",
      "category": "clarify|evidence|scope|risk|next-steps|tradeoff|example",
      "difficulty": "easy|medium|hard",
      "why": "short rationale (optional)",
      "anchor": {{ "windowIndex": number, "start": number, "end": number }}
    }}
  ]
}}

Windows (index, start→end seconds, text):
{listing}"#,
        mode = mode.as_str(),
        total = total,
        preset = preset(mode),
        listing = listing,
    )
}

/// Parse the backend response, tolerating ```json code fences.
fn parse_questions(raw: &str) -> Option<Vec<FollowupDetail>> {
    let cleaned = raw.replace("```json", "").replace("```", "");
    let envelope: QuestionsEnvelope = serde_json::from_str(cleaned.trim()).ok()?;
    Some(envelope.questions)
}

/// Drop empty texts, deduplicate case-insensitively, cap to `total`.
fn postprocess(rich: Vec<FollowupDetail>, total: usize) -> FollowupSet {
    let rich: Vec<FollowupDetail> = rich
        .into_iter()
        .filter(|q| !q.text.trim().is_empty())
        .collect();

    let mut seen = HashSet::new();
    let questions: Vec<String> = rich
        .iter()
        .map(|q| q.text.trim().to_string())
        .filter(|q| seen.insert(q.to_lowercase()))
        .take(total)
        .collect();

    FollowupSet {
        questions,
        details: rich,
    }
}

fn fallback_set(total: usize) -> FollowupSet {
    FollowupSet {
        questions: FALLBACK_QUESTIONS
            .iter()
            .take(total)
            .map(|q| q.to_string())
            .collect(),
        details: Vec::new(),
    }
}
