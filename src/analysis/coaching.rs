use super::report::{AnalysisMode, FeedbackSource, QualitativeFeedback};
use crate::llm::{GenerationOptions, TextGeneration};
use tracing::warn;

const COACH_SYSTEM_PROMPT: &str =
    "You are an expert presentation coach. Give direct, specific, encouraging feedback.";

const FALLBACK_TEXT: &str =
    "Qualitative feedback is unavailable for this session. The metric-based analysis above still applies.";

const GENERAL_PROMPT: &str = "Analyze this presentation transcript and provide constructive feedback. Focus on:
1. Content clarity and structure
2. Communication effectiveness
3. Areas for improvement
4. Strengths to maintain
Address the presenter in second person.
Provide specific, actionable advice in 2-3 bullet points:";

const TEACHING_PROMPT: &str = "Analyze this teaching session and provide constructive feedback. Focus on:
1. Content clarity and structure
2. Communication effectiveness
3. Areas for improvement
4. Strengths to maintain
Address the presenter in second person.
Provide specific, actionable advice in 2-3 bullet points:";

const INTERVIEW_PROMPT: &str = "The following transcript is from an interview. Evaluate the candidate based on:
1. Communication skills
2. Confidence and poise
3. Ability to handle pressure
4. Adaptability and flexibility
5. Problem-solving skills
Address the presenter in second person.
Provide specific, actionable advice in 2-3 bullet points:";

/// Coaching prompt for a given analysis mode.
///
/// Academic sessions use the general preset.
pub fn coaching_prompt(mode: AnalysisMode) -> &'static str {
    match mode {
        AnalysisMode::General | AnalysisMode::Academic => GENERAL_PROMPT,
        AnalysisMode::Teaching => TEACHING_PROMPT,
        AnalysisMode::Interview => INTERVIEW_PROMPT,
    }
}

/// Request a short second-person coaching paragraph for the transcript.
///
/// Never fails: on any backend error the result carries a labeled
/// fallback with `source = unavailable`.
pub async fn coaching_feedback(
    generation: &dyn TextGeneration,
    transcript_text: &str,
    mode: AnalysisMode,
) -> QualitativeFeedback {
    let user = format!(
        "{}\n\nTranscript:\n{}",
        coaching_prompt(mode),
        transcript_text
    );

    let options = GenerationOptions {
        temperature: 0.5,
        max_tokens: 400,
        structured: false,
    };

    match generation
        .complete(COACH_SYSTEM_PROMPT, &user, options)
        .await
    {
        Ok(text) if !text.trim().is_empty() => QualitativeFeedback {
            text: text.trim().to_string(),
            source: FeedbackSource::Model,
        },
        Ok(_) => QualitativeFeedback {
            text: FALLBACK_TEXT.to_string(),
            source: FeedbackSource::Unavailable,
        },
        Err(e) => {
            warn!("qualitative feedback generation failed: {}", e);
            QualitativeFeedback {
                text: FALLBACK_TEXT.to_string(),
                source: FeedbackSource::Unavailable,
            }
        }
    }
}
