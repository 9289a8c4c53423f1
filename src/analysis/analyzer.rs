use super::lexicon;
use super::readability;
use super::report::{
    AnalysisReport, FillerScore, FillerWordReport, PacingReport, PacingScore, PauseReport,
    PauseScore, ReadabilityReport, ReadabilityScore, SentimentReport, SentimentScore,
};
use crate::speech::TimedWord;
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

/// Default threshold above which a gap between words counts as a long pause
pub const LONG_PAUSE_THRESHOLD_SECS: f64 = 2.0;

const QUESTION_TEMPLATES: &[&str] = &[
    "Can you elaborate on your point about '{keyword}'?",
    "What are the implications of '{keyword}' in this context?",
    "How does '{keyword}' relate to the main problem you're solving?",
];

const GENERIC_QUESTIONS: &[&str] = &[
    "Could you elaborate on your main point?",
    "What is the key takeaway from your presentation?",
    "What are the next steps?",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("transcript contains no words")]
    EmptyTranscript,
}

/// Deterministic metrics over one transcript snapshot.
///
/// All outputs are pure functions of the input words: no external calls,
/// no randomness, no wall-clock dependence beyond the words' own
/// timestamps. Running the same snapshot twice yields identical reports.
pub struct TranscriptAnalyzer {
    transcript: Vec<TimedWord>,
    /// Lowercased tokens, parallel to `transcript`
    words: Vec<String>,
    full_text: String,
    word_count: usize,
    duration_seconds: f64,
}

impl TranscriptAnalyzer {
    pub fn new(transcript: &[TimedWord]) -> Result<Self, AnalysisError> {
        if transcript.is_empty() {
            return Err(AnalysisError::EmptyTranscript);
        }

        let words: Vec<String> = transcript.iter().map(|w| w.text.to_lowercase()).collect();
        let full_text = transcript
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        let first = &transcript[0];
        let last = &transcript[transcript.len() - 1];
        let duration_seconds = (last.end_time - first.start_time).max(0.0);

        Ok(Self {
            transcript: transcript.to_vec(),
            word_count: words.len(),
            words,
            full_text,
            duration_seconds,
        })
    }

    /// The transcript joined into one text, original casing preserved
    pub fn full_text(&self) -> &str {
        &self.full_text
    }

    pub fn duration_seconds(&self) -> f64 {
        self.duration_seconds
    }

    pub fn analyze_pacing(&self) -> PacingReport {
        let duration_minutes = self.duration_seconds / 60.0;
        let wpm = if duration_minutes > 0.0 {
            (self.word_count as f64 / duration_minutes).round() as u32
        } else {
            0
        };

        let (score, feedback) = if wpm < 110 {
            (
                PacingScore::TooSlow,
                format!(
                    "Your pace of {} WPM is a bit slow. Try to speak a little more quickly to keep your audience engaged.",
                    wpm
                ),
            )
        } else if wpm > 160 {
            (
                PacingScore::TooFast,
                format!(
                    "Your pace of {} WPM is quite fast. Try to slow down and take breaths to ensure your audience can follow along.",
                    wpm
                ),
            )
        } else {
            (
                PacingScore::Good,
                format!(
                    "Excellent pacing! Your speed of {} WPM is ideal for a clear and engaging presentation.",
                    wpm
                ),
            )
        };

        PacingReport {
            wpm,
            score,
            feedback,
        }
    }

    pub fn analyze_filler_words(&self) -> FillerWordReport {
        let mut filler_counts: BTreeMap<String, usize> = BTreeMap::new();
        let mut total_fillers = 0;

        for word in &self.words {
            if lexicon::is_filler(word) {
                *filler_counts.entry(word.clone()).or_insert(0) += 1;
                total_fillers += 1;
            }
        }

        let percentage = if self.word_count > 0 {
            let raw = total_fillers as f64 / self.word_count as f64 * 100.0;
            (raw * 100.0).round() / 100.0
        } else {
            0.0
        };

        let (score, feedback) = if percentage > 5.0 {
            (
                FillerScore::NeedsImprovement,
                "You're using a high number of filler words. Practice pausing instead of using fillers to gather your thoughts.",
            )
        } else if percentage >= 2.0 {
            (
                FillerScore::Okay,
                "Not bad, but there's room to improve. Try to be more conscious of using filler words to sound more polished.",
            )
        } else {
            (
                FillerScore::Good,
                "Great job! You used very few filler words, which makes your speech sound confident and clear.",
            )
        };

        FillerWordReport {
            count: total_fillers,
            percentage,
            words: filler_counts,
            score,
            feedback: feedback.to_string(),
        }
    }

    pub fn analyze_pauses(&self, long_pause_threshold: f64) -> PauseReport {
        let mut long_pauses = 0;
        for pair in self.transcript.windows(2) {
            let pause = pair[1].start_time - pair[0].end_time;
            if pause >= long_pause_threshold {
                long_pauses += 1;
            }
        }

        let (score, feedback) = if long_pauses > 3 {
            (
                PauseScore::NeedsImprovement,
                format!(
                    "You paused {} times for a significant duration. This might indicate hesitation. Try to maintain a more consistent flow.",
                    long_pauses
                ),
            )
        } else {
            (
                PauseScore::Good,
                "You used pauses effectively, giving your audience time to process your ideas."
                    .to_string(),
            )
        };

        PauseReport {
            long_pause_count: long_pauses,
            score,
            feedback,
        }
    }

    pub fn analyze_readability(&self) -> ReadabilityReport {
        let sentence_count = readability::estimate_sentences(&self.full_text);
        let polysyllable_count = self
            .words
            .iter()
            .filter(|w| readability::is_polysyllabic(w))
            .count();

        let smog = readability::smog_index(polysyllable_count, sentence_count);

        let (score, feedback) = if smog > 16.0 {
            (
                ReadabilityScore::Complex,
                format!(
                    "Your language is quite complex (SMOG {}). Consider simpler vocabulary so the audience can follow easily.",
                    smog
                ),
            )
        } else if smog >= 13.0 {
            (
                ReadabilityScore::Moderate,
                format!(
                    "Your language is moderately complex (SMOG {}). Most audiences will follow, but simpler phrasing could help.",
                    smog
                ),
            )
        } else if smog < 8.0 {
            (
                ReadabilityScore::Simple,
                format!(
                    "Your language is very simple (SMOG {}). That keeps you accessible, though more precise terms may add authority.",
                    smog
                ),
            )
        } else {
            (
                ReadabilityScore::Good,
                format!(
                    "Your language complexity (SMOG {}) is well suited for a general audience.",
                    smog
                ),
            )
        };

        ReadabilityReport {
            smog_index: smog,
            polysyllable_count,
            sentence_count,
            score,
            feedback,
        }
    }

    pub fn analyze_sentiment(&self) -> SentimentReport {
        let mut positive = 0;
        let mut negative = 0;

        for word in &self.words {
            if lexicon::is_positive(word) {
                positive += 1;
            }
            if lexicon::is_negative(word) {
                negative += 1;
            }
        }

        let total = positive + negative;
        let polarity = if total > 0 {
            let raw = (positive as f64 - negative as f64) / total as f64;
            (raw * 100.0).round() / 100.0
        } else {
            0.0
        };

        let (score, feedback) = if polarity > 0.2 {
            (
                SentimentScore::Positive,
                "The overall tone of your presentation is positive and optimistic.",
            )
        } else if polarity < -0.2 {
            (
                SentimentScore::Negative,
                "The tone seems to focus on challenges or problems. Ensure you also highlight solutions and opportunities.",
            )
        } else {
            (
                SentimentScore::Neutral,
                "The tone of your presentation appears to be neutral.",
            )
        };

        SentimentReport {
            polarity,
            score,
            feedback: feedback.to_string(),
        }
    }

    /// Deterministic follow-up questions from keyword frequency.
    ///
    /// Serves as the fallback when the LLM-backed generator is skipped or
    /// the transcript has no usable keywords.
    pub fn keyword_questions(&self, num_questions: usize) -> Vec<String> {
        let keywords: Vec<&String> = self
            .words
            .iter()
            .filter(|w| !lexicon::is_stop_word(w) && w.len() > 3)
            .collect();

        if keywords.is_empty() {
            return GENERIC_QUESTIONS.iter().map(|q| q.to_string()).collect();
        }

        // Count occurrences; ties rank by first appearance in the speech
        let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
        for (index, word) in keywords.iter().enumerate() {
            let entry = counts.entry(word.as_str()).or_insert((index, 0));
            entry.1 += 1;
        }

        let mut ranked: Vec<(&str, (usize, usize))> = counts.into_iter().collect();
        ranked.sort_by(|(_, (a_first, a_count)), (_, (b_first, b_count))| {
            b_count.cmp(a_count).then(a_first.cmp(b_first))
        });

        ranked
            .iter()
            .take(num_questions)
            .enumerate()
            .map(|(i, (keyword, _))| {
                QUESTION_TEMPLATES[i % QUESTION_TEMPLATES.len()].replace("{keyword}", keyword)
            })
            .collect()
    }

    /// Run every deterministic metric and assemble a report.
    ///
    /// Qualitative feedback and LLM-backed follow-ups are filled in by the
    /// session afterwards; `follow_up_questions` starts with the keyword
    /// fallback set.
    pub fn run_full_analysis(&self) -> AnalysisReport {
        AnalysisReport {
            pacing: self.analyze_pacing(),
            filler_words: self.analyze_filler_words(),
            pauses: self.analyze_pauses(LONG_PAUSE_THRESHOLD_SECS),
            readability: self.analyze_readability(),
            sentiment: self.analyze_sentiment(),
            qualitative_feedback: None,
            follow_up_questions: self.keyword_questions(3),
            follow_up_details: Vec::new(),
        }
    }
}
