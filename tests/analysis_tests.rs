// Tests for the deterministic transcript metrics engine.
//
// All metrics are pure functions of the word snapshot: the same input
// must produce byte-identical reports, and the documented score bands
// must hold at their boundaries.

use podium::analysis::{FillerScore, PacingScore, PauseScore, ReadabilityScore, SentimentScore};
use podium::{AnalysisError, TimedWord, TranscriptAnalyzer};

fn word(text: &str, start: f64, end: f64) -> TimedWord {
    TimedWord {
        text: text.to_string(),
        start_time: start,
        end_time: end,
    }
}

/// Spread `tokens` evenly across `duration_secs`, first word starting at
/// zero and the last one ending exactly at the duration.
fn evenly_spaced(tokens: &[&str], duration_secs: f64) -> Vec<TimedWord> {
    let n = tokens.len();
    let step = duration_secs / n as f64;

    tokens
        .iter()
        .enumerate()
        .map(|(i, t)| {
            let start = i as f64 * step;
            let end = if i == n - 1 {
                duration_secs
            } else {
                start + step * 0.8
            };
            word(t, start, end)
        })
        .collect()
}

#[test]
fn test_empty_transcript_rejected() {
    let result = TranscriptAnalyzer::new(&[]);
    assert_eq!(result.err(), Some(AnalysisError::EmptyTranscript));
}

#[test]
fn test_scenario_150_words_60_seconds_10_fillers() {
    // 140 content words and 10 "um" across exactly one minute
    let mut tokens = vec!["progress"; 140];
    tokens.extend(vec!["um"; 10]);
    let transcript = evenly_spaced(&tokens, 60.0);

    let analyzer = TranscriptAnalyzer::new(&transcript).unwrap();

    let pacing = analyzer.analyze_pacing();
    assert_eq!(pacing.wpm, 150);
    assert_eq!(pacing.score, PacingScore::Good);
    assert!(pacing.feedback.contains("150"));

    let fillers = analyzer.analyze_filler_words();
    assert_eq!(fillers.count, 10);
    assert_eq!(fillers.percentage, 6.67);
    assert_eq!(fillers.score, FillerScore::NeedsImprovement);
    assert_eq!(fillers.words.get("um"), Some(&10));
}

#[test]
fn test_zero_duration_yields_zero_wpm() {
    let transcript = vec![word("hello", 1.0, 1.0)];
    let analyzer = TranscriptAnalyzer::new(&transcript).unwrap();

    let pacing = analyzer.analyze_pacing();
    assert_eq!(pacing.wpm, 0);
}

#[test]
fn test_pacing_band_boundaries() {
    // 100 words in a minute: below the 110 floor
    let slow = evenly_spaced(&vec!["steady"; 100], 60.0);
    let analyzer = TranscriptAnalyzer::new(&slow).unwrap();
    assert_eq!(analyzer.analyze_pacing().score, PacingScore::TooSlow);

    // 170 words in a minute: above the 160 ceiling
    let fast = evenly_spaced(&vec!["steady"; 170], 60.0);
    let analyzer = TranscriptAnalyzer::new(&fast).unwrap();
    assert_eq!(analyzer.analyze_pacing().score, PacingScore::TooFast);
}

#[test]
fn test_filler_percentage_bounds() {
    let transcript = evenly_spaced(&["um", "like", "so", "uh", "well"], 10.0);
    let analyzer = TranscriptAnalyzer::new(&transcript).unwrap();

    let fillers = analyzer.analyze_filler_words();
    assert!(fillers.percentage >= 0.0 && fillers.percentage <= 100.0);
    assert!(fillers.count <= 5);
    assert_eq!(fillers.count, 5);
    assert_eq!(fillers.percentage, 100.0);
    assert_eq!(fillers.score, FillerScore::NeedsImprovement);
}

#[test]
fn test_filler_matching_is_case_insensitive() {
    let transcript = evenly_spaced(&["Um", "LIKE", "discussion"], 5.0);
    let analyzer = TranscriptAnalyzer::new(&transcript).unwrap();

    let fillers = analyzer.analyze_filler_words();
    assert_eq!(fillers.count, 2);
    assert_eq!(fillers.words.get("um"), Some(&1));
    assert_eq!(fillers.words.get("like"), Some(&1));
}

#[test]
fn test_long_pause_count_monotone_in_threshold() {
    // Gaps of 0.5s, 1.5s, 2.5s, and 4.0s between consecutive words
    let transcript = vec![
        word("one", 0.0, 1.0),
        word("two", 1.5, 2.0),
        word("three", 3.5, 4.0),
        word("four", 6.5, 7.0),
        word("five", 11.0, 11.5),
    ];
    let analyzer = TranscriptAnalyzer::new(&transcript).unwrap();

    let at_3 = analyzer.analyze_pauses(3.0).long_pause_count;
    let at_2 = analyzer.analyze_pauses(2.0).long_pause_count;
    let at_1 = analyzer.analyze_pauses(1.0).long_pause_count;

    assert_eq!(at_3, 1);
    assert_eq!(at_2, 2);
    assert_eq!(at_1, 3);
    assert!(at_1 >= at_2 && at_2 >= at_3);
}

#[test]
fn test_many_long_pauses_flagged() {
    // Four pauses above the 2s default threshold
    let transcript = vec![
        word("a", 0.0, 1.0),
        word("b", 4.0, 5.0),
        word("c", 8.0, 9.0),
        word("d", 12.0, 13.0),
        word("e", 16.0, 17.0),
    ];
    let analyzer = TranscriptAnalyzer::new(&transcript).unwrap();

    let pauses = analyzer.analyze_pauses(2.0);
    assert_eq!(pauses.long_pause_count, 4);
    assert_eq!(pauses.score, PauseScore::NeedsImprovement);
}

#[test]
fn test_readability_simple_speech() {
    let transcript = evenly_spaced(&["we", "met", "and", "had", "a", "chat."], 6.0);
    let analyzer = TranscriptAnalyzer::new(&transcript).unwrap();

    let readability = analyzer.analyze_readability();
    assert_eq!(readability.polysyllable_count, 0);
    assert_eq!(readability.sentence_count, 1);
    // 1.043 * sqrt(0) + 3.1291 rounds to 3.1
    assert_eq!(readability.smog_index, 3.1);
    assert_eq!(readability.score, ReadabilityScore::Simple);
}

#[test]
fn test_smog_monotone_in_polysyllable_fraction() {
    // Same length and same sentence structure; the second transcript
    // swaps ten short words for polysyllabic ones
    let mut plain: Vec<&str> = vec!["work"; 29];
    plain.push("done.");
    let mut dense: Vec<&str> = vec!["opportunity"; 10];
    dense.extend(vec!["work"; 19]);
    dense.push("done.");

    let plain_smog = TranscriptAnalyzer::new(&evenly_spaced(&plain, 30.0))
        .unwrap()
        .analyze_readability()
        .smog_index;
    let dense_smog = TranscriptAnalyzer::new(&evenly_spaced(&dense, 30.0))
        .unwrap()
        .analyze_readability()
        .smog_index;

    assert!(dense_smog >= plain_smog);
}

#[test]
fn test_sentiment_polarity() {
    let upbeat = evenly_spaced(&["great", "great", "success", "problem"], 4.0);
    let analyzer = TranscriptAnalyzer::new(&upbeat).unwrap();
    let sentiment = analyzer.analyze_sentiment();
    assert_eq!(sentiment.polarity, 0.5);
    assert_eq!(sentiment.score, SentimentScore::Positive);

    let flat = evenly_spaced(&["the", "quarterly", "report", "shipped"], 4.0);
    let analyzer = TranscriptAnalyzer::new(&flat).unwrap();
    let sentiment = analyzer.analyze_sentiment();
    assert_eq!(sentiment.polarity, 0.0);
    assert_eq!(sentiment.score, SentimentScore::Neutral);
}

#[test]
fn test_keyword_questions_rank_by_frequency() {
    let tokens = [
        "scaling",
        "scaling",
        "scaling",
        "architecture",
        "architecture",
        "budget",
        "the",
        "and",
    ];
    let transcript = evenly_spaced(&tokens, 8.0);
    let analyzer = TranscriptAnalyzer::new(&transcript).unwrap();

    let questions = analyzer.keyword_questions(3);
    assert_eq!(questions.len(), 3);
    assert!(questions[0].contains("scaling"));
    assert!(questions[1].contains("architecture"));
    assert!(questions[2].contains("budget"));
}

#[test]
fn test_keyword_questions_generic_fallback() {
    // Stop words and short tokens only: no keyword qualifies
    let transcript = evenly_spaced(&["we", "do", "it", "now"], 4.0);
    let analyzer = TranscriptAnalyzer::new(&transcript).unwrap();

    let questions = analyzer.keyword_questions(3);
    assert_eq!(
        questions,
        vec![
            "Could you elaborate on your main point?".to_string(),
            "What is the key takeaway from your presentation?".to_string(),
            "What are the next steps?".to_string(),
        ]
    );
}

#[test]
fn test_full_analysis_is_idempotent() {
    let tokens = [
        "today",
        "um",
        "we",
        "present",
        "an",
        "innovative",
        "opportunity",
        "for",
        "growth.",
        "basically",
        "the",
        "numbers",
        "look",
        "great.",
    ];
    let transcript = evenly_spaced(&tokens, 20.0);
    let analyzer = TranscriptAnalyzer::new(&transcript).unwrap();

    let first = serde_json::to_string(&analyzer.run_full_analysis()).unwrap();
    let second = serde_json::to_string(&analyzer.run_full_analysis()).unwrap();
    assert_eq!(first, second);

    // A fresh analyzer over the same snapshot agrees too
    let again = TranscriptAnalyzer::new(&transcript).unwrap();
    let third = serde_json::to_string(&again.run_full_analysis()).unwrap();
    assert_eq!(first, third);
}
