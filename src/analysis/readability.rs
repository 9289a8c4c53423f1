//! SMOG readability estimation helpers.

/// Estimate sentence count from runs of terminal punctuation.
///
/// Consecutive terminal marks ("?!", "...") count as one sentence
/// boundary. Always returns at least 1 so downstream division is safe.
pub fn estimate_sentences(text: &str) -> usize {
    let mut sentences = 0;
    let mut in_run = false;

    for c in text.chars() {
        let terminal = matches!(c, '.' | '!' | '?');
        if terminal && !in_run {
            sentences += 1;
        }
        in_run = terminal;
    }

    sentences.max(1)
}

/// Heuristic syllable count: strip a common silent suffix, then count
/// vowel-group clusters. Every word counts as at least one syllable.
pub fn count_syllables(word: &str) -> usize {
    let mut letters: String = word
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    if letters.len() > 2 {
        for suffix in ["es", "ed", "e"] {
            if letters.ends_with(suffix) {
                letters.truncate(letters.len() - suffix.len());
                break;
            }
        }
    }

    let mut syllables = 0;
    let mut prev_vowel = false;
    for c in letters.chars() {
        let vowel = matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if vowel && !prev_vowel {
            syllables += 1;
        }
        prev_vowel = vowel;
    }

    syllables.max(1)
}

/// A word of three or more syllables
pub fn is_polysyllabic(word: &str) -> bool {
    count_syllables(word) >= 3
}

/// SMOG index from polysyllable and sentence counts, rounded to one
/// decimal.
pub fn smog_index(polysyllables: usize, sentences: usize) -> f64 {
    let sentences = sentences.max(1);
    let index = 1.043 * ((polysyllables * 30) as f64 / sentences as f64).sqrt() + 3.1291;
    (index * 10.0).round() / 10.0
}
