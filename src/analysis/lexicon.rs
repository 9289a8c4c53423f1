//! Fixed lexicons used by the metrics engine.
//!
//! Matching is case-insensitive exact-token: callers lowercase tokens
//! before lookup. Multi-word fillers ("you know", "i mean") are part of
//! the lexicon but only match if the recognizer emits them as one token.

const FILLER_WORDS: &[&str] = &[
    "uh", "um", "er", "ah", "like", "okay", "right", "so", "you know", "i mean", "basically",
    "actually", "well", "literally",
];

const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "amazing",
    "awesome",
    "positive",
    "success",
    "benefit",
    "opportunity",
    "achieve",
    "effective",
    "efficient",
    "innovative",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "problem",
    "issue",
    "challenge",
    "difficult",
    "failure",
    "negative",
    "risk",
    "poor",
    "concern",
    "limitation",
    "inefficient",
];

const STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "he", "him",
    "his", "she", "her", "it", "its", "they", "them", "their", "what", "which", "who", "whom",
    "this", "that", "these", "those", "am", "is", "are", "was", "were", "be", "been", "being",
    "have", "has", "had", "do", "does", "did", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "to", "from",
];

pub fn is_filler(token: &str) -> bool {
    FILLER_WORDS.contains(&token)
}

pub fn is_positive(token: &str) -> bool {
    POSITIVE_WORDS.contains(&token)
}

pub fn is_negative(token: &str) -> bool {
    NEGATIVE_WORDS.contains(&token)
}

pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}
