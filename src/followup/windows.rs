use crate::speech::TimedWord;

/// Width of one transcript window in seconds
pub const WINDOW_SECS: f64 = 20.0;

/// Character budget per window, bounding generation request size
pub const WINDOW_MAX_CHARS: usize = 500;

/// Character budget for a single window built from raw untimed text
const RAW_TEXT_MAX_CHARS: usize = 4000;

/// A fixed-duration slice of the transcript used to anchor generated
/// questions in a specific time range.
#[derive(Debug, Clone, PartialEq)]
pub struct FollowupWindow {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

/// Partition timed words into fixed-width windows.
///
/// A word belongs to the current window while its start offset is below
/// the window's end; the first word past it flushes the window and opens
/// a new one at that word's start. Window text is truncated to
/// `max_chars`.
pub fn chunk_windows(words: &[TimedWord], window_secs: f64, max_chars: usize) -> Vec<FollowupWindow> {
    if words.is_empty() {
        return Vec::new();
    }

    let mut windows = Vec::new();
    let mut cur_start = words[0].start_time;
    let mut cur_end = cur_start + window_secs;
    let mut buf: Vec<&str> = Vec::new();

    for word in words {
        if word.start_time >= cur_end {
            flush(&mut windows, &mut buf, cur_start, cur_end, max_chars);
            cur_start = word.start_time;
            cur_end = cur_start + window_secs;
        }
        buf.push(&word.text);
    }
    flush(&mut windows, &mut buf, cur_start, cur_end, max_chars);

    windows
}

fn flush(
    windows: &mut Vec<FollowupWindow>,
    buf: &mut Vec<&str>,
    start: f64,
    end: f64,
    max_chars: usize,
) {
    if buf.is_empty() {
        return;
    }
    let text: String = buf.join(" ").chars().take(max_chars).collect();
    windows.push(FollowupWindow { start, end, text });
    buf.clear();
}

/// Build a single window from raw untimed text, sized to the text.
pub fn single_window(text: &str) -> FollowupWindow {
    let word_count = text.split_whitespace().count();
    let end = ((word_count as f64) / 2.0).ceil().max(WINDOW_SECS);

    FollowupWindow {
        start: 0.0,
        end,
        text: text.chars().take(RAW_TEXT_MAX_CHARS).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str, start: f64, end: f64) -> TimedWord {
        TimedWord {
            text: text.to_string(),
            start_time: start,
            end_time: end,
        }
    }

    #[test]
    fn test_single_bucket() {
        let words = vec![word("hello", 0.0, 0.5), word("there", 1.0, 1.5)];
        let windows = chunk_windows(&words, 20.0, 500);

        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].text, "hello there");
        assert_eq!(windows[0].start, 0.0);
        assert_eq!(windows[0].end, 20.0);
    }

    #[test]
    fn test_bucket_rollover() {
        let words = vec![
            word("first", 0.0, 0.5),
            word("second", 19.9, 20.3),
            word("third", 20.0, 20.4),
            word("fourth", 45.0, 45.2),
        ];
        let windows = chunk_windows(&words, 20.0, 500);

        assert_eq!(windows.len(), 3);
        assert_eq!(windows[0].text, "first second");
        assert_eq!(windows[1].text, "third");
        assert_eq!(windows[1].start, 20.0);
        assert_eq!(windows[2].text, "fourth");
        assert_eq!(windows[2].start, 45.0);
    }

    #[test]
    fn test_window_truncation() {
        let words: Vec<TimedWord> = (0..100)
            .map(|i| word("elaborate", i as f64 * 0.1, i as f64 * 0.1 + 0.05))
            .collect();
        let windows = chunk_windows(&words, 20.0, 50);

        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].text.chars().count(), 50);
    }

    #[test]
    fn test_empty_input() {
        assert!(chunk_windows(&[], 20.0, 500).is_empty());
    }

    #[test]
    fn test_single_window_from_text() {
        let window = single_window("one two three four");
        assert_eq!(window.start, 0.0);
        // sized to the text, but never below one standard window
        assert_eq!(window.end, 20.0);
        assert_eq!(window.text, "one two three four");

        let long_text = vec!["word"; 100].join(" ");
        let window = single_window(&long_text);
        assert_eq!(window.end, 50.0);
    }
}
