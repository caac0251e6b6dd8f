use once_cell::sync::Lazy;
use regex::Regex;

use super::tokenizer::{count_frequencies, word_count};
use super::AnalysisResult;

/// `\r\n`, a lone `\r`, or `\n`
static LINE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r\n|\r|\n").expect("line break pattern is valid"));

/// One or more terminal marks plus any trailing ASCII whitespace
static SENTENCE_BREAK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[.!?]+[ \t\n\x0B\x0C\r]*").expect("sentence break pattern is valid")
});

/// Split text into lines on `\n`, `\r\n` or a lone `\r`
///
/// A trailing terminator does not add an empty line. The empty string is a
/// single empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return vec![""];
    }

    let mut lines: Vec<&str> = LINE_BREAK.split(text).collect();
    if lines.len() > 1 && lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}

/// Sentence fragments of a single line that have non-blank content
pub fn split_sentences(line: &str) -> Vec<&str> {
    SENTENCE_BREAK
        .split(line)
        .filter(|fragment| !is_blank(fragment))
        .collect()
}

/// True when nothing but spaces or control characters remain after trimming
pub fn is_blank(segment: &str) -> bool {
    segment.chars().all(|c| c <= ' ')
}

/// Run the full analysis over `text`
///
/// Computes the whole-text frequency table, then walks every line and every
/// sentence within it, recording per-segment word counts in encounter order.
pub fn analyze(text: &str) -> AnalysisResult {
    let frequencies = count_frequencies(text);
    let total_words = frequencies.values().sum();

    let lines = split_lines(text);
    let total_lines = lines.len();
    let mut empty_lines = 0;
    let mut word_counts_per_line = Vec::with_capacity(total_lines);
    let mut word_counts_per_sentence = Vec::new();

    for line in lines {
        word_counts_per_line.push(word_count(line));

        if is_blank(line) {
            empty_lines += 1;
        }

        for sentence in split_sentences(line) {
            word_counts_per_sentence.push(word_count(sentence));
        }
    }

    AnalysisResult {
        total_words,
        frequencies,
        total_lines,
        total_sentences: word_counts_per_sentence.len(),
        empty_lines,
        word_counts_per_line,
        word_counts_per_sentence,
    }
}

#[cfg(test)]
mod segmenter_tests {
    use super::*;

    #[test]
    fn test_split_lines_trailing_newline() {
        assert_eq!(split_lines("a\nb\n"), vec!["a", "b"]);
        assert_eq!(split_lines("a\r\nb"), vec!["a", "b"]);
    }

    #[test]
    fn test_split_lines_keeps_inner_blank_lines() {
        assert_eq!(split_lines("a\n\n\nb"), vec!["a", "", "", "b"]);
        assert_eq!(split_lines("\n"), vec![""]);
    }

    #[test]
    fn test_split_lines_lone_carriage_return() {
        assert_eq!(split_lines("a b\rc\r\nd\r"), vec!["a b", "c", "d"]);
        assert_eq!(split_lines("\r\r"), vec!["", ""]);
        assert_eq!(split_lines("\r"), vec![""]);
    }

    #[test]
    fn test_split_lines_empty_input() {
        assert_eq!(split_lines(""), vec![""]);
    }

    #[test]
    fn test_split_sentences_collapses_terminators() {
        assert_eq!(split_sentences("Hello!!!"), vec!["Hello"]);
        assert_eq!(split_sentences("Wait... what?! Ok."), vec!["Wait", "what", "Ok"]);
    }

    #[test]
    fn test_split_sentences_drops_blank_fragments() {
        assert!(split_sentences("...").is_empty());
        assert!(split_sentences("   ").is_empty());
        assert_eq!(split_sentences(". a"), vec!["a"]);
    }

    #[test]
    fn test_punctuation_only_fragment_is_a_sentence() {
        // Non-blank after trimming, so it counts even with zero words
        assert_eq!(split_sentences("Hi. -- "), vec!["Hi", "-- "]);
    }

    #[test]
    fn test_is_blank_trims_control_chars() {
        assert!(is_blank(""));
        assert!(is_blank(" \t\r\x0B"));
        assert!(!is_blank(" x "));
        // U+00A0 is above the space character and is kept
        assert!(!is_blank("\u{a0}"));
    }
}
