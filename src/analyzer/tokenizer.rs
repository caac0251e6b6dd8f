use once_cell::sync::Lazy;
use regex::Regex;

use super::FrequencyTable;

/// Runs of anything outside `[A-Za-z0-9_]`. Non-ASCII letters are separators.
static NON_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_]+").expect("non-word pattern is valid"));

/// Raw (not yet lower-cased) word slices of `text`, left to right
fn words(text: &str) -> impl Iterator<Item = &str> {
    NON_WORD.split(text).filter(|word| !word.is_empty())
}

/// Split text into lower-cased word tokens
///
/// A token is a maximal run of ASCII letters, digits or underscores. Any
/// string is valid input; separator-only text yields no tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    words(text).map(|word| word.to_ascii_lowercase()).collect()
}

/// Count the tokens in `text` without allocating them
pub fn word_count(text: &str) -> usize {
    words(text).count()
}

/// Build the token -> occurrences table for `text`
pub fn count_frequencies(text: &str) -> FrequencyTable {
    let mut frequencies = FrequencyTable::new();
    for token in tokenize(text) {
        *frequencies.entry(token).or_insert(0) += 1;
    }
    frequencies
}

#[cfg(test)]
mod tokenizer_tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_in_order() {
        assert_eq!(
            tokenize("The Quick BROWN fox"),
            vec!["the", "quick", "brown", "fox"]
        );
    }

    #[test]
    fn test_tokenize_drops_edge_separators() {
        assert_eq!(tokenize("  ...hello, world!  "), vec!["hello", "world"]);
        assert!(tokenize("!?.,;  \t\n").is_empty());
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_underscore_and_digits_are_word_chars() {
        assert_eq!(tokenize("snake_case v2 42"), vec!["snake_case", "v2", "42"]);
    }

    #[test]
    fn test_non_ascii_letters_split_words() {
        // é is not an ASCII word character
        assert_eq!(tokenize("café naïve"), vec!["caf", "na", "ve"]);
        assert!(tokenize("Привет мир").is_empty());
    }

    #[test]
    fn test_apostrophes_and_hyphens_split() {
        assert_eq!(tokenize("don't well-known"), vec!["don", "t", "well", "known"]);
    }

    #[test]
    fn test_word_count_matches_tokenize() {
        let text = "It's 9:30 -- time_to go!";
        assert_eq!(word_count(text), tokenize(text).len());
        // it, s, 9, 30, time_to, go
        assert_eq!(word_count(text), 6);
    }
}
