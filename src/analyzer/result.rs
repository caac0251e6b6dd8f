use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Token -> occurrence count, iterated in lexicographic order
pub type FrequencyTable = BTreeMap<String, usize>;

/// Full output of one analysis call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Sum of all frequency counts
    pub total_words: usize,
    /// Whole-text frequency table
    pub frequencies: FrequencyTable,
    /// Number of lines the input splits into
    pub total_lines: usize,
    /// Number of non-empty sentences across all lines
    pub total_sentences: usize,
    /// Lines whose trimmed content is empty
    pub empty_lines: usize,
    /// One entry per line, in line order
    pub word_counts_per_line: Vec<usize>,
    /// One entry per non-empty sentence, in encounter order
    pub word_counts_per_sentence: Vec<usize>,
}

/// Reduced output: totals and frequencies only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordFrequencies {
    pub total_words: usize,
    pub frequencies: FrequencyTable,
}

/// Serialized analysis output. Untagged, so the JSON is the inner record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Report {
    Basic(WordFrequencies),
    Detailed(AnalysisResult),
}

impl WordFrequencies {
    pub fn from_table(frequencies: FrequencyTable) -> Self {
        let total_words = frequencies.values().sum();
        Self {
            total_words,
            frequencies,
        }
    }
}

impl AnalysisResult {
    /// Drop the segmentation statistics
    pub fn summary(&self) -> WordFrequencies {
        WordFrequencies {
            total_words: self.total_words,
            frequencies: self.frequencies.clone(),
        }
    }
}

impl Report {
    pub fn total_words(&self) -> usize {
        match self {
            Report::Basic(basic) => basic.total_words,
            Report::Detailed(detailed) => detailed.total_words,
        }
    }

    pub fn frequencies(&self) -> &FrequencyTable {
        match self {
            Report::Basic(basic) => &basic.frequencies,
            Report::Detailed(detailed) => &detailed.frequencies,
        }
    }
}

impl From<AnalysisResult> for Report {
    fn from(result: AnalysisResult) -> Self {
        Report::Detailed(result)
    }
}

impl From<WordFrequencies> for Report {
    fn from(summary: WordFrequencies) -> Self {
        Report::Basic(summary)
    }
}
