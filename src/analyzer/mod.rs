//! Text analytics engine: tokenization, frequency counting and line/sentence
//! segmentation. Everything here is pure and total over `&str`.

mod result;
mod segmenter;
mod tokenizer;


pub use result::{AnalysisResult, FrequencyTable, Report, WordFrequencies};
pub use segmenter::{analyze, is_blank, split_lines, split_sentences};
pub use tokenizer::{count_frequencies, tokenize, word_count};

use serde::{Deserialize, Serialize};

/// How much of the analysis to compute and report
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Detail {
    /// Total word count and frequencies only
    Basic,
    /// Frequencies plus line and sentence statistics
    #[default]
    Detailed,
}

/// Analyze `text` at the requested level of detail
///
/// `Detail::Basic` skips segmentation entirely.
pub fn analyze_with(text: &str, detail: Detail) -> Report {
    match detail {
        Detail::Basic => Report::Basic(WordFrequencies::from_table(count_frequencies(text))),
        Detail::Detailed => Report::Detailed(analyze(text)),
    }
}
