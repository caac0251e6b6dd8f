// Public API exports
pub mod analyzer;
pub mod cli;
pub mod server;
pub mod upload;

// Re-export main types for convenience
pub use analyzer::{
    AnalysisResult, Detail, FrequencyTable, Report, WordFrequencies, analyze, analyze_with,
    count_frequencies, tokenize, word_count,
};

pub use server::{ServerConfig, ServerError, build_router, serve};

pub use upload::{UploadError, decode_upload};
