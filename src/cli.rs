use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::analyzer::{Detail, Report, analyze_with};
use crate::server::{DEFAULT_LISTEN_ADDR, DEFAULT_MAX_UPLOAD_BYTES, ServerConfig};
use crate::upload::{UploadError, decode_upload, read_upload};

/// Path value that selects standard input
pub const STDIN_PATH: &str = "-";

#[derive(Debug, Parser)]
#[command(
    name = "wordstat",
    version,
    about = "Word frequency and line/sentence statistics for text files"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Analyze a text file and print the report as JSON
    Analyze(AnalyzeArgs),
    /// Run the HTTP upload service
    Serve(ServeArgs),
}

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// File to analyze, or `-` for standard input
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    #[arg(long, value_enum, default_value_t = Detail::Detailed)]
    pub detail: Detail,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    #[arg(long, env = "WORDSTAT_LISTEN_ADDR", default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: String,

    /// Detail level when a request does not pass `?detail=`
    #[arg(long, env = "WORDSTAT_DETAIL", value_enum, default_value_t = Detail::Detailed)]
    pub detail: Detail,

    #[arg(
        long,
        env = "WORDSTAT_MAX_UPLOAD_BYTES",
        default_value_t = DEFAULT_MAX_UPLOAD_BYTES
    )]
    pub max_upload_bytes: usize,
}

impl From<ServeArgs> for ServerConfig {
    fn from(args: ServeArgs) -> Self {
        ServerConfig::default()
            .listen_addr(args.listen_addr)
            .detail(args.detail)
            .max_upload_bytes(args.max_upload_bytes)
    }
}

/// Read the raw bytes behind `path` (`-` reads stdin)
pub fn read_input(path: &Path) -> Result<Vec<u8>, UploadError> {
    if path.as_os_str() == STDIN_PATH {
        return read_upload(io::stdin().lock());
    }
    read_upload(File::open(path)?)
}

/// Read, validate and analyze the input named by `args`
pub fn analyze_input(args: &AnalyzeArgs) -> Result<Report, UploadError> {
    let bytes = read_input(&args.path)?;
    let text = decode_upload(Some(bytes.as_slice()))?;
    Ok(analyze_with(text, args.detail))
}

pub fn render_report(report: &Report, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string(report)
    }
}
