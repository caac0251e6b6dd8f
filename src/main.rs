use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{filter::LevelFilter, fmt};
use wordstat::cli::{AnalyzeArgs, Cli, Commands, analyze_input, render_report};
use wordstat::{ServerConfig, serve};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(determine_log_level(&cli));

    match cli.command {
        Commands::Analyze(args) => run_analyze(&args),
        Commands::Serve(args) => {
            let config = ServerConfig::from(args);
            serve(config).await.context("wordstat server failed")
        }
    }
}

fn run_analyze(args: &AnalyzeArgs) -> Result<()> {
    tracing::debug!(path = %args.path.display(), detail = ?args.detail, "analyzing input");

    let report = analyze_input(args)
        .with_context(|| format!("Failed to analyze {}", args.path.display()))?;
    tracing::info!(
        total_words = report.total_words(),
        distinct_words = report.frequencies().len(),
        "analysis complete"
    );

    let output = render_report(&report, args.pretty).context("Failed to serialize report")?;
    println!("{}", output);
    Ok(())
}

fn init_tracing(level: LevelFilter) {
    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::warn!("Tracing subscriber already set; skipping re-initialization.");
    }
}

fn determine_log_level(cli: &Cli) -> LevelFilter {
    match cli.command {
        // stdout carries the report, so stay quiet unless asked
        Commands::Analyze(_) => match cli.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        },
        Commands::Serve(_) => match cli.verbose {
            0 => LevelFilter::INFO,
            1 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        },
    }
}
