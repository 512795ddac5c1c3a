use clap::Parser;
use std::path::PathBuf;

/// Terminal client for a research paper summarization service.
#[derive(Debug, Parser)]
#[command(name = "paper-summarizer", version, about)]
pub struct Cli {
    /// Override the summarize endpoint URL
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Override the request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Summarize this topic, print the result and exit (no UI)
    #[arg(long, value_name = "TEXT")]
    pub query: Option<String>,
}
