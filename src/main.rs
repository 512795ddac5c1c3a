use anyhow::Context;
use clap::Parser;
use paper_summarizer::cli::Cli;
use paper_summarizer::config::Config;
use paper_summarizer::{headless, logging, ui};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logging::init_tracing();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let config = config.with_overrides(cli.endpoint, cli.timeout)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    if let Some(query) = cli.query {
        return headless::run(&config, runtime.handle().clone(), &query);
    }

    ui::run(config, runtime.handle().clone())?;
    Ok(ExitCode::SUCCESS)
}
