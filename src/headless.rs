//! One-shot mode: summarize a single query without the terminal UI.

use anyhow::Context;
use std::process::ExitCode;
use std::sync::mpsc;
use std::sync::Arc;
use tokio::runtime::Handle;

use crate::client::{HttpSummaryClient, SummaryService};
use crate::config::Config;
use crate::controller::{CompletionSink, SummaryRequestController};

/// How a one-shot run ended.
#[derive(Debug, Clone, PartialEq)]
pub enum HeadlessResult {
    /// Query was blank; nothing was sent.
    Blank,
    Summary(String),
    /// The request failed; carries the user-facing message.
    Failed(String),
}

/// Run one controller cycle for `query` and wait for it to settle.
///
/// Must not be called from inside the runtime: it blocks the calling thread.
pub fn run_once<S: SummaryService>(service: Arc<S>, runtime: Handle, query: &str) -> HeadlessResult {
    let (tx, rx) = mpsc::channel();
    let sink: CompletionSink = Arc::new(move |completion| {
        let _ = tx.send(completion);
    });
    let mut controller = SummaryRequestController::new(service, runtime, sink);

    controller.update_query(query);
    if controller.trigger_summarize().is_none() {
        return HeadlessResult::Blank;
    }

    let Ok(completion) = rx.recv() else {
        return HeadlessResult::Failed(crate::controller::ERROR_MESSAGE.to_string());
    };
    controller.on_completion(completion);

    let state = controller.state();
    let result = state.result().to_string();
    if state.last_failed() {
        HeadlessResult::Failed(result)
    } else {
        HeadlessResult::Summary(result)
    }
}

/// `--query` entry point: prints the result to stdout.
pub fn run(config: &Config, runtime: Handle, query: &str) -> anyhow::Result<ExitCode> {
    let client = Arc::new(
        HttpSummaryClient::new(&config.endpoint).context("Failed to build HTTP client")?,
    );

    match run_once(client, runtime, query) {
        HeadlessResult::Summary(summary) => {
            println!("{summary}");
            Ok(ExitCode::SUCCESS)
        }
        HeadlessResult::Failed(message) => {
            println!("{message}");
            Ok(ExitCode::FAILURE)
        }
        HeadlessResult::Blank => {
            eprintln!("Nothing to summarize: query is empty");
            Ok(ExitCode::FAILURE)
        }
    }
}
