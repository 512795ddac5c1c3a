//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_server;

use paper_summarizer::client::{SummarizeError, SummaryService};
use paper_summarizer::config::EndpointConfig;
use paper_summarizer::controller::{Completion, CompletionSink, SummaryRequestController};
use paper_summarizer::ui::app::App;
use std::net::TcpListener;
use std::sync::mpsc;
use std::sync::Arc;

/// Find a port with nothing listening on it.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Endpoint where nothing is listening (simulated offline server).
pub fn offline_endpoint() -> EndpointConfig {
    EndpointConfig {
        url: format!("http://127.0.0.1:{}/summarize", free_port()),
        timeout_seconds: Some(5),
    }
}

pub fn endpoint(url: String) -> EndpointConfig {
    EndpointConfig {
        url,
        timeout_seconds: Some(5),
    }
}

/// Always answers with the same reply; `None` means failure.
pub struct StaticService {
    pub reply: Option<String>,
}

impl SummaryService for StaticService {
    async fn summarize(&self, _query: &str) -> Result<String, SummarizeError> {
        self.reply.clone().ok_or(SummarizeError::MissingSummary)
    }
}

/// Never settles.
pub struct PendingService;

impl SummaryService for PendingService {
    async fn summarize(&self, _query: &str) -> Result<String, SummarizeError> {
        std::future::pending().await
    }
}

/// Build an App whose completions land in the returned receiver.
pub fn make_app<S: SummaryService>(
    service: S,
    runtime: &tokio::runtime::Runtime,
) -> (App<S>, mpsc::Receiver<Completion>) {
    let (tx, rx) = mpsc::channel();
    let sink: CompletionSink = Arc::new(move |completion| {
        let _ = tx.send(completion);
    });
    let controller =
        SummaryRequestController::new(Arc::new(service), runtime.handle().clone(), sink);
    (App::new(controller, "http://localhost:8000/summarize"), rx)
}
