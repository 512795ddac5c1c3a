//! Summary request controller.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Query, result, in-flight flag and dispatch generation
//! - `intent.rs` - User/system actions
//! - `reducer.rs` - State transitions
//!
//! [`SummaryRequestController`] owns the state and performs the one side
//! effect the reducer cannot: spawning the request on the tokio runtime.
//! Completions come back through a [`CompletionSink`] and must be fed to
//! [`SummaryRequestController::on_completion`] on the thread that owns the
//! controller.

mod intent;
mod reducer;
mod state;

use std::sync::Arc;
use tokio::runtime::Handle;

use crate::client::{SummarizeError, SummaryService};
use crate::ui::mvi::Reducer;

pub use intent::{SummaryIntent, SummaryOutcome};
pub use reducer::SummaryReducer;
pub use state::{SummaryState, ERROR_MESSAGE};

/// A settled request, tagged with the generation it was dispatched under.
#[derive(Debug)]
pub struct Completion {
    pub generation: u64,
    pub outcome: Result<String, SummarizeError>,
}

/// Receives completions from the runtime. Called off the UI thread.
pub type CompletionSink = Arc<dyn Fn(Completion) + Send + Sync>;

pub struct SummaryRequestController<S: SummaryService> {
    state: SummaryState,
    service: Arc<S>,
    runtime: Handle,
    sink: CompletionSink,
}

impl<S: SummaryService> SummaryRequestController<S> {
    pub fn new(service: Arc<S>, runtime: Handle, sink: CompletionSink) -> Self {
        Self {
            state: SummaryState::default(),
            service,
            runtime,
            sink,
        }
    }

    pub fn state(&self) -> &SummaryState {
        &self.state
    }

    /// Replace the query verbatim.
    pub fn update_query(&mut self, text: impl Into<String>) {
        self.dispatch(SummaryIntent::QueryChanged { text: text.into() });
    }

    /// Start a request for the current query.
    ///
    /// Returns the dispatched generation, or `None` if the query is blank or
    /// a request is already in flight (nothing changes in that case).
    pub fn trigger_summarize(&mut self) -> Option<u64> {
        let before = self.state.generation();
        self.dispatch(SummaryIntent::Submit);
        if self.state.generation() == before {
            tracing::debug!(
                in_flight = self.state.is_in_flight(),
                "Summarize ignored"
            );
            return None;
        }

        let generation = self.state.generation();
        let query = self.state.query().to_string();
        let service = Arc::clone(&self.service);
        let sink = Arc::clone(&self.sink);

        tracing::info!(generation, query_len = query.len(), "Dispatching summarize request");

        self.runtime.spawn(async move {
            let outcome = service.summarize(&query).await;
            sink(Completion {
                generation,
                outcome,
            });
        });

        Some(generation)
    }

    /// Apply a settled request. Errors are logged here and collapse into
    /// the fixed error message.
    pub fn on_completion(&mut self, completion: Completion) {
        let Completion {
            generation,
            outcome,
        } = completion;

        if !self.state.accepts(generation) {
            match &outcome {
                Ok(_) => tracing::debug!(
                    generation,
                    current = self.state.generation(),
                    "Discarding stale summarize completion"
                ),
                Err(err) => tracing::debug!(
                    generation,
                    current = self.state.generation(),
                    kind = err.kind(),
                    error = %err,
                    "Discarding stale summarize failure"
                ),
            }
            return;
        }

        let outcome = match outcome {
            Ok(summary) => SummaryOutcome::Summary(summary),
            Err(err) => {
                tracing::error!(
                    generation,
                    kind = err.kind(),
                    error = %err,
                    "Summarize request failed"
                );
                SummaryOutcome::Failed
            }
        };

        self.dispatch(SummaryIntent::Completed {
            generation,
            outcome,
        });
    }

    /// Stop waiting for the in-flight request. Its completion will be
    /// discarded when it arrives. Returns `false` when idle.
    pub fn cancel(&mut self) -> bool {
        if !self.state.is_in_flight() {
            return false;
        }
        tracing::info!(generation = self.state.generation(), "Summarize request cancelled");
        self.dispatch(SummaryIntent::Cancel);
        true
    }

    pub fn tick(&mut self) {
        self.dispatch(SummaryIntent::AnimationTick);
    }

    fn dispatch(&mut self, intent: SummaryIntent) {
        self.state = SummaryReducer::reduce(std::mem::take(&mut self.state), intent);
    }
}
