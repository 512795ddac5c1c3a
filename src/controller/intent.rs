//! Intents for the summary request lifecycle.

use crate::ui::mvi::Intent;

/// How a request settled, as far as the UI cares.
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryOutcome {
    /// The service returned a summary.
    Summary(String),
    /// Anything went wrong; details were logged.
    Failed,
}

/// Intents that can be dispatched to the summary state.
#[derive(Debug, Clone)]
pub enum SummaryIntent {
    /// User edited the query. Replaces it verbatim.
    QueryChanged { text: String },

    /// User asked for a summary of the current query.
    Submit,

    /// A request settled.
    Completed {
        /// Generation the request was dispatched under.
        generation: u64,
        outcome: SummaryOutcome,
    },

    /// User gave up on the in-flight request.
    Cancel,

    /// Animation tick (for spinner updates).
    AnimationTick,
}

impl Intent for SummaryIntent {}
