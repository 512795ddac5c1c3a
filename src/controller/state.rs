//! State for the summary request lifecycle.

use crate::ui::mvi::UiState;

/// Shown in place of a summary when a request fails for any reason.
pub const ERROR_MESSAGE: &str = "Error fetching summary. Please check your server.";

/// Query text, last result and in-flight flag, plus the dispatch generation.
///
/// Fields are only changed by [`super::SummaryReducer`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SummaryState {
    pub(super) query: String,
    pub(super) result: String,
    pub(super) in_flight: bool,
    pub(super) last_failed: bool,
    pub(super) generation: u64,
    pub(super) animation_tick: u8,
}

impl UiState for SummaryState {}

impl SummaryState {
    /// Current query text, exactly as typed.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Summary text or the error message. Empty before the first
    /// completion and while a request is in flight.
    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Whether the most recent settled request failed. Reset on submit.
    pub fn last_failed(&self) -> bool {
        self.last_failed
    }

    /// Whether a completion for `generation` would be applied right now.
    pub fn accepts(&self, generation: u64) -> bool {
        self.in_flight && generation == self.generation
    }

    /// Generation of the most recent dispatch (0 before the first one).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    /// Whether the result region should be shown.
    pub fn has_result(&self) -> bool {
        !self.result.is_empty()
    }

    /// Whether the submit control is enabled.
    pub fn submit_enabled(&self) -> bool {
        !self.in_flight
    }

    /// Label for the submit control.
    pub fn submit_label(&self) -> &'static str {
        if self.in_flight {
            "Summarizing..."
        } else {
            "Summarize"
        }
    }

    /// Whether submitting now would dispatch a request.
    pub fn can_submit(&self) -> bool {
        !self.in_flight && !self.query.trim().is_empty()
    }
}
