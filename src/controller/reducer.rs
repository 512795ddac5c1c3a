//! Reducer for the summary request lifecycle.

use crate::ui::mvi::Reducer;

use super::intent::{SummaryIntent, SummaryOutcome};
use super::state::{SummaryState, ERROR_MESSAGE};

/// Reducer for summary state transitions.
pub struct SummaryReducer;

impl Reducer for SummaryReducer {
    type State = SummaryState;
    type Intent = SummaryIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SummaryIntent::QueryChanged { text } => SummaryState {
                query: text,
                ..state
            },

            SummaryIntent::Submit => {
                if !state.can_submit() {
                    return state;
                }
                SummaryState {
                    result: String::new(),
                    in_flight: true,
                    last_failed: false,
                    generation: state.generation.wrapping_add(1),
                    animation_tick: 0,
                    ..state
                }
            }

            SummaryIntent::Completed {
                generation,
                outcome,
            } => {
                // Only the latest dispatch may settle, and only once.
                if !state.accepts(generation) {
                    return state;
                }
                let (result, last_failed) = match outcome {
                    SummaryOutcome::Summary(summary) => (summary, false),
                    SummaryOutcome::Failed => (ERROR_MESSAGE.to_string(), true),
                };
                SummaryState {
                    result,
                    in_flight: false,
                    last_failed,
                    animation_tick: 0,
                    ..state
                }
            }

            SummaryIntent::Cancel => {
                if !state.in_flight {
                    return state;
                }
                SummaryState {
                    in_flight: false,
                    animation_tick: 0,
                    ..state
                }
            }

            SummaryIntent::AnimationTick => {
                if !state.in_flight {
                    return state;
                }
                SummaryState {
                    animation_tick: state.animation_tick.wrapping_add(1),
                    ..state
                }
            }
        }
    }
}
