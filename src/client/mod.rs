//! Client side of the summarization service.
//!
//! [`SummaryService`] is the seam the controller talks to; [`HttpSummaryClient`]
//! is the reqwest implementation used by the binary.

mod error;
mod http;

use std::future::Future;

pub use error::SummarizeError;
pub use http::{extract_summary, HttpSummaryClient, SummarizeRequest};

/// Anything that can turn a query into a summary.
pub trait SummaryService: Send + Sync + 'static {
    /// Request a summary for `query`. The query is sent as-is, untrimmed.
    fn summarize(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<String, SummarizeError>> + Send;
}
