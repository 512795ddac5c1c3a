//! reqwest-backed summarization client.

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::{Duration, Instant};

use crate::config::EndpointConfig;

use super::error::SummarizeError;
use super::SummaryService;

/// Request body sent to the summarize endpoint.
#[derive(Debug, Serialize)]
pub struct SummarizeRequest<'a> {
    pub query: &'a str,
}

/// Client for the summarize endpoint.
pub struct HttpSummaryClient {
    client: Client,
    url: String,
}

impl HttpSummaryClient {
    /// Build a client for the configured endpoint.
    ///
    /// No timeout is applied unless `timeout_seconds` is set.
    pub fn new(config: &EndpointConfig) -> Result<Self, SummarizeError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            url: config.url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl SummaryService for HttpSummaryClient {
    async fn summarize(&self, query: &str) -> Result<String, SummarizeError> {
        tracing::debug!(
            url = %self.url,
            query_len = query.len(),
            "Sending summarize request"
        );

        let start = Instant::now();
        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .json(&SummarizeRequest { query })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        let latency_ms = start.elapsed().as_millis() as u64;

        if !status.is_success() {
            tracing::warn!(
                status = %status,
                latency_ms,
                "Summarize endpoint returned error status"
            );
            return Err(SummarizeError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let value: Value = serde_json::from_str(&body)?;
        let summary = extract_summary(value)?;

        tracing::debug!(
            status = %status,
            latency_ms,
            summary_len = summary.len(),
            "Summarize request completed"
        );

        Ok(summary)
    }
}

/// Pull the `summary` string out of an untyped response body.
pub fn extract_summary(body: Value) -> Result<String, SummarizeError> {
    let Value::Object(mut fields) = body else {
        return Err(SummarizeError::MissingSummary);
    };

    match fields.remove("summary") {
        None | Some(Value::Null) => Err(SummarizeError::MissingSummary),
        Some(Value::String(summary)) => Ok(summary),
        Some(other) => Err(SummarizeError::UnexpectedSummaryType {
            found: json_type_name(&other),
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
