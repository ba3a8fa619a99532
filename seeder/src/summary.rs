//! Export outcome reporting.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Number of response body characters kept in an outcome.
pub const MAX_RESPONSE_TEXT_CHARS: usize = 200;

/// Status and (truncated) body of one export response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOutcome {
    /// HTTP status code returned by the collector.
    pub status_code: u16,
    /// First characters of the response body.
    pub text: String,
}

impl ExportOutcome {
    /// Creates an outcome, keeping the first 200 characters of `body`.
    #[must_use]
    pub fn new(status_code: u16, body: &str) -> Self {
        Self {
            status_code,
            text: body.chars().take(MAX_RESPONSE_TEXT_CHARS).collect(),
        }
    }

    /// Returns true if the collector answered with a 2xx status.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// Outcomes of the traces and logs exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSummary {
    /// Outcome of `POST /v1/traces`.
    pub traces: ExportOutcome,
    /// Outcome of `POST /v1/logs`.
    pub logs: ExportOutcome,
}

impl ExportSummary {
    /// Renders the summary as JSON indented with two spaces.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
