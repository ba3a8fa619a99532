//! Error type for the seeder library.

use thiserror::Error;

/// Errors that can occur while seeding a collector.
#[derive(Debug, Error)]
pub enum SeederError {
    /// The endpoint is not an absolute http(s) URL.
    #[error("Invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint {
        /// The rejected endpoint.
        endpoint: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    /// The request could not be sent or its response could not be read.
    #[error("Failed to export to {url}")]
    Transport {
        /// The URL the request was sent to.
        url: String,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The export summary could not be encoded.
    #[error("Failed to encode export summary: {0}")]
    Summary(#[from] serde_json::Error),
}

/// Result type for seeder operations.
pub type Result<T> = std::result::Result<T, SeederError>;
