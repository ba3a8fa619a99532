//! Exporter configuration.

use crate::error::{Result, SeederError};
use crate::otlp::{LOGS_PATH, TRACES_PATH};
use std::time::Duration;
use url::Url;

/// Default collector base URL.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8215";

/// Client-side timeout applied to each export request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Exporter configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExporterConfig {
    /// Collector base URL, without trailing slash.
    endpoint: String,
    /// Timeout for each request.
    pub timeout: Duration,
}

impl ExporterConfig {
    /// Creates a configuration for the given base URL.
    ///
    /// A trailing `/` is trimmed so the OTLP paths can be appended directly.
    ///
    /// # Errors
    ///
    /// Returns [`SeederError::InvalidEndpoint`] if the endpoint is not an
    /// absolute `http` or `https` URL.
    ///
    /// # Example
    ///
    /// ```
    /// use seeder::config::ExporterConfig;
    ///
    /// let config = ExporterConfig::new("http://collector:4318/").unwrap();
    /// assert_eq!(config.traces_url(), "http://collector:4318/v1/traces");
    /// assert_eq!(config.logs_url(), "http://collector:4318/v1/logs");
    /// ```
    pub fn new(endpoint: &str) -> Result<Self> {
        let invalid = |reason: String| SeederError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason,
        };

        let url = Url::parse(endpoint).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
        }

        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the collector base URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the traces export URL.
    #[must_use]
    pub fn traces_url(&self) -> String {
        format!("{}{TRACES_PATH}", self.endpoint)
    }

    /// Returns the logs export URL.
    #[must_use]
    pub fn logs_url(&self) -> String {
        format!("{}{LOGS_PATH}", self.endpoint)
    }
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExporterConfig::default();
        assert_eq!(config.endpoint(), "http://localhost:8215");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.traces_url(), "http://localhost:8215/v1/traces");
        assert_eq!(config.logs_url(), "http://localhost:8215/v1/logs");
    }

    #[test]
    fn test_new_matches_default() {
        let config = ExporterConfig::new(DEFAULT_ENDPOINT).unwrap();
        assert_eq!(config, ExporterConfig::default());
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ExporterConfig::new("https://otel.example.com/").unwrap();
        assert_eq!(config.endpoint(), "https://otel.example.com");
        assert_eq!(config.traces_url(), "https://otel.example.com/v1/traces");
    }

    #[test]
    fn test_path_prefix_kept() {
        let config = ExporterConfig::new("http://localhost:8080/telescope").unwrap();
        assert_eq!(config.logs_url(), "http://localhost:8080/telescope/v1/logs");
    }

    #[test]
    fn test_invalid_endpoints() {
        for endpoint in ["", "localhost:8215", "not a url", "ftp://collector"] {
            let err = ExporterConfig::new(endpoint).unwrap_err();
            assert!(
                matches!(err, SeederError::InvalidEndpoint { .. }),
                "{endpoint} should be rejected"
            );
        }
    }

    #[test]
    fn test_with_timeout() {
        let config = ExporterConfig::default().with_timeout(Duration::from_millis(250));
        assert_eq!(config.timeout, Duration::from_millis(250));
    }
}
