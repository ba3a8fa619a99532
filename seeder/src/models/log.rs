//! Log record model.
//!
//! Defines [`LogSpec`], the description of a log record before it is stamped
//! with time and correlated to a span.

use crate::models::attribute::AttributeValue;

/// Log severity level.
///
/// Follows the OTLP short severity names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LogLevel {
    /// Detailed debug information.
    Trace,
    /// Debug information.
    Debug,
    /// Informational messages.
    #[default]
    Info,
    /// Warning conditions.
    Warn,
    /// Error conditions.
    Error,
    /// Critical/fatal conditions.
    Fatal,
}

impl LogLevel {
    /// Returns the severity text carried on the wire.
    #[must_use]
    pub fn severity_text(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.severity_text())
    }
}

/// Description of a log record to be built.
#[derive(Debug, Clone, PartialEq)]
pub struct LogSpec {
    /// Severity level of the log.
    pub level: LogLevel,

    /// The log message, sent as a string body.
    pub message: String,

    /// Attributes in insertion order.
    pub attributes: Vec<(String, AttributeValue)>,
}

impl LogSpec {
    /// Creates a new log spec without attributes.
    ///
    /// # Example
    ///
    /// ```
    /// use seeder::models::{LogLevel, LogSpec};
    ///
    /// let log = LogSpec::new(LogLevel::Error, "Payment service timeout")
    ///     .with_attribute("retry", false);
    /// assert_eq!(log.level.severity_text(), "ERROR");
    /// assert_eq!(log.attributes.len(), 1);
    /// ```
    #[must_use]
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            attributes: Vec::new(),
        }
    }

    /// Adds an attribute to the log record.
    #[must_use]
    pub fn with_attribute(
        mut self,
        key: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_text() {
        assert_eq!(LogLevel::Trace.severity_text(), "TRACE");
        assert_eq!(LogLevel::Debug.severity_text(), "DEBUG");
        assert_eq!(LogLevel::Info.severity_text(), "INFO");
        assert_eq!(LogLevel::Warn.severity_text(), "WARN");
        assert_eq!(LogLevel::Error.severity_text(), "ERROR");
        assert_eq!(LogLevel::Fatal.severity_text(), "FATAL");
        assert_eq!(LogLevel::default(), LogLevel::Info);
    }

    #[test]
    fn test_log_spec_attributes() {
        let log = LogSpec::new(LogLevel::Info, "User viewed /orders")
            .with_attribute("http.target", "/orders")
            .with_attribute("user.id", 42);

        assert_eq!(log.message, "User viewed /orders");
        assert_eq!(log.attributes[0].0, "http.target");
        assert_eq!(log.attributes[1].1, AttributeValue::Int(42));
    }
}
