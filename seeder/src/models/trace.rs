//! Span and span event models.
//!
//! A [`SpanSpec`] describes a span before it is stamped with time. The
//! [`TelemetryBuilder`](crate::builder::TelemetryBuilder) turns it into a
//! protocol span using its clock.

use crate::models::attribute::AttributeValue;
use crate::otlp::proto::trace::v1::{span, status, Status};

/// Span duration used when none is given.
pub const DEFAULT_DURATION_MS: u64 = 50;

/// Status code for a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpanStatus {
    /// No status was set.
    #[default]
    Unset,
    /// The operation completed successfully.
    Ok,
    /// The operation failed.
    Error,
}

impl SpanStatus {
    /// Converts to the protocol status message.
    #[must_use]
    pub fn to_proto(self) -> Status {
        let code = match self {
            Self::Unset => status::StatusCode::Unset,
            Self::Ok => status::StatusCode::Ok,
            Self::Error => status::StatusCode::Error,
        };
        Status {
            code: code as i32,
            ..Default::default()
        }
    }
}

impl std::fmt::Display for SpanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unset => write!(f, "unset"),
            Self::Ok => write!(f, "ok"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Kind of span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpanKind {
    /// Kind was not specified.
    Unspecified,
    /// Default span kind (internal operation).
    #[default]
    Internal,
    /// The span represents a server handling a request.
    Server,
    /// The span represents a client making a request.
    Client,
    /// The span represents a producer sending a message.
    Producer,
    /// The span represents a consumer receiving a message.
    Consumer,
}

impl SpanKind {
    /// Converts to the protocol enum value.
    #[must_use]
    pub fn to_proto(self) -> i32 {
        let kind = match self {
            Self::Unspecified => span::SpanKind::Unspecified,
            Self::Internal => span::SpanKind::Internal,
            Self::Server => span::SpanKind::Server,
            Self::Client => span::SpanKind::Client,
            Self::Producer => span::SpanKind::Producer,
            Self::Consumer => span::SpanKind::Consumer,
        };
        kind as i32
    }
}

impl std::fmt::Display for SpanKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unspecified => write!(f, "unspecified"),
            Self::Internal => write!(f, "internal"),
            Self::Server => write!(f, "server"),
            Self::Client => write!(f, "client"),
            Self::Producer => write!(f, "producer"),
            Self::Consumer => write!(f, "consumer"),
        }
    }
}

/// Description of a span to be built.
///
/// # Example
///
/// ```
/// use seeder::models::{SpanKind, SpanSpec, SpanStatus};
///
/// let spec = SpanSpec::new("HTTP GET /orders")
///     .with_kind(SpanKind::Server)
///     .with_attribute("http.method", "GET")
///     .with_attribute("http.status_code", 200);
///
/// assert_eq!(spec.kind, SpanKind::Server);
/// assert_eq!(spec.status, SpanStatus::Unset);
/// assert_eq!(spec.duration_ms, 50);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SpanSpec {
    /// The name/operation of this span.
    pub name: String,

    /// The kind of span.
    pub kind: SpanKind,

    /// The status of the span.
    pub status: SpanStatus,

    /// Attributes in insertion order.
    pub attributes: Vec<(String, AttributeValue)>,

    /// Events attached to the span, in insertion order.
    pub events: Vec<span::Event>,

    /// Time between start and end, in milliseconds.
    pub duration_ms: u64,
}

impl SpanSpec {
    /// Creates an internal span spec with unset status and the default duration.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: SpanKind::default(),
            status: SpanStatus::default(),
            attributes: Vec::new(),
            events: Vec::new(),
            duration_ms: DEFAULT_DURATION_MS,
        }
    }

    /// Sets the span kind.
    #[must_use]
    pub fn with_kind(mut self, kind: SpanKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the span status.
    #[must_use]
    pub fn with_status(mut self, status: SpanStatus) -> Self {
        self.status = status;
        self
    }

    /// Adds an attribute to the span.
    #[must_use]
    pub fn with_attribute(
        mut self,
        key: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    /// Adds an event to the span.
    #[must_use]
    pub fn with_event(mut self, event: span::Event) -> Self {
        self.events.push(event);
        self
    }

    /// Sets the span duration.
    #[must_use]
    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Returns the duration in nanoseconds.
    #[must_use]
    pub fn duration_nanos(&self) -> u64 {
        self.duration_ms.saturating_mul(1_000_000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_spec_defaults() {
        let spec = SpanSpec::new("heartbeat");
        assert_eq!(spec.name, "heartbeat");
        assert_eq!(spec.kind, SpanKind::Internal);
        assert_eq!(spec.status, SpanStatus::Unset);
        assert!(spec.attributes.is_empty());
        assert!(spec.events.is_empty());
        assert_eq!(spec.duration_ms, DEFAULT_DURATION_MS);
        assert_eq!(spec.duration_nanos(), 50_000_000);
    }

    #[test]
    fn test_span_spec_keeps_attribute_order() {
        let spec = SpanSpec::new("GET api.backend.example")
            .with_attribute("net.peer.name", "api.backend.example")
            .with_attribute("http.method", "GET")
            .with_attribute("http.status_code", 200);

        let keys: Vec<&str> = spec.attributes.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["net.peer.name", "http.method", "http.status_code"]);
        assert_eq!(spec.attributes[2].1, AttributeValue::Int(200));
    }

    #[test]
    fn test_duration_nanos() {
        assert_eq!(SpanSpec::new("x").with_duration_ms(0).duration_nanos(), 0);
        assert_eq!(
            SpanSpec::new("x").with_duration_ms(1_234).duration_nanos(),
            1_234_000_000
        );
    }

    #[test]
    fn test_span_kind_to_proto() {
        assert_eq!(SpanKind::Unspecified.to_proto(), 0);
        assert_eq!(SpanKind::Internal.to_proto(), 1);
        assert_eq!(SpanKind::Server.to_proto(), 2);
        assert_eq!(SpanKind::Client.to_proto(), 3);
        assert_eq!(SpanKind::Producer.to_proto(), 4);
        assert_eq!(SpanKind::Consumer.to_proto(), 5);
    }

    #[test]
    fn test_span_status_to_proto() {
        assert_eq!(SpanStatus::Unset.to_proto().code, 0);
        assert_eq!(SpanStatus::Ok.to_proto().code, 1);
        assert_eq!(SpanStatus::Error.to_proto().code, 2);
        assert!(SpanStatus::Error.to_proto().message.is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(SpanKind::Server.to_string(), "server");
        assert_eq!(SpanStatus::Error.to_string(), "error");
    }
}
