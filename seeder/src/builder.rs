//! Builders for OTLP spans, events, resources and log records.
//!
//! [`TelemetryBuilder`] owns the two impure inputs of the fixtures, a
//! [`Clock`] and an [`IdGenerator`], so tests can pin both.

use crate::clock::{Clock, SystemClock};
use crate::ids::{IdGenerator, RandomIdGenerator};
use crate::models::attribute::{kv, to_key_values, AttributeValue};
use crate::models::{LogSpec, SpanSpec};
use crate::otlp::proto::common::v1::{any_value, AnyValue, InstrumentationScope};
use crate::otlp::proto::logs::v1::LogRecord;
use crate::otlp::proto::resource::v1::Resource;
use crate::otlp::proto::trace::v1::{span, Span};

/// Resource attribute naming the emitting service.
pub const SERVICE_NAME_KEY: &str = "service.name";

/// Builds protocol records from model specs.
#[derive(Debug, Clone)]
pub struct TelemetryBuilder<C = SystemClock, G = RandomIdGenerator> {
    clock: C,
    ids: G,
}

impl TelemetryBuilder {
    /// Creates a builder reading the wall clock and the OS RNG.
    #[must_use]
    pub fn system() -> Self {
        Self::new(SystemClock, RandomIdGenerator)
    }
}

impl Default for TelemetryBuilder {
    fn default() -> Self {
        Self::system()
    }
}

impl<C: Clock, G: IdGenerator> TelemetryBuilder<C, G> {
    /// Creates a builder with the given clock and identifier source.
    #[must_use]
    pub fn new(clock: C, ids: G) -> Self {
        Self { clock, ids }
    }

    /// Returns a new 16-byte trace identifier.
    pub fn new_trace_id(&mut self) -> Vec<u8> {
        self.ids.new_trace_id().to_vec()
    }

    /// Returns a new 8-byte span identifier.
    pub fn new_span_id(&mut self) -> Vec<u8> {
        self.ids.new_span_id().to_vec()
    }

    /// Builds a span starting now and ending `spec.duration_ms` later.
    ///
    /// # Example
    ///
    /// ```
    /// use seeder::builder::TelemetryBuilder;
    /// use seeder::clock::FixedClock;
    /// use seeder::ids::SeededIdGenerator;
    /// use seeder::models::SpanSpec;
    ///
    /// let builder = TelemetryBuilder::new(FixedClock(1_000), SeededIdGenerator::new(1));
    /// let span = builder.span(SpanSpec::new("heartbeat"), &[1; 16], &[2; 8]);
    /// assert_eq!(span.start_time_unix_nano, 1_000);
    /// assert_eq!(span.end_time_unix_nano, 50_001_000);
    /// ```
    #[must_use]
    pub fn span(&self, spec: SpanSpec, trace_id: &[u8], span_id: &[u8]) -> Span {
        let start = self.clock.now_unix_nanos();
        let end = start.saturating_add(spec.duration_nanos());

        Span {
            trace_id: trace_id.to_vec(),
            span_id: span_id.to_vec(),
            name: spec.name,
            kind: spec.kind.to_proto(),
            start_time_unix_nano: start,
            end_time_unix_nano: end,
            attributes: to_key_values(spec.attributes),
            events: spec.events,
            status: Some(spec.status.to_proto()),
            ..Default::default()
        }
    }

    /// Builds an `exception` span event stamped with the current time.
    #[must_use]
    pub fn exception_event(
        &self,
        exception_type: &str,
        message: &str,
        stacktrace: &str,
    ) -> span::Event {
        span::Event {
            time_unix_nano: self.clock.now_unix_nanos(),
            name: "exception".to_string(),
            attributes: vec![
                kv("exception.type", exception_type),
                kv("exception.message", message),
                kv("exception.stacktrace", stacktrace),
            ],
            ..Default::default()
        }
    }

    /// Builds a resource seeded with `service.name` and merged with `extra`.
    ///
    /// Extras are applied after the service name, last write wins: a
    /// `service.name` in `extra` replaces the seeded value in place.
    #[must_use]
    pub fn resource<I, K, V>(&self, service_name: &str, extra: I) -> Resource
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<AttributeValue>,
    {
        let mut attributes: Vec<(String, AttributeValue)> =
            vec![(SERVICE_NAME_KEY.to_string(), service_name.into())];

        for (key, value) in extra {
            let key = key.into();
            let value = value.into();
            match attributes.iter_mut().find(|(k, _)| *k == key) {
                Some(existing) => existing.1 = value,
                None => attributes.push((key, value)),
            }
        }

        Resource {
            attributes: to_key_values(attributes),
            ..Default::default()
        }
    }

    /// Builds an instrumentation scope with the given name.
    #[must_use]
    pub fn scope(&self, name: &str) -> InstrumentationScope {
        InstrumentationScope {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Builds a log record stamped now and correlated to the given span.
    #[must_use]
    pub fn log_record(&self, spec: LogSpec, trace_id: &[u8], span_id: &[u8]) -> LogRecord {
        LogRecord {
            time_unix_nano: self.clock.now_unix_nanos(),
            severity_text: spec.level.severity_text().to_string(),
            body: Some(AnyValue {
                value: Some(any_value::Value::StringValue(spec.message)),
            }),
            attributes: to_key_values(spec.attributes),
            trace_id: trace_id.to_vec(),
            span_id: span_id.to_vec(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::ids::SeededIdGenerator;
    use crate::models::{LogLevel, SpanKind, SpanStatus};
    use crate::otlp::proto::common::v1::KeyValue;
    use crate::otlp::proto::trace::v1::status::StatusCode;

    const NOW: u64 = 1_700_000_000_000_000_000;

    fn builder() -> TelemetryBuilder<FixedClock, SeededIdGenerator> {
        TelemetryBuilder::new(FixedClock(NOW), SeededIdGenerator::new(7))
    }

    fn string_attr<'a>(attrs: &'a [KeyValue], key: &str) -> Option<&'a str> {
        attrs.iter().find(|kv| kv.key == key).and_then(|kv| {
            match kv.value.as_ref().and_then(|v| v.value.as_ref()) {
                Some(any_value::Value::StringValue(s)) => Some(s.as_str()),
                _ => None,
            }
        })
    }

    #[test]
    fn test_span_default_duration() {
        let span = builder().span(SpanSpec::new("heartbeat"), &[1; 16], &[2; 8]);

        assert_eq!(span.start_time_unix_nano, NOW);
        assert_eq!(span.end_time_unix_nano - span.start_time_unix_nano, 50_000_000);
        assert_eq!(span.kind, SpanKind::Internal.to_proto());
        assert_eq!(span.status.unwrap().code, StatusCode::Unset as i32);
        assert!(span.attributes.is_empty());
        assert!(span.events.is_empty());
        assert!(span.parent_span_id.is_empty());
    }

    #[test]
    fn test_span_explicit_duration() {
        for duration_ms in [0, 1, 250, 10_000] {
            let spec = SpanSpec::new("op").with_duration_ms(duration_ms);
            let span = builder().span(spec, &[1; 16], &[2; 8]);
            assert_eq!(
                span.end_time_unix_nano - span.start_time_unix_nano,
                duration_ms * 1_000_000
            );
        }
    }

    #[test]
    fn test_span_carries_spec() {
        let b = builder();
        let event = b.exception_event("RuntimeError", "boom", "Traceback...");
        let spec = SpanSpec::new("processPayment")
            .with_kind(SpanKind::Server)
            .with_status(SpanStatus::Error)
            .with_attribute("http.method", "POST")
            .with_event(event);

        let span = b.span(spec, &[3; 16], &[4; 8]);

        assert_eq!(span.name, "processPayment");
        assert_eq!(span.trace_id, vec![3; 16]);
        assert_eq!(span.span_id, vec![4; 8]);
        assert_eq!(span.kind, SpanKind::Server.to_proto());
        assert_eq!(span.status.unwrap().code, StatusCode::Error as i32);
        assert_eq!(string_attr(&span.attributes, "http.method"), Some("POST"));
        assert_eq!(span.events.len(), 1);
    }

    #[test]
    fn test_exception_event() {
        let event = builder().exception_event("RuntimeError", "Payment gateway timeout", "Traceback...");

        assert_eq!(event.name, "exception");
        assert_eq!(event.time_unix_nano, NOW);
        let keys: Vec<&str> = event.attributes.iter().map(|kv| kv.key.as_str()).collect();
        assert_eq!(
            keys,
            ["exception.type", "exception.message", "exception.stacktrace"]
        );
        assert_eq!(
            string_attr(&event.attributes, "exception.message"),
            Some("Payment gateway timeout")
        );
    }

    #[test]
    fn test_resource_with_extras() {
        let resource = builder().resource("svc", [("deployment.environment", "local")]);

        assert_eq!(resource.attributes.len(), 2);
        assert_eq!(resource.attributes[0].key, SERVICE_NAME_KEY);
        assert_eq!(string_attr(&resource.attributes, SERVICE_NAME_KEY), Some("svc"));
        assert_eq!(
            string_attr(&resource.attributes, "deployment.environment"),
            Some("local")
        );
    }

    #[test]
    fn test_resource_service_name_override() {
        let resource = builder().resource("svc", [(SERVICE_NAME_KEY, "override")]);

        assert_eq!(resource.attributes.len(), 1);
        assert_eq!(
            string_attr(&resource.attributes, SERVICE_NAME_KEY),
            Some("override")
        );
    }

    #[test]
    fn test_resource_without_extras() {
        let resource = builder().resource("svc", Vec::<(String, AttributeValue)>::new());
        assert_eq!(resource.attributes.len(), 1);
        assert_eq!(string_attr(&resource.attributes, SERVICE_NAME_KEY), Some("svc"));
    }

    #[test]
    fn test_log_record() {
        let spec = LogSpec::new(LogLevel::Error, "Payment service timeout")
            .with_attribute("component", "payment")
            .with_attribute("retry", false);

        let record = builder().log_record(spec, &[5; 16], &[6; 8]);

        assert_eq!(record.time_unix_nano, NOW);
        assert_eq!(record.severity_text, "ERROR");
        assert_eq!(record.severity_number, 0);
        assert_eq!(record.trace_id, vec![5; 16]);
        assert_eq!(record.span_id, vec![6; 8]);
        assert_eq!(
            record.body.and_then(|b| b.value),
            Some(any_value::Value::StringValue(
                "Payment service timeout".to_string()
            ))
        );
        assert_eq!(
            record.attributes[1].value.as_ref().and_then(|v| v.value.clone()),
            Some(any_value::Value::BoolValue(false))
        );
    }

    #[test]
    fn test_ids_have_protocol_lengths() {
        let mut b = builder();
        assert_eq!(b.new_trace_id().len(), 16);
        assert_eq!(b.new_span_id().len(), 8);
    }
}
