//! The fixed sample trace and its correlated logs.
//!
//! The trace models one request flow: an incoming HTTP request, a downstream
//! HTTP call, a database query, a failing payment operation and a bare
//! heartbeat. The logs point at the first span of that trace.

use crate::builder::TelemetryBuilder;
use crate::clock::Clock;
use crate::ids::IdGenerator;
use crate::models::{AttributeValue, LogLevel, LogSpec, SpanKind, SpanSpec, SpanStatus};
use crate::otlp::proto::collector::logs::v1::ExportLogsServiceRequest;
use crate::otlp::proto::collector::trace::v1::ExportTraceServiceRequest;
use crate::otlp::proto::logs::v1::{ResourceLogs, ScopeLogs};
use crate::otlp::proto::trace::v1::{ResourceSpans, ScopeSpans};

/// Service name reported on both resources.
pub const SERVICE_NAME: &str = "telescope-otel-seeder";

/// Instrumentation scope name shared by all spans and logs.
pub const SCOPE_NAME: &str = "manual-seeder";

/// Environment tag attached to the trace resource only.
pub const DEPLOYMENT_ENVIRONMENT: (&str, &str) = ("deployment.environment", "local");

impl<C: Clock, G: IdGenerator> TelemetryBuilder<C, G> {
    /// Builds the five-span sample trace request.
    ///
    /// All spans share one fresh trace id and get their own span id.
    pub fn traces_request(&mut self) -> ExportTraceServiceRequest {
        let trace_id = self.new_trace_id();

        let specs = [
            SpanSpec::new("HTTP GET /orders")
                .with_kind(SpanKind::Server)
                .with_attribute("http.method", "GET")
                .with_attribute("http.target", "/orders")
                .with_attribute("http.status_code", 200),
            SpanSpec::new("GET api.backend.example")
                .with_kind(SpanKind::Client)
                .with_attribute("net.peer.name", "api.backend.example")
                .with_attribute("http.method", "GET")
                .with_attribute("http.url", "https://api.backend.example/users/42")
                .with_attribute("http.status_code", 200),
            SpanSpec::new("SELECT users")
                .with_kind(SpanKind::Internal)
                .with_attribute("db.system", "mysql")
                .with_attribute("db.statement", "SELECT * FROM users WHERE id = 42")
                .with_attribute("db.user", "app")
                .with_attribute("net.peer.name", "mysql-primary"),
            SpanSpec::new("processPayment")
                .with_kind(SpanKind::Server)
                .with_attribute("http.method", "POST")
                .with_attribute("http.target", "/pay")
                .with_attribute("http.status_code", 500)
                .with_status(SpanStatus::Error)
                .with_event(self.exception_event(
                    "RuntimeError",
                    "Payment gateway timeout",
                    "Traceback...",
                )),
            SpanSpec::new("heartbeat"),
        ];

        let spans = specs
            .into_iter()
            .map(|spec| {
                let span_id = self.new_span_id();
                self.span(spec, &trace_id, &span_id)
            })
            .collect();

        let scope_spans = ScopeSpans {
            scope: Some(self.scope(SCOPE_NAME)),
            spans,
            ..Default::default()
        };

        let resource_spans = ResourceSpans {
            resource: Some(self.resource(SERVICE_NAME, [DEPLOYMENT_ENVIRONMENT])),
            scope_spans: vec![scope_spans],
            ..Default::default()
        };

        ExportTraceServiceRequest {
            resource_spans: vec![resource_spans],
        }
    }

    /// Builds the two sample log records correlated to the given span.
    ///
    /// The resource carries only the service name, unlike the trace resource.
    #[must_use]
    pub fn logs_request(&self, trace_id: &[u8], span_id: &[u8]) -> ExportLogsServiceRequest {
        let info = LogSpec::new(LogLevel::Info, "User viewed /orders")
            .with_attribute("http.target", "/orders")
            .with_attribute("user.id", 42);
        let error = LogSpec::new(LogLevel::Error, "Payment service timeout")
            .with_attribute("component", "payment")
            .with_attribute("retry", false);

        let scope_logs = ScopeLogs {
            scope: Some(self.scope(SCOPE_NAME)),
            log_records: vec![
                self.log_record(info, trace_id, span_id),
                self.log_record(error, trace_id, span_id),
            ],
            ..Default::default()
        };

        let resource_logs = ResourceLogs {
            resource: Some(
                self.resource(SERVICE_NAME, Vec::<(String, AttributeValue)>::new()),
            ),
            scope_logs: vec![scope_logs],
            ..Default::default()
        };

        ExportLogsServiceRequest {
            resource_logs: vec![resource_logs],
        }
    }
}

/// Returns the trace id and span id of the first span in the request.
///
/// Returns `None` when the request holds no spans.
#[must_use]
pub fn first_span_context(request: &ExportTraceServiceRequest) -> Option<(&[u8], &[u8])> {
    request
        .resource_spans
        .first()?
        .scope_spans
        .first()?
        .spans
        .first()
        .map(|span| (span.trace_id.as_slice(), span.span_id.as_slice()))
}
