//! OpenTelemetry Protocol (OTLP) support.
//!
//! This module exposes the OTLP protobuf messages the seeder builds and sends.
//!
//! # Example
//!
//! ```
//! use seeder::otlp::proto::collector::trace::v1::ExportTraceServiceRequest;
//!
//! let request = ExportTraceServiceRequest::default();
//! assert!(request.resource_spans.is_empty());
//! ```

/// Content type for protobuf request bodies.
pub const CONTENT_TYPE_PROTOBUF: &str = "application/x-protobuf";

/// Path of the OTLP/HTTP traces endpoint.
pub const TRACES_PATH: &str = "/v1/traces";

/// Path of the OTLP/HTTP logs endpoint.
pub const LOGS_PATH: &str = "/v1/logs";

/// Generated protobuf types from OTLP definitions.
pub mod proto {
    pub use opentelemetry_proto::tonic::{collector, common, logs, resource, trace};
}
