//! Telescope Seeder Library
//!
//! This crate builds a small, fixed set of sample OTLP traces and logs and
//! posts them to a collector over OTLP/HTTP.
//!
//! # Modules
//!
//! - [`models`] - Typed attributes and span/log descriptions
//! - [`builder`] - Turns descriptions into protocol messages
//! - [`fixture`] - The sample trace and its correlated logs
//! - [`exporter`] - Protobuf over HTTP transport
//!
//! # Example
//!
//! ```
//! use seeder::builder::TelemetryBuilder;
//! use seeder::fixture::first_span_context;
//!
//! let mut builder = TelemetryBuilder::system();
//! let traces = builder.traces_request();
//! let (trace_id, span_id) = first_span_context(&traces).unwrap();
//! let logs = builder.logs_request(trace_id, span_id);
//!
//! assert_eq!(traces.resource_spans[0].scope_spans[0].spans.len(), 5);
//! assert_eq!(logs.resource_logs[0].scope_logs[0].log_records.len(), 2);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod builder;
pub mod clock;
pub mod config;
pub mod error;
pub mod exporter;
pub mod fixture;
pub mod ids;
pub mod models;
pub mod otlp;
pub mod summary;


pub use builder::TelemetryBuilder;
pub use config::ExporterConfig;
pub use error::SeederError;
pub use exporter::{seed, Exporter};
pub use summary::{ExportOutcome, ExportSummary};

/// Re-export common dependencies for convenience.
pub use prost;
