//! Data models for the sample telemetry fixtures.
//!
//! This module contains typed attributes plus the span and log descriptions
//! the builder turns into protocol messages.

pub mod attribute;
pub mod log;
pub mod trace;

pub use attribute::{kv, AttributeValue};
pub use log::{LogLevel, LogSpec};
pub use trace::{SpanKind, SpanSpec, SpanStatus, DEFAULT_DURATION_MS};
