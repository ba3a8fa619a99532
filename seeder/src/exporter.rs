//! OTLP/HTTP exporter.
//!
//! Posts protobuf-encoded export requests to a collector:
//!
//! - `POST <endpoint>/v1/traces` - `ExportTraceServiceRequest`
//! - `POST <endpoint>/v1/logs` - `ExportLogsServiceRequest`
//!
//! Each request is sent once. Any HTTP status is reported back as an
//! [`ExportOutcome`]; only transport failures are errors.

use crate::builder::TelemetryBuilder;
use crate::clock::Clock;
use crate::config::ExporterConfig;
use crate::error::{Result, SeederError};
use crate::fixture::first_span_context;
use crate::ids::IdGenerator;
use crate::otlp::proto::collector::logs::v1::ExportLogsServiceRequest;
use crate::otlp::proto::collector::trace::v1::ExportTraceServiceRequest;
use crate::otlp::CONTENT_TYPE_PROTOBUF;
use crate::summary::{ExportOutcome, ExportSummary};
use prost::Message;
use reqwest::header::CONTENT_TYPE;

/// Sends export requests to one collector endpoint.
#[derive(Debug, Clone)]
pub struct Exporter {
    client: reqwest::Client,
    config: ExporterConfig,
}

impl Exporter {
    /// Creates an exporter whose client applies the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns [`SeederError::Client`] if the HTTP client cannot be built.
    pub fn new(config: ExporterConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(SeederError::Client)?;

        Ok(Self { client, config })
    }

    /// Returns the exporter configuration.
    #[must_use]
    pub fn config(&self) -> &ExporterConfig {
        &self.config
    }

    /// Posts a trace export request to `/v1/traces`.
    ///
    /// # Errors
    ///
    /// Returns [`SeederError::Transport`] if the request fails to complete.
    pub async fn export_traces(&self, request: &ExportTraceServiceRequest) -> Result<ExportOutcome> {
        self.post_protobuf(self.config.traces_url(), request).await
    }

    /// Posts a log export request to `/v1/logs`.
    ///
    /// # Errors
    ///
    /// Returns [`SeederError::Transport`] if the request fails to complete.
    pub async fn export_logs(&self, request: &ExportLogsServiceRequest) -> Result<ExportOutcome> {
        self.post_protobuf(self.config.logs_url(), request).await
    }

    async fn post_protobuf(&self, url: String, message: &impl Message) -> Result<ExportOutcome> {
        let body = message.encode_to_vec();
        tracing::debug!(url = %url, bytes = body.len(), "Posting OTLP payload");

        let response = match self
            .client
            .post(&url)
            .header(CONTENT_TYPE, CONTENT_TYPE_PROTOBUF)
            .body(body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(source) => {
                tracing::error!(url = %url, error = %source, "Export request failed");
                return Err(SeederError::Transport { url, source });
            }
        };

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|source| SeederError::Transport {
                url: url.clone(),
                source,
            })?;

        if status.is_success() {
            tracing::info!(url = %url, status = status.as_u16(), "Export accepted");
        } else {
            tracing::warn!(url = %url, status = status.as_u16(), "Collector rejected export");
        }

        Ok(ExportOutcome::new(status.as_u16(), &text))
    }
}

/// Builds the sample trace and logs and posts them, traces first.
///
/// The logs are correlated to the first span of the trace.
///
/// # Errors
///
/// Returns [`SeederError::Transport`] if either request fails to complete.
/// Non-2xx responses are not errors; they are reported in the summary.
pub async fn seed<C, G>(
    exporter: &Exporter,
    builder: &mut TelemetryBuilder<C, G>,
) -> Result<ExportSummary>
where
    C: Clock,
    G: IdGenerator,
{
    let traces = builder.traces_request();
    let (trace_id, span_id) = first_span_context(&traces)
        .map(|(trace_id, span_id)| (trace_id.to_vec(), span_id.to_vec()))
        .unwrap_or_default();
    let logs = builder.logs_request(&trace_id, &span_id);

    tracing::info!(
        endpoint = exporter.config().endpoint(),
        trace_id = %hex::encode(&trace_id),
        span_id = %hex::encode(&span_id),
        "Seeding sample telemetry"
    );

    let traces = exporter.export_traces(&traces).await?;
    let logs = exporter.export_logs(&logs).await?;

    Ok(ExportSummary { traces, logs })
}
