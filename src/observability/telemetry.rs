//! Span export to an external OTLP collector.
//!
//! # Responsibilities
//! - Build the OTLP span exporter and batching tracer provider
//! - Install the combined fmt + OpenTelemetry subscriber
//! - Flush buffered spans on process exit via [`TelemetryGuard`]

use opentelemetry::trace::TracerProvider as _;
use opentelemetry::{global, KeyValue};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::trace::TracerProvider;
use opentelemetry_sdk::Resource;
use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::TelemetryConfig;

/// Error type for telemetry initialization.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// OTLP exporter or provider construction failed.
    #[error("failed to initialize span exporter: {0}")]
    Exporter(#[from] opentelemetry::trace::TraceError),
}

/// Keeps the tracer provider alive and flushes it on drop.
///
/// Hold this in `main` for the whole process lifetime; dropping it shuts
/// the batching exporter down and pushes out any buffered spans.
pub struct TelemetryGuard {
    provider: TracerProvider,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        if let Err(e) = self.provider.shutdown() {
            eprintln!("telemetry shutdown error: {e}");
        }
    }
}

/// Initialize tracing with both the fmt layer and OTLP span export.
///
/// Installs the global subscriber, so the plain
/// [`logging::init`](crate::observability::logging::init) must not also be
/// called in the same process.
pub fn init(config: &TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(config.otlp_endpoint.clone())
        .build()?;

    let provider = TracerProvider::builder()
        .with_batch_exporter(exporter, opentelemetry_sdk::runtime::Tokio)
        .with_resource(Resource::new(vec![KeyValue::new(
            "service.name",
            config.service_name.clone(),
        )]))
        .build();

    global::set_tracer_provider(provider.clone());
    let tracer = provider.tracer("greeting-recorder");

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "greeting_recorder=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_opentelemetry::layer().with_tracer(tracer))
        .init();

    tracing::info!(
        endpoint = %config.otlp_endpoint,
        service_name = %config.service_name,
        "span export initialized"
    );

    Ok(TelemetryGuard { provider })
}
