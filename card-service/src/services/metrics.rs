//! Prometheus metrics for card-service.

use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder,
};
use std::sync::OnceLock;

// Global registry
pub static REGISTRY: OnceLock<Registry> = OnceLock::new();

// Provider metrics
pub static CARD_PROVIDER_LATENCY_SECONDS: OnceLock<HistogramVec> = OnceLock::new();
pub static CARD_PROVIDER_ERRORS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();

// Image lookup metrics
pub static CARD_IMAGE_LOOKUPS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();

// Database metrics
pub static DB_ERRORS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();

/// Initialize all metrics. Must be called once at startup.
pub fn init_metrics() {
    let registry = Registry::new();

    // Provider latency histogram
    let provider_latency = HistogramVec::new(
        HistogramOpts::new(
            "card_provider_latency_seconds",
            "Text model API latency in seconds",
        )
        .buckets(vec![0.1, 0.5, 1.0, 2.0, 5.0, 10.0, 30.0, 60.0, 120.0]),
        &["provider", "model"],
    )
    .expect("Failed to create card_provider_latency_seconds metric");

    // Provider error counter
    let provider_errors = IntCounterVec::new(
        Opts::new("card_provider_errors_total", "Total text model errors"),
        &["provider", "error_type"],
    )
    .expect("Failed to create card_provider_errors_total metric");

    // Image lookup counter (hit / empty_bucket / unmapped)
    let image_lookups = IntCounterVec::new(
        Opts::new("card_image_lookups_total", "Total card image lookups"),
        &["outcome"],
    )
    .expect("Failed to create card_image_lookups_total metric");

    // Database error counter
    let db_errors = IntCounterVec::new(
        Opts::new("db_errors_total", "Total database errors"),
        &["operation", "collection"],
    )
    .expect("Failed to create db_errors_total metric");

    // Register all metrics
    registry
        .register(Box::new(provider_latency.clone()))
        .expect("Failed to register card_provider_latency_seconds");
    registry
        .register(Box::new(provider_errors.clone()))
        .expect("Failed to register card_provider_errors_total");
    registry
        .register(Box::new(image_lookups.clone()))
        .expect("Failed to register card_image_lookups_total");
    registry
        .register(Box::new(db_errors.clone()))
        .expect("Failed to register db_errors_total");

    // Initialize globals
    let _ = REGISTRY.set(registry);
    let _ = CARD_PROVIDER_LATENCY_SECONDS.set(provider_latency);
    let _ = CARD_PROVIDER_ERRORS_TOTAL.set(provider_errors);
    let _ = CARD_IMAGE_LOOKUPS_TOTAL.set(image_lookups);
    let _ = DB_ERRORS_TOTAL.set(db_errors);

    tracing::info!("Prometheus metrics initialized");
}

/// Get metrics in Prometheus text format.
pub fn get_metrics() -> String {
    let mut buffer = Vec::new();
    let encoder = TextEncoder::new();

    let registry = match REGISTRY.get() {
        Some(r) => r,
        None => {
            tracing::error!("Metrics registry not initialized");
            return "# Metrics registry not initialized\n".to_string();
        }
    };

    let metric_families = registry.gather();

    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!(error = %e, "Failed to encode metrics");
        return format!("# Failed to encode metrics: {}\n", e);
    }

    match String::from_utf8(buffer) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "Failed to convert metrics to UTF-8");
            format!("# Failed to convert metrics to UTF-8: {}\n", e)
        }
    }
}

// Helper functions for recording metrics

/// Record text model latency.
pub fn record_provider_latency(provider: &str, model: &str, duration_secs: f64) {
    if let Some(histogram) = CARD_PROVIDER_LATENCY_SECONDS.get() {
        histogram
            .with_label_values(&[provider, model])
            .observe(duration_secs);
    }
}

/// Record a text model error.
pub fn record_provider_error(provider: &str, error_type: &str) {
    if let Some(counter) = CARD_PROVIDER_ERRORS_TOTAL.get() {
        counter.with_label_values(&[provider, error_type]).inc();
    }
}

/// Record a card image lookup outcome.
pub fn record_image_lookup(outcome: &str) {
    if let Some(counter) = CARD_IMAGE_LOOKUPS_TOTAL.get() {
        counter.with_label_values(&[outcome]).inc();
    }
}

/// Record a database error.
pub fn record_db_error(operation: &str, collection: &str) {
    if let Some(counter) = DB_ERRORS_TOTAL.get() {
        counter.with_label_values(&[operation, collection]).inc();
    }
}
