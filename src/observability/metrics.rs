//! Metrics collection and exposition.
//!
//! # Metrics
//! - `console_requests_total` (counter): requests by method, endpoint, status
//! - `console_request_duration_seconds` (histogram): latency distribution

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus exporter on `addr`.
///
/// Failure to bind is logged, not fatal: the service keeps running
/// without a metrics endpoint.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => {
            tracing::info!(address = %addr, "Metrics endpoint listening");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to install metrics exporter");
        }
    }
}

/// Record one completed request.
pub fn record_request(method: &str, endpoint: &str, status: u16, start: Instant) {
    let labels = [
        ("method", method.to_string()),
        ("endpoint", endpoint.to_string()),
        ("status", status.to_string()),
    ];

    counter!("console_requests_total", &labels).increment(1);
    histogram!("console_request_duration_seconds", &labels).record(start.elapsed().as_secs_f64());
}
