//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events (request IDs flow through the log stream)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout log stream (env-filter controlled)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Metric updates are cheap (atomic increments behind the recorder)
//! - Labels carry method, route template and status code
//! - The exporter is optional; the service runs fine without it

pub mod metrics;
