//! Request-scoped middleware.

pub mod metrics;
