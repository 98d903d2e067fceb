//! Lifecycle management.
//!
//! # Design Decisions
//! - One broadcast channel fans the stop signal out to every long-running
//!   task; tests use it to stop the server deterministically

pub mod shutdown;

pub use shutdown::Shutdown;
