//! HTTP transport subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → handlers.rs (thin dispatch: JSON ⇄ gateway/directory calls)
//!     → response (record JSON, {success, message} or {error})
//! ```
//!
//! The transport is a thin dispatcher by design: every non-trivial
//! invariant lives in the gateway, the codecs and the directory. Handlers
//! only translate between HTTP and those components.

pub mod handlers;
pub mod middleware;
pub mod request;
pub mod server;

pub use request::MakeRequestUuid;
pub use server::{AppState, HttpServer};
