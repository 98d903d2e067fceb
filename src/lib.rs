//! RAN Config Console Service
//!
//! A small REST service for operating a lab 5G radio network: it edits the
//! PLMN identity block of the gNB configuration, the SIB8 cell-broadcast
//! warning template, and a directory of subscriber credentials.
//!
//! # Architecture Overview
//!
//! ```text
//!                  ┌────────────────────────────────────────────────┐
//!                  │                 CONSOLE SERVICE                │
//!                  │                                                │
//!   Browser form   │  ┌─────────┐   ┌──────────┐   ┌────────────┐  │
//!   ───────────────┼─▶│  http   │──▶│ gateway  │──▶│ plmn /sib8 │──┼──▶ gnb.conf
//!   (JSON)         │  │ server  │   │          │   │   codecs   │  │    sib8.conf
//!                  │  └────┬────┘   └──────────┘   └────────────┘  │
//!                  │       │                                       │
//!                  │       │        ┌─────────────┐                │
//!                  │       └───────▶│ subscribers │────────────────┼──▶ subscribers.db
//!                  │                │  directory  │                │
//!                  │                └─────────────┘                │
//!                  │                                               │
//!                  │  ┌─────────────────────────────────────────┐  │
//!                  │  │          Cross-Cutting Concerns         │  │
//!                  │  │  config · observability · lifecycle     │  │
//!                  │  └─────────────────────────────────────────┘  │
//!                  └───────────────────────────────────────────────┘
//! ```

// Core subsystems
pub mod config;
pub mod gateway;
pub mod http;
pub mod plmn;
pub mod sib8;
pub mod subscribers;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
