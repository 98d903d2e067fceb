//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, timeout, body limit, CORS)
//! - Bind the server to a listener
//! - Graceful shutdown on Ctrl+C or a lifecycle broadcast

use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::{broadcast, Mutex};
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServiceConfig;
use crate::gateway::ConfigGateway;
use crate::http::handlers;
use crate::http::middleware::metrics::track_requests;
use crate::http::request::MakeRequestUuid;
use crate::subscribers::SubscriberDirectory;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<ConfigGateway>,
    pub directory: Arc<Mutex<SubscriberDirectory>>,
}

/// HTTP server for the console service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and
    /// already-initialized collaborators.
    pub fn new(
        config: ServiceConfig,
        gateway: ConfigGateway,
        directory: SubscriberDirectory,
    ) -> Self {
        let state = AppState {
            gateway: Arc::new(gateway),
            directory: Arc::new(Mutex::new(directory)),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        Router::new()
            .route("/api/status", get(handlers::get_status))
            .route(
                "/api/plmn",
                get(handlers::get_plmn).post(handlers::save_plmn),
            )
            .route(
                "/api/sib8",
                get(handlers::get_sib8).post(handlers::save_sib8),
            )
            .route(
                "/api/subscribers",
                get(handlers::list_subscribers).post(handlers::create_subscriber),
            )
            .route(
                "/api/subscribers/{ueid}",
                get(handlers::get_subscriber)
                    .put(handlers::update_subscriber)
                    .delete(handlers::delete_subscriber),
            )
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                    .layer(TraceLayer::new_for_http())
                    .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    )))
                    .layer(PropagateRequestIdLayer::x_request_id())
                    .layer(CorsLayer::permissive()),
            )
            .layer(middleware::from_fn(track_requests))
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Stops on Ctrl+C or when the shutdown broadcast fires, whichever
    /// comes first.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        let app = self.router.into_make_service();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = shutdown_signal() => {}
                    _ = shutdown.recv() => {
                        tracing::info!("Shutdown broadcast received");
                    }
                }
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
