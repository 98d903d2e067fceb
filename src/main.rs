//! Service binary: load config, wire the subsystems, serve.

use std::path::Path;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ran_console::config::loader::load_config;
use ran_console::config::ServiceConfig;
use ran_console::gateway::ConfigGateway;
use ran_console::http::HttpServer;
use ran_console::lifecycle::Shutdown;
use ran_console::observability::metrics;
use ran_console::subscribers::SubscriberDirectory;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Optional config file path as the single positional argument;
    // defaults cover a local lab run.
    let config = match std::env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => ServiceConfig::default(),
    };

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.observability.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("ran-console v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        plmn_path = %config.files.plmn_path,
        sib8_path = %config.files.sib8_path,
        database_path = %config.database.path,
        "Configuration loaded"
    );

    // Initialize metrics exporter
    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    // Store handle is acquired once here and owned by the directory for
    // the life of the process.
    let gateway = ConfigGateway::new(&config.files);
    let directory = SubscriberDirectory::open(
        Path::new(&config.database.path),
        config.subscriber_defaults.clone(),
    )?;

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, gateway, directory);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
