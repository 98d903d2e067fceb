//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::path::Path;
use tempfile::TempDir;
use tokio::net::TcpListener;

use ran_console::config::ServiceConfig;
use ran_console::gateway::ConfigGateway;
use ran_console::http::HttpServer;
use ran_console::lifecycle::Shutdown;
use ran_console::subscribers::SubscriberDirectory;

/// Operator-maintained gNB file with content the form never touches.
pub const PLMN_FIXTURE: &str = "\
# gNB configuration -- operator maintained\n\
Active_gNBs = ( \"gNB-lab-01\" );\n\
gNB_ID    =  0xe00;\n\
gNB_name  =  \"gNB-lab-01\";\n\
tracking_area_code  =  1;\n\
plmn_list = ({ mcc = 001; mnc = 01; mnc_length = 2; });\n\
amf_ip_address = ( { ipv4 = \"192.168.70.132\"; } );\n";

pub const SIB8_FIXTURE: &str = "\
messageIdentifier=1112;\n\
serialNumber=3FF1;\n\
dataCodingScheme=11;\n\
text=Hello;\n\
lan=6537;\n";

/// Boot the full service on an ephemeral loopback port, with fixture
/// config files and an empty subscriber database inside `dir`.
///
/// Returns the bound address and the shutdown handle that stops the
/// spawned server.
pub async fn start_console(dir: &TempDir) -> (SocketAddr, Shutdown) {
    std::fs::write(dir.path().join("gnb.conf"), PLMN_FIXTURE).unwrap();
    std::fs::write(dir.path().join("sib8.conf"), SIB8_FIXTURE).unwrap();

    let mut config = ServiceConfig::default();
    config.files.plmn_path = dir.path().join("gnb.conf").to_string_lossy().into_owned();
    config.files.sib8_path = dir.path().join("sib8.conf").to_string_lossy().into_owned();
    config.database.path = dir
        .path()
        .join("subscribers.db")
        .to_string_lossy()
        .into_owned();
    // One exporter per process at most; the tests don't scrape it anyway.
    config.observability.metrics_enabled = false;

    let gateway = ConfigGateway::new(&config.files);
    let directory = SubscriberDirectory::open(
        Path::new(&config.database.path),
        config.subscriber_defaults.clone(),
    )
    .unwrap();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config, gateway, directory);

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}
