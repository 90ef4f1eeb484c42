//! Notification relay server
//!
//! Usage: fanout-relay [BIND_ADDR] [STATIC_DIR]
//!
//! Publish:   curl -d '{"Room": "lobby", "Msg": "hello"}' http://localhost:8080/s/
//! Subscribe: curl -N http://localhost:8080/n/lobby

use fanout_relay::server::parse_bind_addr;
use fanout_relay::{RelayServer, Result, ServerConfig};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    eprintln!("Usage: fanout-relay [BIND_ADDR] [STATIC_DIR]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  BIND_ADDR     Address to bind to (default: 0.0.0.0:8080)");
    eprintln!("  STATIC_DIR    Directory of static files (default: ./static)");
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut config = ServerConfig::default();
    if let Some(addr) = args.get(1) {
        config = config.bind(parse_bind_addr(addr)?);
    }
    if let Some(dir) = args.get(2) {
        config = config.static_dir(dir);
    }

    tracing::info!(
        addr = %config.bind_addr,
        static_dir = %config.static_dir.display(),
        "Starting relay"
    );

    let shutdown = shutdown_signal()?;
    let server = RelayServer::new(config);
    server.run_until(shutdown).await
}

/// Resolves on Ctrl-C, or SIGTERM on unix
#[cfg(unix)]
fn shutdown_signal() -> Result<impl std::future::Future<Output = ()>> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut terminate = signal(SignalKind::terminate())?;
    Ok(async move {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            _ = terminate.recv() => {}
        }
    })
}

#[cfg(not(unix))]
fn shutdown_signal() -> Result<impl std::future::Future<Output = ()>> {
    Ok(async {
        let _ = tokio::signal::ctrl_c().await;
    })
}
