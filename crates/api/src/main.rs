//! Registrar API server

mod error;
mod handlers;
mod routes;
mod state;

use anyhow::Result;
use clap::Parser;
use registrar_utils::AppConfig;
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::state::AppState;

/// Course registration server
#[derive(Parser, Debug)]
#[command(name = "registrar", author, version, about, long_about = None)]
struct Cli {
    /// Bind host (overrides HOST)
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Audit queue capacity (overrides AUDIT_BUFFER)
    #[arg(long)]
    audit_buffer: Option<usize>,
}

impl Cli {
    fn apply(self, mut config: AppConfig) -> AppConfig {
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(buffer) = self.audit_buffer.filter(|n| *n > 0) {
            config.audit_buffer = buffer;
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Cli::parse().apply(AppConfig::from_env());

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let state = AppState::new(config.audit_buffer);
    state.audit.start();

    let app = routes::create_router(state.clone());
    let addr: SocketAddr = config.bind_address().parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(app = %config.app_name, "server running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    state.audit.shutdown().await;
    info!(
        recorded = state.audit.len(),
        dropped = state.audit.dropped(),
        "server stopped"
    );
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
