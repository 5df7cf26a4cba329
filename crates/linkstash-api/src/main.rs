//! linkstash gateway entry point.
//!
//! Binary name: `lsgw`
//!
//! Parses CLI arguments, connects the backend clients, then serves the REST
//! surface until interrupted.

mod http;
mod state;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use linkstash_infra::grpc::{GrpcLinksClient, GrpcUsersClient};

use crate::state::{AppState, GrpcAppState};

/// REST gateway in front of the linkstash gRPC backends.
#[derive(Debug, Parser)]
#[command(name = "lsgw", version, about)]
struct Cli {
    /// Address for the REST listener.
    #[arg(long, env = "LINKSTASH_LISTEN", default_value = "127.0.0.1:8080")]
    listen: String,

    /// Endpoint URI of the users backend service.
    #[arg(
        long,
        env = "LINKSTASH_USERS_BACKEND",
        default_value = "http://127.0.0.1:50051"
    )]
    users_backend: String,

    /// Endpoint URI of the links backend service.
    #[arg(
        long,
        env = "LINKSTASH_LINKS_BACKEND",
        default_value = "http://127.0.0.1:50052"
    )]
    links_backend: String,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Log errors only.
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "info",
        1 => "info,linkstash_api=debug,linkstash_infra=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let users = GrpcUsersClient::connect(&cli.users_backend).await?;
    let links = GrpcLinksClient::connect(&cli.links_backend).await?;
    let state: GrpcAppState = AppState::new(users, links);

    let listener = tokio::net::TcpListener::bind(&cli.listen).await?;
    tracing::info!("gateway listening on http://{}", cli.listen);

    let router = http::router::build_router(state);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
