//! DevOps info service entry point.

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use devops_info_service::api::{self, AppState};
use devops_info_service::config::Config;
use devops_info_service::metrics;
use devops_info_service::utils::shutdown_signal;

/// DevOps info service.
#[derive(Parser, Debug)]
#[command(name = "devops-info-service")]
#[command(about = "HTTP service reporting service metadata, host facts and uptime")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP server (default).
    Serve,

    /// Check configuration validity.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("devops_info_service=debug,info")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    metrics::init_metrics();

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(),
        Some(Command::Serve) | None => cmd_serve().await,
    }
}

/// Load and validate configuration, logging failures.
fn load_config() -> anyhow::Result<Config> {
    let config = Config::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    config.validate().map_err(|e| {
        error!("Invalid configuration: {}", e);
        e
    })?;

    Ok(config)
}

/// Check configuration validity.
fn cmd_check_config() -> anyhow::Result<()> {
    println!("======================================================================");
    println!("DEVOPS INFO SERVICE - CONFIGURATION CHECK");
    println!("======================================================================");

    let config = match load_config() {
        Ok(c) => c,
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration check failed"));
        }
    };

    println!("Configuration Summary:");
    println!("  Host: {}", config.host);
    println!("  Port: {}", config.port);
    println!("  Bind Address: {}", config.bind_addr());
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Run the HTTP server until a shutdown signal arrives.
async fn cmd_serve() -> anyhow::Result<()> {
    info!("Application starting...");

    let config = load_config()?;

    let state = AppState::new();
    let listener = TcpListener::bind(config.bind_addr()).await.map_err(|e| {
        error!("Failed to bind {}: {}", config.bind_addr(), e);
        e
    })?;
    info!("HTTP server listening on {}", listener.local_addr()?);

    api::serve(listener, state, shutdown_signal()).await?;

    info!("Server stopped");
    Ok(())
}
