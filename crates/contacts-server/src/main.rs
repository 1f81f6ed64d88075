//! contacts-server: Contacts Service Main Binary
//!
//! Main entry point for the contacts REST service.
//!
//! Usage:
//!   contacts-server           - Start the HTTP API server
//!   contacts-server --help    - Show help
//!   contacts-server --version - Show version

use contacts_core::{Config, ContactStore};
use tracing_subscriber::EnvFilter;

/// Run mode
enum RunMode {
    /// HTTP API server
    Server,
    /// Show help
    Help,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    match parse_args() {
        RunMode::Help => {
            print_help();
            return Ok(());
        }
        RunMode::Version => {
            println!("contacts-server {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        RunMode::Server => {}
    }

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    // Load .env file
    dotenvy::dotenv().ok();

    // Load configuration from environment
    let config = Config::from_env().map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    tracing::info!("Starting contacts-server...");
    tracing::info!("Database: {}", config.storage.db_path);

    // Open the store once; it is shared for the life of the process
    let store = ContactStore::new(&config.storage.db_path)
        .map_err(|e| anyhow::anyhow!("Failed to open contact store: {}", e))?;

    // Start HTTP API server
    let api_port = config.api.port;
    let handle = tokio::spawn(async move {
        if let Err(e) = contacts_api::start_server(api_port, store).await {
            tracing::error!("HTTP API error: {}", e);
        }
    });
    tracing::info!("HTTP API server started on port {}", api_port);
    tracing::info!("Press Ctrl+C to exit");

    // Wait for shutdown signal
    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down...");

    handle.abort();

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Parse command line arguments
fn parse_args() -> RunMode {
    let args: Vec<String> = std::env::args().collect();

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--help" | "-h" => return RunMode::Help,
            "--version" | "-v" => return RunMode::Version,
            _ => {}
        }
    }

    RunMode::Server
}

/// Print help message
fn print_help() {
    println!("contacts-server - Contacts REST service");
    println!();
    println!("Usage:");
    println!("  contacts-server           Start the HTTP API server");
    println!("  contacts-server --help    Show this help message");
    println!("  contacts-server --version Show version");
    println!();
    println!("Environment Variables:");
    println!("  API_PORT             HTTP API port (default: 3001)");
    println!("  DB_PATH              SQLite database path (default: contacts.db)");
    println!("  RUST_LOG             Log filter (default: info)");
}
