//! Parley Gateway CLI
//!
//! Starts the Gateway HTTP server.

use parley_gateway::{config::GatewayConfig, start_server, GatewayError};
use std::env;
use std::process;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        tracing::error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), GatewayError> {
    let args: Vec<String> = env::args().collect();

    let mut config = if args.len() > 2 && args[1] == "--config" {
        GatewayConfig::from_file(&args[2])?
    } else if args.len() > 1 && args[1] == "--help" {
        print_help();
        process::exit(0);
    } else {
        GatewayConfig::default()
    };

    config.apply_env()?;
    start_server(config).await
}

fn print_help() {
    println!("Parley Gateway - Translation proxy and record store");
    println!();
    println!("USAGE:");
    println!("    parley-gateway [--config <path-to-config.toml>]");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>    Load configuration from TOML file");
    println!("    --help             Print this help message");
    println!();
    println!("ENVIRONMENT:");
    println!("    PARLEY_DATABASE          SQLite database path");
    println!("    PORT                     Listening port (default: 3001)");
    println!("    PARLEY_BIND_ADDRESS      Bind address (default: 127.0.0.1)");
    println!("    PARLEY_ALLOWED_ORIGIN    Allowed CORS origin (default: http://localhost:5173)");
    println!("    PARLEY_PROVIDER_URL      Engine URL (default: http://127.0.0.1:5000)");
    println!("    PARLEY_PROVIDER_API_KEY  Translation engine API key");
    println!("    RUST_LOG                 Log filter (default: info)");
    println!();
}
