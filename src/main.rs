use std::sync::Arc;

use tracing::info;

use arcade::web::WebServer;
use arcade::{Config, MemoryIdentityStore};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            Config::default()
        }
    };

    // Initialize logging
    if let Err(e) = arcade::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        arcade::logging::init_console_only(&config.logging.level);
    }

    info!("Arcade - game lounge server");

    let store = Arc::new(MemoryIdentityStore::new());
    let server = WebServer::new(&config, store);

    if let Err(e) = server.run().await {
        tracing::error!("server error: {e}");
        std::process::exit(1);
    }
}
