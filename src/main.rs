use tracing::info;

use mediateca::media::{MediaService, MediaStore};
use mediateca::web::WebServer;
use mediateca::Config;

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
    if let Err(e) = mediateca::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        mediateca::logging::init_console_only(&config.logging.level);
    }

    info!("mediateca - media file server");

    let store = match MediaStore::new(&config.storage.root) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Failed to initialize storage at {}: {}", config.storage.root, e);
            std::process::exit(1);
        }
    };
    info!("Storage initialized at: {}", store.root().display());

    let server = match WebServer::new(&config.server, MediaService::new(store)) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("Failed to configure server: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
