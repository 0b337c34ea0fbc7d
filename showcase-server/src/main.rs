use showcase_server::{AppState, ServerError, build_router, logger};

use showcase_core::Tag;
use showcase_store::RestListStore;

use std::error::Error;
use std::str::FromStr;
use std::sync::Arc;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Local development convenience; the hosting environment injects these
    // variables in production
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = showcase_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = showcase_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting showcase-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Map the configured vocabulary into tags; unknown names fail startup
    let vocabulary = config
        .submissions
        .tags
        .iter()
        .map(|name| Tag::from_str(name))
        .collect::<Result<Vec<Tag>, _>>()
        .map_err(ServerError::Vocabulary)?;

    // Store client for the external list
    let store = Arc::new(RestListStore::new(&config.store.url, &config.store.token));

    // Build application state
    let state = AppState {
        store,
        list_key: config.store.key.clone(),
        vocabulary,
        allow_delete: config.submissions.allow_delete,
    };

    // Build router
    let app = build_router(state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown on SIGINT
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Graceful shutdown complete");

    Ok(())
}
