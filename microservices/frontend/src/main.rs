//! Frontend service binary

use frontend::{AppState, Config, FrontendError};
use std::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing
    initialize_tracing();

    info!("Starting frontend service v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = Config::from_env();

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("{}", FrontendError::Config(e));
        std::process::exit(1);
    }

    info!("Relaying data requests to backend at {}", config.backend_url);

    let state = match AppState::new(config.backend_url.clone()) {
        Ok(state) => state,
        Err(e) => {
            error!("Failed to build HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    let listener = TcpListener::bind(config.bind_address())?;
    info!("Server is live at http://{}", config.bind_address());

    frontend::serve(listener, state)?.await
}

/// Initialize structured logging
fn initialize_tracing() {
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .json();

    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(&log_level))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
