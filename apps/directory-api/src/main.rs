use axum_helpers::server::{create_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::sync::Arc;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use domain_users::{MemoryUserRepository, UserService};
use email::LogNotifier;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    // Construct the directory service once at startup; the store lives
    // exactly as long as the process and is owned by this instance.
    let service = UserService::new(MemoryUserRepository::new());
    let notifier = Arc::new(LogNotifier::new());

    let state = AppState {
        config,
        service,
        notifier,
    };

    // Build router with API routes (state applied per domain router)
    let api_routes = api::routes(&state);

    // create_router adds docs/middleware to our composed routes
    let router = create_router::<openapi::ApiDoc>(api_routes).await?;

    // Merge the /health liveness endpoint
    let app = router.merge(health_router(state.config.app.clone()));

    info!(
        "Starting {} {}",
        state.config.app.name, state.config.app.version
    );

    create_app(app, &state.config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Directory API shutdown complete");
    Ok(())
}
