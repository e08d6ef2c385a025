use axum_helpers::server::{close_postgres, create_production_app, health_router};
use core_config::FromEnv;
use core_config::tracing::{init_tracing, install_color_eyre};
use migration::Migrator;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    core_config::load_dotenv();

    let config = Config::from_env()?;

    init_tracing(&config.environment, config.log_level);

    let db = database::postgres::connect_from_config(config.database.clone())
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    database::postgres::run_migrations::<Migrator>(&db, config.app.name)
        .await
        .map_err(|e| eyre::eyre!("Migrations failed: {}", e))?;

    let state = AppState { config, db };

    let api_routes = api::routes(&state);

    // create_router adds docs/middleware to our composed routes
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes);

    // - /health: liveness check with app name/version
    // - /ready: readiness check with a database ping
    let app = router
        .merge(health_router(state.config.app))
        .merge(api::ready_router(state.clone()));

    let shutdown_timeout = state.config.server.shutdown_timeout;
    info!(
        "Starting {} with graceful shutdown ({:?} timeout)",
        state.config.app.name, shutdown_timeout
    );

    create_production_app(
        app,
        &state.config.server,
        shutdown_timeout,
        close_postgres(state.db.clone(), "main"),
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Users API shutdown complete");
    Ok(())
}
