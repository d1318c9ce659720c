use axum_helpers::server::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_tasks::InMemoryTaskRepository;
use migration::Migrator;
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::{AppState, TaskStore};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    info!(store = %config.store, "Selecting task store");
    let store = match &config.database {
        Some(db_config) => {
            let db = database::postgres::connect_from_config_with_retry(db_config.clone(), None)
                .await
                .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;
            database::postgres::run_migrations::<Migrator>(&db, config.app.name).await?;
            TaskStore::Postgres(db)
        }
        None => TaskStore::Memory(InMemoryTaskRepository::new()),
    };

    let state = AppState { config, store };
    let app = api::app(&state)?;
    let server_config = state.config.server.clone();

    info!("Starting taskman API (30s shutdown timeout)");

    create_production_app(app, &server_config, Duration::from_secs(30), async move {
        if let TaskStore::Postgres(db) = state.store {
            info!("Shutting down: closing database connections");
            match db.close().await {
                Ok(_) => info!("PostgreSQL connection closed successfully"),
                Err(e) => tracing::error!("Error closing PostgreSQL: {}", e),
            }
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Taskman API shutdown complete");
    Ok(())
}
