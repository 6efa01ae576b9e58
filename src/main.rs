//! LearnHub server: wires all crates together and starts the HTTP API.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use learnhub_api::AppState;
use learnhub_core::config::{AppConfig, DatabaseProvider};
use learnhub_core::error::AppError;
use learnhub_database::{DatabasePool, MemoryUserStore, UserRepository, UserStore};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from files and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("LEARNHUB_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting LearnHub v{}", env!("CARGO_PKG_VERSION"));

    let mut database = None;
    let users: Arc<dyn UserStore> = match config.database.provider {
        DatabaseProvider::Postgres => {
            tracing::info!("Connecting to database...");
            let db = DatabasePool::connect(&config.database).await?;

            tracing::info!("Running database migrations...");
            learnhub_database::migration::run_migrations(db.pool()).await?;
            tracing::info!("Database migrations complete");

            let repository = UserRepository::new(db.pool().clone());
            database = Some(db);
            Arc::new(repository)
        }
        DatabaseProvider::Memory => {
            tracing::warn!("Using in-memory user store; accounts are lost on restart");
            Arc::new(MemoryUserStore::new())
        }
    };

    let state = AppState::new(config, users);
    let served = learnhub_api::serve(state).await;

    if let Some(db) = database {
        db.close().await;
    }

    served
}
