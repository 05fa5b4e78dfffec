use std::path::PathBuf;

use sea_orm::DatabaseConnection;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{config::Config, error::AppError};

const DEFAULT_LOG_FILTER: &str = "feedback_manager=info,tower_http=info";

/// Installs the global tracing subscriber.
///
/// Honors `RUST_LOG` when set, otherwise logs this crate and request traces at
/// info level.
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Logs the outcome of loading the local `.env` file.
///
/// The file is optional; a missing or unreadable file only produces a warning and
/// configuration falls back to the process environment.
pub fn report_env_file(result: Result<PathBuf, dotenvy::Error>) {
    match result {
        Ok(path) => tracing::info!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {
            tracing::warn!(".env file not found, using process environment")
        }
        Err(e) => tracing::warn!("Failed to load .env file, using process environment: {}", e),
    }
}

/// Connects to the Postgres database and ensures the feedback table exists.
///
/// Failure here is fatal to startup; there is no retry.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with the schema in place
/// - `Err(AppError::DbErr)` - Failed to connect to database or create the table
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    bootstrap_schema(&db).await?;

    Ok(db)
}

/// Runs pending migrations, creating the feedback table if it is absent.
pub async fn bootstrap_schema(db: &DatabaseConnection) -> Result<(), AppError> {
    use migration::{Migrator, MigratorTrait};

    Migrator::up(db, None).await?;

    Ok(())
}
