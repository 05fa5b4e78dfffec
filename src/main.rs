mod model;
mod server;

use crate::server::{
    config::{Config, LISTEN_ADDR},
    error::AppError,
    router, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let env_file = dotenvy::dotenv();
    startup::init_tracing();
    startup::report_env_file(env_file);

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let app = router::app(AppState::new(db), &config.cors_allowed_origins);

    let listener = tokio::net::TcpListener::bind(LISTEN_ADDR).await?;
    tracing::info!("Server running on http://{}", LISTEN_ADDR);

    axum::serve(listener, app).await?;

    Ok(())
}
