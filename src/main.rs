mod model;
mod server;

use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client();

    let state = AppState::new(db, http_client, config);

    tracing::info!("Starting server on {}", state.config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&state.config.bind_addr)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to bind listener: {e}")))?;

    let app = router::router(&state).with_state(state);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::InternalError(format!("Server error: {e}")))?;

    Ok(())
}
