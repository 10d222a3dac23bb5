//! Sales Directory Service - read-only HTTP API over generated accounts and contacts.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sales_service::{create_router, AppState, ServiceConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sales=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Sales Directory Service");

    let config = ServiceConfig::from_env();

    tracing::info!(
        listen_addr = %config.listen_addr,
        seed = config.seed,
        catalog_path = ?config.catalog_path,
        "Service configuration loaded"
    );

    // The dataset must exist before the listener accepts traffic
    let state = AppState::from_config(config.clone())?;

    let app = create_router(state);

    tracing::info!(listen_addr = %config.listen_addr, "Starting HTTP server");
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
