use anyhow::Result;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use calview::{
    config::{ClientSecrets, Configuration},
    services::OAuthClient,
    AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing with structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false),
        )
        .init();

    // Load configuration, once, before any request is handled
    let configuration = Configuration::new()?;
    tracing::info!("Configuration loaded successfully");

    // Initialize services
    let secrets = ClientSecrets::from_file(&configuration.google.client_secrets_file)?;
    let oauth_client = Arc::new(OAuthClient::new(&secrets.web)?);
    let cookie_key = configuration.session.signing_key()?;

    let app_state = AppState {
        oauth_client,
        assets_dir: configuration.server.assets_dir.clone().into(),
        calendar_api_base: configuration.google.calendar_api_base.clone(),
        cookie_key,
    };

    // Build router
    let app = calview::router(app_state);

    // Start server
    let addr = format!(
        "{}:{}",
        configuration.server.host, configuration.server.port
    );
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
