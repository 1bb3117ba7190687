pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

pub use config::Configuration;
pub use error::ServerError;

use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::FromRef;
use axum::routing::get;
use axum::Router;
use axum_extra::extract::cookie::Key;
use tower_http::services::ServeFile;
use tower_http::trace::TraceLayer;

use services::OAuthClient;

#[derive(Clone)]
pub struct AppState {
    pub oauth_client: Arc<OAuthClient>,
    pub assets_dir: PathBuf,
    pub calendar_api_base: String,
    pub cookie_key: Key,
}

// Required by the SignedCookieJar extractor
impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Key {
        state.cookie_key.clone()
    }
}

pub fn router(state: AppState) -> Router {
    let assets = state.assets_dir.clone();
    Router::new()
        .route("/", get(handlers::home))
        .route_service("/styles.css", ServeFile::new(assets.join("styles.css")))
        .route_service("/script.js", ServeFile::new(assets.join("script.js")))
        .route_service("/calendar.js", ServeFile::new(assets.join("calendar.js")))
        .route("/authorize", get(handlers::authorize))
        .route("/oauth2callback", get(handlers::oauth2_callback))
        .route("/events", get(handlers::list_events))
        .route("/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
