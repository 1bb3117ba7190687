mod authorize;
mod callback;
mod events;
mod home;

pub use authorize::authorize;
pub use callback::oauth2_callback;
pub use events::list_events;
pub use home::home;

use crate::models::HealthResponse;
use axum::Json;

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
