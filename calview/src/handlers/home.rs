use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::SignedCookieJar;

use crate::{error::ServerError, models::Session, AppState};

pub async fn home(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> Result<Response, ServerError> {
    let session = Session::from_jar(&jar);

    if session.credentials.is_none() {
        tracing::debug!("No credentials in session, redirecting to /authorize");
        return Ok(Redirect::to("/authorize").into_response());
    }

    let index = state.assets_dir.join("index.html");
    let page = tokio::fs::read_to_string(&index).await.map_err(|e| {
        ServerError::Internal(format!("Failed to read {}: {}", index.display(), e))
    })?;

    Ok(Html(page).into_response())
}
