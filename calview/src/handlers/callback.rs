use axum::extract::{Query, State};
use axum::response::Redirect;
use axum_extra::extract::SignedCookieJar;

use crate::{
    error::ServerError,
    models::{CallbackParams, Session},
    AppState,
};

pub async fn oauth2_callback(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Query(params): Query<CallbackParams>,
) -> Result<(SignedCookieJar, Redirect), ServerError> {
    let mut session = Session::from_jar(&jar);

    // Create span with the pending-state flag for all logs in this request
    let span = tracing::info_span!(
        "oauth2_callback",
        has_pending_state = session.state.is_some()
    );
    let _enter = span.enter();

    // Anti-forgery contract: the stored state must exist and match the
    // echoed one before the authorization code is trusted.
    let expected_state = session.state.take().ok_or_else(|| {
        ServerError::Forbidden("No pending authorization in session".to_string())
    })?;
    let echoed_state = params
        .state
        .ok_or_else(|| ServerError::Forbidden("Missing state parameter".to_string()))?;
    if echoed_state != expected_state {
        tracing::warn!("State mismatch on OAuth callback");
        return Err(ServerError::Forbidden("State token mismatch".to_string()));
    }

    if let Some(error) = params.error {
        tracing::warn!(error = %error, "OAuth callback error");
        return Err(ServerError::OAuth(format!(
            "Provider returned error: {}",
            error
        )));
    }

    let code = params
        .code
        .ok_or_else(|| ServerError::BadRequest("Missing authorization code".to_string()))?;

    let credentials = state.oauth_client.exchange_code(&code).await?;

    // State is consumed, credentials persist for the session's lifetime
    session.credentials = Some(credentials);
    let jar = session.store(jar)?;

    tracing::info!("OAuth callback successful");

    Ok((jar, Redirect::to("/")))
}
