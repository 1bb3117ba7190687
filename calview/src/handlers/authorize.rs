use axum::extract::State;
use axum::response::Redirect;
use axum_extra::extract::SignedCookieJar;

use crate::{error::ServerError, models::Session, services::OAuthClient, AppState};

pub async fn authorize(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> Result<(SignedCookieJar, Redirect), ServerError> {
    // Fresh state token per handshake attempt
    let csrf_state = OAuthClient::generate_state_token();
    let authorization_url = state.oauth_client.build_authorization_url(&csrf_state)?;

    let mut session = Session::from_jar(&jar);
    session.state = Some(csrf_state);
    let jar = session.store(jar)?;

    tracing::info!("Redirecting to provider consent URL");

    Ok((jar, Redirect::to(&authorization_url)))
}
