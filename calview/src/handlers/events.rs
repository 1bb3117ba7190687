use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use axum_extra::extract::SignedCookieJar;
use chrono::Utc;
use gcal_api::endpoints::events::OrderBy;

use crate::{
    error::ServerError,
    models::{FormattedEvent, Session},
    AppState,
};

/// Upper bound on events returned per request.
const MAX_EVENTS: u32 = 10;

pub async fn list_events(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> Result<Response, ServerError> {
    let session = Session::from_jar(&jar);

    let Some(credentials) = session.credentials else {
        tracing::debug!("No credentials in session, redirecting to /authorize");
        return Ok(Redirect::to("/authorize").into_response());
    };

    let client = gcal_api::Client::with_base_url(&state.calendar_api_base, &credentials.token);
    let request = gcal_api::Request::events()
        .list()
        .time_min(Utc::now())
        .max_results(MAX_EVENTS)
        .single_events(true)
        .order_by(OrderBy::StartTime);

    let response = client.send(request).await?;

    let formatted: Vec<FormattedEvent> = response
        .items
        .into_iter()
        .map(FormattedEvent::from)
        .collect();

    tracing::debug!(count = formatted.len(), "Fetched upcoming events");

    Ok(Json(formatted).into_response())
}
