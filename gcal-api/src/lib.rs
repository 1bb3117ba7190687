pub mod endpoints;
mod error;
mod macros;
pub mod repositories;

pub use crate::error::CalendarApiError;
use repositories::*;
use tower_api_client::{Client as ApiClient, Request as ApiRequest};

const BASE_URL: &str = "https://www.googleapis.com/calendar/v3";

pub struct Client {
    inner: ApiClient,
}

impl Client {
    pub fn new(access_token: &str) -> Self {
        Self {
            inner: ApiClient::new(BASE_URL).bearer_auth(access_token),
        }
    }

    /// Point the client at a non-production base URL (tests, proxies).
    pub fn with_base_url(base_url: &str, access_token: &str) -> Self {
        Self {
            inner: ApiClient::new(base_url).bearer_auth(access_token),
        }
    }

    pub async fn send<R>(&self, request: R) -> Result<R::Response, CalendarApiError>
    where
        R: ApiRequest,
    {
        self.inner.send(request).await.map_err(From::from)
    }
}

pub struct Request;

impl Request {
    pub fn new() -> Self {
        Self {}
    }

    pub fn events() -> EventRepository {
        EventRepository::new()
    }
}
