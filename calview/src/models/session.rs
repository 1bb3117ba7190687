use axum_extra::extract::cookie::{Cookie, SameSite, SignedCookieJar};
use serde::{Deserialize, Serialize};

use crate::error::ServerError;

pub const SESSION_COOKIE: &str = "session";

/// Per-browser session, persisted as JSON inside a signed cookie. The
/// server keeps no copy; whatever the browser presents (and the signature
/// verifies) is the session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Anti-forgery state token, set by /authorize and consumed by
    /// /oauth2callback.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<CredentialBundle>,
}

impl Session {
    /// Load the session from the signed jar. A missing, unverifiable or
    /// undecodable cookie yields a fresh session.
    pub fn from_jar(jar: &SignedCookieJar) -> Self {
        jar.get(SESSION_COOKIE)
            .and_then(|cookie| serde_json::from_str(cookie.value()).ok())
            .unwrap_or_default()
    }

    /// Write the session back into the jar for the response.
    pub fn store(&self, jar: SignedCookieJar) -> Result<SignedCookieJar, ServerError> {
        let value = serde_json::to_string(self)
            .map_err(|e| ServerError::Internal(format!("Failed to serialize session: {}", e)))?;
        let cookie = Cookie::build((SESSION_COOKIE, value))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build();
        Ok(jar.add(cookie))
    }
}

/// Everything needed to reconstruct a usable credential without re-running
/// the handshake. Owned by exactly one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredentialBundle {
    pub token: String,
    pub refresh_token: Option<String>,
    pub token_uri: String,
    pub client_id: String,
    pub client_secret: String,
    pub scopes: Vec<String>,
}

impl CredentialBundle {
    /// Build a bundle field-by-field, failing fast when a required field
    /// is absent instead of storing an unusable credential.
    pub fn new(
        token: String,
        refresh_token: Option<String>,
        token_uri: String,
        client_id: String,
        client_secret: String,
        scopes: Vec<String>,
    ) -> Result<Self, ServerError> {
        for (name, value) in [
            ("token", &token),
            ("token_uri", &token_uri),
            ("client_id", &client_id),
            ("client_secret", &client_secret),
        ] {
            if value.is_empty() {
                return Err(ServerError::OAuth(format!(
                    "Credential field '{}' missing from token response",
                    name
                )));
            }
        }

        Ok(Self {
            token,
            refresh_token,
            token_uri,
            client_id,
            client_secret,
            scopes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_extra::extract::cookie::Key;

    fn bundle() -> CredentialBundle {
        CredentialBundle::new(
            "access".to_string(),
            Some("refresh".to_string()),
            "https://oauth2.googleapis.com/token".to_string(),
            "client".to_string(),
            "secret".to_string(),
            vec!["https://www.googleapis.com/auth/calendar.readonly".to_string()],
        )
        .unwrap()
    }

    #[test]
    fn empty_required_field_is_rejected() {
        let err = CredentialBundle::new(
            String::new(),
            None,
            "uri".to_string(),
            "client".to_string(),
            "secret".to_string(),
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, ServerError::OAuth(_)));
    }

    #[test]
    fn missing_refresh_token_is_allowed() {
        let bundle = CredentialBundle::new(
            "access".to_string(),
            None,
            "uri".to_string(),
            "client".to_string(),
            "secret".to_string(),
            vec![],
        )
        .unwrap();
        assert!(bundle.refresh_token.is_none());
    }

    #[test]
    fn session_round_trips_through_signed_jar() {
        let key = Key::generate();
        let session = Session {
            state: Some("anti-forgery".to_string()),
            credentials: Some(bundle()),
        };

        let jar = session
            .store(SignedCookieJar::new(key.clone()))
            .unwrap();
        let loaded = Session::from_jar(&jar);
        assert_eq!(loaded, session);
    }

    #[test]
    fn garbage_cookie_yields_fresh_session() {
        let key = Key::generate();
        let jar = SignedCookieJar::new(key).add(Cookie::new(SESSION_COOKIE, "not json"));
        assert_eq!(Session::from_jar(&jar), Session::default());
    }

    #[test]
    fn empty_jar_yields_fresh_session() {
        let jar = SignedCookieJar::new(Key::generate());
        assert_eq!(Session::from_jar(&jar), Session::default());
    }
}
