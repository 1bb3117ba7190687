use oauth2::{
    basic::BasicClient, AuthUrl, AuthorizationCode, ClientId, ClientSecret, CsrfToken,
    HttpRequest, HttpResponse, RedirectUrl, Scope, TokenResponse, TokenUrl,
};
use rand::Rng;

use crate::config::WebClientSecrets;
use crate::error::ServerError;
use crate::models::CredentialBundle;

// Simple async HTTP client for OAuth2
async fn http_client(request: HttpRequest) -> Result<HttpResponse, reqwest::Error> {
    let client = reqwest::Client::new();
    let mut builder = client
        .request(request.method().clone(), request.uri().to_string())
        .body(request.body().clone());

    for (name, value) in request.headers() {
        builder = builder.header(name.as_str(), value.as_bytes());
    }

    let response = builder.send().await?;
    let status = response.status();
    let body = response.bytes().await?.to_vec();

    let mut http_response = HttpResponse::new(body);
    *http_response.status_mut() = status;

    Ok(http_response)
}

/// The one scope this application ever requests: read-only calendar access.
pub const CALENDAR_SCOPE: &str = "https://www.googleapis.com/auth/calendar.readonly";

pub struct OAuthClient {
    client_id: String,
    client_secret: String,
    auth_url: AuthUrl,
    token_url: TokenUrl,
    redirect_url: RedirectUrl,
}

impl OAuthClient {
    pub fn new(secrets: &WebClientSecrets) -> Result<Self, ServerError> {
        let auth_url = AuthUrl::new(secrets.auth_uri.clone())
            .map_err(|e| ServerError::Configuration(format!("Invalid auth URL: {}", e)))?;

        let token_url = TokenUrl::new(secrets.token_uri.clone())
            .map_err(|e| ServerError::Configuration(format!("Invalid token URL: {}", e)))?;

        let redirect_uri = secrets.redirect_uris.first().ok_or_else(|| {
            ServerError::Configuration(
                "Client secrets must list at least one redirect URI".to_string(),
            )
        })?;
        let redirect_url = RedirectUrl::new(redirect_uri.clone())
            .map_err(|e| ServerError::Configuration(format!("Invalid redirect URI: {}", e)))?;

        Ok(Self {
            client_id: secrets.client_id.clone(),
            client_secret: secrets.client_secret.clone(),
            auth_url,
            token_url,
            redirect_url,
        })
    }

    /// Build the provider consent URL, carrying the anti-forgery state and
    /// requesting offline access so a refresh token is issued.
    pub fn build_authorization_url(&self, state: &str) -> Result<String, ServerError> {
        let csrf_token = CsrfToken::new(state.to_string());
        let (auth_url, _) = BasicClient::new(ClientId::new(self.client_id.clone()))
            .set_client_secret(ClientSecret::new(self.client_secret.clone()))
            .set_auth_uri(self.auth_url.clone())
            .set_token_uri(self.token_url.clone())
            .set_redirect_uri(self.redirect_url.clone())
            .authorize_url(|| csrf_token)
            .add_scope(Scope::new(CALENDAR_SCOPE.to_string()))
            .add_extra_param("access_type", "offline")
            .add_extra_param("include_granted_scopes", "true")
            .url();
        Ok(auth_url.to_string())
    }

    /// Exchange a one-time authorization code for a credential bundle.
    pub async fn exchange_code(&self, code: &str) -> Result<CredentialBundle, ServerError> {
        let token_result = BasicClient::new(ClientId::new(self.client_id.clone()))
            .set_client_secret(ClientSecret::new(self.client_secret.clone()))
            .set_auth_uri(self.auth_url.clone())
            .set_token_uri(self.token_url.clone())
            .set_redirect_uri(self.redirect_url.clone())
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .request_async(&http_client)
            .await?;

        let token = token_result.access_token().secret().to_string();
        let refresh_token = token_result
            .refresh_token()
            .map(|t| t.secret().to_string());
        let scopes = token_result
            .scopes()
            .map(|scopes| scopes.iter().map(|s| s.to_string()).collect())
            .unwrap_or_else(|| vec![CALENDAR_SCOPE.to_string()]);

        tracing::debug!("Successfully exchanged code for tokens");

        CredentialBundle::new(
            token,
            refresh_token,
            self.token_url.to_string(),
            self.client_id.clone(),
            self.client_secret.clone(),
            scopes,
        )
    }

    /// Generate a random anti-forgery state token
    pub fn generate_state_token() -> String {
        use base64::Engine;
        let mut rng = rand::rng();
        let random_bytes: Vec<u8> = (0..32).map(|_| rng.random()).collect();
        base64::prelude::BASE64_URL_SAFE_NO_PAD.encode(&random_bytes)
    }
}
