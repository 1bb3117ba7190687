use std::path::Path;

use axum_extra::extract::cookie::Key;
use serde::Deserialize;

use crate::error::ServerError;

#[derive(Debug, Deserialize, Clone)]
pub struct Configuration {
    pub server: ServerConfiguration,
    pub session: SessionConfiguration,
    #[serde(default)]
    pub google: GoogleConfiguration,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfiguration {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfiguration {
    /// Process-wide cookie-signing secret, supplied out-of-band.
    pub secret: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GoogleConfiguration {
    #[serde(default = "default_client_secrets_file")]
    pub client_secrets_file: String,

    #[serde(default = "default_calendar_api_base")]
    pub calendar_api_base: String,
}

impl Default for GoogleConfiguration {
    fn default() -> Self {
        Self {
            client_secrets_file: default_client_secrets_file(),
            calendar_api_base: default_calendar_api_base(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_assets_dir() -> String {
    "assets".to_string()
}

fn default_client_secrets_file() -> String {
    "credentials.json".to_string()
}

fn default_calendar_api_base() -> String {
    "https://www.googleapis.com/calendar/v3".to_string()
}

impl Configuration {
    pub fn new() -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        if std::path::Path::new("config.toml").exists() {
            builder = builder.add_source(config::File::with_name("config"));
        }

        builder =
            builder.add_source(config::Environment::with_prefix("CALVIEW").separator("__"));

        builder.build()?.try_deserialize()
    }
}

impl SessionConfiguration {
    const MIN_SECRET_LEN: usize = 32;

    /// Derive the cookie-signing key. The secret must be long enough to
    /// derive from; anything shorter fails before the server starts.
    pub fn signing_key(&self) -> Result<Key, ServerError> {
        if self.secret.len() < Self::MIN_SECRET_LEN {
            return Err(ServerError::Configuration(format!(
                "Session secret must be at least {} bytes",
                Self::MIN_SECRET_LEN
            )));
        }
        Ok(Key::derive_from(self.secret.as_bytes()))
    }
}

/// Google "web application" client-secrets resource. The provider client
/// identifier and secret are never embedded in the binary.
#[derive(Debug, Deserialize, Clone)]
pub struct ClientSecrets {
    pub web: WebClientSecrets,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebClientSecrets {
    pub client_id: String,
    pub client_secret: String,
    #[serde(default = "default_auth_uri")]
    pub auth_uri: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
    pub redirect_uris: Vec<String>,
}

fn default_auth_uri() -> String {
    "https://accounts.google.com/o/oauth2/auth".to_string()
}

fn default_token_uri() -> String {
    "https://oauth2.googleapis.com/token".to_string()
}

impl ClientSecrets {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ServerError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            ServerError::Configuration(format!(
                "Failed to read client secrets file {}: {}",
                path.display(),
                e
            ))
        })?;
        serde_json::from_str(&raw).map_err(|e| {
            ServerError::Configuration(format!("Invalid client secrets file: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_google_client_secrets() {
        let raw = r#"{
            "web": {
                "client_id": "abc.apps.googleusercontent.com",
                "client_secret": "shhh",
                "auth_uri": "https://accounts.google.com/o/oauth2/auth",
                "token_uri": "https://oauth2.googleapis.com/token",
                "redirect_uris": ["http://localhost:8080/oauth2callback"]
            }
        }"#;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(raw.as_bytes()).unwrap();

        let secrets = ClientSecrets::from_file(file.path()).unwrap();
        assert_eq!(secrets.web.client_id, "abc.apps.googleusercontent.com");
        assert_eq!(
            secrets.web.redirect_uris,
            vec!["http://localhost:8080/oauth2callback"]
        );
    }

    #[test]
    fn rejects_installed_app_secrets() {
        let raw = r#"{"installed": {"client_id": "abc", "client_secret": "shhh", "redirect_uris": []}}"#;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(raw.as_bytes()).unwrap();

        assert!(ClientSecrets::from_file(file.path()).is_err());
    }

    #[test]
    fn missing_secrets_file_is_a_configuration_error() {
        let err = ClientSecrets::from_file("/nonexistent/credentials.json").unwrap_err();
        assert!(matches!(err, ServerError::Configuration(_)));
    }

    #[test]
    fn short_session_secret_is_rejected() {
        let session = SessionConfiguration {
            secret: "too-short".to_string(),
        };
        assert!(session.signing_key().is_err());

        let session = SessionConfiguration {
            secret: "a".repeat(64),
        };
        assert!(session.signing_key().is_ok());
    }
}
