//! Client configuration
//!
//! Credentials come from the environment (`SPOTIFY_CLIENT_ID`,
//! `SPOTIFY_CLIENT_SECRET`); everything else has Spotify defaults that a
//! builder can override. The secret is wrapped in `common::Secret` so it
//! never appears in Debug output or logs. Endpoint URLs are part of the
//! config so tests can aim the client at a stub server.

use common::Secret;
use spotify_auth::constants::{API_BASE_URL, DEFAULT_REDIRECT_URI, DEFAULT_SCOPES, TOKEN_ENDPOINT};

/// Immutable configuration for a [`crate::SpotifyClient`].
///
/// Loaded once at construction; the session's mutable auth state lives in
/// [`crate::Session`], not here.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub client_id: String,
    pub client_secret: Secret<String>,
    pub redirect_uri: String,
    pub scopes: Vec<String>,
    pub token_url: String,
    pub api_base: String,
}

impl ClientConfig {
    /// Load credentials from the environment, with Spotify defaults for
    /// everything else.
    ///
    /// Reads `SPOTIFY_CLIENT_ID` and `SPOTIFY_CLIENT_SECRET` (required)
    /// and `SPOTIFY_REDIRECT_URI` (optional override).
    pub fn from_env() -> common::Result<Self> {
        let client_id = require_env("SPOTIFY_CLIENT_ID")?;
        let client_secret = require_env("SPOTIFY_CLIENT_SECRET")?;
        let mut builder = Self::builder(client_id, client_secret);
        if let Ok(redirect) = std::env::var("SPOTIFY_REDIRECT_URI") {
            builder = builder.redirect_uri(redirect);
        }
        builder.build()
    }

    /// Start building a config with explicit credentials.
    pub fn builder(client_id: impl Into<String>, client_secret: impl Into<String>) -> ConfigBuilder {
        ConfigBuilder {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: DEFAULT_REDIRECT_URI.to_string(),
            scopes: DEFAULT_SCOPES.iter().map(|s| s.to_string()).collect(),
            token_url: TOKEN_ENDPOINT.to_string(),
            api_base: API_BASE_URL.to_string(),
        }
    }
}

fn require_env(name: &str) -> common::Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(common::Error::MissingEnv(name.to_string())),
    }
}

/// Builder for [`ClientConfig`]. `build()` validates the result.
#[derive(Debug)]
pub struct ConfigBuilder {
    client_id: String,
    client_secret: String,
    redirect_uri: String,
    scopes: Vec<String>,
    token_url: String,
    api_base: String,
}

impl ConfigBuilder {
    pub fn redirect_uri(mut self, uri: impl Into<String>) -> Self {
        self.redirect_uri = uri.into();
        self
    }

    pub fn scopes(mut self, scopes: Vec<String>) -> Self {
        self.scopes = scopes;
        self
    }

    /// Override the token endpoint (stub servers in tests).
    pub fn token_url(mut self, url: impl Into<String>) -> Self {
        self.token_url = url.into();
        self
    }

    /// Override the resource API base URL (stub servers in tests).
    pub fn api_base(mut self, url: impl Into<String>) -> Self {
        self.api_base = url.into();
        self
    }

    pub fn build(self) -> common::Result<ClientConfig> {
        if self.client_id.is_empty() {
            return Err(common::Error::Config("client_id must not be empty".into()));
        }
        if self.client_secret.is_empty() {
            return Err(common::Error::Config(
                "client_secret must not be empty".into(),
            ));
        }
        for (name, url) in [
            ("redirect_uri", &self.redirect_uri),
            ("token_url", &self.token_url),
            ("api_base", &self.api_base),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(common::Error::Config(format!(
                    "{name} must start with http:// or https://, got: {url}"
                )));
            }
        }
        if self.scopes.is_empty() {
            return Err(common::Error::Config("scope list must not be empty".into()));
        }

        Ok(ClientConfig {
            client_id: self.client_id,
            client_secret: Secret::new(self.client_secret),
            redirect_uri: self.redirect_uri,
            scopes: self.scopes,
            token_url: self.token_url,
            api_base: self.api_base,
        })
    }
}
