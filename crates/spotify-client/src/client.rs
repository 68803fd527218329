//! Client facade and authenticated request dispatcher
//!
//! `SpotifyClient` is the immutable half of the pair: configuration plus a
//! reqwest client. All per-user state lives in the [`Session`] passed into
//! each operation, so one client can serve any number of sessions.
//!
//! The dispatcher makes exactly one attempt per call. Every outcome is a
//! `Result`: precondition failures are caught before any network traffic,
//! transport and HTTP failures come back as structured errors, and a 2xx
//! body that is not JSON is a parse failure rather than a panic.

use serde_json::Value;
use spotify_auth::error::{Error, Result};
use spotify_auth::pkce::build_authorization_url;
use spotify_auth::token::{self, CodeExchange};
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::session::Session;

/// The closed set of HTTP verbs the dispatcher supports.
///
/// Each verb carries its body rule: reads and deletes are bodyless, writes
/// serialize a JSON body. Resolving this at the type level replaces the
/// reference behavior of picking a call shape from a verb symbol at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    /// Whether calls with this verb carry a JSON body.
    pub fn sends_body(self) -> bool {
        matches!(self, Verb::Post | Verb::Put)
    }

    fn method(self) -> reqwest::Method {
        match self {
            Verb::Get => reqwest::Method::GET,
            Verb::Post => reqwest::Method::POST,
            Verb::Put => reqwest::Method::PUT,
            Verb::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Facade over the OAuth flows and the Web API.
pub struct SpotifyClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl SpotifyClient {
    /// Build a client from validated configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| Error::Transport(format!("building HTTP client: {e}")))?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build the authorization URL for this session, generating and storing
    /// a PKCE pair first if the session has none.
    ///
    /// Pure apart from the session mutation: no network traffic happens
    /// until the user follows the URL.
    pub fn authorization_url(&self, session: &mut Session) -> String {
        let challenge = session.ensure_pkce().to_owned();
        let scopes: Vec<&str> = self.config.scopes.iter().map(String::as_str).collect();
        build_authorization_url(
            &self.config.client_id,
            &self.config.redirect_uri,
            &scopes,
            &challenge,
        )
    }

    /// Authenticate as the application (client-credentials grant).
    ///
    /// Stores the access token on the session; this grant issues no
    /// refresh token.
    pub async fn authenticate(&self, session: &mut Session) -> Result<()> {
        let response = token::client_credentials(
            &self.http,
            &self.config.token_url,
            &self.config.client_id,
            self.config.client_secret.expose(),
        )
        .await?;
        debug!("client-credentials grant succeeded");
        session.store_tokens(response.access_token, None);
        Ok(())
    }

    /// Exchange a redirect-delivered authorization code for tokens.
    ///
    /// Fails fast with [`Error::MissingVerifier`] (no network call) when
    /// the session holds no PKCE verifier. The verifier is consumed whether
    /// the exchange succeeds or not; a failed exchange leaves previously
    /// stored tokens untouched.
    pub async fn exchange_code(&self, session: &mut Session, code: &str) -> Result<()> {
        let verifier = session
            .code_verifier()
            .ok_or(Error::MissingVerifier)?
            .to_owned();

        let result = token::exchange_code(
            &self.http,
            &self.config.token_url,
            &CodeExchange {
                code,
                redirect_uri: &self.config.redirect_uri,
                client_id: &self.config.client_id,
                client_secret: self.config.client_secret.expose(),
                code_verifier: &verifier,
            },
        )
        .await;

        session.clear_pkce();
        match result {
            Ok(response) => {
                debug!("authorization-code exchange succeeded");
                session.store_tokens(response.access_token, response.refresh_token);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "authorization-code exchange failed");
                Err(e)
            }
        }
    }

    /// Issue one bearer-authenticated call against the Web API.
    ///
    /// `path` is joined to the configured API base verbatim, query string
    /// included (e.g. `/me/player/play?device_id=x`). For body-carrying
    /// verbs a missing `body` is sent as `{}`; for bodyless verbs `body`
    /// is ignored. An empty 2xx body (Spotify's 204 player responses)
    /// comes back as `Value::Null`.
    pub async fn request(
        &self,
        session: &Session,
        verb: Verb,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value> {
        let access_token = session.access_token().ok_or(Error::MissingToken)?;
        let url = format!("{}{}", self.config.api_base, path);
        debug!(?verb, %url, "dispatching API request");

        let mut request = self.http.request(verb.method(), &url).bearer_auth(access_token);
        if verb.sends_body() {
            let payload = body.cloned().unwrap_or_else(|| Value::Object(Default::default()));
            request = request.json(&payload);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Transport(format!("api request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("<no body>"));
            warn!(status = status.as_u16(), %url, "api request rejected");
            return Err(Error::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| Error::Transport(format!("reading api response body: {e}")))?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| Error::Parse(format!("invalid api response: {e}")))
    }
}
