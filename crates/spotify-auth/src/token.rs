//! OAuth token acquisition
//!
//! Handles the two token endpoint interactions:
//! 1. Client-credentials grant (app-level access, no user involved)
//! 2. Authorization-code exchange (completes the PKCE flow for a user)
//!
//! Both POST a form body to the token endpoint and share one response
//! shape. The endpoint URL is a parameter rather than a constant so tests
//! can point at a stub server; production callers pass
//! [`crate::constants::TOKEN_ENDPOINT`].

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Response from the token endpoint for both grant types.
///
/// `refresh_token` is only issued for the authorization-code grant; the
/// client-credentials grant returns an access token alone. `expires_in`
/// is a delta in seconds from the response time.
#[derive(Debug, Deserialize, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    pub token_type: String,
    /// Seconds until the access token expires (delta, not absolute)
    pub expires_in: u64,
}

/// Parameters for the authorization-code exchange.
///
/// Everything the token endpoint needs to tie the redirect-delivered code
/// back to the party that started the flow: the registered client identity,
/// the redirect URI the code was delivered to, and the PKCE verifier whose
/// challenge was sent in the authorization URL.
#[derive(Debug)]
pub struct CodeExchange<'a> {
    pub code: &'a str,
    pub redirect_uri: &'a str,
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub code_verifier: &'a str,
}

/// Authenticate as the application via the client-credentials grant.
///
/// Sends `grant_type=client_credentials` with HTTP Basic authentication
/// built from `base64(client_id:client_secret)`. No PKCE is involved and
/// no refresh token is issued.
pub async fn client_credentials(
    http: &reqwest::Client,
    token_url: &str,
    client_id: &str,
    client_secret: &str,
) -> Result<TokenResponse> {
    let response = http
        .post(token_url)
        .basic_auth(client_id, Some(client_secret))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await
        .map_err(|e| Error::Transport(format!("client-credentials request failed: {e}")))?;

    debug!(status = %response.status(), "client-credentials response");
    read_token_response(response).await
}

/// Exchange an authorization code for tokens (completes the PKCE flow).
///
/// The user has authorized in their browser and the platform delivered a
/// code to the redirect URI. Sending the code with the stored verifier
/// proves this client initiated the flow.
pub async fn exchange_code(
    http: &reqwest::Client,
    token_url: &str,
    exchange: &CodeExchange<'_>,
) -> Result<TokenResponse> {
    let response = http
        .post(token_url)
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", exchange.code),
            ("redirect_uri", exchange.redirect_uri),
            ("client_id", exchange.client_id),
            ("client_secret", exchange.client_secret),
            ("code_verifier", exchange.code_verifier),
        ])
        .send()
        .await
        .map_err(|e| Error::Transport(format!("token exchange request failed: {e}")))?;

    debug!(status = %response.status(), "token exchange response");
    read_token_response(response).await
}

/// Map a token endpoint response into a `TokenResponse` or a failure.
///
/// Non-2xx responses keep their status and raw body; a 2xx with a body
/// that is not the expected JSON is a parse failure, not a success.
async fn read_token_response(response: reqwest::Response) -> Result<TokenResponse> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| String::from("<no body>"));
        warn!(status = status.as_u16(), "token endpoint rejected request");
        return Err(Error::Status {
            status: status.as_u16(),
            body,
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| Error::Transport(format!("reading token response body: {e}")))?;
    serde_json::from_str(&body).map_err(|e| Error::Parse(format!("invalid token response: {e}")))
}
