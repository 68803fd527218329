//! Per-user authorization session
//!
//! Holds the mutable OAuth state for one logical user: the in-flight PKCE
//! pair while an authorization is pending, and the access/refresh tokens
//! once an exchange succeeds. Fields are private so the two invariants
//! hold by construction:
//!
//! - the challenge is present iff the verifier is, and always equals the
//!   S256 derivation of the verifier
//! - an access token being present is what makes the session `Authorized`
//!
//! A session is owned by exactly one logical user. Hosts that share one
//! across concurrent requests must serialize access themselves.

use spotify_auth::pkce::{PkcePair, compute_challenge};

/// Where the session stands in the authorization flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    /// No verifier, no token.
    Unauthenticated,
    /// PKCE pair generated, waiting for the redirect callback.
    PendingAuthorization,
    /// Access token present.
    Authorized,
}

/// Mutable auth state for one user session.
#[derive(Debug, Default)]
pub struct Session {
    code_verifier: Option<String>,
    code_challenge: Option<String>,
    access_token: Option<String>,
    refresh_token: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current position in the authorization state machine. A token wins
    /// over a pending PKCE pair: an authorized session stays authorized
    /// even if a new flow was started.
    pub fn state(&self) -> AuthState {
        if self.access_token.is_some() {
            AuthState::Authorized
        } else if self.code_verifier.is_some() {
            AuthState::PendingAuthorization
        } else {
            AuthState::Unauthenticated
        }
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    pub fn code_verifier(&self) -> Option<&str> {
        self.code_verifier.as_deref()
    }

    pub fn code_challenge(&self) -> Option<&str> {
        self.code_challenge.as_deref()
    }

    /// Return the current challenge, generating a fresh PKCE pair first if
    /// the session has none. Re-entering the login flow with a pair already
    /// pending reuses it, matching the one-handshake-per-session model.
    pub fn ensure_pkce(&mut self) -> &str {
        if self.code_verifier.is_none() {
            let pair = PkcePair::generate();
            self.code_verifier = Some(pair.verifier);
            self.code_challenge = Some(pair.challenge);
        }
        self.code_challenge.as_deref().unwrap_or_default()
    }

    /// Restore a verifier persisted by the shell (e.g. from a cookie
    /// session across the redirect). The challenge is re-derived rather
    /// than trusted from outside.
    pub fn restore_pkce(&mut self, verifier: impl Into<String>) {
        let verifier = verifier.into();
        self.code_challenge = Some(compute_challenge(&verifier));
        self.code_verifier = Some(verifier);
    }

    /// Restore an access token persisted by the shell.
    pub fn restore_access_token(&mut self, token: impl Into<String>) {
        self.access_token = Some(token.into());
    }

    /// Store the outcome of a successful token exchange.
    pub(crate) fn store_tokens(&mut self, access: String, refresh: Option<String>) {
        self.access_token = Some(access);
        if refresh.is_some() {
            self.refresh_token = refresh;
        }
    }

    /// Drop the PKCE pair once the exchange has consumed it (or failed).
    pub(crate) fn clear_pkce(&mut self) {
        self.code_verifier = None;
        self.code_challenge = None;
    }

    /// Logout: drop every piece of auth state.
    pub fn clear(&mut self) {
        self.code_verifier = None;
        self.code_challenge = None;
        self.access_token = None;
        self.refresh_token = None;
    }
}
