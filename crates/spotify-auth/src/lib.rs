//! Spotify OAuth authorization library
//!
//! Implements the Authorization-Code-with-PKCE handshake and the
//! client-credentials grant against the Spotify accounts service. This
//! crate is a standalone library with no session state of its own — the
//! `spotify-client` crate owns the per-user session and calls down here.
//!
//! Authorization flow:
//! 1. Caller generates a pair via `pkce::PkcePair::generate()`
//! 2. User authorizes via `pkce::build_authorization_url()`
//! 3. Caller exchanges the redirect code via `token::exchange_code()`
//! 4. App-level (non-user) access uses `token::client_credentials()`

pub mod constants;
pub mod error;
pub mod pkce;
pub mod token;

pub use constants::*;
pub use error::{Error, Result};
pub use pkce::{PkcePair, build_authorization_url, compute_challenge, generate_verifier};
pub use token::{CodeExchange, TokenResponse, client_credentials, exchange_code};
