//! Spotify Web API client facade
//!
//! Ties the OAuth core (`spotify-auth`) to a per-user [`Session`] and an
//! authenticated request dispatcher. The shell embedding this crate (web
//! app, CLI) owns where sessions are persisted; every operation here takes
//! the session explicitly instead of sharing a global client instance, so
//! one process can serve many sessions safely.
//!
//! Typical user flow:
//! 1. `SpotifyClient::new(ClientConfig::from_env()?)`
//! 2. `client.authorization_url(&mut session)` → redirect the user
//! 3. `client.exchange_code(&mut session, code)` on the callback
//! 4. `client.request(&session, Verb::Get, "/me/playlists", None)`

pub mod client;
pub mod config;
pub mod session;

pub use client::{SpotifyClient, Verb};
pub use config::{ClientConfig, ConfigBuilder};
pub use session::{AuthState, Session};

pub use spotify_auth::{Error, Result};
