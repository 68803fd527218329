//! Spotify OAuth endpoints and default client configuration
//!
//! Endpoint URLs for the accounts service and the resource API. The
//! application's client ID and secret are NOT constants — they are loaded
//! from the environment by the client crate's config layer.

/// Base URL for the Spotify Web API (resource server)
pub const API_BASE_URL: &str = "https://api.spotify.com/v1";

/// Authorization endpoint the user's browser is sent to
pub const AUTHORIZE_ENDPOINT: &str = "https://accounts.spotify.com/authorize";

/// Token endpoint for code exchange and the client-credentials grant
pub const TOKEN_ENDPOINT: &str = "https://accounts.spotify.com/api/token";

/// Redirect URI registered with the Spotify application by default.
/// Points at the local callback the web shell listens on.
pub const DEFAULT_REDIRECT_URI: &str = "http://localhost:4567/callback";

/// Scopes requested by default: profile/playlist reads plus the playback
/// scopes the player front-end needs.
pub const DEFAULT_SCOPES: [&str; 6] = [
    "user-read-private",
    "user-read-email",
    "playlist-read-private",
    "playlist-read-collaborative",
    "user-modify-playback-state",
    "streaming",
];
