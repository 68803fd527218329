//! Error taxonomy for OAuth and API operations
//!
//! Every public operation in this workspace returns one of these variants
//! instead of panicking or letting reqwest errors escape. The two
//! precondition variants are raised before any network call is made, so
//! callers can tell a local misuse apart from a remote rejection.

/// Errors from OAuth and authenticated API operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Code exchange attempted without a stored verifier.
    #[error("no code verifier stored: start the authorization flow first")]
    MissingVerifier,

    /// API call attempted without an access token.
    #[error("no access token: authenticate before calling the API")]
    MissingToken,

    /// DNS/connection/timeout failure below the HTTP layer.
    #[error("transport error: {0}")]
    Transport(String),

    /// Non-2xx HTTP response, with the status and raw body for diagnosis.
    #[error("endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body was not the JSON we expected.
    #[error("response parse error: {0}")]
    Parse(String),
}

impl Error {
    /// Whether this failure was caught before any network call.
    pub fn is_precondition(&self) -> bool {
        matches!(self, Error::MissingVerifier | Error::MissingToken)
    }

    /// HTTP status code, when the failure came from a remote response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result alias for auth and API operations.
pub type Result<T> = std::result::Result<T, Error>;
