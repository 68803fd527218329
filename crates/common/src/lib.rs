//! Shared foundation types for the Spotify client workspace

mod error;
mod secret;

pub use error::{Error, Result};
pub use secret::Secret;
