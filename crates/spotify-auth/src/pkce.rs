//! PKCE (Proof Key for Code Exchange) implementation per RFC 7636
//!
//! Generates the code verifier and S256 challenge used during the OAuth
//! authorization flow, and builds the authorization URL the user's browser
//! is redirected to. The verifier stays on the session and is sent during
//! token exchange; the challenge travels in the authorization URL so the
//! accounts service can verify the exchange request came from the same
//! party that initiated the flow.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::RngExt;
use sha2::{Digest, Sha256};

use crate::constants::AUTHORIZE_ENDPOINT;

/// A generated verifier/challenge pair.
///
/// The challenge is always the S256 derivation of the verifier, so holding
/// them together keeps the pair consistent by construction.
#[derive(Debug, Clone)]
pub struct PkcePair {
    pub verifier: String,
    pub challenge: String,
}

impl PkcePair {
    /// Generate a fresh pair from a random verifier.
    pub fn generate() -> Self {
        let verifier = generate_verifier();
        let challenge = compute_challenge(&verifier);
        Self { verifier, challenge }
    }
}

/// Generate a cryptographically random PKCE code verifier.
///
/// Produces a 64-byte random value encoded as URL-safe base64 with the
/// padding stripped: 86 characters, inside the 43-128 range RFC 7636
/// requires, drawn from the unreserved character set.
pub fn generate_verifier() -> String {
    let mut bytes = [0u8; 64];
    rand::rng().fill(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Compute the S256 code challenge from a verifier.
///
/// `challenge = BASE64URL(SHA256(verifier))`, deterministic so the same
/// verifier always derives the same challenge.
pub fn compute_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Build the full authorization URL with all required OAuth parameters.
///
/// Pure function of its inputs: the caller must already hold a challenge
/// (and have stored the matching verifier on its session). Scopes are
/// space-joined before percent-encoding, the form the accounts service
/// expects.
pub fn build_authorization_url(
    client_id: &str,
    redirect_uri: &str,
    scopes: &[&str],
    challenge: &str,
) -> String {
    format!(
        "{}?client_id={}&response_type=code&redirect_uri={}&code_challenge_method=S256&code_challenge={}&scope={}",
        AUTHORIZE_ENDPOINT,
        urlencoded(client_id),
        urlencoded(redirect_uri),
        urlencoded(challenge),
        urlencoded(&scopes.join(" ")),
    )
}

/// Percent-encode a query parameter value. Unreserved characters pass
/// through, everything else becomes `%XX`.
fn urlencoded(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_occurrences(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn verifier_length_is_within_rfc_range() {
        let verifier = generate_verifier();
        // 64 bytes → 86 base64url chars without padding
        assert_eq!(verifier.len(), 86);
        assert!((43..=128).contains(&verifier.len()));
    }

    #[test]
    fn verifier_uses_unreserved_characters_only() {
        let verifier = generate_verifier();
        assert!(
            verifier
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~')),
            "verifier must stay in the unreserved set: {verifier}"
        );
    }

    #[test]
    fn verifiers_are_unique() {
        let a = generate_verifier();
        let b = generate_verifier();
        assert_ne!(a, b, "two verifiers must not collide");
    }

    #[test]
    fn challenge_is_deterministic() {
        let verifier = "test-verifier-value";
        let c1 = compute_challenge(verifier);
        let c2 = compute_challenge(verifier);
        assert_eq!(c1, c2, "same verifier must produce same challenge");
    }

    #[test]
    fn distinct_verifiers_produce_distinct_challenges() {
        assert_ne!(
            compute_challenge("verifier-one"),
            compute_challenge("verifier-two")
        );
    }

    #[test]
    fn challenge_is_url_safe_base64_of_sha256() {
        let challenge = compute_challenge("test-verifier");
        // SHA-256 produces 32 bytes → 43 base64url chars (no padding)
        assert_eq!(challenge.len(), 43);
        let decoded = URL_SAFE_NO_PAD.decode(&challenge).expect("valid base64url");
        assert_eq!(decoded.len(), 32);
    }

    #[test]
    fn challenge_matches_known_value() {
        // Pre-computed: SHA256("hello") = 2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824
        // base64url of those 32 bytes = LPJNul-wow4m6DsqxbninhsWHlwfp0JecwQzYpOLmCQ
        let challenge = compute_challenge("hello");
        assert_eq!(challenge, "LPJNul-wow4m6DsqxbninhsWHlwfp0JecwQzYpOLmCQ");
    }

    #[test]
    fn pair_holds_matching_verifier_and_challenge() {
        let pair = PkcePair::generate();
        assert_eq!(pair.challenge, compute_challenge(&pair.verifier));
    }

    #[test]
    fn authorization_url_contains_each_param_exactly_once() {
        let url = build_authorization_url(
            "abc",
            "http://localhost:4567/callback",
            &["user-read-email"],
            "XYZ",
        );

        assert!(url.starts_with(AUTHORIZE_ENDPOINT));
        assert_eq!(count_occurrences(&url, "client_id=abc"), 1);
        assert_eq!(count_occurrences(&url, "response_type=code"), 1);
        assert_eq!(
            count_occurrences(&url, "redirect_uri=http%3A%2F%2Flocalhost%3A4567%2Fcallback"),
            1
        );
        assert_eq!(count_occurrences(&url, "code_challenge_method=S256"), 1);
        assert_eq!(count_occurrences(&url, "code_challenge=XYZ"), 1);
        assert_eq!(count_occurrences(&url, "scope=user-read-email"), 1);
    }

    #[test]
    fn scopes_are_space_joined_and_encoded() {
        let url = build_authorization_url(
            "abc",
            "http://localhost:4567/callback",
            &["user-read-email", "streaming"],
            "XYZ",
        );
        assert!(url.contains("scope=user-read-email%20streaming"));
    }
}
