//! Unverified decoding of the access token's claim set.
//!
//! The token is a standard three-segment JWT, but the client never checks the
//! signature: the API verifies it on every request, and the claims are only
//! trusted here while `exp` is in the future. Anything that fails to decode is
//! treated as an expired token, never as a crash.

use base64ct::{Base64UrlUnpadded, Encoding};
use serde::{Deserialize, Serialize};

use crate::error::TokenError;

/// Role carried in the access token. Decides which route tree a session lands in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

/// Claim set of the access token.
///
/// Derived on demand from the token string and never persisted; the durable
/// mirror stores only the raw token strings. `card_*` fields are demo wallet
/// card data surfaced on the profile screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessClaims {
    #[serde(default)]
    pub sub: Option<String>,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub otp_verified: bool,
    /// Expiry, seconds since the epoch.
    pub exp: i64,
    #[serde(default)]
    pub iat: Option<i64>,
    #[serde(default)]
    pub card_number: Option<String>,
    #[serde(default)]
    pub card_expiry: Option<String>,
}

impl AccessClaims {
    /// Expiry in milliseconds since the epoch, the unit the watcher clock uses.
    #[must_use]
    pub fn expires_at_ms(&self) -> i64 {
        self.exp.saturating_mul(1000)
    }

    #[must_use]
    pub fn is_expired_at(&self, now_ms: i64) -> bool {
        self.expires_at_ms() <= now_ms
    }
}

/// Decode the payload segment of an access token without verifying it.
///
/// # Errors
///
/// Returns an error if the token is not three dot-separated segments, the
/// payload is not base64url, or the payload JSON does not match the claim set.
pub fn decode(token: &str) -> Result<AccessClaims, TokenError> {
    let mut parts = token.split('.');
    let _header = parts.next().ok_or(TokenError::TokenFormat)?;
    let payload = parts.next().ok_or(TokenError::TokenFormat)?;
    let _signature = parts.next().ok_or(TokenError::TokenFormat)?;
    if parts.next().is_some() {
        return Err(TokenError::TokenFormat);
    }

    let bytes = Base64UrlUnpadded::decode_vec(payload).map_err(|_| TokenError::Base64)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// True when the token is expired or cannot be decoded at all.
///
/// Never panics and never errors; a malformed token reads as expired so the
/// caller degrades to "no session".
#[must_use]
pub fn is_expired(token: &str, now_ms: i64) -> bool {
    decode(token).map_or(true, |claims| claims.is_expired_at(now_ms))
}

#[cfg(test)]
pub(crate) mod test_tokens {
    use base64ct::{Base64UrlUnpadded, Encoding};

    /// Build an unsigned token with the given payload JSON. The signature
    /// segment is a placeholder because nothing client-side reads it.
    pub(crate) fn token_with_payload(payload: &serde_json::Value) -> String {
        let header = Base64UrlUnpadded::encode_string(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = Base64UrlUnpadded::encode_string(payload.to_string().as_bytes());
        format!("{header}.{payload}.sig")
    }

    pub(crate) fn user_token(email: &str, otp_verified: bool, exp: i64) -> String {
        token_with_payload(&serde_json::json!({
            "sub": "42",
            "email": email,
            "name": "Amina Yusuf",
            "role": "user",
            "otp_verified": otp_verified,
            "exp": exp,
        }))
    }

    pub(crate) fn admin_token(exp: i64) -> String {
        token_with_payload(&serde_json::json!({
            "sub": "1",
            "email": "root@swiftsend.dev",
            "role": "admin",
            "otp_verified": true,
            "exp": exp,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::test_tokens::{token_with_payload, user_token};
    use super::*;

    const NOW_MS: i64 = 1_700_000_000_000;
    const NOW_SECS: i64 = 1_700_000_000;

    #[test]
    fn decodes_full_claim_set() {
        let token = token_with_payload(&serde_json::json!({
            "sub": "7",
            "email": "amina@inbox.im",
            "name": "Amina Yusuf",
            "role": "admin",
            "otp_verified": true,
            "exp": NOW_SECS + 600,
            "iat": NOW_SECS,
            "card_number": "5523014412345678",
            "card_expiry": "09/29",
        }));

        let claims = decode(&token).expect("decode");
        assert_eq!(claims.email, "amina@inbox.im");
        assert_eq!(claims.role, Role::Admin);
        assert!(claims.otp_verified);
        assert_eq!(claims.exp, NOW_SECS + 600);
        assert_eq!(claims.card_expiry.as_deref(), Some("09/29"));
    }

    #[test]
    fn missing_optional_claims_default() {
        let token = token_with_payload(&serde_json::json!({
            "email": "amina@inbox.im",
            "exp": NOW_SECS + 600,
        }));

        let claims = decode(&token).expect("decode");
        assert_eq!(claims.role, Role::User);
        assert!(!claims.otp_verified);
        assert!(claims.name.is_none());
    }

    #[test]
    fn rejects_wrong_segment_counts() {
        assert!(matches!(decode(""), Err(TokenError::TokenFormat)));
        assert!(matches!(decode("only.two"), Err(TokenError::TokenFormat)));
        assert!(matches!(
            decode("a.b.c.d"),
            Err(TokenError::TokenFormat)
        ));
    }

    #[test]
    fn rejects_bad_encoding_and_bad_json() {
        assert!(matches!(decode("h.$$$.s"), Err(TokenError::Base64)));

        let not_json = Base64UrlUnpadded::encode_string(b"plain text");
        assert!(matches!(
            decode(&format!("h.{not_json}.s")),
            Err(TokenError::Json(_))
        ));
    }

    #[test]
    fn is_expired_truth_table() {
        // exp in the past
        assert!(is_expired(&user_token("a@b.c", true, NOW_SECS - 1), NOW_MS));
        // exp exactly now counts as expired
        assert!(is_expired(&user_token("a@b.c", true, NOW_SECS), NOW_MS));
        // exp in the future
        assert!(!is_expired(&user_token("a@b.c", true, NOW_SECS + 2), NOW_MS));
        // anything non-JWT-shaped reads as expired
        assert!(is_expired("not-a-jwt", NOW_MS));
        assert!(is_expired("", NOW_MS));
    }
}
