//! Request and response types for auth endpoints. These payloads carry
//! credentials and token material, so they must never be logged.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GoogleLoginRequest {
    /// Credential string minted by Google Identity Services in the browser.
    pub credential: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerifyOtpRequest {
    pub code: String,
}

/// Token pair returned by every successful auth exchange. `requires_otp` is
/// set on password logins that still need the OTP gate.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TokenPairResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub requires_otp: bool,
}

/// Plain acknowledgement body (`{"msg": ...}`) used by several endpoints.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MsgResponse {
    pub msg: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_pair_defaults_optional_fields() {
        let pair: TokenPairResponse =
            serde_json::from_str(r#"{"access_token":"abc"}"#).expect("deserialize");
        assert_eq!(pair.access_token, "abc");
        assert_eq!(pair.refresh_token, None);
        assert!(!pair.requires_otp);
    }

    #[test]
    fn token_pair_reads_full_payload() {
        let pair: TokenPairResponse = serde_json::from_str(
            r#"{"access_token":"abc","refresh_token":"def","requires_otp":true}"#,
        )
        .expect("deserialize");
        assert_eq!(pair.refresh_token.as_deref(), Some("def"));
        assert!(pair.requires_otp);
    }
}
