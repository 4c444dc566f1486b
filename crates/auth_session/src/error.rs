use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons an access token cannot be decoded.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("invalid token format")]
    TokenFormat,
    #[error("invalid base64url encoding")]
    Base64,
    #[error("invalid json")]
    Json(#[from] serde_json::Error),
}

/// Which authentication operation produced an error.
///
/// Serialized in camelCase so the variants match the error kinds the UI layer
/// keys notices on (`login`, `register`, `adminLogin`, `googleLogin`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AuthErrorKind {
    Login,
    Register,
    AdminLogin,
    GoogleLogin,
}

/// Typed error recorded by the session store when an auth operation fails.
///
/// `message` is the server-provided text and is the only part the UI ever
/// surfaces; raw transport errors never reach the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct AuthError {
    pub kind: AuthErrorKind,
    pub message: String,
}

impl AuthError {
    pub fn new(kind: AuthErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_error_kind_uses_camel_case() {
        let json = serde_json::to_string(&AuthErrorKind::AdminLogin).expect("serialize");
        assert_eq!(json, "\"adminLogin\"");

        let kind: AuthErrorKind = serde_json::from_str("\"googleLogin\"").expect("deserialize");
        assert_eq!(kind, AuthErrorKind::GoogleLogin);
    }

    #[test]
    fn auth_error_displays_message_only() {
        let error = AuthError::new(AuthErrorKind::Login, "Invalid credentials");
        assert_eq!(error.to_string(), "Invalid credentials");
    }
}
