//! Client wrappers for the auth API endpoints. These helpers centralize
//! endpoint paths and keep token handling out of route code.

use crate::{
    app_lib::{post_json, AppError},
    features::auth::types::{
        GoogleLoginRequest, LoginRequest, MsgResponse, RegisterRequest, TokenPairResponse,
        VerifyOtpRequest,
    },
};

/// Exchanges email/password credentials for a token pair.
pub async fn login(request: &LoginRequest) -> Result<TokenPairResponse, AppError> {
    post_json("/auth/login", request, None).await
}

/// Creates an account. The server replies with an acknowledgement only; the
/// user signs in afterwards.
pub async fn register(request: &RegisterRequest) -> Result<MsgResponse, AppError> {
    post_json("/auth/register", request, None).await
}

/// Exchanges a Google Identity credential for a token pair.
pub async fn google_login(request: &GoogleLoginRequest) -> Result<TokenPairResponse, AppError> {
    post_json("/auth/google", request, None).await
}

/// Admin variant of the password login, against the admin endpoint.
pub async fn admin_login(request: &LoginRequest) -> Result<TokenPairResponse, AppError> {
    post_json("/auth/admin/login", request, None).await
}

/// Verifies the one-time passcode. Requires the pre-verification bearer token
/// and returns the upgraded token pair.
pub async fn verify_otp(
    request: &VerifyOtpRequest,
    token: &str,
) -> Result<TokenPairResponse, AppError> {
    post_json("/auth/verify-otp", request, Some(token)).await
}

/// Requests a fresh one-time passcode for the current pre-verification session.
pub async fn generate_otp(token: &str) -> Result<MsgResponse, AppError> {
    post_json("/auth/generate-otp", &serde_json::json!({}), Some(token)).await
}
