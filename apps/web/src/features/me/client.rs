//! Client helpers for the caller's own profile.

use crate::{
    app_lib::{get_json, post_json, put_json, AppError},
    features::auth::types::MsgResponse,
    features::me::types::{ChangePasswordRequest, UpdateProfileRequest, UserProfile},
};

pub async fn me(token: Option<&str>) -> Result<UserProfile, AppError> {
    get_json("/user/me", token).await
}

pub async fn update_profile(
    request: &UpdateProfileRequest,
    token: Option<&str>,
) -> Result<MsgResponse, AppError> {
    put_json("/user/update", request, token).await
}

pub async fn change_password(
    request: &ChangePasswordRequest,
    token: Option<&str>,
) -> Result<MsgResponse, AppError> {
    post_json("/user/change-password", request, token).await
}
