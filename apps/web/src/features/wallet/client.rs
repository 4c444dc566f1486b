//! Client helpers for wallet endpoints. Amount checks happen in the forms;
//! limit enforcement is entirely server-side.

use crate::{
    app_lib::{get_json, post_json, AppError},
    features::auth::types::MsgResponse,
    features::wallet::types::{AmountRequest, UpdateLimitsRequest, Wallet},
};

pub async fn fetch_wallet(token: Option<&str>) -> Result<Wallet, AppError> {
    get_json("/wallet", token).await
}

pub async fn deposit(amount: f64, token: Option<&str>) -> Result<MsgResponse, AppError> {
    post_json("/wallet/deposit", &AmountRequest { amount }, token).await
}

pub async fn withdraw(amount: f64, token: Option<&str>) -> Result<MsgResponse, AppError> {
    post_json("/wallet/withdraw", &AmountRequest { amount }, token).await
}

pub async fn update_limits(
    request: &UpdateLimitsRequest,
    token: Option<&str>,
) -> Result<MsgResponse, AppError> {
    post_json("/wallet/update-limits", request, token).await
}
