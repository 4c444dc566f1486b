//! Client helpers for beneficiary endpoints.

use crate::{
    app_lib::{delete_json, get_json, patch_json, post_json, AppError},
    features::auth::types::MsgResponse,
    features::beneficiaries::types::{Beneficiary, NewBeneficiary},
};

pub async fn list(token: Option<&str>) -> Result<Vec<Beneficiary>, AppError> {
    get_json("/beneficiaries", token).await
}

pub async fn add(
    beneficiary: &NewBeneficiary,
    token: Option<&str>,
) -> Result<MsgResponse, AppError> {
    post_json("/beneficiaries", beneficiary, token).await
}

pub async fn remove(id: i64, token: Option<&str>) -> Result<MsgResponse, AppError> {
    delete_json(&format!("/beneficiaries/{id}"), token).await
}

pub async fn toggle_favorite(id: i64, token: Option<&str>) -> Result<MsgResponse, AppError> {
    patch_json(&format!("/beneficiaries/{id}/favorite"), token).await
}
