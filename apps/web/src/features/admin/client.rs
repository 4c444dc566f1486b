//! Client helpers for the admin back-office endpoints. These functions keep
//! endpoint paths centralized and assume the backend enforces authorization.

use crate::{
    app_lib::{delete_json, get_json, post_json, put_json, AppError},
    features::admin::types::{
        AdminTicket, AdminUser, AdminWallet, AuditLogEntry, DashboardMetrics, FxRateRow,
        PendingKycDocument, RejectKycRequest, RespondTicketRequest, UpdateUserRequest,
        UpdateWalletRequest, UpsertFxRateRequest,
    },
    features::auth::types::MsgResponse,
};

pub async fn dashboard_metrics(token: Option<&str>) -> Result<DashboardMetrics, AppError> {
    get_json("/admin/dashboard/metrics", token).await
}

pub async fn list_users(token: Option<&str>) -> Result<Vec<AdminUser>, AppError> {
    get_json("/admin/users", token).await
}

pub async fn update_user(
    id: i64,
    request: &UpdateUserRequest,
    token: Option<&str>,
) -> Result<MsgResponse, AppError> {
    put_json(&format!("/admin/users/{id}"), request, token).await
}

pub async fn delete_user(id: i64, token: Option<&str>) -> Result<MsgResponse, AppError> {
    delete_json(&format!("/admin/users/{id}"), token).await
}

pub async fn reactivate_user(id: i64, token: Option<&str>) -> Result<MsgResponse, AppError> {
    post_json(
        &format!("/admin/users/{id}/reactivate"),
        &serde_json::json!({}),
        token,
    )
    .await
}

pub async fn list_wallets(token: Option<&str>) -> Result<Vec<AdminWallet>, AppError> {
    get_json("/admin/wallets", token).await
}

pub async fn update_wallet(
    id: i64,
    request: &UpdateWalletRequest,
    token: Option<&str>,
) -> Result<MsgResponse, AppError> {
    put_json(&format!("/admin/wallets/{id}"), request, token).await
}

pub async fn delete_wallet(id: i64, token: Option<&str>) -> Result<MsgResponse, AppError> {
    delete_json(&format!("/admin/wallets/{id}"), token).await
}

pub async fn list_fx_rates(token: Option<&str>) -> Result<Vec<FxRateRow>, AppError> {
    get_json("/admin/fx-rates", token).await
}

pub async fn create_fx_rate(
    request: &UpsertFxRateRequest,
    token: Option<&str>,
) -> Result<MsgResponse, AppError> {
    post_json("/admin/fx-rates", request, token).await
}

pub async fn update_fx_rate(
    id: i64,
    request: &UpsertFxRateRequest,
    token: Option<&str>,
) -> Result<MsgResponse, AppError> {
    put_json(&format!("/admin/fx-rates/{id}"), request, token).await
}

pub async fn delete_fx_rate(id: i64, token: Option<&str>) -> Result<MsgResponse, AppError> {
    delete_json(&format!("/admin/fx-rates/{id}"), token).await
}

pub async fn pending_kyc(token: Option<&str>) -> Result<Vec<PendingKycDocument>, AppError> {
    get_json("/admin/kyc/pending", token).await
}

pub async fn approve_kyc(id: i64, token: Option<&str>) -> Result<MsgResponse, AppError> {
    post_json(
        &format!("/admin/kyc/approve/{id}"),
        &serde_json::json!({}),
        token,
    )
    .await
}

pub async fn reject_kyc(
    id: i64,
    request: &RejectKycRequest,
    token: Option<&str>,
) -> Result<MsgResponse, AppError> {
    post_json(&format!("/admin/kyc/reject/{id}"), request, token).await
}

pub async fn list_tickets(token: Option<&str>) -> Result<Vec<AdminTicket>, AppError> {
    get_json("/admin/support/tickets", token).await
}

pub async fn respond_ticket(
    id: i64,
    request: &RespondTicketRequest,
    token: Option<&str>,
) -> Result<MsgResponse, AppError> {
    put_json(&format!("/admin/support/tickets/{id}"), request, token).await
}

pub async fn audit_logs(token: Option<&str>) -> Result<Vec<AuditLogEntry>, AppError> {
    get_json("/admin/audit-logs", token).await
}
