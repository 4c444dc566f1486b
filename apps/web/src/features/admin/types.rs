//! Types for the admin back-office endpoints. The backend enforces the admin
//! role on every one of these; the frontend guard is UX only.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DashboardMetrics {
    pub total_users: i64,
    pub active_users: i64,
    pub total_wallets: i64,
    pub transfers_today: i64,
    pub pending_kyc: i64,
    pub open_tickets: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub role: String,
    pub is_active: bool,
    pub created_at: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    pub is_active: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AdminWallet {
    pub id: i64,
    pub owner_email: String,
    pub balance: f64,
    pub currency: String,
    #[serde(default)]
    pub daily_limit: Option<f64>,
    #[serde(default)]
    pub monthly_limit: Option<f64>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateWalletRequest {
    pub daily_limit: f64,
    pub monthly_limit: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FxRateRow {
    pub id: i64,
    pub base: String,
    pub target: String,
    pub rate: f64,
    pub updated_at: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpsertFxRateRequest {
    pub base: String,
    pub target: String,
    pub rate: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PendingKycDocument {
    pub id: i64,
    pub user_email: String,
    pub document_type: String,
    pub submitted_at: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RejectKycRequest {
    pub reason: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AdminTicket {
    pub id: i64,
    pub user_email: String,
    pub subject: String,
    pub message: String,
    pub status: String,
    #[serde(default)]
    pub response: Option<String>,
    pub created_at: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RespondTicketRequest {
    pub response: String,
    pub status: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuditLogEntry {
    pub id: i64,
    pub actor: String,
    pub action: String,
    #[serde(default)]
    pub detail: Option<String>,
    pub created_at: String,
}
