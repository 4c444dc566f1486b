mod audit_logs;
mod dashboard;
mod fx_rates;
mod kyc;
mod login;
mod support;
mod users;
mod wallets;

pub(crate) use audit_logs::AdminAuditLogsPage;
pub(crate) use dashboard::AdminDashboardPage;
pub(crate) use fx_rates::AdminFxRatesPage;
pub(crate) use kyc::AdminKycPage;
pub(crate) use login::AdminLoginPage;
pub(crate) use support::AdminSupportPage;
pub(crate) use users::AdminUsersPage;
pub(crate) use wallets::AdminWalletsPage;
