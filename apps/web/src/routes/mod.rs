mod admin;
mod beneficiaries;
mod dashboard;
mod login;
mod not_found;
mod profile;
mod register;
mod scheduled;
mod support;
mod transactions;
mod transfer;
mod verify_otp;

pub(crate) use admin::{
    AdminAuditLogsPage, AdminDashboardPage, AdminFxRatesPage, AdminKycPage, AdminLoginPage,
    AdminSupportPage, AdminUsersPage, AdminWalletsPage,
};
pub(crate) use beneficiaries::BeneficiariesPage;
pub(crate) use dashboard::DashboardPage;
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use profile::ProfilePage;
pub(crate) use register::RegisterPage;
pub(crate) use scheduled::ScheduledTransfersPage;
pub(crate) use support::SupportPage;
pub(crate) use transactions::TransactionsPage;
pub(crate) use transfer::TransferPage;
pub(crate) use verify_otp::OtpVerificationPage;

use crate::components::layout::{AdminLayout, UserLayout};
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Routes};
use leptos_router::path;

/// Route path constants. The session-lifecycle paths come from the core crate
/// so the watcher's classification tables and this route table cannot drift.
pub(crate) mod paths {
    pub(crate) use auth_session::routes::paths::*;
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=|| view! { <Redirect path=paths::LOGIN /> } />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/register") view=RegisterPage />
            <Route path=path!("/verify-otp") view=OtpVerificationPage />
            <Route path=path!("/admin/login") view=AdminLoginPage />
            <ParentRoute path=path!("") view=UserLayout>
                <Route path=path!("dashboard") view=DashboardPage />
                <Route path=path!("transfer") view=TransferPage />
                <Route path=path!("scheduled") view=ScheduledTransfersPage />
                <Route path=path!("beneficiaries") view=BeneficiariesPage />
                <Route path=path!("transactions") view=TransactionsPage />
                <Route path=path!("profile") view=ProfilePage />
                <Route path=path!("support") view=SupportPage />
            </ParentRoute>
            <ParentRoute path=path!("/admin") view=AdminLayout>
                <Route path=path!("dashboard") view=AdminDashboardPage />
                <Route path=path!("users") view=AdminUsersPage />
                <Route path=path!("wallets") view=AdminWalletsPage />
                <Route path=path!("fx-rates") view=AdminFxRatesPage />
                <Route path=path!("kyc") view=AdminKycPage />
                <Route path=path!("support") view=AdminSupportPage />
                <Route path=path!("audit-logs") view=AdminAuditLogsPage />
            </ParentRoute>
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
