//! Back-office overview metrics.

use crate::components::{Alert, AlertKind, Spinner};
use crate::features::admin::client;
use crate::features::auth::state::use_auth;
use leptos::prelude::*;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let auth = use_auth();

    let metrics = LocalResource::new(move || {
        let token = auth.access_token();
        async move { client::dashboard_metrics(token.as_deref()).await }
    });

    view! {
        <div class="space-y-6">
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Overview"</h1>
            <Suspense fallback=|| view! { <Spinner /> }>
                {move || {
                    metrics.get().map(|result| match result {
                        Ok(metrics) => view! {
                            <div class="grid grid-cols-2 lg:grid-cols-3 gap-4">
                                <MetricCard label="Total users" value=metrics.total_users />
                                <MetricCard label="Active users" value=metrics.active_users />
                                <MetricCard label="Wallets" value=metrics.total_wallets />
                                <MetricCard label="Transfers today" value=metrics.transfers_today />
                                <MetricCard label="Pending KYC" value=metrics.pending_kyc />
                                <MetricCard label="Open tickets" value=metrics.open_tickets />
                            </div>
                        }
                        .into_any(),
                        Err(err) => {
                            view! { <Alert kind=AlertKind::Error message=err.user_message() /> }
                                .into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn MetricCard(label: &'static str, value: i64) -> impl IntoView {
    view! {
        <div class="p-5 bg-white dark:bg-gray-900 rounded-xl border border-gray-200 dark:border-gray-800 shadow-sm">
            <p class="text-xs uppercase tracking-wider text-gray-500 dark:text-gray-400">{label}</p>
            <p class="mt-1 text-3xl font-bold text-gray-900 dark:text-white">{value}</p>
        </div>
    }
}
