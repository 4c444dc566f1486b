//! Wallet dashboard: balance, deposit/withdraw, KYC standing, and the most
//! recent transactions.

use crate::app_lib::format::format_amount;
use crate::components::{Alert, AlertKind, Spinner};
use crate::features::auth::state::use_auth;
use crate::features::kyc::client as kyc_client;
use crate::features::transactions::client as tx_client;
use crate::features::wallet::client as wallet_client;
use crate::features::wallet::types::UpdateLimitsRequest;
use leptos::prelude::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let (version, set_version) = signal(0u32);
    let (amount, set_amount) = signal(String::new());
    let (notice, set_notice) = signal::<Option<(AlertKind, String)>>(None);

    let greeting = Signal::derive(move || {
        auth.session
            .get()
            .user
            .and_then(|user| user.name)
            .unwrap_or_else(|| "there".to_string())
    });

    let wallet = LocalResource::new(move || {
        version.get();
        let token = auth.access_token();
        async move { wallet_client::fetch_wallet(token.as_deref()).await }
    });

    let kyc = LocalResource::new(move || {
        let token = auth.access_token();
        async move { kyc_client::status(token.as_deref()).await }
    });

    let transactions = LocalResource::new(move || {
        version.get();
        let token = auth.access_token();
        async move { tx_client::list_mine(token.as_deref()).await }
    });

    let move_money = Action::new_local(move |input: &(bool, f64)| {
        let (is_deposit, value) = *input;
        let token = auth.access_token();
        async move {
            if is_deposit {
                wallet_client::deposit(value, token.as_deref()).await
            } else {
                wallet_client::withdraw(value, token.as_deref()).await
            }
        }
    });

    let (daily_limit, set_daily_limit) = signal(String::new());
    let (monthly_limit, set_monthly_limit) = signal(String::new());

    let limits_action = Action::new_local(move |request: &UpdateLimitsRequest| {
        let request = request.clone();
        let token = auth.access_token();
        async move { wallet_client::update_limits(&request, token.as_deref()).await }
    });

    Effect::new(move |_| {
        if let Some(result) = limits_action.value().get() {
            match result {
                Ok(response) => {
                    set_notice.set(Some((AlertKind::Success, response.msg)));
                    set_version.update(|v| *v += 1);
                }
                Err(err) => set_notice.set(Some((AlertKind::Error, err.user_message()))),
            }
        }
    });

    let save_limits = move |_| {
        set_notice.set(None);
        let daily = daily_limit.get_untracked().trim().parse::<f64>();
        let monthly = monthly_limit.get_untracked().trim().parse::<f64>();
        match (daily, monthly) {
            (Ok(daily_limit), Ok(monthly_limit)) if daily_limit >= 0.0 && monthly_limit >= 0.0 => {
                limits_action.dispatch(UpdateLimitsRequest {
                    daily_limit,
                    monthly_limit,
                });
            }
            _ => set_notice.set(Some((
                AlertKind::Error,
                "Limits must be non-negative numbers.".to_string(),
            ))),
        }
    };

    Effect::new(move |_| {
        if let Some(result) = move_money.value().get() {
            match result {
                Ok(response) => {
                    set_notice.set(Some((AlertKind::Success, response.msg)));
                    set_amount.set(String::new());
                    set_version.update(|v| *v += 1);
                }
                Err(err) => set_notice.set(Some((AlertKind::Error, err.user_message()))),
            }
        }
    });

    let submit = move |is_deposit: bool| {
        set_notice.set(None);
        match amount.get_untracked().trim().parse::<f64>() {
            Ok(value) if value > 0.0 => {
                move_money.dispatch((is_deposit, value));
            }
            _ => set_notice.set(Some((
                AlertKind::Error,
                "Enter a positive amount.".to_string(),
            ))),
        }
    };

    view! {
        <div class="space-y-6">
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                "Welcome back, " {move || greeting.get()}
            </h1>

            <Suspense fallback=|| view! { <Spinner /> }>
                {move || {
                    wallet.get().map(|result| match result {
                        Ok(wallet) => view! {
                            <div class="p-6 bg-white dark:bg-gray-900 rounded-xl border border-gray-200 dark:border-gray-800 shadow-sm">
                                <p class="text-sm text-gray-500 dark:text-gray-400">"Balance"</p>
                                <p class="text-3xl font-bold text-gray-900 dark:text-white">
                                    {format_amount(wallet.balance, &wallet.currency)}
                                </p>
                                {wallet.daily_limit.map(|limit| view! {
                                    <p class="mt-2 text-xs text-gray-500 dark:text-gray-400">
                                        "Daily limit: " {format_amount(limit, &wallet.currency)}
                                    </p>
                                })}
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

            <Suspense fallback=|| view! { <Spinner /> }>
                {move || {
                    kyc.get().map(|result| match result {
                        Ok(status) if status.status != "approved" => {
                            let message = match status.status.as_str() {
                                "pending" => "Your KYC documents are under review.".to_string(),
                                "rejected" => format!(
                                    "KYC rejected: {}",
                                    status
                                        .rejection_reason
                                        .unwrap_or_else(|| "no reason given".to_string())
                                ),
                                _ => "Complete KYC verification from your profile to lift transfer limits.".to_string(),
                            };
                            Some(view! { <Alert kind=AlertKind::Info message=message /> })
                        }
                        _ => None,
                    })
                }}
            </Suspense>

            <div class="p-6 bg-white dark:bg-gray-900 rounded-xl border border-gray-200 dark:border-gray-800 shadow-sm">
                <h2 class="text-lg font-semibold text-gray-900 dark:text-white mb-4">
                    "Move money"
                </h2>
                <div class="flex flex-wrap gap-3 items-center">
                    <input
                        type="number"
                        step="0.01"
                        min="0"
                        placeholder="Amount"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg p-2.5 w-40 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                        prop:value=move || amount.get()
                        on:input=move |event| set_amount.set(event_target_value(&event))
                    />
                    <button
                        type="button"
                        class="px-4 py-2.5 text-sm font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800 disabled:opacity-50"
                        disabled=move || move_money.pending().get()
                        on:click=move |_| submit(true)
                    >
                        "Deposit"
                    </button>
                    <button
                        type="button"
                        class="px-4 py-2.5 text-sm font-medium text-gray-900 bg-white border border-gray-300 rounded-lg hover:bg-gray-100 dark:bg-gray-800 dark:text-white dark:border-gray-600 dark:hover:bg-gray-700 disabled:opacity-50"
                        disabled=move || move_money.pending().get()
                        on:click=move |_| submit(false)
                    >
                        "Withdraw"
                    </button>
                </div>
                {move || {
                    notice.get().map(|(kind, message)| {
                        view! { <div class="mt-4"><Alert kind=kind message=message /></div> }
                    })
                }}
            </div>

            <div class="p-6 bg-white dark:bg-gray-900 rounded-xl border border-gray-200 dark:border-gray-800 shadow-sm">
                <h2 class="text-lg font-semibold text-gray-900 dark:text-white mb-4">
                    "Spending limits"
                </h2>
                <div class="flex flex-wrap gap-3 items-center">
                    <input
                        type="number"
                        step="0.01"
                        min="0"
                        placeholder="Daily limit"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg p-2.5 w-40 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                        on:input=move |event| set_daily_limit.set(event_target_value(&event))
                    />
                    <input
                        type="number"
                        step="0.01"
                        min="0"
                        placeholder="Monthly limit"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg p-2.5 w-40 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                        on:input=move |event| set_monthly_limit.set(event_target_value(&event))
                    />
                    <button
                        type="button"
                        class="px-4 py-2.5 text-sm font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800 disabled:opacity-50"
                        disabled=move || limits_action.pending().get()
                        on:click=save_limits
                    >
                        "Save limits"
                    </button>
                </div>
            </div>

            <div class="p-6 bg-white dark:bg-gray-900 rounded-xl border border-gray-200 dark:border-gray-800 shadow-sm">
                <h2 class="text-lg font-semibold text-gray-900 dark:text-white mb-4">
                    "Recent transactions"
                </h2>
                <Suspense fallback=|| view! { <Spinner /> }>
                    {move || {
                        transactions.get().map(|result| match result {
                            Ok(items) if items.is_empty() => {
                                view! { <p class="text-sm text-gray-500 dark:text-gray-400">"No transactions yet."</p> }
                                    .into_any()
                            }
                            Ok(items) => view! {
                                <ul class="divide-y divide-gray-100 dark:divide-gray-800">
                                    {items
                                        .into_iter()
                                        .take(5)
                                        .map(|tx| view! {
                                            <li class="py-3 flex items-center justify-between">
                                                <div>
                                                    <p class="text-sm font-medium text-gray-900 dark:text-white">
                                                        {tx.counterparty.unwrap_or_else(|| tx.kind.clone())}
                                                    </p>
                                                    <p class="text-xs text-gray-500 dark:text-gray-400">{tx.created_at}</p>
                                                </div>
                                                <span class="text-sm font-semibold text-gray-900 dark:text-white">
                                                    {format_amount(tx.amount, &tx.currency)}
                                                </span>
                                            </li>
                                        })
                                        .collect_view()}
                                </ul>
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
        </div>
    }
}
