//! Wallet administration: inspect balances and adjust transfer limits.

use crate::app_lib::format::format_amount;
use crate::components::{Alert, AlertKind, Spinner};
use crate::features::admin::client;
use crate::features::admin::types::UpdateWalletRequest;
use crate::features::auth::state::use_auth;
use leptos::prelude::*;

#[component]
pub fn AdminWalletsPage() -> impl IntoView {
    let auth = use_auth();
    let (version, set_version) = signal(0u32);
    let (editing, set_editing) = signal::<Option<i64>>(None);
    let (daily_limit, set_daily_limit) = signal(String::new());
    let (monthly_limit, set_monthly_limit) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let wallets = LocalResource::new(move || {
        version.get();
        let token = auth.access_token();
        async move { client::list_wallets(token.as_deref()).await }
    });

    let update_action = Action::new_local(move |input: &(i64, UpdateWalletRequest)| {
        let (id, request) = input.clone();
        let token = auth.access_token();
        async move { client::update_wallet(id, &request, token.as_deref()).await }
    });

    let delete_action = Action::new_local(move |id: &i64| {
        let id = *id;
        let token = auth.access_token();
        async move { client::delete_wallet(id, token.as_deref()).await }
    });

    Effect::new(move |_| {
        if let Some(result) = update_action.value().get() {
            match result {
                Ok(_) => {
                    set_editing.set(None);
                    set_version.update(|v| *v += 1);
                }
                Err(err) => set_error.set(Some(err.user_message())),
            }
        }
    });
    Effect::new(move |_| {
        if let Some(result) = delete_action.value().get() {
            match result {
                Ok(_) => set_version.update(|v| *v += 1),
                Err(err) => set_error.set(Some(err.user_message())),
            }
        }
    });

    let save_limits = move |id: i64| {
        let daily = daily_limit.get_untracked().trim().parse::<f64>();
        let monthly = monthly_limit.get_untracked().trim().parse::<f64>();
        match (daily, monthly) {
            (Ok(daily_limit), Ok(monthly_limit)) if daily_limit >= 0.0 && monthly_limit >= 0.0 => {
                update_action.dispatch((
                    id,
                    UpdateWalletRequest {
                        daily_limit,
                        monthly_limit,
                    },
                ));
            }
            _ => set_error.set(Some("Limits must be non-negative numbers.".to_string())),
        }
    };

    view! {
        <div class="space-y-6">
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Wallets"</h1>

            {move || {
                error.get().map(|message| {
                    view! { <Alert kind=AlertKind::Error message=message /> }
                })
            }}

            <Suspense fallback=|| view! { <Spinner /> }>
                {move || {
                    wallets.get().map(|result| match result {
                        Ok(items) => view! {
                            <ul class="space-y-3">
                                {items
                                    .into_iter()
                                    .map(|wallet| {
                                        let id = wallet.id;
                                        view! {
                                            <li class="bg-white dark:bg-gray-900 p-4 rounded-lg border border-gray-200 dark:border-gray-800">
                                                <div class="flex items-center justify-between">
                                                    <div>
                                                        <p class="text-sm font-medium text-gray-900 dark:text-white">
                                                            {wallet.owner_email}
                                                        </p>
                                                        <p class="text-xs text-gray-500 dark:text-gray-400">
                                                            {format_amount(wallet.balance, &wallet.currency)}
                                                            {wallet
                                                                .daily_limit
                                                                .map(|limit| format!(" · daily limit {limit:.2}"))
                                                                .unwrap_or_default()}
                                                        </p>
                                                    </div>
                                                    <div class="space-x-3">
                                                        <button
                                                            type="button"
                                                            class="text-sm text-blue-600 hover:underline"
                                                            on:click=move |_| set_editing.set(Some(id))
                                                        >
                                                            "Edit limits"
                                                        </button>
                                                        <button
                                                            type="button"
                                                            class="text-sm text-red-600 hover:underline"
                                                            on:click=move |_| { delete_action.dispatch(id); }
                                                        >
                                                            "Delete"
                                                        </button>
                                                    </div>
                                                </div>
                                                <Show when=move || editing.get() == Some(id)>
                                                    <div class="mt-3 flex flex-wrap gap-3 items-center">
                                                        <input
                                                            type="number"
                                                            step="0.01"
                                                            min="0"
                                                            placeholder="Daily limit"
                                                            class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg p-2 w-36 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                                                            on:input=move |event| set_daily_limit.set(event_target_value(&event))
                                                        />
                                                        <input
                                                            type="number"
                                                            step="0.01"
                                                            min="0"
                                                            placeholder="Monthly limit"
                                                            class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg p-2 w-36 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                                                            on:input=move |event| set_monthly_limit.set(event_target_value(&event))
                                                        />
                                                        <button
                                                            type="button"
                                                            class="text-sm text-emerald-600 hover:underline disabled:opacity-50"
                                                            disabled=move || update_action.pending().get()
                                                            on:click=move |_| save_limits(id)
                                                        >
                                                            "Save"
                                                        </button>
                                                        <button
                                                            type="button"
                                                            class="text-sm text-gray-500 hover:underline"
                                                            on:click=move |_| set_editing.set(None)
                                                        >
                                                            "Cancel"
                                                        </button>
                                                    </div>
                                                </Show>
                                            </li>
                                        }
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
    }
}
