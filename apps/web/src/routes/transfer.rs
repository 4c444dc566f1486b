//! Send-money route: domestic transfers in the wallet currency, or
//! international transfers with a server-quoted FX preview. Conversion and
//! limit enforcement happen server-side; the preview is display only.

use crate::app_lib::format::format_amount;
use crate::components::{Alert, AlertKind, Button, Spinner};
use crate::features::auth::state::use_auth;
use crate::features::beneficiaries::client as beneficiaries_client;
use crate::features::transfers::client as transfers_client;
use crate::features::transfers::types::{
    DomesticTransferRequest, InternationalTransferRequest,
};
use crate::features::wallet::client as wallet_client;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn TransferPage() -> impl IntoView {
    let auth = use_auth();
    let (beneficiary_id, set_beneficiary_id) = signal(String::new());
    let (amount, set_amount) = signal(String::new());
    let (international, set_international) = signal(false);
    let (target_currency, set_target_currency) = signal("USD".to_string());
    let (note, set_note) = signal(String::new());
    let (notice, set_notice) = signal::<Option<(AlertKind, String)>>(None);

    let beneficiaries = LocalResource::new(move || {
        let token = auth.access_token();
        async move { beneficiaries_client::list(token.as_deref()).await }
    });

    let wallet = LocalResource::new(move || {
        let token = auth.access_token();
        async move { wallet_client::fetch_wallet(token.as_deref()).await }
    });

    // FX preview refreshes whenever the target currency changes.
    let fx_preview = LocalResource::new(move || {
        let target = target_currency.get();
        let enabled = international.get();
        let base = wallet
            .get()
            .and_then(|result| result.ok())
            .map(|wallet| wallet.currency);
        let token = auth.access_token();
        async move {
            if !enabled {
                return None;
            }
            let base = base.unwrap_or_else(|| "USD".to_string());
            Some(transfers_client::fx_rate(&base, &target, token.as_deref()).await)
        }
    });

    let send_action = Action::new_local(move |input: &(i64, f64, bool, String, Option<String>)| {
        let (id, value, is_international, currency, note) = input.clone();
        let token = auth.access_token();
        async move {
            if is_international {
                transfers_client::send_international(
                    &InternationalTransferRequest {
                        beneficiary_id: id,
                        amount: value,
                        target_currency: currency,
                        note,
                    },
                    token.as_deref(),
                )
                .await
            } else {
                transfers_client::send_domestic(
                    &DomesticTransferRequest {
                        beneficiary_id: id,
                        amount: value,
                        note,
                    },
                    token.as_deref(),
                )
                .await
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = send_action.value().get() {
            match result {
                Ok(response) => {
                    set_notice.set(Some((AlertKind::Success, response.msg)));
                    set_amount.set(String::new());
                }
                Err(err) => set_notice.set(Some((AlertKind::Error, err.user_message()))),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_notice.set(None);

        let Ok(id) = beneficiary_id.get_untracked().parse::<i64>() else {
            set_notice.set(Some((AlertKind::Error, "Choose a beneficiary.".to_string())));
            return;
        };
        let Ok(value) = amount.get_untracked().trim().parse::<f64>() else {
            set_notice.set(Some((AlertKind::Error, "Enter a valid amount.".to_string())));
            return;
        };
        if value <= 0.0 {
            set_notice.set(Some((AlertKind::Error, "Enter a positive amount.".to_string())));
            return;
        }

        let note_value = note.get_untracked().trim().to_string();
        send_action.dispatch((
            id,
            value,
            international.get_untracked(),
            target_currency.get_untracked(),
            (!note_value.is_empty()).then_some(note_value),
        ));
    };

    view! {
        <div class="max-w-xl space-y-6">
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Send Money"</h1>

            <form
                class="p-6 bg-white dark:bg-gray-900 rounded-xl border border-gray-200 dark:border-gray-800 shadow-sm space-y-5"
                on:submit=on_submit
            >
                <div>
                    <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="beneficiary">
                        "Beneficiary"
                    </label>
                    <Suspense fallback=|| view! { <Spinner /> }>
                        {move || {
                            beneficiaries.get().map(|result| match result {
                                Ok(items) => view! {
                                    <select
                                        id="beneficiary"
                                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                                        on:change=move |event| set_beneficiary_id.set(event_target_value(&event))
                                    >
                                        <option value="">"Select a beneficiary"</option>
                                        {items
                                            .into_iter()
                                            .map(|beneficiary| view! {
                                                <option value=beneficiary.id.to_string()>
                                                    {beneficiary.name}
                                                </option>
                                            })
                                            .collect_view()}
                                    </select>
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

                <div>
                    <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="amount">
                        "Amount"
                    </label>
                    <input
                        id="amount"
                        type="number"
                        step="0.01"
                        min="0"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                        required
                        prop:value=move || amount.get()
                        on:input=move |event| set_amount.set(event_target_value(&event))
                    />
                </div>

                <div class="flex items-center gap-2">
                    <input
                        id="international"
                        type="checkbox"
                        class="w-4 h-4"
                        on:change=move |event| set_international.set(event_target_checked(&event))
                    />
                    <label class="text-sm text-gray-900 dark:text-white" for="international">
                        "International transfer"
                    </label>
                </div>

                <Show when=move || international.get()>
                    <div>
                        <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="currency">
                            "Target currency"
                        </label>
                        <select
                            id="currency"
                            class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                            on:change=move |event| set_target_currency.set(event_target_value(&event))
                        >
                            <option value="USD">"USD"</option>
                            <option value="EUR">"EUR"</option>
                            <option value="GBP">"GBP"</option>
                            <option value="KES">"KES"</option>
                            <option value="NGN">"NGN"</option>
                        </select>
                        <Suspense fallback=|| view! { <Spinner /> }>
                            {move || {
                                fx_preview.get().flatten().map(|result| match result {
                                    Ok(rate) => view! {
                                        <p class="mt-2 text-xs text-gray-500 dark:text-gray-400">
                                            "1 " {rate.base.clone()} " = "
                                            {format_amount(rate.rate, &rate.target)}
                                        </p>
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
                </Show>

                <div>
                    <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="note">
                        "Note (optional)"
                    </label>
                    <input
                        id="note"
                        type="text"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                        on:input=move |event| set_note.set(event_target_value(&event))
                    />
                </div>

                <Button button_type="submit" disabled=send_action.pending()>
                    "Send"
                </Button>
                {move || {
                    notice.get().map(|(kind, message)| {
                        view! { <Alert kind=kind message=message /> }
                    })
                }}
            </form>
        </div>
    }
}
