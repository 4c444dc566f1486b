//! Scheduled and recurring transfers: list, create, cancel. Execution is
//! entirely server-side; this screen only manages the schedule records.

use crate::app_lib::format::format_amount;
use crate::components::{Alert, AlertKind, Button, Spinner};
use crate::features::auth::state::use_auth;
use crate::features::beneficiaries::client as beneficiaries_client;
use crate::features::transfers::client;
use crate::features::transfers::types::ScheduleTransferRequest;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn ScheduledTransfersPage() -> impl IntoView {
    let auth = use_auth();
    let (version, set_version) = signal(0u32);
    let (beneficiary_id, set_beneficiary_id) = signal(String::new());
    let (amount, set_amount) = signal(String::new());
    let (frequency, set_frequency) = signal("monthly".to_string());
    let (start_date, set_start_date) = signal(String::new());
    let (notice, set_notice) = signal::<Option<(AlertKind, String)>>(None);

    let scheduled = LocalResource::new(move || {
        version.get();
        let token = auth.access_token();
        async move { client::list_scheduled(token.as_deref()).await }
    });

    let beneficiaries = LocalResource::new(move || {
        let token = auth.access_token();
        async move { beneficiaries_client::list(token.as_deref()).await }
    });

    let create_action = Action::new_local(move |request: &ScheduleTransferRequest| {
        let request = request.clone();
        let token = auth.access_token();
        async move { client::schedule(&request, token.as_deref()).await }
    });

    let cancel_action = Action::new_local(move |id: &i64| {
        let id = *id;
        let token = auth.access_token();
        async move { client::cancel_scheduled(id, token.as_deref()).await }
    });

    Effect::new(move |_| {
        if let Some(result) = create_action.value().get() {
            match result {
                Ok(response) => {
                    set_notice.set(Some((AlertKind::Success, response.msg)));
                    set_version.update(|v| *v += 1);
                }
                Err(err) => set_notice.set(Some((AlertKind::Error, err.user_message()))),
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = cancel_action.value().get() {
            match result {
                Ok(_) => set_version.update(|v| *v += 1),
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
        let date = start_date.get_untracked();
        if value <= 0.0 || date.is_empty() {
            set_notice.set(Some((
                AlertKind::Error,
                "Amount and start date are required.".to_string(),
            )));
            return;
        }

        create_action.dispatch(ScheduleTransferRequest {
            beneficiary_id: id,
            amount: value,
            frequency: frequency.get_untracked(),
            start_date: date,
        });
    };

    view! {
        <div class="space-y-6">
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                "Scheduled Transfers"
            </h1>

            <form
                class="p-6 bg-white dark:bg-gray-900 rounded-xl border border-gray-200 dark:border-gray-800 shadow-sm flex flex-wrap gap-3 items-end"
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
                                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                                        on:change=move |event| set_beneficiary_id.set(event_target_value(&event))
                                    >
                                        <option value="">"Select"</option>
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
                                Err(_) => view! { <p class="text-sm text-red-500">"Failed to load."</p> }.into_any(),
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
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg p-2.5 w-32 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                        on:input=move |event| set_amount.set(event_target_value(&event))
                    />
                </div>
                <div>
                    <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="frequency">
                        "Frequency"
                    </label>
                    <select
                        id="frequency"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                        prop:value=move || frequency.get()
                        on:change=move |event| set_frequency.set(event_target_value(&event))
                    >
                        <option value="once">"Once"</option>
                        <option value="daily">"Daily"</option>
                        <option value="weekly">"Weekly"</option>
                        <option value="monthly">"Monthly"</option>
                    </select>
                </div>
                <div>
                    <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="start">
                        "Start date"
                    </label>
                    <input
                        id="start"
                        type="date"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                        on:input=move |event| set_start_date.set(event_target_value(&event))
                    />
                </div>
                <Button button_type="submit" disabled=create_action.pending()>
                    "Schedule"
                </Button>
            </form>

            {move || {
                notice.get().map(|(kind, message)| {
                    view! { <Alert kind=kind message=message /> }
                })
            }}

            <Suspense fallback=|| view! { <Spinner /> }>
                {move || {
                    scheduled.get().map(|result| match result {
                        Ok(items) if items.is_empty() => {
                            view! { <p class="text-sm text-gray-500 dark:text-gray-400">"Nothing scheduled."</p> }
                                .into_any()
                        }
                        Ok(items) => view! {
                            <ul class="space-y-3">
                                {items
                                    .into_iter()
                                    .map(|item| {
                                        let id = item.id;
                                        view! {
                                            <li class="flex items-center justify-between bg-white dark:bg-gray-900 p-4 rounded-lg border border-gray-200 dark:border-gray-800">
                                                <div>
                                                    <p class="text-sm font-medium text-gray-900 dark:text-white">
                                                        {item.beneficiary_name} " — " {format_amount(item.amount, "")}
                                                    </p>
                                                    <p class="text-xs text-gray-500 dark:text-gray-400">
                                                        {item.frequency} ", next run " {item.next_run}
                                                    </p>
                                                </div>
                                                <button
                                                    type="button"
                                                    class="text-sm text-red-600 hover:underline disabled:opacity-50"
                                                    disabled=move || cancel_action.pending().get()
                                                    on:click=move |_| { cancel_action.dispatch(id); }
                                                >
                                                    "Cancel"
                                                </button>
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
