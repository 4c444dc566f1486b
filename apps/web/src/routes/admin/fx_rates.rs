//! FX rate administration: the rates used to quote international transfers.

use crate::components::{Alert, AlertKind, Button, Spinner};
use crate::features::admin::client;
use crate::features::admin::types::UpsertFxRateRequest;
use crate::features::auth::state::use_auth;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn AdminFxRatesPage() -> impl IntoView {
    let auth = use_auth();
    let (version, set_version) = signal(0u32);
    let (base, set_base) = signal(String::new());
    let (target, set_target) = signal(String::new());
    let (rate, set_rate) = signal(String::new());
    let (notice, set_notice) = signal::<Option<(AlertKind, String)>>(None);

    let rates = LocalResource::new(move || {
        version.get();
        let token = auth.access_token();
        async move { client::list_fx_rates(token.as_deref()).await }
    });

    let create_action = Action::new_local(move |request: &UpsertFxRateRequest| {
        let request = request.clone();
        let token = auth.access_token();
        async move { client::create_fx_rate(&request, token.as_deref()).await }
    });

    let delete_action = Action::new_local(move |id: &i64| {
        let id = *id;
        let token = auth.access_token();
        async move { client::delete_fx_rate(id, token.as_deref()).await }
    });

    let (editing, set_editing) = signal::<Option<i64>>(None);
    let (new_rate, set_new_rate) = signal(String::new());

    let update_action = Action::new_local(move |input: &(i64, UpsertFxRateRequest)| {
        let (id, request) = input.clone();
        let token = auth.access_token();
        async move { client::update_fx_rate(id, &request, token.as_deref()).await }
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
        if let Some(result) = delete_action.value().get() {
            match result {
                Ok(_) => set_version.update(|v| *v += 1),
                Err(err) => set_notice.set(Some((AlertKind::Error, err.user_message()))),
            }
        }
    });
    Effect::new(move |_| {
        if let Some(result) = update_action.value().get() {
            match result {
                Ok(_) => {
                    set_editing.set(None);
                    set_new_rate.set(String::new());
                    set_version.update(|v| *v += 1);
                }
                Err(err) => set_notice.set(Some((AlertKind::Error, err.user_message()))),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_notice.set(None);

        let base_value = base.get_untracked().trim().to_uppercase();
        let target_value = target.get_untracked().trim().to_uppercase();
        let parsed_rate = rate.get_untracked().trim().parse::<f64>();
        match parsed_rate {
            Ok(value) if value > 0.0 && base_value.len() == 3 && target_value.len() == 3 => {
                create_action.dispatch(UpsertFxRateRequest {
                    base: base_value,
                    target: target_value,
                    rate: value,
                });
            }
            _ => set_notice.set(Some((
                AlertKind::Error,
                "Provide 3-letter currency codes and a positive rate.".to_string(),
            ))),
        }
    };

    view! {
        <div class="space-y-6">
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"FX Rates"</h1>

            <form
                class="p-6 bg-white dark:bg-gray-900 rounded-xl border border-gray-200 dark:border-gray-800 shadow-sm flex flex-wrap gap-3 items-end"
                on:submit=on_submit
            >
                <div>
                    <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="base">
                        "Base"
                    </label>
                    <input
                        id="base"
                        type="text"
                        maxlength="3"
                        placeholder="USD"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg p-2.5 w-24 uppercase dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                        required
                        on:input=move |event| set_base.set(event_target_value(&event))
                    />
                </div>
                <div>
                    <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="target">
                        "Target"
                    </label>
                    <input
                        id="target"
                        type="text"
                        maxlength="3"
                        placeholder="KES"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg p-2.5 w-24 uppercase dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                        required
                        on:input=move |event| set_target.set(event_target_value(&event))
                    />
                </div>
                <div>
                    <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="rate">
                        "Rate"
                    </label>
                    <input
                        id="rate"
                        type="number"
                        step="0.0001"
                        min="0"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg p-2.5 w-32 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                        required
                        on:input=move |event| set_rate.set(event_target_value(&event))
                    />
                </div>
                <Button button_type="submit" disabled=create_action.pending()>
                    "Add rate"
                </Button>
            </form>

            {move || {
                notice.get().map(|(kind, message)| {
                    view! { <Alert kind=kind message=message /> }
                })
            }}

            <Suspense fallback=|| view! { <Spinner /> }>
                {move || {
                    rates.get().map(|result| match result {
                        Ok(items) => view! {
                            <div class="overflow-x-auto bg-white dark:bg-gray-900 rounded-xl border border-gray-200 dark:border-gray-800">
                                <table class="w-full text-sm text-left text-gray-600 dark:text-gray-300">
                                    <thead class="text-xs uppercase text-gray-500 dark:text-gray-400 border-b border-gray-200 dark:border-gray-800">
                                        <tr>
                                            <th class="px-4 py-3">"Pair"</th>
                                            <th class="px-4 py-3">"Rate"</th>
                                            <th class="px-4 py-3">"Updated"</th>
                                            <th class="px-4 py-3 text-right">"Actions"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {items
                                            .into_iter()
                                            .map(|row| {
                                                let id = row.id;
                                                let base = row.base.clone();
                                                let target = row.target.clone();
                                                let save = move |_| {
                                                    match new_rate.get_untracked().trim().parse::<f64>() {
                                                        Ok(value) if value > 0.0 => {
                                                            update_action.dispatch((
                                                                id,
                                                                UpsertFxRateRequest {
                                                                    base: base.clone(),
                                                                    target: target.clone(),
                                                                    rate: value,
                                                                },
                                                            ));
                                                        }
                                                        _ => set_notice.set(Some((
                                                            AlertKind::Error,
                                                            "Enter a positive rate.".to_string(),
                                                        ))),
                                                    }
                                                };
                                                view! {
                                                    <tr class="border-b border-gray-100 dark:border-gray-800 last:border-0">
                                                        <td class="px-4 py-3 font-medium text-gray-900 dark:text-white">
                                                            {row.base} "/" {row.target}
                                                        </td>
                                                        <td class="px-4 py-3">
                                                            <Show
                                                                when=move || editing.get() == Some(id)
                                                                fallback=move || format!("{:.4}", row.rate)
                                                            >
                                                                <input
                                                                    type="number"
                                                                    step="0.0001"
                                                                    min="0"
                                                                    class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg p-1.5 w-28 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                                                                    on:input=move |event| set_new_rate.set(event_target_value(&event))
                                                                />
                                                            </Show>
                                                        </td>
                                                        <td class="px-4 py-3">{row.updated_at}</td>
                                                        <td class="px-4 py-3 text-right space-x-3">
                                                            <Show
                                                                when=move || editing.get() == Some(id)
                                                                fallback=move || view! {
                                                                    <button
                                                                        type="button"
                                                                        class="text-sm text-blue-600 hover:underline"
                                                                        on:click=move |_| set_editing.set(Some(id))
                                                                    >
                                                                        "Edit"
                                                                    </button>
                                                                }
                                                            >
                                                                <button
                                                                    type="button"
                                                                    class="text-sm text-emerald-600 hover:underline disabled:opacity-50"
                                                                    disabled=move || update_action.pending().get()
                                                                    on:click=save.clone()
                                                                >
                                                                    "Save"
                                                                </button>
                                                            </Show>
                                                            <button
                                                                type="button"
                                                                class="text-sm text-red-600 hover:underline"
                                                                on:click=move |_| { delete_action.dispatch(id); }
                                                            >
                                                                "Delete"
                                                            </button>
                                                        </td>
                                                    </tr>
                                                }
                                            })
                                            .collect_view()}
                                    </tbody>
                                </table>
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
