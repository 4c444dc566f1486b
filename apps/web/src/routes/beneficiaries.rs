//! Beneficiary management: list, add, favorite, remove.

use crate::components::{Alert, AlertKind, Button, Spinner};
use crate::features::auth::state::use_auth;
use crate::features::beneficiaries::client;
use crate::features::beneficiaries::types::NewBeneficiary;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn BeneficiariesPage() -> impl IntoView {
    let auth = use_auth();
    let (version, set_version) = signal(0u32);
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (bank_account, set_bank_account) = signal(String::new());
    let (bank_name, set_bank_name) = signal(String::new());
    let (notice, set_notice) = signal::<Option<(AlertKind, String)>>(None);

    let beneficiaries = LocalResource::new(move || {
        version.get();
        let token = auth.access_token();
        async move { client::list(token.as_deref()).await }
    });

    let add_action = Action::new_local(move |beneficiary: &NewBeneficiary| {
        let beneficiary = beneficiary.clone();
        let token = auth.access_token();
        async move { client::add(&beneficiary, token.as_deref()).await }
    });

    let remove_action = Action::new_local(move |id: &i64| {
        let id = *id;
        let token = auth.access_token();
        async move { client::remove(id, token.as_deref()).await }
    });

    let favorite_action = Action::new_local(move |id: &i64| {
        let id = *id;
        let token = auth.access_token();
        async move { client::toggle_favorite(id, token.as_deref()).await }
    });

    Effect::new(move |_| {
        if let Some(result) = add_action.value().get() {
            match result {
                Ok(response) => {
                    set_notice.set(Some((AlertKind::Success, response.msg)));
                    set_name.set(String::new());
                    set_version.update(|v| *v += 1);
                }
                Err(err) => set_notice.set(Some((AlertKind::Error, err.user_message()))),
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = remove_action.value().get() {
            match result {
                Ok(_) => set_version.update(|v| *v += 1),
                Err(err) => set_notice.set(Some((AlertKind::Error, err.user_message()))),
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = favorite_action.value().get() {
            match result {
                Ok(_) => set_version.update(|v| *v += 1),
                Err(err) => set_notice.set(Some((AlertKind::Error, err.user_message()))),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_notice.set(None);

        let name_value = name.get_untracked().trim().to_string();
        if name_value.is_empty() {
            set_notice.set(Some((AlertKind::Error, "Name is required.".to_string())));
            return;
        }

        add_action.dispatch(NewBeneficiary {
            name: name_value,
            email: email.get_untracked().trim().to_string(),
            bank_account_number: bank_account.get_untracked().trim().to_string(),
            bank_name: bank_name.get_untracked().trim().to_string(),
            ..NewBeneficiary::default()
        });
    };

    view! {
        <div class="space-y-6">
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Beneficiaries"</h1>

            <form
                class="p-6 bg-white dark:bg-gray-900 rounded-xl border border-gray-200 dark:border-gray-800 shadow-sm flex flex-wrap gap-3 items-end"
                on:submit=on_submit
            >
                <div>
                    <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="name">
                        "Name"
                    </label>
                    <input
                        id="name"
                        type="text"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                        required
                        prop:value=move || name.get()
                        on:input=move |event| set_name.set(event_target_value(&event))
                    />
                </div>
                <div>
                    <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="email">
                        "Email"
                    </label>
                    <input
                        id="email"
                        type="email"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                        on:input=move |event| set_email.set(event_target_value(&event))
                    />
                </div>
                <div>
                    <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="account">
                        "Account number"
                    </label>
                    <input
                        id="account"
                        type="text"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                        on:input=move |event| set_bank_account.set(event_target_value(&event))
                    />
                </div>
                <div>
                    <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="bank">
                        "Bank"
                    </label>
                    <input
                        id="bank"
                        type="text"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                        on:input=move |event| set_bank_name.set(event_target_value(&event))
                    />
                </div>
                <Button button_type="submit" disabled=add_action.pending()>
                    "Add"
                </Button>
            </form>

            {move || {
                notice.get().map(|(kind, message)| {
                    view! { <Alert kind=kind message=message /> }
                })
            }}

            <Suspense fallback=|| view! { <Spinner /> }>
                {move || {
                    beneficiaries.get().map(|result| match result {
                        Ok(items) if items.is_empty() => {
                            view! { <p class="text-sm text-gray-500 dark:text-gray-400">"No beneficiaries yet."</p> }
                                .into_any()
                        }
                        Ok(items) => view! {
                            <ul class="space-y-3">
                                {items
                                    .into_iter()
                                    .map(|beneficiary| {
                                        let id = beneficiary.id;
                                        let star = if beneficiary.is_favorite { "★" } else { "☆" };
                                        view! {
                                            <li class="flex items-center justify-between bg-white dark:bg-gray-900 p-4 rounded-lg border border-gray-200 dark:border-gray-800">
                                                <div>
                                                    <p class="text-sm font-medium text-gray-900 dark:text-white">
                                                        {beneficiary.name}
                                                    </p>
                                                    <p class="text-xs text-gray-500 dark:text-gray-400">
                                                        {beneficiary.bank_name} " " {beneficiary.bank_account_number}
                                                    </p>
                                                </div>
                                                <div class="flex items-center gap-3">
                                                    <button
                                                        type="button"
                                                        class="text-lg text-amber-500 hover:scale-110 transition-transform"
                                                        aria-label="Toggle favorite"
                                                        on:click=move |_| { favorite_action.dispatch(id); }
                                                    >
                                                        {star}
                                                    </button>
                                                    <button
                                                        type="button"
                                                        class="text-sm text-red-600 hover:underline"
                                                        on:click=move |_| { remove_action.dispatch(id); }
                                                    >
                                                        "Remove"
                                                    </button>
                                                </div>
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
