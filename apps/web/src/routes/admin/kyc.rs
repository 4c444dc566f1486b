//! KYC review queue: approve or reject pending documents.

use crate::components::{Alert, AlertKind, Spinner};
use crate::features::admin::client;
use crate::features::admin::types::RejectKycRequest;
use crate::features::auth::state::use_auth;
use leptos::prelude::*;

#[component]
pub fn AdminKycPage() -> impl IntoView {
    let auth = use_auth();
    let (version, set_version) = signal(0u32);
    let (rejecting, set_rejecting) = signal::<Option<i64>>(None);
    let (reason, set_reason) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let pending = LocalResource::new(move || {
        version.get();
        let token = auth.access_token();
        async move { client::pending_kyc(token.as_deref()).await }
    });

    let approve_action = Action::new_local(move |id: &i64| {
        let id = *id;
        let token = auth.access_token();
        async move { client::approve_kyc(id, token.as_deref()).await }
    });

    let reject_action = Action::new_local(move |input: &(i64, String)| {
        let (id, reason) = input.clone();
        let token = auth.access_token();
        async move { client::reject_kyc(id, &RejectKycRequest { reason }, token.as_deref()).await }
    });

    Effect::new(move |_| {
        if let Some(result) = approve_action.value().get() {
            match result {
                Ok(_) => set_version.update(|v| *v += 1),
                Err(err) => set_error.set(Some(err.user_message())),
            }
        }
    });
    Effect::new(move |_| {
        if let Some(result) = reject_action.value().get() {
            match result {
                Ok(_) => {
                    set_rejecting.set(None);
                    set_reason.set(String::new());
                    set_version.update(|v| *v += 1);
                }
                Err(err) => set_error.set(Some(err.user_message())),
            }
        }
    });

    let submit_rejection = move |id: i64| {
        let reason_value = reason.get_untracked().trim().to_string();
        if reason_value.is_empty() {
            set_error.set(Some("A rejection reason is required.".to_string()));
            return;
        }
        reject_action.dispatch((id, reason_value));
    };

    view! {
        <div class="space-y-6">
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"KYC Review"</h1>

            {move || {
                error.get().map(|message| {
                    view! { <Alert kind=AlertKind::Error message=message /> }
                })
            }}

            <Suspense fallback=|| view! { <Spinner /> }>
                {move || {
                    pending.get().map(|result| match result {
                        Ok(items) if items.is_empty() => {
                            view! { <p class="text-sm text-gray-500 dark:text-gray-400">"Nothing pending review."</p> }
                                .into_any()
                        }
                        Ok(items) => view! {
                            <ul class="space-y-3">
                                {items
                                    .into_iter()
                                    .map(|document| {
                                        let id = document.id;
                                        view! {
                                            <li class="bg-white dark:bg-gray-900 p-4 rounded-lg border border-gray-200 dark:border-gray-800">
                                                <div class="flex items-center justify-between">
                                                    <div>
                                                        <p class="text-sm font-medium text-gray-900 dark:text-white">
                                                            {document.user_email}
                                                        </p>
                                                        <p class="text-xs text-gray-500 dark:text-gray-400">
                                                            {document.document_type} ", submitted " {document.submitted_at}
                                                        </p>
                                                    </div>
                                                    <div class="space-x-3">
                                                        <button
                                                            type="button"
                                                            class="text-sm text-emerald-600 hover:underline disabled:opacity-50"
                                                            disabled=move || approve_action.pending().get()
                                                            on:click=move |_| { approve_action.dispatch(id); }
                                                        >
                                                            "Approve"
                                                        </button>
                                                        <button
                                                            type="button"
                                                            class="text-sm text-red-600 hover:underline"
                                                            on:click=move |_| set_rejecting.set(Some(id))
                                                        >
                                                            "Reject"
                                                        </button>
                                                    </div>
                                                </div>
                                                <Show when=move || rejecting.get() == Some(id)>
                                                    <div class="mt-3 flex gap-3 items-center">
                                                        <input
                                                            type="text"
                                                            placeholder="Rejection reason"
                                                            class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg p-2 flex-1 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                                                            on:input=move |event| set_reason.set(event_target_value(&event))
                                                        />
                                                        <button
                                                            type="button"
                                                            class="text-sm text-red-600 hover:underline disabled:opacity-50"
                                                            disabled=move || reject_action.pending().get()
                                                            on:click=move |_| submit_rejection(id)
                                                        >
                                                            "Confirm"
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
