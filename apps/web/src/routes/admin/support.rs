//! Support ticket administration: respond to and close user tickets.

use crate::components::{Alert, AlertKind, Spinner};
use crate::features::admin::client;
use crate::features::admin::types::RespondTicketRequest;
use crate::features::auth::state::use_auth;
use leptos::prelude::*;

#[component]
pub fn AdminSupportPage() -> impl IntoView {
    let auth = use_auth();
    let (version, set_version) = signal(0u32);
    let (responding, set_responding) = signal::<Option<i64>>(None);
    let (response_text, set_response_text) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let tickets = LocalResource::new(move || {
        version.get();
        let token = auth.access_token();
        async move { client::list_tickets(token.as_deref()).await }
    });

    let respond_action = Action::new_local(move |input: &(i64, RespondTicketRequest)| {
        let (id, request) = input.clone();
        let token = auth.access_token();
        async move { client::respond_ticket(id, &request, token.as_deref()).await }
    });

    Effect::new(move |_| {
        if let Some(result) = respond_action.value().get() {
            match result {
                Ok(_) => {
                    set_responding.set(None);
                    set_response_text.set(String::new());
                    set_version.update(|v| *v += 1);
                }
                Err(err) => set_error.set(Some(err.user_message())),
            }
        }
    });

    let send_response = move |id: i64, close: bool| {
        let text = response_text.get_untracked().trim().to_string();
        if text.is_empty() && !close {
            set_error.set(Some("A response is required.".to_string()));
            return;
        }
        respond_action.dispatch((
            id,
            RespondTicketRequest {
                response: text,
                status: if close { "closed" } else { "answered" }.to_string(),
            },
        ));
    };

    view! {
        <div class="space-y-6">
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Support Tickets"</h1>

            {move || {
                error.get().map(|message| {
                    view! { <Alert kind=AlertKind::Error message=message /> }
                })
            }}

            <Suspense fallback=|| view! { <Spinner /> }>
                {move || {
                    tickets.get().map(|result| match result {
                        Ok(items) if items.is_empty() => {
                            view! { <p class="text-sm text-gray-500 dark:text-gray-400">"No open tickets."</p> }
                                .into_any()
                        }
                        Ok(items) => view! {
                            <ul class="space-y-3">
                                {items
                                    .into_iter()
                                    .map(|ticket| {
                                        let id = ticket.id;
                                        view! {
                                            <li class="bg-white dark:bg-gray-900 p-4 rounded-lg border border-gray-200 dark:border-gray-800">
                                                <div class="flex items-center justify-between">
                                                    <div>
                                                        <p class="text-sm font-medium text-gray-900 dark:text-white">
                                                            {ticket.subject}
                                                        </p>
                                                        <p class="text-xs text-gray-500 dark:text-gray-400">
                                                            {ticket.user_email} " · " {ticket.created_at}
                                                        </p>
                                                    </div>
                                                    <span class="text-xs uppercase text-gray-500 dark:text-gray-400">
                                                        {ticket.status}
                                                    </span>
                                                </div>
                                                <p class="mt-2 text-sm text-gray-600 dark:text-gray-300">
                                                    {ticket.message}
                                                </p>
                                                {ticket.response.map(|response| view! {
                                                    <p class="mt-2 text-sm text-blue-700 dark:text-blue-300">
                                                        "Response: " {response}
                                                    </p>
                                                })}
                                                <div class="mt-3">
                                                    <Show
                                                        when=move || responding.get() == Some(id)
                                                        fallback=move || view! {
                                                            <button
                                                                type="button"
                                                                class="text-sm text-blue-600 hover:underline"
                                                                on:click=move |_| set_responding.set(Some(id))
                                                            >
                                                                "Respond"
                                                            </button>
                                                        }
                                                    >
                                                        <div class="flex gap-3 items-center">
                                                            <input
                                                                type="text"
                                                                placeholder="Write a response"
                                                                class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg p-2 flex-1 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                                                                on:input=move |event| set_response_text.set(event_target_value(&event))
                                                            />
                                                            <button
                                                                type="button"
                                                                class="text-sm text-emerald-600 hover:underline disabled:opacity-50"
                                                                disabled=move || respond_action.pending().get()
                                                                on:click=move |_| send_response(id, false)
                                                            >
                                                                "Send"
                                                            </button>
                                                            <button
                                                                type="button"
                                                                class="text-sm text-gray-500 hover:underline disabled:opacity-50"
                                                                disabled=move || respond_action.pending().get()
                                                                on:click=move |_| send_response(id, true)
                                                            >
                                                                "Close ticket"
                                                            </button>
                                                        </div>
                                                    </Show>
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
