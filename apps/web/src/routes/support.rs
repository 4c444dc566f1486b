//! Support tickets: open a ticket and follow up on earlier ones.

use crate::components::{Alert, AlertKind, Button, Spinner};
use crate::features::auth::state::use_auth;
use crate::features::support::client;
use crate::features::support::types::NewTicketRequest;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn SupportPage() -> impl IntoView {
    let auth = use_auth();
    let (version, set_version) = signal(0u32);
    let (subject, set_subject) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (notice, set_notice) = signal::<Option<(AlertKind, String)>>(None);

    let tickets = LocalResource::new(move || {
        version.get();
        let token = auth.access_token();
        async move { client::list_mine(token.as_deref()).await }
    });

    let create_action = Action::new_local(move |request: &NewTicketRequest| {
        let request = request.clone();
        let token = auth.access_token();
        async move { client::create_ticket(&request, token.as_deref()).await }
    });

    Effect::new(move |_| {
        if let Some(result) = create_action.value().get() {
            match result {
                Ok(response) => {
                    set_notice.set(Some((AlertKind::Success, response.msg)));
                    set_subject.set(String::new());
                    set_message.set(String::new());
                    set_version.update(|v| *v += 1);
                }
                Err(err) => set_notice.set(Some((AlertKind::Error, err.user_message()))),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_notice.set(None);

        let subject_value = subject.get_untracked().trim().to_string();
        let message_value = message.get_untracked().trim().to_string();
        if subject_value.is_empty() || message_value.is_empty() {
            set_notice.set(Some((
                AlertKind::Error,
                "Subject and message are required.".to_string(),
            )));
            return;
        }

        create_action.dispatch(NewTicketRequest {
            subject: subject_value,
            message: message_value,
        });
    };

    view! {
        <div class="space-y-6">
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Support"</h1>

            <form
                class="p-6 bg-white dark:bg-gray-900 rounded-xl border border-gray-200 dark:border-gray-800 shadow-sm space-y-4"
                on:submit=on_submit
            >
                <div>
                    <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="subject">
                        "Subject"
                    </label>
                    <input
                        id="subject"
                        type="text"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                        required
                        prop:value=move || subject.get()
                        on:input=move |event| set_subject.set(event_target_value(&event))
                    />
                </div>
                <div>
                    <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="message">
                        "Message"
                    </label>
                    <textarea
                        id="message"
                        rows="4"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                        required
                        prop:value=move || message.get()
                        on:input=move |event| set_message.set(event_target_value(&event))
                    ></textarea>
                </div>
                <Button button_type="submit" disabled=create_action.pending()>
                    "Submit ticket"
                </Button>
                {move || {
                    notice.get().map(|(kind, message)| {
                        view! { <Alert kind=kind message=message /> }
                    })
                }}
            </form>

            <Suspense fallback=|| view! { <Spinner /> }>
                {move || {
                    tickets.get().map(|result| match result {
                        Ok(items) if items.is_empty() => {
                            view! { <p class="text-sm text-gray-500 dark:text-gray-400">"No tickets yet."</p> }
                                .into_any()
                        }
                        Ok(items) => view! {
                            <ul class="space-y-3">
                                {items
                                    .into_iter()
                                    .map(|ticket| view! {
                                        <li class="bg-white dark:bg-gray-900 p-4 rounded-lg border border-gray-200 dark:border-gray-800">
                                            <div class="flex items-center justify-between">
                                                <p class="text-sm font-medium text-gray-900 dark:text-white">
                                                    {ticket.subject}
                                                </p>
                                                <span class="text-xs uppercase text-gray-500 dark:text-gray-400">
                                                    {ticket.status}
                                                </span>
                                            </div>
                                            <p class="mt-1 text-sm text-gray-600 dark:text-gray-300">
                                                {ticket.message}
                                            </p>
                                            {ticket.response.map(|response| view! {
                                                <p class="mt-2 text-sm text-blue-700 dark:text-blue-300">
                                                    "Support: " {response}
                                                </p>
                                            })}
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
    }
}
