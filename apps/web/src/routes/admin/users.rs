//! User administration: suspend, reactivate, delete.

use crate::components::{Alert, AlertKind, Spinner};
use crate::features::admin::client;
use crate::features::admin::types::UpdateUserRequest;
use crate::features::auth::state::use_auth;
use leptos::prelude::*;

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    let auth = use_auth();
    let (version, set_version) = signal(0u32);
    let (error, set_error) = signal::<Option<String>>(None);

    let users = LocalResource::new(move || {
        version.get();
        let token = auth.access_token();
        async move { client::list_users(token.as_deref()).await }
    });

    let suspend_action = Action::new_local(move |id: &i64| {
        let id = *id;
        let token = auth.access_token();
        async move {
            client::update_user(id, &UpdateUserRequest { is_active: false }, token.as_deref()).await
        }
    });

    let reactivate_action = Action::new_local(move |id: &i64| {
        let id = *id;
        let token = auth.access_token();
        async move { client::reactivate_user(id, token.as_deref()).await }
    });

    let delete_action = Action::new_local(move |id: &i64| {
        let id = *id;
        let token = auth.access_token();
        async move { client::delete_user(id, token.as_deref()).await }
    });

    Effect::new(move |_| {
        if let Some(result) = suspend_action.value().get() {
            match result {
                Ok(_) => set_version.update(|v| *v += 1),
                Err(err) => set_error.set(Some(err.user_message())),
            }
        }
    });
    Effect::new(move |_| {
        if let Some(result) = reactivate_action.value().get() {
            match result {
                Ok(_) => set_version.update(|v| *v += 1),
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

    view! {
        <div class="space-y-6">
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Users"</h1>

            {move || {
                error.get().map(|message| {
                    view! { <Alert kind=AlertKind::Error message=message /> }
                })
            }}

            <Suspense fallback=|| view! { <Spinner /> }>
                {move || {
                    users.get().map(|result| match result {
                        Ok(items) => view! {
                            <div class="overflow-x-auto bg-white dark:bg-gray-900 rounded-xl border border-gray-200 dark:border-gray-800">
                                <table class="w-full text-sm text-left text-gray-600 dark:text-gray-300">
                                    <thead class="text-xs uppercase text-gray-500 dark:text-gray-400 border-b border-gray-200 dark:border-gray-800">
                                        <tr>
                                            <th class="px-4 py-3">"Name"</th>
                                            <th class="px-4 py-3">"Email"</th>
                                            <th class="px-4 py-3">"Role"</th>
                                            <th class="px-4 py-3">"Status"</th>
                                            <th class="px-4 py-3 text-right">"Actions"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {items
                                            .into_iter()
                                            .map(|user| {
                                                let id = user.id;
                                                let active = user.is_active;
                                                view! {
                                                    <tr class="border-b border-gray-100 dark:border-gray-800 last:border-0">
                                                        <td class="px-4 py-3 font-medium text-gray-900 dark:text-white">
                                                            {user.full_name}
                                                        </td>
                                                        <td class="px-4 py-3">{user.email}</td>
                                                        <td class="px-4 py-3">{user.role}</td>
                                                        <td class="px-4 py-3">
                                                            {if active { "active" } else { "suspended" }}
                                                        </td>
                                                        <td class="px-4 py-3 text-right space-x-3">
                                                            {if active {
                                                                view! {
                                                                    <button
                                                                        type="button"
                                                                        class="text-sm text-amber-600 hover:underline"
                                                                        on:click=move |_| { suspend_action.dispatch(id); }
                                                                    >
                                                                        "Suspend"
                                                                    </button>
                                                                }
                                                                .into_any()
                                                            } else {
                                                                view! {
                                                                    <button
                                                                        type="button"
                                                                        class="text-sm text-emerald-600 hover:underline"
                                                                        on:click=move |_| { reactivate_action.dispatch(id); }
                                                                    >
                                                                        "Reactivate"
                                                                    </button>
                                                                }
                                                                .into_any()
                                                            }}
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
