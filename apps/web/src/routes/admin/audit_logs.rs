//! Audit trail of back-office and security-relevant actions.

use crate::components::{Alert, AlertKind, Spinner};
use crate::features::admin::client;
use crate::features::auth::state::use_auth;
use leptos::prelude::*;

#[component]
pub fn AdminAuditLogsPage() -> impl IntoView {
    let auth = use_auth();

    let logs = LocalResource::new(move || {
        let token = auth.access_token();
        async move { client::audit_logs(token.as_deref()).await }
    });

    view! {
        <div class="space-y-6">
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Audit Logs"</h1>
            <Suspense fallback=|| view! { <Spinner /> }>
                {move || {
                    logs.get().map(|result| match result {
                        Ok(items) if items.is_empty() => {
                            view! { <p class="text-sm text-gray-500 dark:text-gray-400">"No audit entries."</p> }
                                .into_any()
                        }
                        Ok(items) => view! {
                            <div class="overflow-x-auto bg-white dark:bg-gray-900 rounded-xl border border-gray-200 dark:border-gray-800">
                                <table class="w-full text-sm text-left text-gray-600 dark:text-gray-300">
                                    <thead class="text-xs uppercase text-gray-500 dark:text-gray-400 border-b border-gray-200 dark:border-gray-800">
                                        <tr>
                                            <th class="px-4 py-3">"When"</th>
                                            <th class="px-4 py-3">"Actor"</th>
                                            <th class="px-4 py-3">"Action"</th>
                                            <th class="px-4 py-3">"Detail"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {items
                                            .into_iter()
                                            .map(|entry| view! {
                                                <tr class="border-b border-gray-100 dark:border-gray-800 last:border-0">
                                                    <td class="px-4 py-3 whitespace-nowrap">{entry.created_at}</td>
                                                    <td class="px-4 py-3">{entry.actor}</td>
                                                    <td class="px-4 py-3">{entry.action}</td>
                                                    <td class="px-4 py-3">
                                                        {entry.detail.unwrap_or_else(|| "—".to_string())}
                                                    </td>
                                                </tr>
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
