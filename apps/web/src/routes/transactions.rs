//! Transaction history with CSV export. The export endpoint returns the CSV
//! body; the browser download is assembled client-side from a Blob URL.

use crate::app_lib::format::format_amount;
use crate::components::{Alert, AlertKind, Button, Spinner};
use crate::features::auth::state::use_auth;
use crate::features::transactions::client;
use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};

#[component]
pub fn TransactionsPage() -> impl IntoView {
    let auth = use_auth();
    let (notice, set_notice) = signal::<Option<String>>(None);

    let transactions = LocalResource::new(move || {
        let token = auth.access_token();
        async move { client::list_mine(token.as_deref()).await }
    });

    let download_action = Action::new_local(move |_: &()| {
        let token = auth.access_token();
        async move { client::download_csv(token.as_deref()).await }
    });

    Effect::new(move |_| {
        if let Some(result) = download_action.value().get() {
            match result {
                Ok(csv) => {
                    if trigger_download(&csv, "transactions.csv").is_none() {
                        set_notice.set(Some("Download failed.".to_string()));
                    }
                }
                Err(err) => set_notice.set(Some(err.user_message())),
            }
        }
    });

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Transactions"</h1>
                <Button disabled=download_action.pending() on:click=move |_| { download_action.dispatch(()); }>
                    "Export CSV"
                </Button>
            </div>

            {move || {
                notice.get().map(|message| {
                    view! { <Alert kind=AlertKind::Error message=message /> }
                })
            }}

            <Suspense fallback=|| view! { <Spinner /> }>
                {move || {
                    transactions.get().map(|result| match result {
                        Ok(items) if items.is_empty() => {
                            view! { <p class="text-sm text-gray-500 dark:text-gray-400">"No transactions yet."</p> }
                                .into_any()
                        }
                        Ok(items) => view! {
                            <div class="overflow-x-auto bg-white dark:bg-gray-900 rounded-xl border border-gray-200 dark:border-gray-800">
                                <table class="w-full text-sm text-left text-gray-600 dark:text-gray-300">
                                    <thead class="text-xs uppercase text-gray-500 dark:text-gray-400 border-b border-gray-200 dark:border-gray-800">
                                        <tr>
                                            <th class="px-4 py-3">"Date"</th>
                                            <th class="px-4 py-3">"Type"</th>
                                            <th class="px-4 py-3">"Counterparty"</th>
                                            <th class="px-4 py-3">"Status"</th>
                                            <th class="px-4 py-3 text-right">"Amount"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {items
                                            .into_iter()
                                            .map(|tx| view! {
                                                <tr class="border-b border-gray-100 dark:border-gray-800 last:border-0">
                                                    <td class="px-4 py-3">{tx.created_at}</td>
                                                    <td class="px-4 py-3">{tx.kind}</td>
                                                    <td class="px-4 py-3">
                                                        {tx.counterparty.unwrap_or_else(|| "—".to_string())}
                                                    </td>
                                                    <td class="px-4 py-3">{tx.status}</td>
                                                    <td class="px-4 py-3 text-right font-medium text-gray-900 dark:text-white">
                                                        {format_amount(tx.amount, &tx.currency)}
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

/// Turns a CSV body into a browser download via a temporary Blob URL.
fn trigger_download(contents: &str, filename: &str) -> Option<()> {
    let document = web_sys::window()?.document()?;

    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(contents));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/csv");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).ok()?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).ok()?;

    let anchor: web_sys::HtmlAnchorElement =
        document.create_element("a").ok()?.dyn_into().ok()?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();
    let _ = web_sys::Url::revoke_object_url(&url);

    Some(())
}
