//! Shared layout wrapper with the header and content container. It also
//! renders the watcher's session notice, so the expiry message survives the
//! redirect to the login screen. Navigation remains client-side; backend
//! routes must enforce access control.

use crate::components::ui::{Alert, AlertKind, ThemeToggle};
use crate::features::auth::state::use_auth;
use leptos::prelude::*;
use leptos_router::components::A;

/// Wraps routes with a header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let auth = use_auth();
    let is_authenticated = auth.is_authenticated;
    let notice = auth.notice;

    let sign_out = {
        let auth = auth.clone();
        move |_| auth.logout()
    };

    view! {
        <div class="min-h-screen flex flex-col bg-gray-50 dark:bg-gray-950">
            <header class="border-b border-gray-200 bg-white dark:bg-gray-900 dark:border-gray-800">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A href="/" {..} class="flex items-center space-x-3">
                        <span class="text-xl font-semibold whitespace-nowrap text-gray-900 dark:text-white">
                            "SwiftSend"
                        </span>
                    </A>
                    <div class="flex items-center gap-3">
                        <ThemeToggle />
                        <Show when=move || is_authenticated.get()>
                            <button
                                type="button"
                                class="py-2 px-3 text-sm text-gray-900 rounded hover:bg-gray-100 dark:text-white dark:hover:bg-gray-700 transition-colors"
                                on:click=sign_out
                            >
                                "Sign Out"
                            </button>
                        </Show>
                    </div>
                </div>
            </header>
            {move || {
                notice.get().map(|message| {
                    view! {
                        <div class="max-w-screen-xl mx-auto w-full px-4 mt-4">
                            <Alert kind=AlertKind::Info message=message.to_string() />
                        </div>
                    }
                })
            }}
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">{children()}</div>
            </main>
        </div>
    }
}
