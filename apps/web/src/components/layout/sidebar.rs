//! Side navigation. Wallet links for regular sessions, back-office links for
//! admin sessions; the route guards keep either group from reaching the
//! other's tree regardless of what is clicked.

use auth_session::Role;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

use crate::app_lib::build_info;
use crate::features::auth::state::use_auth;

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = use_auth();
    let session = auth.session;
    let location = use_location();
    let pathname = location.pathname;

    let is_admin = Signal::derive(move || {
        session
            .get()
            .user
            .map(|user| user.role == Role::Admin)
            .unwrap_or(false)
    });

    let link = move |target: &'static str, label: &'static str| {
        let active = Signal::derive(move || pathname.get() == target);
        view! { <SidebarLink target label active /> }
    };

    view! {
        <aside class="w-64 flex-shrink-0 hidden md:flex flex-col border-r border-gray-200 dark:border-gray-800 bg-white dark:bg-gray-900 overflow-y-auto">
            <nav class="flex-1 px-4 py-6 space-y-8">
                <Show when=move || !is_admin.get()>
                    <div>
                        <h3 class="px-2 text-xs font-semibold text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                            "Wallet"
                        </h3>
                        <div class="mt-2 space-y-1">
                            {link("/dashboard", "Dashboard")}
                            {link("/transfer", "Send Money")}
                            {link("/scheduled", "Scheduled")}
                            {link("/beneficiaries", "Beneficiaries")}
                            {link("/transactions", "Transactions")}
                        </div>
                    </div>
                    <div>
                        <h3 class="px-2 text-xs font-semibold text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                            "Account"
                        </h3>
                        <div class="mt-2 space-y-1">
                            {link("/profile", "Profile & KYC")}
                            {link("/support", "Support")}
                        </div>
                    </div>
                </Show>
                <Show when=move || is_admin.get()>
                    <div>
                        <h3 class="px-2 text-xs font-semibold text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                            "Back Office"
                        </h3>
                        <div class="mt-2 space-y-1">
                            {link("/admin/dashboard", "Overview")}
                            {link("/admin/users", "Users")}
                            {link("/admin/wallets", "Wallets")}
                            {link("/admin/fx-rates", "FX Rates")}
                            {link("/admin/kyc", "KYC Review")}
                            {link("/admin/support", "Support")}
                            {link("/admin/audit-logs", "Audit Logs")}
                        </div>
                    </div>
                </Show>
            </nav>

            <div class="p-4 border-t border-gray-100 dark:border-gray-800">
                <p class="text-[10px] text-gray-400 font-mono text-center uppercase tracking-tighter">
                    "SwiftSend " {build_info::git_commit_hash()}
                </p>
            </div>
        </aside>
    }
}

#[component]
fn SidebarLink(
    target: &'static str,
    label: &'static str,
    #[prop(into)] active: Signal<bool>,
) -> impl IntoView {
    view! {
        <A
            href=target
            {..}
            attr:class="flex items-center px-2 py-2 text-sm font-medium rounded-md transition-colors"
            class:text-blue-600=move || active.get()
            class:bg-blue-50=move || active.get()
            class:dark:bg-blue-900=move || active.get()
            class:dark:text-blue-400=move || active.get()
            class:text-gray-600=move || !active.get()
            class:dark:text-gray-300=move || !active.get()
            class:hover:bg-gray-50=move || !active.get()
            class:dark:hover:bg-gray-800=move || !active.get()
        >
            {label}
        </A>
    }
}
