use crate::components::layout::{AppShell, Sidebar};
use crate::features::auth::RoleGuard;
use leptos::prelude::*;
use leptos_router::components::Outlet;

/// Layout wrapper for the authenticated non-admin tree.
#[component]
pub fn UserLayout() -> impl IntoView {
    view! {
        <RoleGuard>
            <AppShell>
                <div class="flex gap-6">
                    <Sidebar />
                    <div class="flex-1 min-w-0">
                        <Outlet />
                    </div>
                </div>
            </AppShell>
        </RoleGuard>
    }
}
