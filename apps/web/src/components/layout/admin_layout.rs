use crate::components::layout::{AppShell, Sidebar};
use crate::features::auth::RoleGuard;
use leptos::prelude::*;
use leptos_router::components::Outlet;

/// Layout wrapper for the admin back-office tree. Access control is enforced
/// by the API on every call; the guard only keeps non-admin sessions out of
/// the admin UX.
#[component]
pub fn AdminLayout() -> impl IntoView {
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
