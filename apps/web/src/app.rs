use crate::app_lib::theme;
use crate::features::auth::state::AuthProvider;
use crate::features::auth::watcher::SessionWatcher;
use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    theme::apply(theme::load());

    view! {
        <AuthProvider>
            <Router>
                <SessionWatcher />
                <AppRoutes />
            </Router>
        </AuthProvider>
    }
}
