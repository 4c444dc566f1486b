//! Role-partitioned route guard. Re-evaluates the decoded role on every
//! render and bounces a session rendering the wrong tree to its own landing
//! route. Unauthenticated access falls through to the session watcher's
//! redirect-to-login behavior; this is a UX guard only and real access
//! control lives on the API.

use auth_session::routes;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::features::auth::state::use_auth;

/// Wraps one of the two guarded route trees. Which tree a path belongs to is
/// derived from the path itself, so the same guard serves both layouts.
#[component]
pub fn RoleGuard(children: Children) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let location = use_location();

    Effect::new(move |_| {
        let path = location.pathname.get();
        if let Some(user) = auth.session.get().user {
            if let Some(target) = routes::guard_redirect(user.role, &path) {
                navigate(target, Default::default());
            }
        }
    });

    view! { {children()} }
}
