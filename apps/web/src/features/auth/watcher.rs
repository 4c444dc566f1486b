//! Session watcher component. Evaluates the reconciliation state machine on
//! every token or route change (and when the armed expiry timer fires) and
//! executes the resulting effects against the router, the notice signal, and
//! the session store.

use std::cell::RefCell;
use std::rc::Rc;

use auth_session::watcher::{self, Effect as WatcherEffect, WatcherInput};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::features::auth::state::use_auth;

#[component]
pub fn SessionWatcher() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let location = use_location();

    // Single timer slot. Dropping a Timeout cancels it, so replacing the slot
    // on every evaluation (and clearing it on unmount) guarantees a stale
    // timer can never log out a newer session.
    let timer: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let (timer_generation, bump_timer_generation) = signal(0u32);

    {
        let timer = timer.clone();
        on_cleanup(move || {
            timer.borrow_mut().take();
        });
    }

    Effect::new(move |_| {
        let route = location.pathname.get();
        let session = auth.session.get();
        // Re-run when the armed timer fires.
        timer_generation.get();

        let now_ms = js_sys::Date::now() as i64;
        let reconciliation = watcher::reconcile(&WatcherInput {
            memory_token: session.access_token.as_deref(),
            stored_tokens: auth.stored_tokens(),
            route: &route,
            now_ms,
        });

        log::debug!("session watcher: {:?} on {route}", reconciliation.state);

        // Whatever was armed belongs to the previous evaluation.
        timer.borrow_mut().take();

        for effect in reconciliation.effects {
            match effect {
                WatcherEffect::Hydrate(tokens) => auth.hydrate(tokens),
                WatcherEffect::ClearSession => auth.logout(),
                WatcherEffect::Notify(notice) => auth.notice.set(Some(notice)),
                WatcherEffect::Navigate(path) => navigate(path, Default::default()),
                WatcherEffect::ArmExpiryTimer { delay_ms } => {
                    let delay = u32::try_from(delay_ms).unwrap_or(u32::MAX);
                    *timer.borrow_mut() = Some(Timeout::new(delay, move || {
                        bump_timer_generation.update(|generation| *generation += 1);
                    }));
                }
            }
        }
    });
}
