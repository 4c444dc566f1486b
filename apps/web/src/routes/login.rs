//! Login route: password credentials plus the Google Identity credential
//! bridge. Successful logins do not navigate here; the session watcher sees
//! the token change and routes the session to the OTP gate or its landing
//! page.

use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::state::use_auth;
use crate::features::auth::types::{GoogleLoginRequest, LoginRequest};
use crate::features::auth::validate::is_valid_email;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let login_action = Action::new_local(move |request: &LoginRequest| {
        let request = request.clone();
        async move { auth.login(&request).await }
    });

    let google_action = Action::new_local(move |request: &GoogleLoginRequest| {
        let request = request.clone();
        async move { auth.google_login(&request).await }
    });

    // Bridge from the Google Identity Services script: index.html forwards
    // the credential as a custom DOM event because GIS cannot call into the
    // WASM module directly.
    Effect::new(move |_| {
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return;
        };
        let forward = Closure::wrap(Box::new(move |event: web_sys::CustomEvent| {
            if let Some(credential) = event.detail().as_string() {
                google_action.dispatch(GoogleLoginRequest { credential });
            }
        }) as Box<dyn FnMut(web_sys::CustomEvent)>);
        let _ = document.add_event_listener_with_callback(
            "swiftsend:google-credential",
            forward.as_ref().unchecked_ref(),
        );
        forward.forget();
    });

    Effect::new(move |_| {
        if let Some(Err(err)) = login_action.value().get() {
            set_error.set(Some(err.message));
        }
    });
    Effect::new(move |_| {
        if let Some(Err(err)) = google_action.value().get() {
            set_error.set(Some(err.message));
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let email_value = email.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        if !is_valid_email(&email_value) {
            set_error.set(Some("Please enter a valid email address.".to_string()));
            return;
        }
        if password_value.trim().is_empty() {
            set_error.set(Some("Password is required.".to_string()));
            return;
        }

        login_action.dispatch(LoginRequest {
            email: email_value,
            password: password_value,
        });
    };

    let pending = Signal::derive(move || {
        login_action.pending().get() || google_action.pending().get()
    });

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto" on:submit=on_submit>
                <h1 class="text-2xl font-semibold text-center text-gray-900 dark:text-white mb-1">
                    "Welcome Back"
                </h1>
                <p class="text-sm text-gray-500 dark:text-gray-400 text-center mb-6">
                    "Hello there, sign in to continue"
                </p>
                <div class="mb-5">
                    <label
                        class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                        for="email"
                    >
                        "Your email"
                    </label>
                    <input
                        id="email"
                        type="email"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white"
                        autocomplete="email"
                        placeholder="hello@example.com"
                        required
                        on:input=move |event| set_email.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-5">
                    <label
                        class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                        for="password"
                    >
                        "Your password"
                    </label>
                    <input
                        id="password"
                        type="password"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white"
                        autocomplete="current-password"
                        required
                        on:input=move |event| set_password.set(event_target_value(&event))
                    />
                </div>
                <Button button_type="submit" disabled=pending>
                    "Sign In"
                </Button>
                {move || {
                    pending
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                }}
                {move || {
                    error
                        .get()
                        .map(|message| {
                            view! {
                                <div class="mt-4">
                                    <Alert kind=AlertKind::Error message=message />
                                </div>
                            }
                        })
                }}
                <p class="text-sm text-gray-500 dark:text-gray-400 text-center mt-6">
                    "Don't have an account? "
                    <A href="/register" {..} class="text-blue-600 hover:underline font-medium">
                        "Sign Up"
                    </A>
                </p>
                // Google Identity Services renders its button into this slot.
                <div id="google-signin" class="mt-6 flex justify-center"></div>
            </form>
        </AppShell>
    }
}
