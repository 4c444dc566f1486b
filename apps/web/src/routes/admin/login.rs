//! Admin login. Uses the admin endpoint; a successful exchange that decodes
//! to a non-admin role is rejected here, and the watcher routes a genuine
//! admin session to the back-office landing page.

use auth_session::Role;

use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::state::use_auth;
use crate::features::auth::types::LoginRequest;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let auth = use_auth();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let login_action = Action::new_local(move |request: &LoginRequest| {
        let request = request.clone();
        async move { auth.admin_login(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(_) => {
                    let role = auth.session.get_untracked().user.map(|user| user.role);
                    if role != Some(Role::Admin) {
                        auth.logout();
                        set_error.set(Some("Access denied: Not an admin".to_string()));
                    }
                }
                Err(err) => set_error.set(Some(err.message)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let email_value = email.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        if email_value.is_empty() || password_value.trim().is_empty() {
            set_error.set(Some("Email and password are required.".to_string()));
            return;
        }

        login_action.dispatch(LoginRequest {
            email: email_value,
            password: password_value,
        });
    };

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto" on:submit=on_submit>
                <h1 class="text-2xl font-semibold text-center text-gray-900 dark:text-white mb-1">
                    "Admin Login"
                </h1>
                <p class="text-sm text-gray-500 dark:text-gray-400 text-center mb-6">
                    "Enter your admin credentials to access the back office."
                </p>
                <div class="mb-5">
                    <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="email">
                        "Email"
                    </label>
                    <input
                        id="email"
                        type="email"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                        placeholder="admin@example.com"
                        autocomplete="email"
                        required
                        on:input=move |event| set_email.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-5">
                    <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="password">
                        "Password"
                    </label>
                    <input
                        id="password"
                        type="password"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                        autocomplete="current-password"
                        required
                        on:input=move |event| set_password.set(event_target_value(&event))
                    />
                </div>
                <Button button_type="submit" disabled=login_action.pending()>
                    "Login"
                </Button>
                {move || {
                    login_action
                        .pending()
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
            </form>
        </AppShell>
    }
}
