//! Registration route. Validation failures surface locally before any
//! network call; a successful registration sends the user to the login
//! screen.

use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::types::RegisterRequest;
use crate::features::auth::validate::{is_valid_email, password_problem};
use crate::features::auth::client;
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();
    let (full_name, set_full_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (phone_number, set_phone_number) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirmation, set_confirmation) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let register_action = Action::new_local(move |request: &RegisterRequest| {
        let request = request.clone();
        async move { client::register(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(_) => navigate(paths::LOGIN, Default::default()),
                Err(err) => set_error.set(Some(err.user_message())),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let name_value = full_name.get_untracked().trim().to_string();
        let email_value = email.get_untracked().trim().to_string();
        if name_value.is_empty() {
            set_error.set(Some("Full name is required.".to_string()));
            return;
        }
        if !is_valid_email(&email_value) {
            set_error.set(Some("Please enter a valid email address.".to_string()));
            return;
        }
        if let Some(problem) =
            password_problem(&password.get_untracked(), &confirmation.get_untracked())
        {
            set_error.set(Some(problem.to_string()));
            return;
        }

        register_action.dispatch(RegisterRequest {
            full_name: name_value,
            email: email_value,
            phone_number: phone_number.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        });
    };

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto" on:submit=on_submit>
                <h1 class="text-2xl font-semibold text-center text-gray-900 dark:text-white mb-6">
                    "Create your account"
                </h1>
                <div class="mb-5">
                    <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="full_name">
                        "Full name"
                    </label>
                    <input
                        id="full_name"
                        type="text"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                        required
                        on:input=move |event| set_full_name.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-5">
                    <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="email">
                        "Email"
                    </label>
                    <input
                        id="email"
                        type="email"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                        autocomplete="email"
                        required
                        on:input=move |event| set_email.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-5">
                    <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="phone">
                        "Phone number"
                    </label>
                    <input
                        id="phone"
                        type="tel"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                        on:input=move |event| set_phone_number.set(event_target_value(&event))
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
                        autocomplete="new-password"
                        required
                        on:input=move |event| set_password.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-5">
                    <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="confirm">
                        "Confirm password"
                    </label>
                    <input
                        id="confirm"
                        type="password"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                        autocomplete="new-password"
                        required
                        on:input=move |event| set_confirmation.set(event_target_value(&event))
                    />
                </div>
                <Button button_type="submit" disabled=register_action.pending()>
                    "Sign Up"
                </Button>
                {move || {
                    register_action
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
