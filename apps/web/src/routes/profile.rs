//! Profile route: contact details, password change, the demo wallet card, and
//! KYC document upload. The card number is always rendered masked; the full
//! number never leaves the profile payload.

use crate::app_lib::format::mask_card_number;
use crate::components::{Alert, AlertKind, Button, Spinner};
use crate::features::auth::state::use_auth;
use crate::features::auth::validate::password_problem;
use crate::features::kyc::client as kyc_client;
use crate::features::me::client;
use crate::features::me::types::{ChangePasswordRequest, UpdateProfileRequest};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();
    let (version, set_version) = signal(0u32);
    let (full_name, set_full_name) = signal(String::new());
    let (phone_number, set_phone_number) = signal(String::new());
    let (current_password, set_current_password) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (confirmation, set_confirmation) = signal(String::new());
    let (document_type, set_document_type) = signal("passport".to_string());
    let (notice, set_notice) = signal::<Option<(AlertKind, String)>>(None);

    let profile = LocalResource::new(move || {
        version.get();
        let token = auth.access_token();
        async move { client::me(token.as_deref()).await }
    });

    let kyc = LocalResource::new(move || {
        version.get();
        let token = auth.access_token();
        async move { kyc_client::status(token.as_deref()).await }
    });

    let update_action = Action::new_local(move |request: &UpdateProfileRequest| {
        let request = request.clone();
        let token = auth.access_token();
        async move { client::update_profile(&request, token.as_deref()).await }
    });

    let password_action = Action::new_local(move |request: &ChangePasswordRequest| {
        let request = request.clone();
        let token = auth.access_token();
        async move { client::change_password(&request, token.as_deref()).await }
    });

    let upload_action = Action::new_local(move |input: &(String, web_sys::File)| {
        let (document_type, file) = input.clone();
        let token = auth.access_token();
        async move { kyc_client::upload(&document_type, &file, token.as_deref()).await }
    });

    Effect::new(move |_| {
        if let Some(result) = update_action.value().get() {
            match result {
                Ok(response) => {
                    set_notice.set(Some((AlertKind::Success, response.msg)));
                    set_version.update(|v| *v += 1);
                }
                Err(err) => set_notice.set(Some((AlertKind::Error, err.user_message()))),
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = password_action.value().get() {
            match result {
                Ok(response) => set_notice.set(Some((AlertKind::Success, response.msg))),
                Err(err) => set_notice.set(Some((AlertKind::Error, err.user_message()))),
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = upload_action.value().get() {
            match result {
                Ok(response) => {
                    set_notice.set(Some((AlertKind::Success, response.msg)));
                    set_version.update(|v| *v += 1);
                }
                Err(err) => set_notice.set(Some((AlertKind::Error, err.user_message()))),
            }
        }
    });

    // Prefill the contact form once the profile arrives.
    Effect::new(move |_| {
        if let Some(Ok(profile)) = profile.get() {
            set_full_name.set(profile.full_name);
            set_phone_number.set(profile.phone_number);
        }
    });

    let on_update = move |event: SubmitEvent| {
        event.prevent_default();
        set_notice.set(None);

        let name_value = full_name.get_untracked().trim().to_string();
        if name_value.is_empty() {
            set_notice.set(Some((AlertKind::Error, "Full name is required.".to_string())));
            return;
        }

        update_action.dispatch(UpdateProfileRequest {
            full_name: name_value,
            phone_number: phone_number.get_untracked().trim().to_string(),
        });
    };

    let on_change_password = move |event: SubmitEvent| {
        event.prevent_default();
        set_notice.set(None);

        if let Some(problem) =
            password_problem(&new_password.get_untracked(), &confirmation.get_untracked())
        {
            set_notice.set(Some((AlertKind::Error, problem.to_string())));
            return;
        }

        password_action.dispatch(ChangePasswordRequest {
            current_password: current_password.get_untracked(),
            new_password: new_password.get_untracked(),
        });
    };

    let on_upload = move |event: SubmitEvent| {
        event.prevent_default();
        set_notice.set(None);

        let file = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id("kyc-document"))
            .and_then(|element| element.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));

        match file {
            Some(file) => {
                upload_action.dispatch((document_type.get_untracked(), file));
            }
            None => set_notice.set(Some((
                AlertKind::Error,
                "Choose a document to upload.".to_string(),
            ))),
        }
    };

    view! {
        <div class="max-w-2xl space-y-6">
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Profile"</h1>

            {move || {
                notice.get().map(|(kind, message)| {
                    view! { <Alert kind=kind message=message /> }
                })
            }}

            <Suspense fallback=|| view! { <Spinner /> }>
                {move || {
                    profile.get().map(|result| match result {
                        Ok(profile) => {
                            let card = profile
                                .card_number
                                .as_deref()
                                .map(mask_card_number)
                                .unwrap_or_else(|| "No card issued".to_string());
                            view! {
                                <div class="p-6 bg-white dark:bg-gray-900 rounded-xl border border-gray-200 dark:border-gray-800 shadow-sm">
                                    <p class="text-sm text-gray-500 dark:text-gray-400">{profile.email}</p>
                                    <p class="mt-2 text-lg font-mono text-gray-900 dark:text-white">{card}</p>
                                    {profile.card_expiry.map(|expiry| view! {
                                        <p class="text-xs text-gray-500 dark:text-gray-400">"Expires " {expiry}</p>
                                    })}
                                </div>
                            }
                            .into_any()
                        }
                        Err(err) => {
                            view! { <Alert kind=AlertKind::Error message=err.user_message() /> }
                                .into_any()
                        }
                    })
                }}
            </Suspense>

            <form
                class="p-6 bg-white dark:bg-gray-900 rounded-xl border border-gray-200 dark:border-gray-800 shadow-sm space-y-4"
                on:submit=on_update
            >
                <h2 class="text-lg font-semibold text-gray-900 dark:text-white">"Contact details"</h2>
                <div>
                    <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="full_name">
                        "Full name"
                    </label>
                    <input
                        id="full_name"
                        type="text"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                        prop:value=move || full_name.get()
                        on:input=move |event| set_full_name.set(event_target_value(&event))
                    />
                </div>
                <div>
                    <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="phone">
                        "Phone number"
                    </label>
                    <input
                        id="phone"
                        type="tel"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                        prop:value=move || phone_number.get()
                        on:input=move |event| set_phone_number.set(event_target_value(&event))
                    />
                </div>
                <Button button_type="submit" disabled=update_action.pending()>
                    "Save"
                </Button>
            </form>

            <form
                class="p-6 bg-white dark:bg-gray-900 rounded-xl border border-gray-200 dark:border-gray-800 shadow-sm space-y-4"
                on:submit=on_change_password
            >
                <h2 class="text-lg font-semibold text-gray-900 dark:text-white">"Change password"</h2>
                <input
                    type="password"
                    placeholder="Current password"
                    autocomplete="current-password"
                    class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                    required
                    on:input=move |event| set_current_password.set(event_target_value(&event))
                />
                <input
                    type="password"
                    placeholder="New password"
                    autocomplete="new-password"
                    class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                    required
                    on:input=move |event| set_new_password.set(event_target_value(&event))
                />
                <input
                    type="password"
                    placeholder="Confirm new password"
                    autocomplete="new-password"
                    class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                    required
                    on:input=move |event| set_confirmation.set(event_target_value(&event))
                />
                <Button button_type="submit" disabled=password_action.pending()>
                    "Update password"
                </Button>
            </form>

            <form
                class="p-6 bg-white dark:bg-gray-900 rounded-xl border border-gray-200 dark:border-gray-800 shadow-sm space-y-4"
                on:submit=on_upload
            >
                <h2 class="text-lg font-semibold text-gray-900 dark:text-white">"KYC verification"</h2>
                <Suspense fallback=|| view! { <Spinner /> }>
                    {move || {
                        kyc.get().map(|result| match result {
                            Ok(status) => view! {
                                <p class="text-sm text-gray-600 dark:text-gray-300">
                                    "Status: "
                                    <span class="font-medium uppercase">{status.status}</span>
                                </p>
                            }
                            .into_any(),
                            Err(_) => view! {
                                <p class="text-sm text-gray-500 dark:text-gray-400">
                                    "KYC status unavailable."
                                </p>
                            }
                            .into_any(),
                        })
                    }}
                </Suspense>
                <select
                    class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                    on:change=move |event| set_document_type.set(event_target_value(&event))
                >
                    <option value="passport">"Passport"</option>
                    <option value="national_id">"National ID"</option>
                    <option value="driving_license">"Driving license"</option>
                </select>
                <input
                    id="kyc-document"
                    type="file"
                    accept="image/*,.pdf"
                    class="block w-full text-sm text-gray-900 dark:text-gray-300"
                />
                <Button button_type="submit" disabled=upload_action.pending()>
                    "Upload document"
                </Button>
            </form>
        </div>
    }
}
