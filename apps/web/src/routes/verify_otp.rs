//! OTP verification gate. The session watcher parks unverified sessions here;
//! a successful verification swaps in the upgraded token pair and moves on to
//! the dashboard. The code expires after 15 minutes and resending is limited
//! by a 30 second client-side cooldown.

use std::cell::RefCell;
use std::rc::Rc;

use crate::app_lib::format::format_countdown;
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::state::use_auth;
use crate::features::auth::types::VerifyOtpRequest;
use crate::routes::paths;
use gloo_timers::callback::Interval;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// OTP lifetime as shown to the user, in seconds.
const OTP_TTL_SECS: u32 = 15 * 60;
/// Cooldown between resend requests, in seconds.
const RESEND_COOLDOWN_SECS: u32 = 30;

#[component]
pub fn OtpVerificationPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let (code, set_code) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (countdown, set_countdown) = signal(OTP_TTL_SECS);
    let (cooldown, set_cooldown) = signal(0u32);

    // One ticker drives both the code countdown and the resend cooldown.
    let ticker: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    *ticker.borrow_mut() = Some(Interval::new(1_000, move || {
        set_countdown.update(|seconds| *seconds = seconds.saturating_sub(1));
        set_cooldown.update(|seconds| *seconds = seconds.saturating_sub(1));
    }));
    {
        let ticker = ticker.clone();
        on_cleanup(move || {
            ticker.borrow_mut().take();
        });
    }

    let email = Signal::derive(move || {
        auth.session
            .get()
            .user
            .map(|user| user.email)
            .unwrap_or_default()
    });

    let verify_action = Action::new_local(move |request: &VerifyOtpRequest| {
        let request = request.clone();
        async move { auth.verify_otp(&request).await }
    });

    let resend_action = Action::new_local(move |_: &()| async move { auth.resend_otp().await });

    Effect::new(move |_| {
        if let Some(result) = verify_action.value().get() {
            match result {
                Ok(()) => navigate(paths::DASHBOARD, Default::default()),
                Err(err) => set_error.set(Some(err.user_message())),
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = resend_action.value().get() {
            match result {
                Ok(()) => {
                    set_countdown.set(OTP_TTL_SECS);
                    set_error.set(None);
                }
                Err(_) => set_error.set(Some("Failed to resend OTP.".to_string())),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        if countdown.get_untracked() == 0 {
            set_error.set(Some("OTP expired. Please request a new one.".to_string()));
            return;
        }

        let code_value = code.get_untracked();
        if code_value.len() != 6 || !code_value.chars().all(|c| c.is_ascii_digit()) {
            set_error.set(Some("Enter the 6-digit code.".to_string()));
            return;
        }

        verify_action.dispatch(VerifyOtpRequest { code: code_value });
    };

    let resend = move |_| {
        if cooldown.get_untracked() > 0 {
            return;
        }
        set_cooldown.set(RESEND_COOLDOWN_SECS);
        resend_action.dispatch(());
    };

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto text-center" on:submit=on_submit>
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white mb-1">
                    "OTP Verification"
                </h1>
                <p class="text-sm text-gray-500 dark:text-gray-400 mb-1">
                    "Enter the 6-digit code sent to your device"
                </p>
                {move || {
                    let address = email.get();
                    (!address.is_empty()).then(|| {
                        view! {
                            <p class="text-sm text-gray-500 dark:text-gray-400 mb-1">
                                "Code sent to: "
                                <span class="font-medium text-gray-900 dark:text-white">{address}</span>
                            </p>
                        }
                    })
                }}
                <p class="text-sm text-gray-500 dark:text-gray-400 mb-6">
                    "Expires in: " {move || format_countdown(countdown.get())}
                </p>
                <div class="mb-5">
                    <input
                        type="text"
                        inputmode="numeric"
                        maxlength="6"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-lg text-center tracking-[0.5em] rounded-lg block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                        aria-label="OTP code"
                        on:input=move |event| set_code.set(event_target_value(&event))
                    />
                </div>
                <Button button_type="submit" disabled=verify_action.pending()>
                    "Verify OTP"
                </Button>
                {move || {
                    verify_action
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
                <p class="text-sm text-gray-500 dark:text-gray-400 mt-4">
                    "Didn't receive the code? "
                    <button
                        type="button"
                        class="text-blue-600 hover:underline disabled:opacity-40"
                        disabled=move || cooldown.get() > 0
                        on:click=resend
                    >
                        {move || {
                            let remaining = cooldown.get();
                            if remaining > 0 {
                                format!("Resend in {remaining}s")
                            } else {
                                "Resend OTP".to_string()
                            }
                        }}
                    </button>
                </p>
            </form>
        </AppShell>
    }
}
