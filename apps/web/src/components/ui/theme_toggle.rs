//! Dark/light mode toggle. The preference is persisted under the `theme`
//! storage key and applied as a class on the document root.

use leptos::prelude::*;

use crate::app_lib::theme::{self, ThemePreference};

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let (preference, set_preference) = signal(theme::load());

    let toggle = move |_| {
        let next = preference.get_untracked().toggled();
        theme::store_and_apply(next);
        set_preference.set(next);
    };

    view! {
        <button
            type="button"
            class="px-3 py-2 rounded-md text-sm bg-gray-200 hover:bg-gray-300 dark:bg-gray-700 dark:hover:bg-gray-600 dark:text-white transition-colors"
            on:click=toggle
        >
            {move || match preference.get() {
                ThemePreference::Dark => "Light mode",
                ThemePreference::Light => "Dark mode",
            }}
        </button>
    }
}
