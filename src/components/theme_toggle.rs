//! Light/dark theme toggle button.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::dark_mode;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_toggle = move |_| {
        ui.update(|s| s.dark_mode = dark_mode::toggle(s.dark_mode));
    };

    view! {
        <button class="theme-toggle" on:click=on_toggle aria-label="تبديل المظهر">
            {move || if ui.get().dark_mode { "☀" } else { "☾" }}
        </button>
    }
}
