//! Renders the notification queue and owns its auto-dismiss timing.

use leptos::prelude::*;

use crate::state::toast::{ToastState, ToastVariant};

#[cfg(feature = "hydrate")]
const AUTO_DISMISS_MS: u32 = 5_000;

/// Queue a notification and, in the browser, schedule its dismissal.
pub fn notify(
    toasts: RwSignal<ToastState>,
    title: impl Into<String>,
    description: impl Into<String>,
    variant: ToastVariant,
) {
    let mut id = 0;
    toasts.update(|s| id = s.push(title, description, variant));
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(AUTO_DISMISS_MS).await;
        toasts.update(|s| s.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.variant {
                        ToastVariant::Default => "toast",
                        ToastVariant::Destructive => "toast toast--destructive",
                    };
                    view! {
                        <div class=class>
                            <p class="toast__title">{toast.title}</p>
                            <p class="toast__description">{toast.description}</p>
                            <button
                                class="toast__dismiss"
                                on:click=move |_| toasts.update(|s| s.dismiss(id))
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
