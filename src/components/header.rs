//! Sticky site header with role-aware navigation.
//!
//! The dashboard link and the role label both come from the shared
//! role router, so the header can never disagree with the post-login
//! redirect about where a role's dashboard lives.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;

use crate::auth::role::Role;
use crate::components::theme_toggle::ThemeToggle;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;

#[cfg(feature = "hydrate")]
use crate::auth::session::IdentityProvider;
#[cfg(feature = "hydrate")]
use crate::net::config::BackendConfig;
#[cfg(feature = "hydrate")]
use crate::net::identity::RestIdentityProvider;

/// Uppercased first character of the email, shown in the avatar circle.
fn avatar_initial(email: &str) -> String {
    email.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default()
}

/// The public listing link shows for signed-out visitors and for roles
/// that browse listings; sellers see only their dashboard link.
fn shows_browse_link(state: &AuthState) -> bool {
    state.role().map_or(true, Role::browses_listings)
}

/// Dashboard href for the signed-in visitor, if any.
fn dashboard_href(state: &AuthState) -> Option<&'static str> {
    state.role().map(Role::dashboard_path)
}

#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let user_menu_open = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let config = StoredValue::new(expect_context::<BackendConfig>());

    let on_sign_out = move |_| {
        user_menu_open.set(false);
        ui.update(|s| s.mobile_menu_open = false);
        #[cfg(feature = "hydrate")]
        {
            let Some(session) = auth.get_untracked().session else {
                return;
            };
            let config = config.get_value();
            leptos::task::spawn_local(async move {
                let provider = RestIdentityProvider::new(config);
                if let Err(e) = provider.revoke_session(&session.principal).await {
                    leptos::logging::warn!("sign-out: provider revoke failed: {e}");
                }
                auth.set(AuthState::signed_out());
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/");
                }
            });
        }
    };

    let toggle_mobile_menu = move |_| ui.update(|s| s.mobile_menu_open = !s.mobile_menu_open);
    let close_mobile_menu = move |_| ui.update(|s| s.mobile_menu_open = false);

    view! {
        <header class="header">
            <div class="header__inner">
                <a class="header__logo" href="/">
                    <img src="/logo.png" alt="أضحيتي" class="header__logo-img"/>
                </a>

                <nav class="header__nav header__nav--desktop">
                    {move || {
                        dashboard_href(&auth.get())
                            .map(|href| {
                                view! {
                                    <a class="header__link" href=href>
                                        "لوحة التحكم"
                                    </a>
                                }
                            })
                    }}
                    <Show when=move || shows_browse_link(&auth.get())>
                        <a class="header__link" href="/browse">
                            "تصفح الأغنام"
                        </a>
                    </Show>
                </nav>

                <div class="header__actions">
                    <ThemeToggle/>
                    {move || {
                        let state = auth.get();
                        match (state.email(), state.role()) {
                            (Some(email), Some(role)) => {
                                let email = email.to_owned();
                                let label = role.label().to_owned();
                                let initial = avatar_initial(&email);
                                view! {
                                    <div class="user-menu">
                                        <button
                                            class="user-menu__avatar"
                                            on:click=move |_| user_menu_open.update(|open| *open = !*open)
                                        >
                                            {initial}
                                        </button>
                                        <Show when=move || user_menu_open.get()>
                                            <div class="user-menu__dropdown">
                                                <p class="user-menu__email">{email.clone()}</p>
                                                <p class="user-menu__role">{label.clone()}</p>
                                                <button class="user-menu__signout" on:click=on_sign_out>
                                                    "تسجيل الخروج"
                                                </button>
                                            </div>
                                        </Show>
                                    </div>
                                }
                                    .into_any()
                            }
                            _ => view! {
                                <div class="header__auth-links">
                                    <a class="header__link header__link--login" href="/login">
                                        "تسجيل الدخول"
                                    </a>
                                    <a class="header__link header__link--register" href="/register">
                                        "إنشاء حساب"
                                    </a>
                                </div>
                            }
                                .into_any(),
                        }
                    }}
                    <button class="header__menu-button" on:click=toggle_mobile_menu>
                        {move || if ui.get().mobile_menu_open { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            <Show when=move || ui.get().mobile_menu_open>
                <nav class="header__nav header__nav--mobile">
                    {move || {
                        dashboard_href(&auth.get())
                            .map(|href| {
                                view! {
                                    <a class="header__link" href=href on:click=close_mobile_menu>
                                        "لوحة التحكم"
                                    </a>
                                }
                            })
                    }}
                    <Show when=move || shows_browse_link(&auth.get())>
                        <a class="header__link" href="/browse" on:click=close_mobile_menu>
                            "تصفح الأغنام"
                        </a>
                    </Show>
                    <Show when=move || auth.get().session.is_none()>
                        <a class="header__link" href="/login" on:click=close_mobile_menu>
                            "تسجيل الدخول"
                        </a>
                    </Show>
                </nav>
            </Show>
        </header>
    }
}
