//! Login page supporting email/password and federated (Google) sign-in.
//!
//! Both submit affordances are disabled while either flow is in
//! flight, so duplicate sign-in attempts are rejected here in the view
//! layer rather than by the bootstrapper.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::auth::validate::FieldErrors;

#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use crate::auth::error::SignInError;
#[cfg(feature = "hydrate")]
use crate::auth::session::{FederatedOutcome, sign_in_with_federated, sign_in_with_password};
#[cfg(feature = "hydrate")]
use crate::components::toast_host::notify;
#[cfg(feature = "hydrate")]
use crate::net::config::BackendConfig;
#[cfg(feature = "hydrate")]
use crate::net::identity::RestIdentityProvider;
#[cfg(feature = "hydrate")]
use crate::net::profile::RestProfileStore;
#[cfg(feature = "hydrate")]
use crate::state::auth::AuthState;
#[cfg(feature = "hydrate")]
use crate::state::toast::{ToastState, ToastVariant};

/// Whether a new sign-in attempt may start. False while either the
/// password or the federated flow is in flight.
fn submit_allowed(loading: bool, google_loading: bool) -> bool {
    !loading && !google_loading
}

/// Welcome notification body for a freshly signed-in profile.
fn welcome_description(email: &str) -> String {
    format!("مرحباً بك {email}")
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let field_errors = RwSignal::new(FieldErrors::default());
    let loading = RwSignal::new(false);
    let google_loading = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let auth = expect_context::<RwSignal<AuthState>>();
    #[cfg(feature = "hydrate")]
    let toasts = expect_context::<RwSignal<ToastState>>();
    #[cfg(feature = "hydrate")]
    let config = StoredValue::new(expect_context::<BackendConfig>());
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();
    #[cfg(feature = "hydrate")]
    let navigate_google = navigate.clone();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !submit_allowed(loading.get(), google_loading.get()) {
            return;
        }
        field_errors.set(FieldErrors::default());
        loading.set(true);

        #[cfg(feature = "hydrate")]
        {
            let email_value = email.get();
            let password_value = password.get();
            let config = config.get_value();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let provider = RestIdentityProvider::new(config.clone());
                let store = RestProfileStore::new(config);
                match sign_in_with_password(&provider, &store, &email_value, &password_value).await {
                    Ok(session) => {
                        let target = session.profile.role.dashboard_path();
                        notify(
                            toasts,
                            "تم تسجيل الدخول بنجاح",
                            welcome_description(&session.profile.email),
                            ToastVariant::Default,
                        );
                        auth.set(AuthState::signed_in(session));
                        navigate(target, NavigateOptions::default());
                    }
                    Err(SignInError::Validation(errors)) => field_errors.set(errors),
                    Err(err) if err.is_silent() => {}
                    Err(err) => {
                        notify(toasts, "خطأ", err.user_message(), ToastVariant::Destructive);
                    }
                }
                loading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            loading.set(false);
        }
    };

    let on_google = move |_| {
        if !submit_allowed(loading.get(), google_loading.get()) {
            return;
        }
        google_loading.set(true);

        #[cfg(feature = "hydrate")]
        {
            let config = config.get_value();
            let navigate = navigate_google.clone();
            leptos::task::spawn_local(async move {
                let provider = RestIdentityProvider::new(config.clone());
                let store = RestProfileStore::new(config);
                match sign_in_with_federated(&provider, &store).await {
                    Ok(FederatedOutcome::SignedIn(session)) => {
                        let target = session.profile.role.dashboard_path();
                        notify(
                            toasts,
                            "تم تسجيل الدخول بنجاح",
                            welcome_description(&session.profile.email),
                            ToastVariant::Default,
                        );
                        auth.set(AuthState::signed_in(session));
                        navigate(target, NavigateOptions::default());
                    }
                    Ok(FederatedOutcome::NeedsRegistration) => {
                        notify(
                            toasts,
                            "إكمال التسجيل",
                            "لم يتم العثور على حساب مرتبط، يرجى إكمال إنشاء الحساب أولاً",
                            ToastVariant::Default,
                        );
                        navigate("/register", NavigateOptions::default());
                    }
                    Err(err) if err.is_silent() => {}
                    Err(err) => {
                        notify(toasts, "خطأ", err.user_message(), ToastVariant::Destructive);
                    }
                }
                google_loading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            google_loading.set(false);
        }
    };

    let busy = move || !submit_allowed(loading.get(), google_loading.get());

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"تسجيل الدخول"</h1>
                <p class="login-card__subtitle">"سجل دخولك للوصول إلى حسابك في أضحيتي"</p>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label" for="email">
                        "البريد الإلكتروني"
                    </label>
                    <input
                        id="email"
                        class="login-input"
                        type="email"
                        placeholder="example@domain.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <Show when=move || field_errors.get().email.is_some()>
                        <p class="login-field-error">
                            {move || field_errors.get().email.unwrap_or_default()}
                        </p>
                    </Show>

                    <label class="login-label" for="password">
                        "كلمة المرور"
                    </label>
                    <input
                        id="password"
                        class="login-input"
                        type="password"
                        placeholder="••••••••"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || field_errors.get().password.is_some()>
                        <p class="login-field-error">
                            {move || field_errors.get().password.unwrap_or_default()}
                        </p>
                    </Show>

                    <button class="login-button" type="submit" disabled=busy>
                        {move || if loading.get() { "جاري تسجيل الدخول..." } else { "تسجيل الدخول" }}
                    </button>
                </form>

                <div class="login-divider"></div>
                <button class="login-button login-button--google" on:click=on_google disabled=busy>
                    {move || if google_loading.get() { "جاري المتابعة..." } else { "المتابعة بحساب جوجل" }}
                </button>

                <p class="login-register-hint">
                    <span>"ليس لديك حساب؟ "</span>
                    <a href="/register">"إنشاء حساب جديد"</a>
                </p>
            </div>
        </div>
    }
}
