//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_host::ToastHost;
use crate::net::config::BackendConfig;
use crate::pages::{
    admin::AdminPage, browse::BrowsePage, home::HomePage, login::LoginPage,
    register::RegisterPage, seller::SellerPage,
};
use crate::state::{auth::AuthState, toast::ToastState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ar" dir="rtl">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides shared state contexts, restores the tab's session on
/// mount, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::restoring());
    let ui = RwSignal::new(UiState::default());
    let toasts = RwSignal::new(ToastState::default());
    let config = BackendConfig::from_build_env();

    provide_context(auth);
    provide_context(ui);
    provide_context(toasts);
    provide_context(config.clone());

    #[cfg(feature = "hydrate")]
    {
        use crate::auth::session::{ProfileStore, Session};
        use crate::net::identity::RestIdentityProvider;
        use crate::net::profile::RestProfileStore;
        use crate::util::dark_mode;

        let dark = dark_mode::read_preference();
        dark_mode::apply(dark);
        ui.update(|s| s.dark_mode = dark);

        // Restore the tab's session: cached principal first, then its
        // profile document, in that order.
        leptos::task::spawn_local(async move {
            let provider = RestIdentityProvider::new(config.clone());
            if let Some(principal) = provider.current_principal() {
                let store = RestProfileStore::new(config);
                match store.fetch_profile(&principal.uid).await {
                    Ok(Some(profile)) => {
                        auth.set(AuthState::signed_in(Session { principal, profile }));
                    }
                    Ok(None) => auth.set(AuthState::signed_out()),
                    Err(e) => {
                        leptos::logging::warn!("session restore failed: {e}");
                        auth.set(AuthState::signed_out());
                    }
                }
            } else {
                auth.set(AuthState::signed_out());
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    auth.set(AuthState::signed_out());

    view! {
        <Stylesheet id="leptos" href="/pkg/odhiyati.css"/>
        <Title text="أضحيتي"/>

        <ToastHost/>
        <Router>
            <Routes fallback=|| "الصفحة غير موجودة".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("browse") view=BrowsePage/>
                <Route path=StaticSegment("seller") view=SellerPage/>
                <Route path=StaticSegment("admin") view=AdminPage/>
            </Routes>
        </Router>
    }
}
