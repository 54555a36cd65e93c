//! Administrative dashboard, reserved for the admin role.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::auth::role::Role;
use crate::components::header::Header;
use crate::state::auth::AuthState;
use crate::util::guard::install_role_redirect;

#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_role_redirect(auth, Role::Admin, navigate);

    view! {
        <Header/>
        <main class="dashboard-page">
            <h1>"لوحة تحكم المدير"</h1>
            <p class="dashboard-page__hint">"إدارة المستخدمين والعروض من هنا"</p>
        </main>
    }
}
