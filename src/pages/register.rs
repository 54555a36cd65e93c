//! Registration entry page.
//!
//! Account creation itself (profile document write, role selection) is
//! handled by the registration flow proper; this page is where the
//! login screen and the unprofiled federated sign-in land the user.

use leptos::prelude::*;

use crate::components::header::Header;

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <Header/>
        <main class="register-page">
            <div class="register-card">
                <h1>"إنشاء حساب جديد"</h1>
                <p class="register-card__subtitle">
                    "أنشئ حسابك كمشتري أو بائع للوصول إلى جميع الخدمات"
                </p>
                <p class="register-card__hint">
                    <span>"لديك حساب بالفعل؟ "</span>
                    <a href="/login">"تسجيل الدخول"</a>
                </p>
            </div>
        </main>
    }
}
