//! Landing page.

use leptos::prelude::*;

use crate::components::header::Header;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Header/>
        <main class="home-page">
            <section class="home-hero">
                <h1>"أضحيتي"</h1>
                <p class="home-hero__tagline">"سوقك الموثوق لشراء وبيع الأغنام"</p>
                <div class="home-hero__actions">
                    <a class="btn btn--primary" href="/browse">
                        "تصفح الأغنام"
                    </a>
                    <a class="btn" href="/register">
                        "إنشاء حساب"
                    </a>
                </div>
            </section>
        </main>
    }
}
