//! Public listing page. Listings are browsable without signing in;
//! purchasing flows live behind the buyer dashboard.

use leptos::prelude::*;

use crate::components::header::Header;

#[component]
pub fn BrowsePage() -> impl IntoView {
    view! {
        <Header/>
        <main class="browse-page">
            <h1>"تصفح الأغنام"</h1>
            <div class="browse-page__grid">
                <p class="browse-page__empty">"لا توجد عروض متاحة حالياً"</p>
            </div>
        </main>
    }
}
