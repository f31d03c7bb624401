use leptos::prelude::*;

use super::SearchPage;

/// Landing page: a title over the search view
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="page home">
            <h1>"Recipe Book"</h1>
            <SearchPage />
        </section>
    }
}
