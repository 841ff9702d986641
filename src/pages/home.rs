//! Landing page with the navbar and a short hero section.

use leptos::prelude::*;

use crate::components::navbar::Navbar;

/// Home page — entry point with links into the app via the navbar.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="home-page">
            <Navbar/>
            <section class="home-page__hero">
                <h1>"Track your resumes"</h1>
                <p>
                    "Upload a resume to get started, or manage stored data from the navigation bar."
                </p>
            </section>
        </main>
    }
}
