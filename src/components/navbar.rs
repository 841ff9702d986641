//! Top navigation bar shown on every page.

use leptos::prelude::*;

use crate::net::store::RemoteStore;
use crate::state::files::is_resume_name;

/// Navigation bar with the logo, upload link, conditional wipe action, and
/// a history-aware back-home button.
///
/// The "Wipe Data" action only appears when the root listing contains at
/// least one resume document; the check runs once per mount and degrades
/// to hidden on listing failure.
#[component]
pub fn Navbar() -> impl IntoView {
    let has_resumes = LocalResource::new(|| async {
        match crate::net::api::ApiStore.list_directory("./").await {
            Ok(files) => files.iter().any(|f| is_resume_name(&f.name)),
            Err(e) => {
                leptos::logging::warn!("resume check failed: {e}");
                false
            }
        }
    });

    view! {
        <nav class="navbar">
            <a href="/" class="navbar__logo">
                "RESUMIND"
            </a>

            <div class="navbar__actions">
                <a href="/upload" class="btn btn--primary">
                    "Upload Resume"
                </a>

                <Suspense fallback=move || {
                    view! { <span class="navbar__checking">"Checking..."</span> }
                }>
                    {move || {
                        has_resumes
                            .get()
                            .map(|has| {
                                view! {
                                    <Show when=move || has>
                                        <a href="/wipe" class="btn btn--danger">
                                            "Wipe Data"
                                        </a>
                                    </Show>
                                }
                            })
                    }}
                </Suspense>

                <button class="btn navbar__back" on:click=move |_| crate::util::nav::back_home()>
                    "Back to Home"
                </button>
            </div>
        </nav>
    }
}
