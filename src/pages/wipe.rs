//! Data wipe page: authenticated-only listing of all stored files with
//! per-file and bulk delete actions.
//!
//! Every delete is confirmed through the native prompt, runs against the
//! remote store, and is followed by a full cache refresh. The `deleting`
//! flag on [`FilesState`] disables all delete controls while a sequence is
//! in flight.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
use crate::state::files::{FileEntry, FilesState};
use crate::state::session::{self, SessionState};

/// Wipe page — session-gated file listing with destructive actions.
///
/// Redirects to the auth entry point (preserving `/wipe` as the return
/// target) once the session resolves as unauthenticated.
#[component]
pub fn WipePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let files = RwSignal::new(FilesState {
        loading: true,
        ..FilesState::default()
    });

    // Redirect to the auth entry point once the session has resolved.
    Effect::new(move || {
        let state = session.get();
        if let Some(target) = session::redirect_target(&state, "/wipe") {
            navigate(&target, NavigateOptions::default());
        }
    });

    // Initial listing on mount.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            load_files(files).await;
        });
    });

    let on_delete_one = Callback::new(move |file: FileEntry| {
        #[cfg(feature = "hydrate")]
        {
            use crate::net::store::RemoteStore;

            if !confirm(&format!("Delete {}?", file.name)) {
                return;
            }
            if !files.try_update(FilesState::begin_delete).unwrap_or(false) {
                return;
            }
            leptos::task::spawn_local(async move {
                match crate::net::api::ApiStore.delete_file(&file.path).await {
                    Ok(()) => {
                        load_files(files).await;
                        files.update(FilesState::finish_delete);
                    }
                    // Known gap: a failed delete leaves `deleting` set and
                    // the controls disabled until the page is reloaded.
                    Err(e) => leptos::logging::warn!("delete failed for {}: {e}", file.path),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = file;
        }
    });

    let on_delete_all = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            use crate::net::store::{self, WipePolicy};

            if !confirm("Are you sure you want to wipe ALL app data?") {
                return;
            }
            if !files.try_update(FilesState::begin_delete).unwrap_or(false) {
                return;
            }
            let plan = files.get_untracked().wipe_plan();
            leptos::task::spawn_local(async move {
                match store::wipe_all(&crate::net::api::ApiStore, &plan, WipePolicy::default())
                    .await
                {
                    Ok(()) => {
                        load_files(files).await;
                        files.update(FilesState::finish_delete);
                    }
                    // Known gap: an aborted wipe leaves a partial deletion
                    // behind and `deleting` set; no rollback is attempted.
                    Err(e) => leptos::logging::warn!("wipe aborted: {e}"),
                }
            });
        }
    });

    view! {
        <main class="wipe-page">
            {move || {
                let s = session.get();
                if s.loading {
                    view! { <div class="wipe-page__loading">"Loading..."</div> }.into_any()
                } else if let Some(err) = s.error {
                    view! {
                        <div class="wipe-page__error">
                            {format!("Error: {err}")}
                            <button
                                class="btn wipe-page__clear"
                                on:click=move |_| session.update(SessionState::clear_error)
                            >
                                "Clear"
                            </button>
                        </div>
                    }
                        .into_any()
                } else {
                    let username = s.user.map_or_else(String::new, |u| u.username);
                    view! {
                        <Navbar/>
                        <section class="wipe-page__content">
                            <h1>"Wipe Your App Data"</h1>
                            <p class="wipe-page__user">
                                "Authenticated as "
                                <span class="wipe-page__username">{username}</span>
                            </p>
                            <FileList
                                files=files
                                on_delete_one=on_delete_one
                                on_delete_all=on_delete_all
                            />
                        </section>
                    }
                        .into_any()
                }
            }}
        </main>
    }
}

/// File listing with the Delete All header and per-file delete buttons.
#[component]
fn FileList(
    files: RwSignal<FilesState>,
    on_delete_one: Callback<FileEntry>,
    on_delete_all: Callback<()>,
) -> impl IntoView {
    let deleting = move || files.get().deleting;

    view! {
        <div class="file-list__header">
            <h2>"Existing Files"</h2>
            <Show when=move || !files.get().entries.is_empty()>
                <button
                    class="btn btn--danger"
                    disabled=deleting
                    on:click=move |_| on_delete_all.run(())
                >
                    {move || if deleting() { "Deleting..." } else { "Delete All" }}
                </button>
            </Show>
        </div>

        {move || {
            files
                .get()
                .error
                .map(|err| {
                    view! {
                        <div class="file-list__error">
                            {format!("Error: {err}")}
                            <button
                                class="btn"
                                on:click=move |_| files.update(FilesState::clear_error)
                            >
                                "Dismiss"
                            </button>
                        </div>
                    }
                })
        }}

        {move || {
            let state = files.get();
            if state.loading {
                view! { <p class="file-list__empty">"Loading files..."</p> }.into_any()
            } else if state.entries.is_empty() {
                view! { <p class="file-list__empty">"No files found."</p> }.into_any()
            } else {
                view! {
                    <div class="file-list__grid">
                        {state
                            .entries
                            .into_iter()
                            .map(|file| {
                                let name = file.name.clone();
                                let path = file.path.clone();
                                view! {
                                    <div class="file-card">
                                        <div class="file-card__meta">
                                            <span class="file-card__name">{name}</span>
                                            <span class="file-card__path">{path}</span>
                                        </div>
                                        <button
                                            class="btn btn--danger file-card__delete"
                                            disabled=deleting
                                            on:click=move |_| on_delete_one.run(file.clone())
                                        >
                                            "Delete"
                                        </button>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                }
                    .into_any()
            }
        }}
    }
}

/// Fetch the root listing and replace the cache wholesale.
#[cfg(feature = "hydrate")]
async fn load_files(files: RwSignal<FilesState>) {
    use crate::net::store::RemoteStore;

    let result = crate::net::api::ApiStore
        .list_directory("./")
        .await
        .map_err(|e| e.to_string());
    files.update(|f| f.apply_listing(result));
}

/// Native confirmation prompt naming the destructive action.
#[cfg(feature = "hydrate")]
fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
