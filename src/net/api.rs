//! HTTP client for the hosted storage/auth backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/`Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so listing and
//! session fetch failures degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

use crate::net::store::RemoteStore;
use crate::net::types::{SessionUser, StoreError};
use crate::state::files::FileEntry;

/// HTTP-backed implementation of [`RemoteStore`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ApiStore;

impl RemoteStore for ApiStore {
    async fn list_directory(&self, path: &str) -> Result<Vec<FileEntry>, StoreError> {
        #[cfg(feature = "hydrate")]
        {
            let url = format!("/api/fs/list?path={path}");
            let resp = gloo_net::http::Request::get(&url)
                .send()
                .await
                .map_err(|e| StoreError::Request(e.to_string()))?;
            if !resp.ok() {
                return Err(StoreError::Status(resp.status()));
            }
            resp.json::<Vec<FileEntry>>()
                .await
                .map_err(|e| StoreError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(StoreError::Unavailable)
        }
    }

    async fn delete_file(&self, path: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post("/api/fs/delete")
                .json(&serde_json::json!({ "path": path }))
                .map_err(|e| StoreError::Request(e.to_string()))?
                .send()
                .await
                .map_err(|e| StoreError::Request(e.to_string()))?;
            if !resp.ok() {
                return Err(StoreError::Status(resp.status()));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(StoreError::Unavailable)
        }
    }

    async fn flush_kv(&self) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post("/api/kv/flush")
                .send()
                .await
                .map_err(|e| StoreError::Request(e.to_string()))?;
            if !resp.ok() {
                return Err(StoreError::Status(resp.status()));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(StoreError::Unavailable)
        }
    }
}

/// Fetch the currently authenticated user from `/api/auth/me`.
///
/// `Ok(None)` means "not signed in" (or running on the server); `Err` means
/// the auth backend could not be reached and the session banner should show.
pub async fn fetch_current_user() -> Result<Option<SessionUser>, StoreError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;
        if resp.status() == 401 {
            return Ok(None);
        }
        if !resp.ok() {
            return Err(StoreError::Status(resp.status()));
        }
        let user = resp
            .json::<SessionUser>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))?;
        Ok(Some(user))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(None)
    }
}

/// Resolve the auth session once per page load and publish it to the
/// shared signal. This is the session's whole init lifecycle; teardown is
/// navigation away (the signal dies with the page).
#[cfg(feature = "hydrate")]
pub fn spawn_session_init(
    session: leptos::prelude::RwSignal<crate::state::session::SessionState>,
) {
    use leptos::prelude::Update;

    leptos::task::spawn_local(async move {
        match fetch_current_user().await {
            Ok(user) => session.update(|s| {
                s.user = user;
                s.loading = false;
            }),
            Err(e) => {
                leptos::logging::warn!("session init failed: {e}");
                session.update(|s| {
                    s.error = Some(e.to_string());
                    s.loading = false;
                });
            }
        }
    });
}
