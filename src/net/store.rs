//! Remote-store interface and the wipe orchestration pipeline.
//!
//! The hosted backend is consumed through the [`RemoteStore`] trait so the
//! delete sequencing can be exercised against an in-memory store in tests.
//! The browser implementation lives in [`crate::net::api`].

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::net::types::StoreError;
use crate::state::files::FileEntry;

/// The storage collaborator: filesystem listing/deletion plus the
/// auxiliary key-value store.
// Single-threaded WASM target; callers never need Send futures.
#[allow(async_fn_in_trait)]
pub trait RemoteStore {
    /// List the entries of `path`.
    async fn list_directory(&self, path: &str) -> Result<Vec<FileEntry>, StoreError>;

    /// Delete the file at `path`. Fails if the path does not exist or the
    /// backend rejects the deletion.
    async fn delete_file(&self, path: &str) -> Result<(), StoreError>;

    /// Flush the auxiliary key-value store.
    async fn flush_kv(&self) -> Result<(), StoreError>;
}

/// Partial-failure policy for a wipe sequence. Neither variant rolls back;
/// both are strictly sequential.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WipePolicy {
    /// Stop at the first failed delete, skipping the flush.
    #[default]
    Abort,
    /// Attempt every delete, flush, then report the first failure.
    BestEffort,
}

/// Delete every path in `plan` in order, then flush the key-value store.
///
/// Deletes are awaited one at a time: the next delete starts only after
/// the previous one completed, so no two deletes for this session ever run
/// concurrently. The flush runs at most once, after the last delete.
///
/// With [`WipePolicy::Abort`] a failure leaves a partial deletion behind;
/// the caller re-lists afterwards to observe whatever actually happened.
pub async fn wipe_all<S: RemoteStore>(
    store: &S,
    plan: &[String],
    policy: WipePolicy,
) -> Result<(), StoreError> {
    let mut first_error = None;
    for path in plan {
        match store.delete_file(path).await {
            Ok(()) => {}
            Err(e) => match policy {
                WipePolicy::Abort => return Err(e),
                WipePolicy::BestEffort => {
                    first_error.get_or_insert(e);
                }
            },
        }
    }
    store.flush_kv().await?;
    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
