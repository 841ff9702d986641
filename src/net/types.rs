//! Wire types shared with the storage/auth backend.

use serde::{Deserialize, Serialize};

/// Authenticated user identity as returned by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub username: String,
}

/// Errors surfaced by the remote store client.
///
/// Every remote call is attempted exactly once per user action; there is
/// no retry layer, so these map one-to-one onto failed calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("server returned status {0}")]
    Status(u16),
    #[error("bad response body: {0}")]
    Decode(String),
    #[error("not available on the server")]
    Unavailable,
}
