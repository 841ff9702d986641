//! Network layer: wire types, the remote-store interface, and the
//! HTTP-backed client for the hosted backend.

pub mod api;
pub mod store;
pub mod types;
