//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`files`, `session`) so individual components
//! can depend on small focused models. Each model is a plain struct with
//! pure transition methods; pages wrap them in `RwSignal` and call the
//! transitions from event handlers, which keeps the logic natively
//! testable without a browser.

pub mod files;
pub mod session;
