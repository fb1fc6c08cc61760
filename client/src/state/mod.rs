//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `session`, `realtime`) so individual
//! components can depend on small focused models. `session` is the only
//! module that touches durable storage.

pub mod auth;
pub mod realtime;
pub mod session;
