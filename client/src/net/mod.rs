//! Networking modules for HTTP + realtime channel.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls to the host, `channel` manages the realtime
//! subscription, and `types` defines the shared wire schema.

pub mod api;
pub mod channel;
pub mod types;
