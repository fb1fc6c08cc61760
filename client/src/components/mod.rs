//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (header, connectivity) and the route guard
//! while reading shared state from Leptos context providers.

pub mod app_header;
pub mod connection_status;
pub mod route_guard;
