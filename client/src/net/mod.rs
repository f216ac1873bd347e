//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `types` defines the client-side view of the
//! wire schema (mostly re-exports of the `shared` DTOs).

pub mod api;
pub mod types;
