//! Client application state.
//!
//! ARCHITECTURE
//! ============
//! State modules are plain data plus pure helpers; pages wrap them in
//! `RwSignal`s and provide them via context.

pub mod anon_work;
pub mod auth;
pub mod workspace;
