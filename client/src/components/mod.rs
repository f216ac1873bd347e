//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the workspace chrome while reading/writing shared
//! state from Leptos context providers or passed-in signals.

pub mod chat_panel;
pub mod file_viewer;
pub mod markdown;
