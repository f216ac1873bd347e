//! Anonymous-work tracking over `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Visitors can chat and generate components before signing in. That work
//! (transcript + virtual file-system snapshot) is parked in `localStorage`
//! under a single key and adopted into a real project on the next
//! successful sign-in.

#[cfg(test)]
#[path = "anon_work_test.rs"]
mod anon_work_test;

use serde::{Deserialize, Serialize};
use shared::{ChatMessage, FileSystemData};

use crate::util::auth_flow::AnonWorkStore;
use crate::util::persistence;

const ANON_WORK_KEY: &str = "anonWork";

/// Work accumulated by a signed-out visitor.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnonWork {
    /// Chat transcript, oldest first.
    pub messages: Vec<ChatMessage>,
    /// Virtual file-system snapshot; absent when nothing was generated.
    pub file_system_data: Option<FileSystemData>,
}

/// Read the parked anonymous work, if any.
#[must_use]
pub fn get_anon_work_data() -> Option<AnonWork> {
    persistence::load_json(ANON_WORK_KEY)
}

/// Park the current anonymous work.
pub fn set_anon_work_data(work: &AnonWork) {
    persistence::save_json(ANON_WORK_KEY, work);
}

/// Drop the parked anonymous work.
pub fn clear_anon_work() {
    persistence::remove_key(ANON_WORK_KEY);
}

/// `localStorage`-backed store used by the real sign-in flow.
#[derive(Clone, Copy, Debug, Default)]
pub struct StorageAnonWork;

impl AnonWorkStore for StorageAnonWork {
    fn get(&self) -> Option<AnonWork> {
        get_anon_work_data()
    }

    fn clear(&self) {
        clear_anon_work();
    }
}
