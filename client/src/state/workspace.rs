//! Chat + virtual file-system workspace state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both the anonymous home page and the project page render the same
//! workspace: a chat transcript on one side and the generated virtual
//! files on the other. This module holds that state and the pure
//! transitions the pages share.

#[cfg(test)]
#[path = "workspace_test.rs"]
mod workspace_test;

use shared::{ChatMessage, ChatRequest, ChatResponse, FileSystemData, MessageRole};
use uuid::Uuid;

/// Workspace state for one chat-driven editing session.
#[derive(Clone, Debug, Default)]
pub struct WorkspaceState {
    /// Transcript, oldest first.
    pub messages: Vec<ChatMessage>,
    /// Current virtual file-system snapshot.
    pub data: FileSystemData,
    /// Path currently open in the code viewer.
    pub selected_file: Option<String>,
    /// True while a generation round trip is in flight.
    pub pending: bool,
}

impl WorkspaceState {
    /// Append a user message and return the request for the next
    /// generation round.
    pub fn push_user_message(&mut self, content: &str) -> ChatRequest {
        self.messages.push(ChatMessage {
            id: Uuid::new_v4().to_string(),
            role: MessageRole::User,
            content: content.to_owned(),
        });
        ChatRequest { messages: self.messages.clone(), data: self.data.clone() }
    }

    /// Fold a generation response back into the workspace.
    pub fn apply_response(&mut self, response: ChatResponse) {
        self.messages.push(response.message);
        self.data = response.data;
        // Keep the viewer on a file that still exists.
        if let Some(selected) = &self.selected_file {
            if !self.data.contains_key(selected) {
                self.selected_file = None;
            }
        }
        if self.selected_file.is_none() {
            self.selected_file = self.file_paths().first().cloned();
        }
    }

    /// Paths of regular files in the snapshot, sorted.
    #[must_use]
    pub fn file_paths(&self) -> Vec<String> {
        self.data
            .iter()
            .filter(|(_, node)| node.content.is_some())
            .map(|(path, _)| path.clone())
            .collect()
    }

    /// Contents of the currently selected file, if any.
    #[must_use]
    pub fn selected_content(&self) -> Option<&str> {
        let path = self.selected_file.as_ref()?;
        self.data.get(path)?.content.as_deref()
    }
}
