//! Shared domain model for the UI-generation app.
//!
//! This crate owns the types that cross the client/server boundary: chat
//! messages, the virtual file-system snapshot, project summaries, and the
//! auth/chat request and response DTOs. Both sides serialize these as JSON,
//! so the serde shapes here are the wire format.


use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

// =============================================================================
// CHAT MESSAGES
// =============================================================================

/// Who authored a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

/// One chat message in a generation conversation.
///
/// Opaque to the auth flow — it passes message lists through unchanged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Client-assigned identifier (UUID string).
    pub id: String,
    pub role: MessageRole,
    pub content: String,
}

// =============================================================================
// VIRTUAL FILE SYSTEM
// =============================================================================

/// Node kind in the virtual file system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Directory,
    File,
}

/// A single node in the virtual file-system snapshot.
///
/// Serialized with a `type` tag to match the persisted JSON shape, e.g.
/// `{"type": "file", "content": "..."}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FileNode {
    #[serde(rename = "type")]
    pub kind: FileKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl FileNode {
    #[must_use]
    pub fn directory() -> Self {
        Self { kind: FileKind::Directory, content: None }
    }

    #[must_use]
    pub fn file(content: impl Into<String>) -> Self {
        Self { kind: FileKind::File, content: Some(content.into()) }
    }
}

/// Virtual file-system snapshot: absolute path -> node.
///
/// A `BTreeMap` keeps iteration (and thus serialization) deterministic.
pub type FileSystemData = BTreeMap<String, FileNode>;

// =============================================================================
// PROJECTS
// =============================================================================

/// A project summary as returned by the project API.
///
/// Timestamps are RFC 3339 UTC strings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Project identifier (UUID string).
    pub id: String,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Select the most recently updated project from `projects`.
///
/// `updated_at` values are parsed as RFC 3339 before comparing: the textual
/// form is not order-preserving (`...T00:00:00Z` sorts after
/// `...T00:00:00.5Z` because `'Z' > '.'`, yet it is half a second older).
/// Ties keep the first project in received order (strict greater-than
/// comparison), so the choice is stable for a given response. Unparseable
/// timestamps rank below all parseable ones.
#[must_use]
pub fn most_recently_updated(projects: &[Project]) -> Option<&Project> {
    fn updated_at(project: &Project) -> Option<OffsetDateTime> {
        OffsetDateTime::parse(&project.updated_at, &Rfc3339).ok()
    }

    let mut best: Option<(&Project, Option<OffsetDateTime>)> = None;
    for project in projects {
        let ts = updated_at(project);
        match &best {
            Some((_, best_ts)) if ts > *best_ts => best = Some((project, ts)),
            Some(_) => {}
            None => best = Some((project, ts)),
        }
    }
    best.map(|(project, _)| project)
}

/// Payload for creating a project.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateProjectRequest {
    pub name: String,
    pub messages: Vec<ChatMessage>,
    /// Initial virtual file-system snapshot. `None` is preserved on the
    /// wire as JSON `null` — the server stores whatever it is given.
    pub data: Option<FileSystemData>,
}

/// A project with its full persisted contents.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectDetail {
    pub id: String,
    pub name: String,
    pub messages: Vec<ChatMessage>,
    pub data: FileSystemData,
    pub created_at: String,
    pub updated_at: String,
}

// =============================================================================
// AUTH
// =============================================================================

/// Outcome of a credential check.
///
/// Authentication failure is a value (`success: false` plus a message), not
/// a transport error; callers branch on `success`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AuthResult {
    #[must_use]
    pub fn ok() -> Self {
        Self { success: true, error: None }
    }

    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self { success: false, error: Some(message.into()) }
    }
}

/// Credentials for sign-in / sign-up. Transient, never stored.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

// =============================================================================
// GENERATION CHAT
// =============================================================================

/// Request body for the generation endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Conversation so far, oldest first, ending with the new user message.
    pub messages: Vec<ChatMessage>,
    /// Current virtual file-system snapshot the model operates on.
    pub data: FileSystemData,
}

/// Response body from the generation endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// The assistant's reply, appended to the conversation by the caller.
    pub message: ChatMessage,
    /// Snapshot after any tool-driven file mutations.
    pub data: FileSystemData,
}
