//! Client-side wire DTOs.
//!
//! DESIGN
//! ======
//! The interesting types live in the `shared` crate so client and server
//! cannot drift; this module re-exports them and adds the few shapes only
//! the browser cares about.

use serde::{Deserialize, Serialize};

pub use shared::{
    AuthResult, ChatMessage, ChatRequest, ChatResponse, CreateProjectRequest, CredentialsRequest, FileNode,
    FileSystemData, MessageRole, Project, ProjectDetail,
};

/// An authenticated user as returned by the `/api/auth/me` endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Email address used to sign in.
    pub email: String,
}
