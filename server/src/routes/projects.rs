//! Project routes — CRUD plus the generation chat endpoints.
//!
//! DESIGN
//! ======
//! The client owns the working transcript and snapshot; chat requests carry
//! both. The persisted variant appends the assistant reply and writes the
//! result back to the project row, the anonymous variant returns the outcome
//! without touching the database.

#[cfg(test)]
#[path = "projects_test.rs"]
mod tests;

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use shared::{ChatRequest, ChatResponse, CreateProjectRequest, Project, ProjectDetail};
use uuid::Uuid;

use crate::llm::LlmClient;
use crate::routes::auth::AuthUser;
use crate::services::generate::{self, GenerateError};
use crate::services::project::{self, ProjectError};
use crate::state::AppState;

fn project_status(err: &ProjectError) -> StatusCode {
    match err {
        ProjectError::NotFound(_) => StatusCode::NOT_FOUND,
        ProjectError::Database(_) | ProjectError::Serialize(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn generate_status(err: &GenerateError) -> StatusCode {
    match err {
        GenerateError::LlmNotConfigured => StatusCode::SERVICE_UNAVAILABLE,
        GenerateError::Llm(_) => StatusCode::BAD_GATEWAY,
    }
}

fn require_llm(state: &AppState) -> Result<Arc<LlmClient>, StatusCode> {
    state.llm.clone().ok_or_else(|| {
        tracing::warn!("generation requested but no LLM is configured");
        generate_status(&GenerateError::LlmNotConfigured)
    })
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /api/projects` — list the user's projects, most recent first.
pub async fn list_projects(State(state): State<AppState>, auth: AuthUser) -> Result<Json<Vec<Project>>, StatusCode> {
    let projects = project::list_projects(&state.pool, auth.user.id).await.map_err(|e| {
        tracing::error!(error = %e, "project list failed");
        project_status(&e)
    })?;
    Ok(Json(projects))
}

/// `POST /api/projects` — create a project with an initial transcript and snapshot.
pub async fn create_project(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<Project>), StatusCode> {
    let created = project::create_project(&state.pool, auth.user.id, &body)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "project create failed");
            project_status(&e)
        })?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /api/projects/{id}` — load one project with its full contents.
pub async fn get_project(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ProjectDetail>, StatusCode> {
    let detail = project::get_project(&state.pool, auth.user.id, id)
        .await
        .map_err(|e| project_status(&e))?;
    Ok(Json(detail))
}

/// `POST /api/projects/{id}/chat` — run a generation round and persist it.
pub async fn project_chat(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, StatusCode> {
    // Ownership check before spending tokens on generation.
    project::get_project(&state.pool, auth.user.id, id)
        .await
        .map_err(|e| project_status(&e))?;

    let llm = require_llm(&state)?;
    let outcome = generate::run_generation(llm.as_ref(), &body.messages, body.data)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, project_id = %id, "generation failed");
            generate_status(&e)
        })?;

    let mut messages = body.messages;
    messages.push(outcome.message.clone());
    project::save_project(&state.pool, auth.user.id, id, &messages, &outcome.data)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, project_id = %id, "project save failed");
            project_status(&e)
        })?;

    Ok(Json(ChatResponse { message: outcome.message, data: outcome.data }))
}

/// `POST /api/chat` — anonymous generation round; nothing is persisted.
pub async fn anon_chat(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, StatusCode> {
    let llm = require_llm(&state)?;
    let outcome = generate::run_generation(llm.as_ref(), &body.messages, body.data)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "anonymous generation failed");
            generate_status(&e)
        })?;

    Ok(Json(ChatResponse { message: outcome.message, data: outcome.data }))
}
