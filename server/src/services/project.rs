//! Project service — per-user CRUD over the `projects` table.
//!
//! DESIGN
//! ======
//! A project is a chat transcript plus a virtual file-system snapshot, both
//! stored as `jsonb`. Snapshots are stored exactly as given (a `null`
//! snapshot stays `null` in the column) and read back null-tolerantly as an
//! empty map, so the create path never has to invent data the client did
//! not send.

#[cfg(test)]
#[path = "project_test.rs"]
mod tests;

use shared::{ChatMessage, CreateProjectRequest, FileSystemData, Project, ProjectDetail};
use sqlx::PgPool;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    #[error("project not found: {0}")]
    NotFound(Uuid),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

fn rfc3339(ts: OffsetDateTime) -> String {
    ts.format(&Rfc3339).unwrap_or_default()
}

fn decode_messages(value: serde_json::Value) -> Vec<ChatMessage> {
    serde_json::from_value(value).unwrap_or_default()
}

fn decode_data(value: serde_json::Value) -> FileSystemData {
    serde_json::from_value(value).unwrap_or_default()
}

/// Create a new project.
///
/// # Errors
///
/// Returns a database error if the insert fails.
pub async fn create_project(
    pool: &PgPool,
    user_id: Uuid,
    request: &CreateProjectRequest,
) -> Result<Project, ProjectError> {
    let id = Uuid::new_v4();
    let messages = serde_json::to_value(&request.messages)?;
    let data = serde_json::to_value(&request.data)?;

    let row = sqlx::query_as::<_, (OffsetDateTime, OffsetDateTime)>(
        "INSERT INTO projects (id, user_id, name, messages, data)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING created_at, updated_at",
    )
    .bind(id)
    .bind(user_id)
    .bind(&request.name)
    .bind(messages)
    .bind(data)
    .fetch_one(pool)
    .await?;

    Ok(Project {
        id: id.to_string(),
        name: request.name.clone(),
        created_at: rfc3339(row.0),
        updated_at: rfc3339(row.1),
    })
}

/// List the user's projects, most recently updated first.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_projects(pool: &PgPool, user_id: Uuid) -> Result<Vec<Project>, ProjectError> {
    let rows = sqlx::query_as::<_, (Uuid, String, OffsetDateTime, OffsetDateTime)>(
        "SELECT id, name, created_at, updated_at
         FROM projects
         WHERE user_id = $1
         ORDER BY updated_at DESC, id ASC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(id, name, created_at, updated_at)| Project {
            id: id.to_string(),
            name,
            created_at: rfc3339(created_at),
            updated_at: rfc3339(updated_at),
        })
        .collect())
}

/// Load one project with its full contents.
///
/// # Errors
///
/// Returns `NotFound` if the project does not exist or belongs to another
/// user, or a database error if the query fails.
pub async fn get_project(pool: &PgPool, user_id: Uuid, project_id: Uuid) -> Result<ProjectDetail, ProjectError> {
    let row = sqlx::query_as::<_, (String, serde_json::Value, Option<serde_json::Value>, OffsetDateTime, OffsetDateTime)>(
        "SELECT name, messages, data, created_at, updated_at
         FROM projects
         WHERE id = $1 AND user_id = $2",
    )
    .bind(project_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?
    .ok_or(ProjectError::NotFound(project_id))?;

    Ok(ProjectDetail {
        id: project_id.to_string(),
        name: row.0,
        messages: decode_messages(row.1),
        data: decode_data(row.2.unwrap_or(serde_json::Value::Null)),
        created_at: rfc3339(row.3),
        updated_at: rfc3339(row.4),
    })
}

/// Persist a project's transcript and snapshot, touching `updated_at`.
///
/// # Errors
///
/// Returns `NotFound` if the project does not exist or belongs to another
/// user, or a database error if the update fails.
pub async fn save_project(
    pool: &PgPool,
    user_id: Uuid,
    project_id: Uuid,
    messages: &[ChatMessage],
    data: &FileSystemData,
) -> Result<(), ProjectError> {
    let result = sqlx::query(
        "UPDATE projects
         SET messages = $3, data = $4, updated_at = now()
         WHERE id = $1 AND user_id = $2",
    )
    .bind(project_id)
    .bind(user_id)
    .bind(serde_json::to_value(messages)?)
    .bind(serde_json::to_value(data)?)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(ProjectError::NotFound(project_id));
    }
    Ok(())
}
