//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth and
//! project fetch failures degrade UI behavior without crashing hydration.
//! Credential rejection is not an `Err`: the server answers 200 with an
//! `AuthResult { success: false, .. }` and callers branch on the value.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AuthResult, ChatRequest, ChatResponse, CreateProjectRequest, Project, ProjectDetail, User};
#[cfg(feature = "hydrate")]
use super::types::CredentialsRequest;

#[cfg(any(test, feature = "hydrate"))]
fn project_endpoint(project_id: &str) -> String {
    format!("/api/projects/{project_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn project_chat_endpoint(project_id: &str) -> String {
    format!("/api/projects/{project_id}/chat")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} failed: {status}")
}

#[cfg(feature = "hydrate")]
async fn post_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(
    url: &str,
    what: &str,
    body: &B,
) -> Result<T, String> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message(what, resp.status()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

/// Sign in with email and password via `POST /api/auth/sign-in`.
///
/// # Errors
///
/// Returns an error string on transport or server failure. A credential
/// rejection is an `Ok` result carrying `success: false`.
pub async fn sign_in(email: &str, password: &str) -> Result<AuthResult, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = CredentialsRequest { email: email.to_owned(), password: password.to_owned() };
        post_json("/api/auth/sign-in", "sign in", &body).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Register a new account via `POST /api/auth/sign-up`.
///
/// # Errors
///
/// Returns an error string on transport or server failure. A credential
/// rejection is an `Ok` result carrying `success: false`.
pub async fn sign_up(email: &str, password: &str) -> Result<AuthResult, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = CredentialsRequest { email: email.to_owned(), password: password.to_owned() };
        post_json("/api/auth/sign-up", "sign up", &body).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout").send().await;
    }
}

/// Fetch the user's projects from `GET /api/projects`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn get_projects() -> Result<Vec<Project>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/projects")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("project list", resp.status()));
        }
        resp.json::<Vec<Project>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Create a project via `POST /api/projects`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn create_project(request: &CreateProjectRequest) -> Result<Project, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/projects", "project create", request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}

/// Load one project via `GET /api/projects/{id}`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn get_project(project_id: &str) -> Result<ProjectDetail, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = project_endpoint(project_id);
        let resp = gloo_net::http::Request::get(&url).send().await.map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("project fetch", resp.status()));
        }
        resp.json::<ProjectDetail>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = project_id;
        Err("not available on server".to_owned())
    }
}

/// Run a persisted generation round via `POST /api/projects/{id}/chat`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn project_chat(project_id: &str, request: &ChatRequest) -> Result<ChatResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = project_chat_endpoint(project_id);
        post_json(&url, "generation", request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (project_id, request);
        Err("not available on server".to_owned())
    }
}

/// Run an anonymous generation round via `POST /api/chat`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn anon_chat(request: &ChatRequest) -> Result<ChatResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/chat", "generation", request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}
