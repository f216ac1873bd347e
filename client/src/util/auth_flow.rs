//! Post-authentication orchestration.
//!
//! DESIGN
//! ======
//! Signing in (or up) is more than a credential exchange: the flow decides
//! where the user lands afterwards. Exactly one of three destinations is
//! taken, in priority order:
//!
//! 1. Parked anonymous work with at least one message is adopted into a
//!    new project, the parked copy is cleared, and the user lands there.
//! 2. Otherwise, if the user already has projects, the most recently
//!    updated one wins (ties keep the first in received order).
//! 3. Otherwise a fresh placeholder project is created with an empty
//!    transcript and an empty snapshot.
//!
//! The busy flag is raised before any network traffic and released on
//! every exit path, success or failure. Failures from the project layer
//! propagate to the caller untouched; a credential rejection is a normal
//! `AuthResult` with `success: false` and triggers none of the above.
//!
//! Collaborators are injected so the whole flow is testable off-browser.

#[cfg(test)]
#[path = "auth_flow_test.rs"]
mod auth_flow_test;

use shared::{AuthResult, CreateProjectRequest, FileSystemData, Project, most_recently_updated};

use crate::state::anon_work::AnonWork;

/// Credential endpoints, as seen by the flow.
pub trait AuthGateway {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthResult, String>;
    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthResult, String>;
}

/// Project endpoints, as seen by the flow.
pub trait ProjectGateway {
    async fn create_project(&self, request: &CreateProjectRequest) -> Result<Project, String>;
    async fn list_projects(&self) -> Result<Vec<Project>, String>;
}

/// Parked anonymous work, as seen by the flow.
pub trait AnonWorkStore {
    fn get(&self) -> Option<AnonWork>;
    fn clear(&self);
}

/// Where a successful authentication landed.
#[derive(Clone, Debug, PartialEq)]
pub enum Destination {
    /// Anonymous work was adopted into this new project.
    AdoptedAnonWork(Project),
    /// An existing project, the most recently updated one.
    MostRecent(Project),
    /// A fresh placeholder project for a user with nothing yet.
    Fresh(Project),
}

impl Destination {
    #[must_use]
    pub fn project(&self) -> &Project {
        match self {
            Self::AdoptedAnonWork(p) | Self::MostRecent(p) | Self::Fresh(p) => p,
        }
    }
}

enum Mode {
    SignIn,
    SignUp,
}

/// The sign-in/sign-up flow with its collaborators.
pub struct AuthFlow<G, P, W, N, L> {
    pub auth: G,
    pub projects: P,
    pub anon_work: W,
    /// Client-side navigation, e.g. `use_navigate`.
    pub navigate: N,
    /// Busy-flag setter, e.g. writing `AuthState::loading`.
    pub set_loading: L,
}

impl<G, P, W, N, L> AuthFlow<G, P, W, N, L>
where
    G: AuthGateway,
    P: ProjectGateway,
    W: AnonWorkStore,
    N: Fn(&str),
    L: Fn(bool),
{
    /// Sign in and, on success, land on the right project.
    ///
    /// # Errors
    ///
    /// Returns an error string if the credential exchange or any project
    /// call fails. The busy flag is released either way.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthResult, String> {
        (self.set_loading)(true);
        let result = self.run(Mode::SignIn, email, password).await;
        (self.set_loading)(false);
        result
    }

    /// Sign up and, on success, land on the right project.
    ///
    /// # Errors
    ///
    /// Returns an error string if the credential exchange or any project
    /// call fails. The busy flag is released either way.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<AuthResult, String> {
        (self.set_loading)(true);
        let result = self.run(Mode::SignUp, email, password).await;
        (self.set_loading)(false);
        result
    }

    async fn run(&self, mode: Mode, email: &str, password: &str) -> Result<AuthResult, String> {
        let result = match mode {
            Mode::SignIn => self.auth.sign_in(email, password).await?,
            Mode::SignUp => self.auth.sign_up(email, password).await?,
        };
        if !result.success {
            return Ok(result);
        }

        let destination = self.resolve_destination().await?;
        (self.navigate)(&format!("/{}", destination.project().id));
        Ok(result)
    }

    async fn resolve_destination(&self) -> Result<Destination, String> {
        if let Some(work) = self.anon_work.get() {
            if !work.messages.is_empty() {
                let request = CreateProjectRequest {
                    name: adopted_project_name(&current_time_label()),
                    messages: work.messages,
                    // The snapshot is adopted exactly as parked; a missing
                    // snapshot stays missing.
                    data: work.file_system_data,
                };
                let project = self.projects.create_project(&request).await?;
                self.anon_work.clear();
                return Ok(Destination::AdoptedAnonWork(project));
            }
        }

        let projects = self.projects.list_projects().await?;
        if let Some(most_recent) = most_recently_updated(&projects) {
            return Ok(Destination::MostRecent(most_recent.clone()));
        }

        let request = CreateProjectRequest {
            name: placeholder_project_name(millis_suffix()),
            messages: Vec::new(),
            data: Some(FileSystemData::new()),
        };
        let project = self.projects.create_project(&request).await?;
        Ok(Destination::Fresh(project))
    }
}

/// Name for a project adopted from anonymous work.
#[must_use]
pub fn adopted_project_name(time_label: &str) -> String {
    format!("Design from {time_label}")
}

/// Name for a placeholder project created for a brand-new user.
#[must_use]
pub fn placeholder_project_name(suffix: u64) -> String {
    format!("New Design #{suffix}")
}

/// Local wall-clock time label, e.g. `"3:42:17 PM"` in the browser.
#[must_use]
pub fn current_time_label() -> String {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::new_0()
            .to_locale_time_string("en-US")
            .as_string()
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        // No locale machinery off-browser; a plain HH:MM:SS is enough.
        let secs = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        let of_day = secs % 86_400;
        format!("{:02}:{:02}:{:02}", of_day / 3600, of_day % 3600 / 60, of_day % 60)
    }
}

/// Millisecond Unix timestamp for placeholder project names.
#[must_use]
pub fn millis_suffix() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            js_sys::Date::now() as u64
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
            .unwrap_or_default()
    }
}

// =============================================================================
// PRODUCTION WIRING
// =============================================================================

/// `net::api`-backed credential gateway.
#[derive(Clone, Copy, Debug, Default)]
pub struct ApiAuthGateway;

impl AuthGateway for ApiAuthGateway {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthResult, String> {
        crate::net::api::sign_in(email, password).await
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthResult, String> {
        crate::net::api::sign_up(email, password).await
    }
}

/// `net::api`-backed project gateway.
#[derive(Clone, Copy, Debug, Default)]
pub struct ApiProjectGateway;

impl ProjectGateway for ApiProjectGateway {
    async fn create_project(&self, request: &CreateProjectRequest) -> Result<Project, String> {
        crate::net::api::create_project(request).await
    }

    async fn list_projects(&self) -> Result<Vec<Project>, String> {
        crate::net::api::get_projects().await
    }
}
