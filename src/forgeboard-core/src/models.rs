use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered account as the service returns it.
///
/// `password` carries the server-side argon2 hash, never a plaintext
/// password; the identity endpoint includes it verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

/// One login session: a bearer token tied to a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub user_id: Uuid,
    pub token: Uuid,
    pub created_at: DateTime<Utc>,
}

/// The authenticated identity behind the current request's cookies,
/// fetched fresh on every call and never cached here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub session: SessionRecord,
    pub user: User,
}

/// Request body for the login and signup endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Response from a successful login or signup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: Uuid,
}

/// A published project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    pub owner_user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Fields the caller supplies when creating or updating a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProject {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
}

/// Envelope around a single-project response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectResponse {
    pub status: String,
    pub project: Project,
}

/// Envelope around the project listing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectListResponse {
    pub status: String,
    pub projects: Vec<Project>,
}
