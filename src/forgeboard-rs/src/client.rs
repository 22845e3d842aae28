use std::sync::Arc;

use forgeboard_core::models::{
    AuthResponse, Credentials, NewProject, Project, ProjectListResponse, ProjectResponse, Session,
};
use forgeboard_core::url::api_url;
use forgeboard_core::{Config, Query};
use reqwest::header::{CONTENT_TYPE, COOKIE};
use reqwest::{Client as HttpClient, Method, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use uuid::Uuid;

use crate::cookie::{AmbientJar, CookieSource};
use crate::{ApiError, Result};

/// Forgeboard REST API client.
///
/// Wraps an HTTP client with the configured base address and a cookie
/// strategy. Every method resolves to exactly one of a decoded value or an
/// [`ApiError`]; nothing here panics or escapes the [`Result`] contract.
pub struct ApiClient {
    config: Config,
    http: HttpClient,
    cookies: Arc<dyn CookieSource>,
}

impl ApiClient {
    /// Create a client that manages session cookies in its own jar, the way
    /// a browser would.
    pub fn new(config: Config) -> Result<Self> {
        Self::with_cookie_source(config, Arc::new(AmbientJar))
    }

    /// Create a client with an explicit cookie strategy.
    ///
    /// Server-rendering hosts pass [`ExplicitCookies`](crate::ExplicitCookies)
    /// built from the incoming request, since no ambient jar exists there.
    pub fn with_cookie_source(config: Config, cookies: Arc<dyn CookieSource>) -> Result<Self> {
        let http = HttpClient::builder().cookie_store(true).build()?;
        Ok(Self {
            config,
            http,
            cookies,
        })
    }

    /// Issue a request against a path under the configured base address and
    /// decode the JSON response body.
    ///
    /// The generic operation behind every typed endpoint. Requests always
    /// carry `Content-Type: application/json`; `body`, when present, is sent
    /// as a JSON payload.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &Query,
        body: Option<&Value>,
    ) -> Result<T> {
        let response = self.send(method, path, query, body).await?;
        Ok(response.json().await?)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &Query,
        body: Option<&Value>,
    ) -> Result<Response> {
        let url = api_url(&self.config, path, query).ok_or(ApiError::InvalidUrl)?;
        tracing::debug!(%method, %url, "api request");

        let mut request = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");
        // An explicit header wins over the jar: the client only fills in
        // cookies from its store when none are set on the request.
        if let Some(header) = self.cookies.cookie_header() {
            request = request.header(COOKIE, header);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        Ok(response)
    }

    /// Log in and receive the session token.
    ///
    /// The server also sets the `token` cookie, which the ambient jar
    /// retains for later calls.
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthResponse> {
        let body = serde_json::to_value(credentials)?;
        self.fetch(Method::POST, "/login", &Query::new(), Some(&body))
            .await
    }

    /// Register a new account; logs it in as a side effect.
    pub async fn signup(&self, credentials: &Credentials) -> Result<AuthResponse> {
        let body = serde_json::to_value(credentials)?;
        self.fetch(Method::POST, "/signup", &Query::new(), Some(&body))
            .await
    }

    /// Fetch the identity behind the current session cookies.
    pub async fn me(&self) -> Result<Session> {
        self.fetch(Method::GET, "/me", &Query::new(), None).await
    }

    /// The current session, or `None` when there is none.
    ///
    /// Collapses every failure into absence; guards that redirect
    /// unauthenticated visitors branch on this.
    pub async fn session(&self) -> Option<Session> {
        self.me().await.ok()
    }

    /// List all projects.
    pub async fn projects(&self) -> Result<Vec<Project>> {
        let response: ProjectListResponse = self
            .fetch(Method::GET, "/projects", &Query::new(), None)
            .await?;
        Ok(response.projects)
    }

    /// Fetch a single project.
    pub async fn project(&self, id: Uuid) -> Result<Project> {
        let response: ProjectResponse = self
            .fetch(Method::GET, &format!("/projects/{id}"), &Query::new(), None)
            .await?;
        Ok(response.project)
    }

    /// Publish a new project owned by the current session's user.
    pub async fn create_project(&self, project: &NewProject) -> Result<Project> {
        let body = serde_json::to_value(project)?;
        let response: ProjectResponse = self
            .fetch(Method::POST, "/projects", &Query::new(), Some(&body))
            .await?;
        Ok(response.project)
    }

    /// Update an existing project; the server enforces ownership.
    pub async fn update_project(&self, id: Uuid, project: &NewProject) -> Result<Project> {
        let body = serde_json::to_value(project)?;
        let response: ProjectResponse = self
            .fetch(
                Method::PUT,
                &format!("/projects/{id}"),
                &Query::new(),
                Some(&body),
            )
            .await?;
        Ok(response.project)
    }

    /// Fetch a project's README as plain text.
    pub async fn readme(&self, id: Uuid) -> Result<String> {
        let response = self
            .send(
                Method::GET,
                &format!("/projects/{id}/readme"),
                &Query::new(),
                None,
            )
            .await?;
        Ok(response.text().await?)
    }
}
