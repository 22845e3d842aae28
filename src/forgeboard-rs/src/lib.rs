//! Forgeboard Client Library
//!
//! HTTP client for the Forgeboard projects API: cookie-session
//! authentication, project browsing, and README retrieval.

mod client;
mod cookie;

pub use client::ApiClient;
pub use cookie::{AmbientJar, Cookie, CookieSource, ExplicitCookies};
pub use forgeboard_core::models::{
    AuthResponse, Credentials, NewProject, Project, Session, SessionRecord, User,
};
pub use forgeboard_core::{Config, Query};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    // Nothing was sent; no usable request URL could be built.
    #[error("Tried to fetch an invalid url")]
    InvalidUrl,

    #[error("{status} {reason}")]
    Status { status: u16, reason: String },

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ApiError>;
