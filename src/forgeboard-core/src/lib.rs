//! Forgeboard Core Library
//!
//! This crate provides the shared building blocks for the Forgeboard API
//! client, including:
//! - Client configuration
//! - API record types
//! - Request URL building
//! - Structured query-string encoding

pub mod config;
pub mod models;
pub mod query;
pub mod url;

// Re-export commonly used types
pub use config::Config;
pub use models::*;
pub use query::Query;
pub use self::url::api_url;
