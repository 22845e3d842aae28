//! Login Flow Example
//!
//! Signs in with credentials from the environment, then fetches and prints
//! the resulting session.
//!
//! Run with:
//!   INTERNAL_API_BASE_URL=http://localhost:8000 \
//!   FORGEBOARD_EMAIL=user@example.com FORGEBOARD_PASSWORD=... \
//!   cargo run --example login_flow

use forgeboard_rs::{ApiClient, Config, Credentials};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("forgeboard_rs=debug")),
        )
        .init();

    let credentials = Credentials {
        email: std::env::var("FORGEBOARD_EMAIL")?,
        password: std::env::var("FORGEBOARD_PASSWORD")?,
    };

    let client = ApiClient::new(Config::from_env())?;

    let auth = client.login(&credentials).await?;
    println!("✅ Logged in, token {}", auth.token);

    match client.session().await {
        Some(session) => {
            println!("👤 {} (admin: {})", session.user.email, session.user.is_admin);
            println!("   Session opened {}", session.session.created_at);
        }
        None => println!("No active session"),
    }

    Ok(())
}
