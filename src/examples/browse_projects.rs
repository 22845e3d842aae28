//! Project Browsing Example
//!
//! Lists every project on the configured Forgeboard server and prints the
//! README of the first one.
//!
//! Run with: INTERNAL_API_BASE_URL=http://localhost:8000 cargo run --example browse_projects

use forgeboard_rs::{ApiClient, Config};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("forgeboard_rs=debug")),
        )
        .init();

    let client = ApiClient::new(Config::from_env())?;

    let projects = client.projects().await?;
    println!("📋 {} project(s)\n", projects.len());

    for project in &projects {
        println!("  {} — {}", project.name, project.description);
        if let Some(url) = &project.github_url {
            println!("      {url}");
        }
    }

    if let Some(project) = projects.first() {
        let readme = client.readme(project.id).await?;
        println!("\n📖 README for {}:\n", project.name);
        println!("{readme}");
    }

    Ok(())
}
