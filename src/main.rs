mod config;
mod routes;

use std::error::Error;

use client::config::PageConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env()?;
    let page = PageConfig::from_build_env();
    tracing::info!(welcome = %page.welcome, "page configuration resolved");

    let app = routes::app(&config)?;
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;

    tracing::info!(port = config.port, "monstereos listening");
    axum::serve(listener, app).await?;
    Ok(())
}
