use anyhow::Result;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use hub::server::start_web_server;
use hub::{AppState, Config, Database};

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = EnvFilter::from_default_env()
        .add_directive("hub=info".parse()?)
        .add_directive("agent_hub=info".parse()?)
        .add_directive("tower_http=warn".parse()?)
        .add_directive("hyper=warn".parse()?)
        .add_directive("sqlx=warn".parse()?);

    fmt().with_env_filter(env_filter).init();

    let config = Arc::new(Config::from_env()?);
    info!(
        "Starting AI Agent Hub on {}:{} (allowed origins: {})",
        config.host,
        config.port,
        config.allowed_origins.join(", ")
    );

    let database = Arc::new(Database::new(&config.database).await?);
    let state = Arc::new(AppState::new(config, database.clone()));
    info!("AI Agent Hub started");

    start_web_server(state).await?;

    database.close().await;
    info!("AI Agent Hub shutdown");

    Ok(())
}
