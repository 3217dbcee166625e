use anyhow::Result;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use aggregator::web::start_web_server;
use aggregator::{AppState, Config, Database, RevenueAggregator, RevenueFetcher};

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = EnvFilter::from_default_env()
        .add_directive("aggregator=info".parse()?)
        .add_directive("revenue_aggregator=info".parse()?)
        .add_directive("tower_http=warn".parse()?)
        .add_directive("hyper=warn".parse()?)
        .add_directive("reqwest=warn".parse()?)
        .add_directive("sqlx=warn".parse()?);

    fmt().with_env_filter(env_filter).init();

    info!("Starting Revenue Aggregator");

    let config = Arc::new(Config::from_env()?);
    info!(
        "Configuration loaded: listening on {}:{}, database {}",
        config.host,
        config.port,
        config.database.display_target()
    );

    let database = Arc::new(Database::new(&config.database).await?);
    info!("Database initialized");

    let fetcher = RevenueFetcher::new()?;
    let aggregator = Arc::new(RevenueAggregator::new(database.clone(), fetcher));
    info!("Revenue aggregator initialized");

    let state = AppState::new(config, database.clone(), aggregator);
    info!("Revenue Aggregator started successfully");

    start_web_server(state).await?;

    // The router (and with it the HTTP client) is gone once serve returns
    database.close().await;
    info!("Revenue Aggregator shutdown complete");

    Ok(())
}
