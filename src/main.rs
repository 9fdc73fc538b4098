use std::sync::Arc;

use advertising::app::{self, AppState};
use advertising::config::AppConfig;
use advertising::db::repository::{AdRepository, MongoAdRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "advertising=info,tower_http=info".into()),
        )
        .init();

    tracing::info!("Starting advertising service...");

    let config = AppConfig::from_env()?;

    // Connect to MongoDB before binding the listener: no request can reach
    // a handler until the database handle exists.
    let mongo_client = mongodb::Client::with_uri_str(&config.db_host).await?;
    let mongo_db = mongo_client.database(&config.db_name);
    let ads: Arc<dyn AdRepository> = Arc::new(MongoAdRepository::new(&mongo_db));

    tracing::info!("Connected to MongoDB at {}", config.db_host);

    let app = app::router(AppState { ads });

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("Advertising service is on port {}", config.port);
    axum::serve(listener, app).await?;

    Ok(())
}
