use crate::error::AppError;

/// Service configuration read from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// TCP port the HTTP server listens on.
    pub port: u16,
    /// MongoDB connection URI (e.g., `mongodb://localhost:27017`).
    pub db_host: String,
    /// Name of the database holding the advertisement collection.
    pub db_name: String,
}

impl AppConfig {
    /// Build the config from environment variables.
    ///
    /// Required env vars:
    /// - `PORT`
    /// - `DBHOST`
    /// - `DBNAME`
    pub fn from_env() -> Result<Self, AppError> {
        let port = std::env::var("PORT").map_err(|_| AppError::Config("PORT not set".into()))?;
        let port = port
            .parse()
            .map_err(|_| AppError::Config(format!("PORT is not a valid port number: {port}")))?;

        Ok(Self {
            port,
            db_host: std::env::var("DBHOST")
                .map_err(|_| AppError::Config("DBHOST not set".into()))?,
            db_name: std::env::var("DBNAME")
                .map_err(|_| AppError::Config("DBNAME not set".into()))?,
        })
    }

    /// Build with explicit values (useful for testing).
    pub fn new(port: u16, db_host: String, db_name: String) -> Self {
        Self {
            port,
            db_host,
            db_name,
        }
    }
}
