use serde::Deserialize;
use std::net::SocketAddr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

/// Runtime settings, read from the process environment
///
/// `main` loads `.env` through `dotenv` before calling [`AppConfig::from_env`].
/// Variables map onto fields by lowercased name; anything unset keeps its
/// default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// PostgreSQL URL; the in-memory Store is used when unset
    pub database_url: Option<String>,
    #[serde(rename = "database_max_connections")]
    pub max_connections: u32,
    pub bind_addr: SocketAddr,
    #[serde(rename = "rust_log")]
    pub log_filter: String,
    pub seed_demo_data: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            max_connections: 5,
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            log_filter: "info".to_string(),
            seed_demo_data: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(config::Environment::default().try_parsing(true))
    }

    fn load(environment: config::Environment) -> Result<Self, ConfigError> {
        let config = config::Config::builder().add_source(environment).build()?;
        let mut app_config: Self = config.try_deserialize()?;

        app_config.database_url = app_config
            .database_url
            .filter(|url| !url.trim().is_empty());

        Ok(app_config)
    }
}
