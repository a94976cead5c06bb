//! API configuration

use infra_db::DatabaseConfig;
use serde::Deserialize;

/// API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// SQLite connection string
    pub database_url: String,
    /// Upper bound on pooled store connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Log level
    pub log_level: String,
}

fn default_max_connections() -> u32 {
    10
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            database_url: "sqlite://SqliteDB.db".to_string(),
            max_connections: default_max_connections(),
            log_level: "info".to_string(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("API"))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Resolves the store location from the environment
    ///
    /// `API_DATABASE_URL` wins over `DATABASE_URL`. Both binaries use this,
    /// so they always open the same file.
    pub fn database_url_from_env() -> Option<String> {
        Self::database_url_from(|key| std::env::var(key).ok())
    }

    fn database_url_from(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
        lookup("API_DATABASE_URL").or_else(|| lookup("DATABASE_URL"))
    }

    /// Pool settings derived from this configuration
    pub fn database_config(&self) -> DatabaseConfig {
        DatabaseConfig::new(self.database_url.clone()).max_connections(self.max_connections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
        assert_eq!(config.database_config().url, "sqlite://SqliteDB.db");
        assert_eq!(config.database_config().max_connections, 10);
    }

    #[test]
    fn test_prefixed_database_url_wins() {
        let both = |key: &str| match key {
            "API_DATABASE_URL" => Some("sqlite://api.db".to_string()),
            "DATABASE_URL" => Some("sqlite://generic.db".to_string()),
            _ => None,
        };
        assert_eq!(ApiConfig::database_url_from(both).as_deref(), Some("sqlite://api.db"));

        let generic_only = |key: &str| (key == "DATABASE_URL").then(|| "sqlite://generic.db".to_string());
        assert_eq!(
            ApiConfig::database_url_from(generic_only).as_deref(),
            Some("sqlite://generic.db")
        );

        assert_eq!(ApiConfig::database_url_from(|_| None), None);
    }
}
