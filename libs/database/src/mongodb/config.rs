#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv, env_or_default, env_parse_or_default};

/// MongoDB connection settings
///
/// The service only needs a host, a port and a database name; the pool and
/// timeout settings keep driver defaults that suit a single small API.
///
/// ```ignore
/// use database::mongodb::MongoConfig;
///
/// let config = MongoConfig::new("localhost", 27017, "electronics");
/// assert_eq!(config.url(), "mongodb://localhost:27017");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MongoConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    /// Reported to the server in its logs
    pub app_name: Option<String>,
    pub max_pool_size: u32,
    pub min_pool_size: u32,
    pub connect_timeout_secs: u64,
    pub server_selection_timeout_secs: u64,
}

impl MongoConfig {
    pub fn new(host: impl Into<String>, port: u16, database: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port,
            database: database.into(),
            ..Self::default()
        }
    }

    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    pub fn with_server_selection_timeout(mut self, secs: u64) -> Self {
        self.server_selection_timeout_secs = secs;
        self
    }

    /// Connection string built from host and port
    pub fn url(&self) -> String {
        format!("mongodb://{}:{}", self.host, self.port)
    }

    pub fn database(&self) -> &str {
        &self.database
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 27017,
            database: "electronics".to_string(),
            app_name: None,
            max_pool_size: 100,
            min_pool_size: 5,
            connect_timeout_secs: 10,
            server_selection_timeout_secs: 30,
        }
    }
}

/// Reads `DB_HOST` (default `localhost`), `DB_PORT` (default `27017`) and
/// `DB_NAME` (default `electronics`).
#[cfg(feature = "config")]
impl FromEnv for MongoConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env_or_default("DB_HOST", "localhost"),
            port: env_parse_or_default("DB_PORT", "27017")?,
            database: env_or_default("DB_NAME", "electronics"),
            ..Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mongo_config_new() {
        let config = MongoConfig::new("db.internal", 27018, "catalog");
        assert_eq!(config.host, "db.internal");
        assert_eq!(config.port, 27018);
        assert_eq!(config.database(), "catalog");
        assert_eq!(config.max_pool_size, 100);
    }

    #[test]
    fn test_mongo_config_url() {
        let config = MongoConfig::new("mongo", 27017, "electronics");
        assert_eq!(config.url(), "mongodb://mongo:27017");
    }

    #[test]
    fn test_mongo_config_with_app_name() {
        let config = MongoConfig::default().with_app_name("electronics_api");
        assert_eq!(config.app_name.as_deref(), Some("electronics_api"));
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_mongo_config_from_env_defaults() {
        temp_env::with_vars_unset(["DB_HOST", "DB_PORT", "DB_NAME"], || {
            let config = MongoConfig::from_env().unwrap();
            assert_eq!(config.url(), "mongodb://localhost:27017");
            assert_eq!(config.database(), "electronics");
        });
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_mongo_config_from_env_overrides() {
        temp_env::with_vars(
            [
                ("DB_HOST", Some("mongo")),
                ("DB_PORT", Some("27999")),
                ("DB_NAME", Some("shop")),
            ],
            || {
                let config = MongoConfig::from_env().unwrap();
                assert_eq!(config.url(), "mongodb://mongo:27999");
                assert_eq!(config.database(), "shop");
            },
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_mongo_config_from_env_rejects_bad_port() {
        temp_env::with_var("DB_PORT", Some("not-a-port"), || {
            let err = MongoConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("DB_PORT"));
        });
    }
}
