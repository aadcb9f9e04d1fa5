use axum_helpers::TokenConfig;
use core_config::{AppInfo, ConfigError, FromEnv, app_info, env_or_default, server::ServerConfig};
use database::mongodb::MongoConfig;
use domain_users::PasswordConfig;

pub use core_config::Environment;

/// Names of the two collections the service owns
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectionsConfig {
    pub products: String,
    pub users: String,
}

impl FromEnv for CollectionsConfig {
    /// Reads `PRODUCTS_COL_NAME` and `USERS_COL_NAME`
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            products: env_or_default("PRODUCTS_COL_NAME", "products"),
            users: env_or_default("USERS_COL_NAME", "users"),
        })
    }
}

/// Application configuration, read once at startup
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub environment: Environment,
    pub server: ServerConfig,
    pub mongodb: MongoConfig,
    pub collections: CollectionsConfig,
    pub token: TokenConfig,
    pub password: PasswordConfig,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Ok(Self {
            app: app_info!(),
            environment: Environment::from_env(),
            server: ServerConfig::from_env()?,
            mongodb: MongoConfig::from_env()?,
            collections: CollectionsConfig::from_env()?,
            token: TokenConfig::from_env()?,
            password: PasswordConfig::from_env()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [&str; 9] = [
        "HOST",
        "MY_APP_PORT",
        "DB_HOST",
        "DB_PORT",
        "DB_NAME",
        "PRODUCTS_COL_NAME",
        "USERS_COL_NAME",
        "JWT_TOKEN_SECRET",
        "PASSWORD_HASH_COST",
    ];

    fn unset_all() -> Vec<(&'static str, Option<&'static str>)> {
        VARS.iter().map(|k| (*k, None)).collect()
    }

    #[test]
    fn test_defaults_with_secret() {
        let mut vars = unset_all();
        vars.push(("JWT_TOKEN_SECRET", Some("s3cr3t")));

        temp_env::with_vars(vars, || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.app.name, "electronics_api");
            assert_eq!(config.server.address(), "localhost:8080");
            assert_eq!(config.mongodb.url(), "mongodb://localhost:27017");
            assert_eq!(config.mongodb.database(), "electronics");
            assert_eq!(config.collections.products, "products");
            assert_eq!(config.collections.users, "users");
            assert_eq!(config.password.time_cost, 2);
        });
    }

    #[test]
    fn test_missing_secret_fails() {
        temp_env::with_vars(unset_all(), || {
            let err = Config::from_env().unwrap_err();
            assert!(err.to_string().contains("JWT_TOKEN_SECRET"));
        });
    }

    #[test]
    fn test_custom_values() {
        temp_env::with_vars(
            [
                ("MY_APP_PORT", Some("9000")),
                ("DB_HOST", Some("mongo")),
                ("DB_PORT", Some("27018")),
                ("DB_NAME", Some("shop")),
                ("PRODUCTS_COL_NAME", Some("catalog")),
                ("USERS_COL_NAME", Some("accounts")),
                ("JWT_TOKEN_SECRET", Some("s3cr3t")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.server.port, 9000);
                assert_eq!(config.mongodb.url(), "mongodb://mongo:27018");
                assert_eq!(config.mongodb.database(), "shop");
                assert_eq!(config.collections.products, "catalog");
                assert_eq!(config.collections.users, "accounts");
            },
        );
    }

    #[test]
    fn test_bad_port_fails() {
        temp_env::with_vars(
            [("MY_APP_PORT", Some("eighty")), ("JWT_TOKEN_SECRET", Some("s"))],
            || {
                assert!(Config::from_env().is_err());
            },
        );
    }
}
