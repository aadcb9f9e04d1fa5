use core_config::{ConfigError, FromEnv, env_required};

/// Token signing configuration.
///
/// Loaded once at startup from `JWT_TOKEN_SECRET` (required, non-empty).
#[derive(Clone)]
pub struct TokenConfig {
    pub secret: String,
}

impl TokenConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl std::fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenConfig")
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl FromEnv for TokenConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let secret = env_required("JWT_TOKEN_SECRET")?;

        if secret.trim().is_empty() {
            return Err(ConfigError::ParseError {
                key: "JWT_TOKEN_SECRET".to_string(),
                details: "must not be empty".to_string(),
            });
        }

        Ok(Self { secret })
    }
}
