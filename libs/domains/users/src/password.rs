//! Argon2id password hashing with a configurable work factor

use argon2::{
    Algorithm, Argon2, Params, PasswordHash, Version,
    password_hash::{self, PasswordHasher as _, PasswordVerifier as _, SaltString, rand_core::OsRng},
};
use core_config::{ConfigError, FromEnv, env_parse_or_default};

/// Argon2 cost parameters.
///
/// `time_cost` comes from `PASSWORD_HASH_COST` (default 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordConfig {
    pub time_cost: u32,
    pub memory_kib: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            time_cost: Params::DEFAULT_T_COST,
            memory_kib: Params::DEFAULT_M_COST,
        }
    }
}

impl PasswordConfig {
    /// Smallest parameters Argon2 accepts, for tests
    pub fn minimal() -> Self {
        Self {
            time_cost: Params::MIN_T_COST,
            memory_kib: Params::MIN_M_COST,
        }
    }
}

impl FromEnv for PasswordConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let time_cost = env_parse_or_default("PASSWORD_HASH_COST", "2")?;

        Ok(Self {
            time_cost,
            ..Self::default()
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("invalid hashing parameters: {0}")]
    Params(argon2::Error),

    #[error("password hashing failed: {0}")]
    Hash(password_hash::Error),
}

#[derive(Clone)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl std::fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordHasher").finish_non_exhaustive()
    }
}

impl PasswordHasher {
    pub fn new(config: &PasswordConfig) -> Result<Self, PasswordError> {
        let params = Params::new(
            config.memory_kib,
            config.time_cost,
            Params::DEFAULT_P_COST,
            None,
        )
        .map_err(PasswordError::Params)?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// PHC string with a fresh random salt
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(PasswordError::Hash)
    }

    /// `Ok(false)` on mismatch; errors only for an unparseable stored hash.
    ///
    /// Parameters are read from the stored hash, so changing the configured
    /// cost does not invalidate existing users.
    pub fn verify(&self, password: &str, stored: &str) -> Result<bool, PasswordError> {
        let parsed = PasswordHash::new(stored).map_err(PasswordError::Hash)?;

        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(e) => Err(PasswordError::Hash(e)),
        }
    }
}
