use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::config::TokenConfig;
use crate::errors::AppError;

/// Header carrying the token on requests and responses
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

pub const TOKEN_TTL_SECS: i64 = 15 * 60;

/// Claims signed into every token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Email of the user the token was issued to
    pub user_id: String,
    /// Admin flag of that user at issuance
    pub authorized: bool,
    /// Expiry, unix seconds
    pub exp: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("no token in the x-auth-token header")]
    Missing,

    #[error("token rejected: {0}")]
    Invalid(#[from] jsonwebtoken::errors::Error),

    #[error("token could not be signed: {0}")]
    Signing(jsonwebtoken::errors::Error),
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Missing | TokenError::Invalid(_) => AppError::InvalidToken(err.to_string()),
            TokenError::Signing(_) => AppError::InternalServerError(err.to_string()),
        }
    }
}

struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

/// HS256 token issuer and verifier sharing one secret.
///
/// Cheap to clone; the keys are built once from [`TokenConfig`].
#[derive(Clone)]
pub struct TokenAuth {
    keys: Arc<Keys>,
}

impl TokenAuth {
    pub fn new(config: &TokenConfig) -> Self {
        let secret = config.secret.as_bytes();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            keys: Arc::new(Keys {
                encoding: EncodingKey::from_secret(secret),
                decoding: DecodingKey::from_secret(secret),
                validation,
            }),
        }
    }

    /// Issues a token valid for [`TOKEN_TTL_SECS`] from now.
    pub fn issue(&self, user_id: &str, authorized: bool) -> Result<String, TokenError> {
        self.issue_at(user_id, authorized, Utc::now())
    }

    pub fn issue_at(
        &self,
        user_id: &str,
        authorized: bool,
        now: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let claims = TokenClaims {
            user_id: user_id.to_string(),
            authorized,
            exp: (now + Duration::seconds(TOKEN_TTL_SECS)).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.keys.encoding)
            .map_err(TokenError::Signing)
    }

    /// Checks signature and expiry and returns the claims.
    pub fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let data = decode::<TokenClaims>(token, &self.keys.decoding, &self.keys.validation)?;
        Ok(data.claims)
    }
}

impl std::fmt::Debug for TokenAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenAuth").finish_non_exhaustive()
    }
}
