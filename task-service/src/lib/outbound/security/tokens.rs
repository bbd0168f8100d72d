use auth::Claims;
use auth::JwtError;
use auth::JwtHandler;
use chrono::Duration;
use chrono::Utc;

use crate::domain::auth::errors::TokenError;
use crate::domain::auth::models::Identity;
use crate::domain::auth::ports::TokenService;
use crate::user::models::Role;
use crate::user::models::Username;

/// HS256 JWT token service.
///
/// Owns the signing secret for the lifetime of the process. Rotating the secret
/// invalidates every outstanding token.
pub struct JwtTokenService {
    handler: JwtHandler,
    validity: Duration,
}

impl JwtTokenService {
    pub fn new(secret: &[u8], validity: Duration) -> Self {
        Self {
            handler: JwtHandler::new(secret),
            validity,
        }
    }

    /// Token service with the given validity window in hours.
    pub fn with_expiration_hours(secret: &[u8], expiration_hours: i64) -> Self {
        Self::new(secret, Duration::hours(expiration_hours))
    }
}

impl From<JwtError> for TokenError {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::EncodingFailed(reason) => TokenError::SigningFailed(reason),
            JwtError::Malformed(reason) | JwtError::InvalidToken(reason) => {
                TokenError::Malformed(reason)
            }
            JwtError::UnexpectedAlgorithm(alg) => TokenError::UnexpectedAlgorithm(alg),
            JwtError::InvalidSignature => TokenError::InvalidSignature,
            JwtError::TokenExpired => TokenError::Expired,
            JwtError::NotYetValid => TokenError::NotYetValid,
            JwtError::MissingClaim(claim) => TokenError::MissingClaim(claim),
        }
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, username: &Username, role: Role) -> Result<String, TokenError> {
        let claims = Claims::for_user(username.as_str(), role.as_str(), Utc::now(), self.validity);

        Ok(self.handler.encode(&claims)?)
    }

    fn validate(&self, token: &str) -> Result<Identity, TokenError> {
        let claims: Claims = self.handler.decode(token)?;

        let username = Username::new(claims.username)
            .map_err(|e| TokenError::InvalidClaim(format!("username: {}", e)))?;
        let role = claims
            .role
            .parse::<Role>()
            .map_err(|e| TokenError::InvalidClaim(format!("role: {}", e)))?;

        Ok(Identity::new(username, role))
    }
}
