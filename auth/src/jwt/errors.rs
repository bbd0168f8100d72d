use thiserror::Error;

/// Error type for JWT operations.
///
/// Every validation failure has its own variant; callers decide how much of it to expose.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Unexpected signing method: {0}")]
    UnexpectedAlgorithm(String),

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is expired")]
    TokenExpired,

    #[error("Token is not valid yet")]
    NotYetValid,

    #[error("Missing required claim: {0}")]
    MissingClaim(String),

    #[error("Token is invalid: {0}")]
    InvalidToken(String),
}
