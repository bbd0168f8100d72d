use thiserror::Error;

/// Failures of the credential hasher.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CredentialError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Password too long: maximum {max} bytes, got {actual}")]
    PasswordTooLong { max: usize, actual: usize },

    #[error("Stored password hash is malformed: {0}")]
    MalformedHash(String),
}

/// Failures of token issuance and validation.
///
/// Every variant collapses to the same 401 at the HTTP boundary; the distinction only
/// reaches logs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token signing failed: {0}")]
    SigningFailed(String),

    #[error("Malformed token: {0}")]
    Malformed(String),

    #[error("Unexpected signing algorithm: {0}")]
    UnexpectedAlgorithm(String),

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Token has expired")]
    Expired,

    #[error("Token is not yet valid")]
    NotYetValid,

    #[error("Missing required claim: {0}")]
    MissingClaim(String),

    #[error("Invalid claim: {0}")]
    InvalidClaim(String),
}
