use crate::domain::auth::errors::CredentialError;
use crate::domain::auth::errors::TokenError;
use crate::domain::auth::models::Identity;
use crate::user::models::Role;
use crate::user::models::Username;

/// Slow, salted, one-way password hashing.
pub trait CredentialHasher: Send + Sync + 'static {
    /// Hash a plaintext password with a fresh random salt.
    ///
    /// # Errors
    /// * `PasswordTooLong` - Input exceeds the hasher's byte ceiling
    /// * `HashingFailed` - Underlying algorithm failed
    fn hash(&self, password: &str) -> Result<String, CredentialError>;

    /// Check a plaintext password against a stored digest.
    ///
    /// # Returns
    /// `true` on match, `false` on a well-formed mismatch
    ///
    /// # Errors
    /// * `MalformedHash` - Stored digest cannot be parsed
    fn verify(&self, password: &str, password_hash: &str) -> Result<bool, CredentialError>;

    /// Spend the work of one `verify` when there is no stored digest to check against.
    fn verify_absent(&self, password: &str);
}

/// Issues and validates signed, time-bounded identity tokens.
pub trait TokenService: Send + Sync + 'static {
    /// Issue a token for the given user.
    ///
    /// # Errors
    /// * `SigningFailed` - Token could not be signed
    fn issue(&self, username: &Username, role: Role) -> Result<String, TokenError>;

    /// Validate a token and recover the identity it carries.
    ///
    /// # Errors
    /// One `TokenError` variant per rejection reason (signature, algorithm, expiry,
    /// structure, claims).
    fn validate(&self, token: &str) -> Result<Identity, TokenError>;
}
