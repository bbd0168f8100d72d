use auth::PasswordError;
use auth::PasswordHasher;

use crate::domain::auth::errors::CredentialError;
use crate::domain::auth::ports::CredentialHasher;

// Well-formed digest under the default Argon2id parameters. Matches no password.
const DECOY_HASH: &str = concat!(
    "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$",
    "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA"
);

/// Argon2id credential hasher backed by the `auth` library.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2CredentialHasher {
    inner: PasswordHasher,
}

impl Argon2CredentialHasher {
    pub fn new() -> Self {
        Self {
            inner: PasswordHasher::new(),
        }
    }
}

impl From<PasswordError> for CredentialError {
    fn from(err: PasswordError) -> Self {
        match err {
            PasswordError::TooLong { max, actual } => {
                CredentialError::PasswordTooLong { max, actual }
            }
            PasswordError::MalformedHash(reason) => CredentialError::MalformedHash(reason),
            PasswordError::HashingFailed(reason) | PasswordError::VerificationFailed(reason) => {
                CredentialError::HashingFailed(reason)
            }
        }
    }
}

impl CredentialHasher for Argon2CredentialHasher {
    fn hash(&self, password: &str) -> Result<String, CredentialError> {
        Ok(self.inner.hash(password)?)
    }

    fn verify(&self, password: &str, password_hash: &str) -> Result<bool, CredentialError> {
        Ok(self.inner.verify(password, password_hash)?)
    }

    fn verify_absent(&self, password: &str) {
        let _ = self.inner.verify(password, DECOY_HASH);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = Argon2CredentialHasher::new();
        let hash = hasher.hash("password123").unwrap();

        assert!(hasher.verify("password123", &hash).unwrap());
        assert!(!hasher.verify("password124", &hash).unwrap());
    }

    #[test]
    fn test_too_long_maps_to_domain_error() {
        let hasher = Argon2CredentialHasher::new();

        assert_eq!(
            hasher.hash(&"p".repeat(73)),
            Err(CredentialError::PasswordTooLong {
                max: 72,
                actual: 73
            })
        );
    }

    #[test]
    fn test_decoy_hash_is_well_formed() {
        let hasher = Argon2CredentialHasher::new();

        assert_eq!(hasher.verify("password123", DECOY_HASH), Ok(false));
    }

    #[test]
    fn test_malformed_hash_maps_to_domain_error() {
        let hasher = Argon2CredentialHasher::new();

        assert!(matches!(
            hasher.verify("password123", "plaintext-not-a-hash"),
            Err(CredentialError::MalformedHash(_))
        ));
    }
}
