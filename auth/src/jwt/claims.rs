use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Identity claims carried by an access token.
///
/// Standard RFC 7519 time claims plus the `username` and `role` of the bearer.
/// `sub` always mirrors `username`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Username of the token holder
    pub username: String,

    /// Role name of the token holder
    pub role: String,

    /// Subject (same as username)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Not before (Unix timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,
}

impl Claims {
    /// Create claims for an authenticated user, valid for `validity` from `issued_at`.
    ///
    /// # Arguments
    /// * `username` - Username (also used as subject)
    /// * `role` - Role name
    /// * `issued_at` - Issuance instant
    /// * `validity` - Length of the validity window
    pub fn for_user(
        username: impl Into<String>,
        role: impl Into<String>,
        issued_at: DateTime<Utc>,
        validity: Duration,
    ) -> Self {
        let username = username.into();
        let expiration = issued_at + validity;

        Self {
            sub: username.clone(),
            username,
            role: role.into(),
            iat: issued_at.timestamp(),
            exp: expiration.timestamp(),
            nbf: None,
        }
    }

    /// Set not-before (Unix timestamp).
    pub fn with_not_before(mut self, nbf: i64) -> Self {
        self.nbf = Some(nbf);
        self
    }

    /// Check if token is expired.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }

    /// Check if token is not valid yet.
    pub fn is_premature(&self, current_timestamp: i64) -> bool {
        self.nbf.map_or(false, |nbf| current_timestamp < nbf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_user() {
        let now = Utc::now();
        let claims = Claims::for_user("alice", "user", now, Duration::hours(24));

        assert_eq!(claims.username, "alice");
        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.role, "user");
        assert_eq!(claims.iat, now.timestamp());
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
        assert!(claims.nbf.is_none());
    }

    #[test]
    fn test_is_expired() {
        let issued = DateTime::from_timestamp(1000, 0).unwrap();
        let claims = Claims::for_user("alice", "user", issued, Duration::seconds(100));

        assert!(!claims.is_expired(1099));
        assert!(!claims.is_expired(1100)); // Exactly at expiration
        assert!(claims.is_expired(1101));
    }

    #[test]
    fn test_is_premature() {
        let claims = Claims::for_user("alice", "user", Utc::now(), Duration::hours(1))
            .with_not_before(2000);

        assert!(claims.is_premature(1999));
        assert!(!claims.is_premature(2000));
    }

    #[test]
    fn test_nbf_omitted_when_absent() {
        let claims = Claims::for_user("alice", "admin", Utc::now(), Duration::hours(1));
        let json = serde_json::to_value(&claims).unwrap();

        assert!(json.get("nbf").is_none());
        assert_eq!(json["role"], "admin");
        assert_eq!(json["sub"], "alice");
    }
}
