//! Credential and token primitives shared by the task service.
//!
//! - Argon2id password hashing with a 72-byte input ceiling
//! - HMAC-signed JWTs carrying a username and a role
//! - `Authorization: Bearer` header parsing
//!
//! Nothing here knows about users or tasks. The service wraps these types behind its
//! own ports and maps the errors into its domain.
//!
//! # Examples
//!
//! ## Hashing a password
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("correct horse").unwrap();
//! assert!(hasher.verify("correct horse", &hash).unwrap());
//! assert!(!hasher.verify("battery staple", &hash).unwrap());
//! ```
//!
//! ## Issuing and reading a token
//! ```
//! use auth::{Claims, JwtHandler};
//! use chrono::{Duration, Utc};
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = Claims::for_user("alice", "user", Utc::now(), Duration::hours(24));
//! let token = handler.encode(&claims).unwrap();
//! let decoded: Claims = handler.decode(&token).unwrap();
//! assert_eq!(decoded.username, "alice");
//! ```
//!
//! ## Reading the bearer header
//! ```
//! use auth::parse_bearer;
//!
//! assert_eq!(parse_bearer("Bearer abc").unwrap(), "abc");
//! assert!(parse_bearer("Token abc").is_err());
//! ```

pub mod bearer;
pub mod jwt;
pub mod password;

pub use bearer::parse_bearer;
pub use bearer::BearerError;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
