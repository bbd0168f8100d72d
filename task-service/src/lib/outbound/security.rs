pub mod hasher;
pub mod tokens;

pub use hasher::Argon2CredentialHasher;
pub use tokens::JwtTokenService;
