use thiserror::Error;

/// Error type for `Authorization` header parsing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BearerError {
    #[error("Authorization header format must be 'Bearer <token>'")]
    InvalidFormat,
}

/// Extract the token from an `Authorization: Bearer <token>` header value.
///
/// The value must be exactly two space-separated parts. The scheme keyword is matched
/// case-insensitively and the token must be non-empty.
///
/// # Errors
/// * `InvalidFormat` - Any other shape (wrong scheme, missing token, extra parts)
pub fn parse_bearer(header_value: &str) -> Result<&str, BearerError> {
    let mut parts = header_value.split(' ');

    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None)
            if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() =>
        {
            Ok(token)
        }
        _ => Err(BearerError::InvalidFormat),
    }
}
