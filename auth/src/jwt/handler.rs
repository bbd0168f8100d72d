use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::Error as JsonWebTokenError;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::errors::JwtError;

/// Signing algorithms accepted on decode. Anything outside the HMAC family is refused.
const HMAC_ALGORITHMS: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

/// JWT token handler for encoding and decoding tokens.
///
/// Generic over the claims type to allow services to define their own token payload.
/// Signs with HS256 and only ever verifies HMAC-signed tokens.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtHandler {
    /// Create a new JWT handler with a secret key.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    /// - Changing the secret invalidates every token issued with the previous one
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Encode claims into a JWT token.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode<T: Serialize>(&self, claims: &T) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a JWT token.
    ///
    /// Checks, in order: three-segment structure, HMAC `alg` in the header, signature,
    /// `nbf` and `exp` (no leeway). `exp` is mandatory.
    ///
    /// # Errors
    /// * `Malformed` - Token structure, base64 or JSON is invalid
    /// * `UnexpectedAlgorithm` - Header declares a non-HMAC algorithm (including `none`)
    /// * `InvalidSignature` - Signature does not match the configured secret
    /// * `NotYetValid` - `nbf` is in the future
    /// * `TokenExpired` - `exp` has passed
    /// * `MissingClaim` - A required claim is absent
    pub fn decode<T: DeserializeOwned>(&self, token: &str) -> Result<T, JwtError> {
        Self::check_algorithm(token)?;

        let mut validation = Validation::new(self.algorithm);
        validation.algorithms = HMAC_ALGORITHMS.to_vec();
        validation.leeway = 0;
        validation.validate_nbf = true;
        validation.set_required_spec_claims(&["exp"]);

        decode::<T>(token, &self.decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(Self::map_error)
    }

    /// Reads the raw header so that a `none` or asymmetric `alg` is reported as such,
    /// rather than as a generic parse failure.
    fn check_algorithm(token: &str) -> Result<(), JwtError> {
        let segments: Vec<&str> = token.split('.').collect();
        if segments.len() != 3 {
            return Err(JwtError::Malformed(format!(
                "expected 3 segments, got {}",
                segments.len()
            )));
        }

        let header_bytes = URL_SAFE_NO_PAD
            .decode(segments[0])
            .map_err(|e| JwtError::Malformed(format!("header is not base64url: {}", e)))?;

        let header: serde_json::Value = serde_json::from_slice(&header_bytes)
            .map_err(|e| JwtError::Malformed(format!("header is not JSON: {}", e)))?;

        let alg = header
            .get("alg")
            .and_then(|v| v.as_str())
            .ok_or_else(|| JwtError::Malformed("header has no alg".to_string()))?;

        match alg {
            "HS256" | "HS384" | "HS512" => Ok(()),
            other => Err(JwtError::UnexpectedAlgorithm(other.to_string())),
        }
    }

    fn map_error(error: JsonWebTokenError) -> JwtError {
        match error.kind() {
            ErrorKind::ExpiredSignature => JwtError::TokenExpired,
            ErrorKind::ImmatureSignature => JwtError::NotYetValid,
            ErrorKind::InvalidSignature => JwtError::InvalidSignature,
            ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
                JwtError::UnexpectedAlgorithm(error.to_string())
            }
            ErrorKind::MissingRequiredClaim(claim) => JwtError::MissingClaim(claim.clone()),
            ErrorKind::InvalidToken
            | ErrorKind::Base64(_)
            | ErrorKind::Json(_)
            | ErrorKind::Utf8(_) => JwtError::Malformed(error.to_string()),
            _ => JwtError::InvalidToken(error.to_string()),
        }
    }
}
