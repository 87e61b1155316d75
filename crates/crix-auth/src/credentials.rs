//! Authentication credentials for the CRIX.IO API
//!
//! Implements HMAC-SHA256 signing as required by the `/user/*` endpoints.
//!
//! # Security
//!
//! The secret is stored using the `secrecy` crate which:
//! - Zeroizes memory on drop (prevents memory scanning)
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretBox};
use sha2::Sha256;
use tracing::debug;

use crate::error::{AuthError, AuthResult};

type HmacSha256 = Hmac<Sha256>;

/// Header carrying `<token>,<signature>` on authenticated requests
pub const SIGNED_TOKEN_HEADER: &str = "X-Api-Signed-Token";

/// Environment variable holding the public API token
const TOKEN_ENV: &str = "CRIX_API_TOKEN";
/// Environment variable holding the API secret
const SECRET_ENV: &str = "CRIX_API_SECRET";

/// Sign a payload with HMAC-SHA256
///
/// Returns the digest as 64 lowercase hex characters. The payload must be
/// the exact bytes that go on the wire: any re-serialization (key order,
/// whitespace) produces a different signature.
pub fn sign(secret: &[u8], payload: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(payload);
    hex::encode(mac.finalize().into_bytes())
}

/// API credentials for authenticated requests
///
/// The secret is zeroized when the Credentials are dropped.
pub struct Credentials {
    /// Public API token, sent in clear with every signed request
    token: String,
    /// API secret, used only as the HMAC key
    secret: SecretBox<Vec<u8>>,
}

impl Credentials {
    /// Create new credentials from a public token and a secret
    ///
    /// # Errors
    /// Returns [`AuthError::InvalidCredentials`] if either part is empty.
    pub fn new(token: impl Into<String>, secret: impl AsRef<str>) -> AuthResult<Self> {
        let token = token.into();
        let secret = secret.as_ref();

        if token.is_empty() {
            return Err(AuthError::InvalidCredentials("empty API token".to_string()));
        }
        if secret.is_empty() {
            return Err(AuthError::InvalidCredentials("empty API secret".to_string()));
        }

        Ok(Self {
            token,
            secret: SecretBox::new(Box::new(secret.as_bytes().to_vec())),
        })
    }

    /// Create credentials from environment variables
    ///
    /// Reads `CRIX_API_TOKEN` and `CRIX_API_SECRET` from the environment.
    pub fn from_env() -> AuthResult<Self> {
        let token =
            std::env::var(TOKEN_ENV).map_err(|_| AuthError::EnvVarNotSet(TOKEN_ENV.to_string()))?;
        let secret = std::env::var(SECRET_ENV)
            .map_err(|_| AuthError::EnvVarNotSet(SECRET_ENV.to_string()))?;

        debug!("Loaded API credentials from environment");
        Self::new(token, secret)
    }

    /// Get the public token
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Sign a request body
    pub fn sign(&self, payload: &[u8]) -> String {
        sign(self.secret.expose_secret(), payload)
    }

    /// Value of the [`SIGNED_TOKEN_HEADER`] for a request body
    ///
    /// Format: `<token>,<hex_digest>`.
    pub fn signed_token(&self, payload: &[u8]) -> String {
        format!("{},{}", self.token, self.sign(payload))
    }
}

impl Clone for Credentials {
    /// Clone credentials (creates new SecretBox with same content)
    fn clone(&self) -> Self {
        Self {
            token: self.token.clone(),
            secret: SecretBox::new(Box::new(self.secret.expose_secret().clone())),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field(
                "token",
                &format!("{}...", self.token.chars().take(8).collect::<String>()),
            )
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_golden_value() {
        assert_eq!(
            sign(b"s", b"{}"),
            "143ca8d517ba1b181025d732b1cf275d90104fca57bb02a565542978aa18c4b6"
        );
    }

    #[test]
    fn test_sign_request_body() {
        let body = br#"{"req":{"limit":1000,"symbolName":"BTC_USDT"}}"#;
        assert_eq!(
            sign(b"secret", body),
            "4c19b1b17166a89e412701420fb2502e4d7d593b3f66028c65ff07b1bd490856"
        );
    }

    #[test]
    fn test_signing_consistency() {
        let payload = br#"{"req":{"orderId":1}}"#;
        let first = sign(b"key", payload);
        let second = sign(b"key", payload);
        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_signature_depends_on_bytes() {
        // Same JSON value, different whitespace: different signature
        assert_ne!(sign(b"key", br#"{"a":1}"#), sign(b"key", br#"{"a": 1}"#));
        assert_ne!(sign(b"key", b"{}"), sign(b"other", b"{}"));
    }

    #[test]
    fn test_signed_token_format() {
        let creds = Credentials::new("public-token", "s").unwrap();
        let value = creds.signed_token(b"{}");
        assert_eq!(
            value,
            "public-token,143ca8d517ba1b181025d732b1cf275d90104fca57bb02a565542978aa18c4b6"
        );
    }

    #[test]
    fn test_empty_secret_rejected() {
        assert!(matches!(
            Credentials::new("token", ""),
            Err(AuthError::InvalidCredentials(_))
        ));
        assert!(matches!(
            Credentials::new("", "secret"),
            Err(AuthError::InvalidCredentials(_))
        ));
    }

    #[test]
    fn test_credentials_debug_redacts_secret() {
        let creds = Credentials::new("test_token_value", "super-secret").unwrap();
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_clone_keeps_signature() {
        let creds = Credentials::new("token", "secret").unwrap();
        let cloned = creds.clone();
        assert_eq!(creds.sign(b"{}"), cloned.sign(b"{}"));
        assert_eq!(cloned.token(), "token");
    }
}
