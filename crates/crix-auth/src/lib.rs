//! Credentials and request signing for the CRIX.IO API
//!
//! Authenticated endpoints expect the header
//! `X-Api-Signed-Token: <token>,<hmac-sha256-hex>`, where the digest is
//! computed over the exact bytes of the request body using the API secret.
//! The secret itself never leaves the process.
//!
//! # Example
//!
//! ```no_run
//! use crix_auth::Credentials;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Load credentials from environment
//! let creds = Credentials::from_env()?;
//!
//! let body = br#"{"req":{"limit":1000,"symbolName":"BTC_USDT"}}"#;
//! let header_value = creds.signed_token(body);
//! println!("X-Api-Signed-Token: {}", header_value);
//! # Ok(())
//! # }
//! ```

mod credentials;
mod error;

pub use credentials::{sign, Credentials, SIGNED_TOKEN_HEADER};
pub use error::{AuthError, AuthResult};
