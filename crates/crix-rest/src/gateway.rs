//! Request gateway: serialize, sign, send, validate, parse

use crate::error::{ensure, RestError, RestResult};
use crate::transport::{HttpRequest, Method, Transport};
use crix_auth::{Credentials, SIGNED_TOKEN_HEADER};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};

/// Performs API calls against one base URL
///
/// Calls without a body go out as GET, calls with a body as POST. The body
/// is serialized exactly once and the same bytes are signed and sent.
pub struct Gateway {
    base_url: String,
    transport: Box<dyn Transport>,
    credentials: Option<Credentials>,
}

impl Gateway {
    /// Create a gateway
    pub fn new(
        base_url: impl Into<String>,
        transport: Box<dyn Transport>,
        credentials: Option<Credentials>,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            transport,
            credentials,
        }
    }

    /// API base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check if signed calls are possible
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// Perform a call and return the parsed JSON body verbatim
    ///
    /// # Errors
    /// - [`RestError::AuthRequired`] if `signed` and no credentials are set
    ///   (nothing is sent)
    /// - [`RestError::Api`] if the status is not 200 or 204
    /// - [`RestError::Parse`] if a successful body is not JSON
    #[instrument(skip(self, body), fields(base_url = %self.base_url))]
    pub fn call<B>(
        &self,
        operation: &str,
        path: &str,
        body: Option<&B>,
        signed: bool,
    ) -> RestResult<Value>
    where
        B: Serialize + ?Sized,
    {
        let payload = body
            .map(serde_json::to_vec)
            .transpose()
            .map_err(|e| RestError::InvalidParameter(format!("{}: {}", operation, e)))?;

        let mut headers = Vec::new();
        if payload.is_some() {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }
        if signed {
            let credentials = self.credentials.as_ref().ok_or(RestError::AuthRequired)?;
            let signed_token = credentials.signed_token(payload.as_deref().unwrap_or_default());
            headers.push((SIGNED_TOKEN_HEADER.to_string(), signed_token));
        }

        let method = if payload.is_some() {
            Method::Post
        } else {
            Method::Get
        };

        let request = HttpRequest {
            method,
            url: format!("{}{}", self.base_url, path),
            headers,
            body: payload,
        };

        debug!("{} {} ({})", method, path, operation);

        let response = self.transport.execute(&request)?;

        if let Err(err) = ensure(operation, response.status, &response.body) {
            warn!("{} failed with status {}", operation, response.status);
            return Err(err);
        }

        debug!("{} returned {}", operation, response.status);

        if response.body.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&response.body)
            .map_err(|e| RestError::Parse(format!("{}: {}", operation, e)))
    }

    /// Perform a call and map the JSON body onto `T`
    pub fn call_as<B, T>(
        &self,
        operation: &str,
        path: &str,
        body: Option<&B>,
        signed: bool,
    ) -> RestResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let value = self.call(operation, path, body, signed)?;
        serde_json::from_value(value).map_err(|e| RestError::Parse(format!("{}: {}", operation, e)))
    }

    /// Unsigned GET mapped onto `T`
    pub fn get_as<T: DeserializeOwned>(&self, operation: &str, path: &str) -> RestResult<T> {
        self.call_as::<(), T>(operation, path, None, false)
    }

    /// POST mapped onto `T`
    pub fn post_as<B, T>(&self, operation: &str, path: &str, body: &B, signed: bool) -> RestResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.call_as(operation, path, Some(body), signed)
    }
}

impl std::fmt::Debug for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway")
            .field("base_url", &self.base_url)
            .field("has_credentials", &self.has_credentials())
            .finish()
    }
}
