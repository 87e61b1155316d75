//! Base URL selection

use std::fmt;

/// Fixed API version path appended to every host
pub const API_VERSION_PATH: &str = "/api/v1";

/// Name of the production environment
const PROD: &str = "prod";

/// Name used when none is given
pub const DEFAULT_ENVIRONMENT: &str = "mvp";

/// Deployment the client talks to
///
/// `"prod"` selects `https://crix.io`; any other name `X` selects the
/// sandbox host `https://X.crix.io`. Both get [`API_VERSION_PATH`] appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    /// Production (`https://crix.io`)
    Prod,
    /// Named sandbox deployment (`https://<name>.crix.io`)
    Named(String),
    /// Full API base URL, used as-is (local mocks, proxies)
    Custom(String),
}

impl Environment {
    /// Select an environment by logical name
    pub fn from_name(name: &str) -> Self {
        if name == PROD {
            Self::Prod
        } else {
            Self::Named(name.to_string())
        }
    }

    /// Logical name of the environment
    pub fn name(&self) -> &str {
        match self {
            Self::Prod => PROD,
            Self::Named(name) => name,
            Self::Custom(_) => "custom",
        }
    }

    /// API base URL, without a trailing slash
    pub fn base_url(&self) -> String {
        match self {
            Self::Prod => format!("https://crix.io{}", API_VERSION_PATH),
            Self::Named(name) => format!("https://{}.crix.io{}", name, API_VERSION_PATH),
            Self::Custom(url) => url.trim_end_matches('/').to_string(),
        }
    }

    /// True for production
    pub fn is_prod(&self) -> bool {
        matches!(self, Self::Prod)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::Named(DEFAULT_ENVIRONMENT.to_string())
    }
}

impl From<&str> for Environment {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
