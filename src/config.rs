//! Client configuration.

use std::time::Duration;

/// Default API base URL when [`BASE_URL_ENV_VAR`] is unset.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV_VAR: &str = "PRICEWATCH_API_URL";

const REQUEST_TIMEOUT_SECS: u64 = 30;
const CONNECT_TIMEOUT_SECS: u64 = 8;

/// Paths that never enter the refresh-and-replay protocol: a 401 from any
/// of these is a terminal answer, not an expired session.
pub const DEFAULT_EXEMPT_PATHS: [&str; 6] = [
    "/auth/login",
    "/auth/register",
    "/auth/refresh",
    "/auth/verify-email",
    "/auth/forgot-password",
    "/auth/reset-password",
];

/// Configuration for [`PricewatchClient`](crate::PricewatchClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL.
    pub base_url: String,
    /// Total per-request timeout.
    pub request_timeout: Duration,
    /// Connect-phase timeout.
    pub connect_timeout: Duration,
    /// Request paths exempt from refresh-on-401, matched by substring.
    pub exempt_paths: Vec<String>,
}

impl ClientConfig {
    /// Configuration pointing at `base_url` with default timeouts and
    /// exemptions.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            request_timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(CONNECT_TIMEOUT_SECS),
            exempt_paths: DEFAULT_EXEMPT_PATHS.iter().map(|p| (*p).to_string()).collect(),
        }
    }

    /// Configuration with the base URL taken from [`BASE_URL_ENV_VAR`],
    /// falling back to [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BASE_URL_ENV_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    pub(crate) fn is_exempt(&self, path: &str) -> bool {
        self.exempt_paths.iter().any(|p| path.contains(p.as_str()))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_paths_are_exempt() {
        let config = ClientConfig::new(DEFAULT_BASE_URL);
        assert!(config.is_exempt("/auth/login"));
        assert!(config.is_exempt("/auth/refresh"));
        assert!(config.is_exempt("/auth/reset-password"));
    }

    #[test]
    fn protected_paths_are_not_exempt() {
        let config = ClientConfig::new(DEFAULT_BASE_URL);
        assert!(!config.is_exempt("/products"));
        assert!(!config.is_exempt("/wishlist/check/lg-c4-55"));
        // Non-exempt auth-adjacent paths still go through the protocol.
        assert!(!config.is_exempt("/auth/me"));
        assert!(!config.is_exempt("/auth/sessions"));
    }

    #[test]
    fn exemption_list_is_configurable() {
        let mut config = ClientConfig::new(DEFAULT_BASE_URL);
        config.exempt_paths.push("/public".to_string());
        assert!(config.is_exempt("/public/catalog"));
    }
}
