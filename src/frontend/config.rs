//! HTTP client configuration.

/// Base URL used when none is given on the command line or in the environment.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Configuration threaded into every [`super::ApiClient`].
///
/// Holds the base URL exactly as given. It is not validated or normalized;
/// a malformed value only surfaces when a request is attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        configure_http_client(DEFAULT_BASE_URL)
    }
}

/// Builds the client configuration for `base_url`.
///
/// Performs no I/O.
pub fn configure_http_client(base_url: impl Into<String>) -> ClientConfig {
    ClientConfig {
        base_url: base_url.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        assert_eq!(ClientConfig::default().base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_base_url_is_stored_verbatim() {
        assert_eq!(
            configure_http_client("http://localhost:8000/").base_url(),
            "http://localhost:8000/"
        );
        assert_eq!(configure_http_client("not a url").base_url(), "not a url");
    }

    #[test]
    fn test_configure_is_idempotent() {
        assert_eq!(
            configure_http_client(DEFAULT_BASE_URL),
            configure_http_client(DEFAULT_BASE_URL)
        );
    }
}
