//! Client configuration

/// Configuration for connecting to the storefront backend
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | STORE_API_BASE_URL | http://localhost:4000 | Backend base URL |
/// | STORE_API_TIMEOUT_SECS | 30 | Request timeout in seconds |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL (e.g., "http://localhost:4000")
    pub base_url: String,

    /// Bearer token, when a session is authenticated
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new configuration for the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: 30,
        }
    }

    /// Load configuration from environment variables, with defaults
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("STORE_API_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:4000".into()),
            token: None,
            timeout: std::env::var("STORE_API_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> super::HttpClient {
        super::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:4000")
    }
}
