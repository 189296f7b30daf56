use eyre::Result;
use std::env;

/// Configuration for the admin client.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Base URL of the booking API (no trailing slash)
    pub api_base_url: String,
}

impl AdminConfig {
    pub fn new(api_base_url: &str) -> Self {
        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// `API_BASE_URL` defaults to the local development server.
    pub fn from_env() -> Result<Self> {
        let api_base_url =
            env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:5000".to_string());

        Ok(Self::new(&api_base_url))
    }

    /// Build a full URL for an API path (e.g. `/api/bookings`).
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }
}
