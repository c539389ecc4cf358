use crate::error::{Error, Result};
use std::env;
use url::Url;

/// Upstream recipe API configuration
///
/// Injected into [`RecipeApiClient`](crate::upstream::RecipeApiClient) at
/// construction time; the translation logic never reads ambient state.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// API key credential, sent as the `apiKey` query parameter
    pub api_key: String,

    /// Base URL of the recipe API
    pub base_url: String,

    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl UpstreamConfig {
    /// Create a new UpstreamConfig from environment variables
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("PLATEFUL_API_KEY")
            .map_err(|_| Error::Config("PLATEFUL_API_KEY is not set".to_string()))?;

        let base_url = env::var("PLATEFUL_API_BASE_URL")
            .unwrap_or_else(|_| "https://api.spoonacular.com".to_string());

        let timeout_secs = env::var("PLATEFUL_API_TIMEOUT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30);

        let config = Self {
            api_key,
            base_url,
            timeout_secs,
        };
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(Error::Config("Upstream API key must not be empty".to_string()));
        }

        let url = Url::parse(&self.base_url)
            .map_err(|e| Error::Config(format!("Invalid upstream base URL: {e}")))?;

        match url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(Error::Config(format!(
                    "Upstream base URL must use http or https, got {scheme}"
                )));
            }
        }

        if self.timeout_secs == 0 {
            return Err(Error::Config("Upstream timeout must be non-zero".to_string()));
        }

        Ok(())
    }
}
