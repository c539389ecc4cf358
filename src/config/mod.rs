use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub external_url: Option<String>,
    pub api_rate_limit: u64,
    pub max_request_body_size: usize,
}

impl Settings {
    /// Load settings from environment variables
    pub fn from_env() -> Result<Self> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid PORT value".to_string()))?;

        let external_url = std::env::var("EXTERNAL_URL").ok();

        let api_rate_limit = std::env::var("API_RATE_LIMIT")
            .unwrap_or_else(|_| "100".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid API_RATE_LIMIT value".to_string()))?;

        let max_request_body_size = std::env::var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|_| "1048576".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid MAX_REQUEST_BODY_SIZE value".to_string()))?;

        Ok(Settings {
            server: ServerConfig {
                host,
                port,
                external_url,
                api_rate_limit,
                max_request_body_size,
            },
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(Error::Config("Port must be non-zero".to_string()));
        }

        if self.server.api_rate_limit == 0 {
            return Err(Error::Config("API rate limit must be non-zero".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_validation() {
        let mut settings = Settings {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
                external_url: None,
                api_rate_limit: 100,
                max_request_body_size: 1048576,
            },
        };

        assert!(settings.validate().is_ok());

        settings.server.port = 0;
        assert!(settings.validate().is_err());
    }
}
