use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub dataset: DatasetConfig,
    pub server: ServerConfig,
    pub recommender: RecommenderConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub external_url: Option<String>,
    pub api_rate_limit: u64,
    pub max_request_body_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommenderConfig {
    /// Results returned when the caller does not ask for a count
    pub default_results: usize,
    /// Hard cap on results per request
    pub max_results: usize,
}

impl Settings {
    /// Load settings from environment variables
    pub fn from_env() -> Result<Self> {
        let dataset_path = std::env::var("DATASET_PATH")
            .unwrap_or_else(|_| "./data/recipes.csv".to_string())
            .into();

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

        let default_results = std::env::var("DEFAULT_RESULTS")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid DEFAULT_RESULTS value".to_string()))?;

        let max_results = std::env::var("MAX_RESULTS")
            .unwrap_or_else(|_| "50".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid MAX_RESULTS value".to_string()))?;

        Ok(Settings {
            dataset: DatasetConfig { path: dataset_path },
            server: ServerConfig {
                host,
                port,
                external_url,
                api_rate_limit,
                max_request_body_size,
            },
            recommender: RecommenderConfig {
                default_results,
                max_results,
            },
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(Error::Config("Port must be non-zero".to_string()));
        }

        if self.recommender.default_results == 0 {
            return Err(Error::Config(
                "Default result count must be non-zero".to_string(),
            ));
        }

        if self.recommender.default_results > self.recommender.max_results {
            return Err(Error::Config(
                "Default result count must not exceed the maximum".to_string(),
            ));
        }

        Ok(())
    }
}
