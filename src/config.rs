use config::{Config, ConfigBuilder, Environment, File, builder::DefaultState};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, trace};

/// Name of the optional configuration file looked up in the working directory.
const CONFIG_FILE: &str = "salescast";
const ENV_PREFIX: &str = "SALESCAST";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("api_base_url must start with http:// or https://, got {0:?}")]
    InvalidBaseUrl(String),
}

/// Terminal client settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the forecasting service
    pub api_base_url: String,
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: common::DEFAULT_API_BASE_URL.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ClientConfig {
    /// Builder pre-populated with the defaults.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let defaults = ClientConfig::default();
        Ok(Config::builder()
            .set_default("api_base_url", defaults.api_base_url)?
            .set_default("log_level", defaults.log_level)?)
    }

    /// Layer defaults, the config file, `SALESCAST_*` environment variables
    /// and an explicit base URL override, in that order.
    pub fn load(path: Option<&Path>, api_url: Option<&str>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut builder = Self::defaults()?;
        builder = match path {
            Some(path) => {
                debug!("Loading configuration from {}", path.display());
                builder.add_source(File::from(path).required(true))
            }
            None => builder.add_source(File::with_name(CONFIG_FILE).required(false)),
        };
        builder = builder.add_source(Environment::with_prefix(ENV_PREFIX));
        if let Some(url) = api_url {
            trace!("Overriding api_base_url from command line");
            builder = builder.set_override("api_base_url", url)?;
        }

        Self::from_builder(builder)
    }

    /// Finish a builder and validate the result.
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let mut config: ClientConfig = builder.build()?.try_deserialize()?;
        if !(config.api_base_url.starts_with("http://") || config.api_base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(config.api_base_url));
        }
        config.api_base_url = config.api_base_url.trim_end_matches('/').to_string();
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::from_builder(ClientConfig::defaults().unwrap()).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api_base_url, "http://localhost:8000");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let builder = ClientConfig::defaults()
            .unwrap()
            .add_source(File::from_str(
                "api_base_url = \"https://forecast.example.com/\"\nlog_level = \"debug\"",
                FileFormat::Toml,
            ));
        let config = ClientConfig::from_builder(builder).unwrap();
        assert_eq!(config.api_base_url, "https://forecast.example.com");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_override_wins() {
        let builder = ClientConfig::defaults()
            .unwrap()
            .set_override("api_base_url", "http://10.0.0.5:9000")
            .unwrap();
        let config = ClientConfig::from_builder(builder).unwrap();
        assert_eq!(config.api_base_url, "http://10.0.0.5:9000");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_rejects_non_http_url() {
        let builder = ClientConfig::defaults()
            .unwrap()
            .set_override("api_base_url", "localhost:8000")
            .unwrap();
        assert!(matches!(
            ClientConfig::from_builder(builder),
            Err(ConfigError::InvalidBaseUrl(_))
        ));
    }
}
