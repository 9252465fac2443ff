//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file with environment variable
//! overrides for secrets (backend api key, catalog client credentials), so
//! the secrets never live in the file.

mod logging;

pub use logging::LoggingConfig;

use std::path::Path;

use serde::Deserialize;
use url::Url;

use crate::error::{ConfigError, Result};

/// Backend-as-a-service connection settings.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Project base URL, e.g. `https://xyz.backend.example/`.
    pub url: String,
    /// Project api key. Overridable via `PACELINE_API_KEY`.
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_courses_table")]
    pub courses_table: String,
    #[serde(default = "default_records_table")]
    pub records_table: String,
    #[serde(default = "default_music_table")]
    pub music_table: String,
    #[serde(default = "default_image_bucket")]
    pub image_bucket: String,
}

/// Music-catalog settings: the fixed token issuer plus the search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_token_url")]
    pub token_url: String,
    #[serde(default = "default_search_url")]
    pub search_url: String,
    /// Overridable via `PACELINE_CATALOG_ID`.
    #[serde(default)]
    pub client_id: String,
    /// Overridable via `PACELINE_CATALOG_SECRET`.
    #[serde(default)]
    pub client_secret: String,
    #[serde(default = "default_page_limit")]
    pub page_limit: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub backend: BackendConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_courses_table() -> String {
    "courses".into()
}

fn default_records_table() -> String {
    "running_records".into()
}

fn default_music_table() -> String {
    "running_music".into()
}

fn default_image_bucket() -> String {
    "course-images".into()
}

fn default_token_url() -> String {
    "https://accounts.spotify.com/api/token".into()
}

fn default_search_url() -> String {
    "https://api.spotify.com/v1/search".into()
}

fn default_page_limit() -> u32 {
    20
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:54321/".into(),
            api_key: String::new(),
            courses_table: default_courses_table(),
            records_table: default_records_table(),
            music_table: default_music_table(),
            image_bucket: default_image_bucket(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            token_url: default_token_url(),
            search_url: default_search_url(),
            client_id: String::new(),
            client_secret: String::new(),
            page_limit: default_page_limit(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: BackendConfig::default(),
            catalog: CatalogConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load from a TOML file, apply env overrides, and validate.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let mut config: Config = toml::from_str(&content).map_err(ConfigError::Parse)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Like [`Self::load`], but a missing file falls back to defaults
    /// (still env-overridden and validated).
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            return Self::load(path);
        }
        let mut config = Config::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Initialize the tracing subscriber per the logging section.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var("PACELINE_API_KEY") {
            self.backend.api_key = key;
        }
        if let Ok(id) = std::env::var("PACELINE_CATALOG_ID") {
            self.catalog.client_id = id;
        }
        if let Ok(secret) = std::env::var("PACELINE_CATALOG_SECRET") {
            self.catalog.client_secret = secret;
        }
    }

    fn validate(&self) -> Result<()> {
        if self.backend.url.is_empty() {
            return Err(ConfigError::MissingField {
                field: "backend.url",
            }
            .into());
        }
        if Url::parse(&self.backend.url).is_err() {
            return Err(ConfigError::InvalidValue {
                field: "backend.url",
                reason: format!("not a valid URL: {}", self.backend.url),
            }
            .into());
        }
        if Url::parse(&self.catalog.token_url).is_err() {
            return Err(ConfigError::InvalidValue {
                field: "catalog.token_url",
                reason: format!("not a valid URL: {}", self.catalog.token_url),
            }
            .into());
        }
        if Url::parse(&self.catalog.search_url).is_err() {
            return Err(ConfigError::InvalidValue {
                field: "catalog.search_url",
                reason: format!("not a valid URL: {}", self.catalog.search_url),
            }
            .into());
        }
        if self.catalog.page_limit == 0 || self.catalog.page_limit > 50 {
            return Err(ConfigError::InvalidValue {
                field: "catalog.page_limit",
                reason: format!("must be in 1..=50, got {}", self.catalog.page_limit),
            }
            .into());
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!("expected \"pretty\" or \"json\", got {:?}", self.logging.format),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn parses_minimal_toml() {
        let toml = r#"
[backend]
url = "https://proj.backend.example/"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.backend.courses_table, "courses");
        assert_eq!(config.catalog.page_limit, 20);
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_bad_page_limit() {
        let mut config = Config::default();
        config.catalog.page_limit = 0;
        assert!(matches!(
            config.validate(),
            Err(crate::error::Error::Config(ConfigError::InvalidValue {
                field: "catalog.page_limit",
                ..
            }))
        ));
    }

    #[test]
    fn rejects_unknown_log_format() {
        let mut config = Config::default();
        config.logging.format = "yaml".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_malformed_backend_url() {
        let mut config = Config::default();
        config.backend.url = "not a url".into();
        assert!(matches!(
            config.validate(),
            Err(crate::error::Error::Config(ConfigError::InvalidValue {
                field: "backend.url",
                ..
            }))
        ));
    }
}
