use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// Default Edamam recipe search endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.edamam.com/search";

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct SearchConfig {
    /// Recipe API settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Request timeout in seconds. Requests never time out when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Configuration for the recipe search API
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Search endpoint the GET request is sent to
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Application id (can also be set via EDAMAM_APP_ID)
    pub app_id: Option<String>,
    /// Application key (can also be set via EDAMAM_APP_KEY)
    pub app_key: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            app_id: None,
            app_key: None,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl SearchConfig {
    /// Load configuration from `recipe-search.toml` and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        load_config(None)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Load configuration from file and environment variables
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with RECIPE_SEARCH__ prefix
/// 2. The given file, or recipe-search.toml in the current directory
/// 3. Default values
///
/// Environment variable format: RECIPE_SEARCH__API__APP_ID
pub fn load_config(path: Option<&str>) -> Result<SearchConfig, ConfigError> {
    let file = match path {
        // An explicitly named file must exist
        Some(path) => File::with_name(path).required(true),
        None => File::with_name("recipe-search").required(false),
    };

    let settings = Config::builder()
        .add_source(file)
        .add_source(
            Environment::with_prefix("RECIPE_SEARCH")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert!(config.api.app_id.is_none());
        assert!(config.api.app_key.is_none());
        assert!(config.timeout().is_none());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "recipe-search-config-{}.toml",
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "timeout_secs = 5\n\n[api]\nbase_url = \"http://localhost:9999/search\"\napp_id = \"id-123\"\napp_key = \"key-456\""
        )
        .unwrap();

        let config = load_config(path.to_str()).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.api.base_url, "http://localhost:9999/search");
        assert_eq!(config.api.app_id.as_deref(), Some("id-123"));
        assert_eq!(config.api.app_key.as_deref(), Some("key-456"));
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        assert!(load_config(Some("/nonexistent/recipe-search-config")).is_err());
    }
}
