use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Recipe catalog settings
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Translation provider settings
    #[serde(default)]
    pub translation: TranslationConfig,
}

/// Configuration for the recipe catalog
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Base URL of TheMealDB (or a compatible mirror)
    #[serde(default = "default_catalog_base_url")]
    pub base_url: String,
    /// Request timeout in seconds; the HTTP client default applies when unset
    #[serde(default)]
    pub timeout: Option<u64>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_catalog_base_url(),
            timeout: None,
        }
    }
}

/// Configuration for the translation provider
#[derive(Debug, Deserialize, Clone)]
pub struct TranslationConfig {
    /// Whether instructions are translated at all
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Provider name ("openai" or "ollama")
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Model identifier (e.g., "gpt-4.1-mini", "gemma3:12b")
    #[serde(default = "default_model")]
    pub model: String,
    /// Language the instructions are translated into
    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// API key for authentication (can also be set via environment variable)
    pub api_key: Option<String>,
    /// Base URL for API endpoint (for custom or proxy endpoints)
    pub base_url: Option<String>,
    /// Request timeout in seconds; the HTTP client default applies when unset
    #[serde(default)]
    pub timeout: Option<u64>,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            provider: default_provider(),
            model: default_model(),
            target_language: default_target_language(),
            api_key: None,
            base_url: None,
            timeout: None,
        }
    }
}

// Default value functions
fn default_catalog_base_url() -> String {
    "https://www.themealdb.com".to_string()
}

fn default_enabled() -> bool {
    true
}

fn default_provider() -> String {
    "openai".to_string()
}

fn default_model() -> String {
    "gpt-4.1-mini".to_string()
}

fn default_target_language() -> String {
    "Korean".to_string()
}

impl AppConfig {
    /// Load configuration from `config.toml` and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with MEAL_ROULETTE__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: MEAL_ROULETTE__TRANSLATION__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        load_config("config")
    }
}

/// Load configuration from the given file (extension optional) and environment variables
///
/// A missing file is not an error; every setting has a default.
pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name(path).required(false))
        // Use double underscore for nested: MEAL_ROULETTE__TRANSLATION__MODEL
        .add_source(
            Environment::with_prefix("MEAL_ROULETTE")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(toml: &str) -> AppConfig {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_default_values() {
        assert_eq!(default_catalog_base_url(), "https://www.themealdb.com");
        assert_eq!(default_provider(), "openai");
        assert_eq!(default_model(), "gpt-4.1-mini");
        assert_eq!(default_target_language(), "Korean");
        assert!(default_enabled());
    }

    #[test]
    fn test_app_config_default() {
        let config = AppConfig::default();
        assert!(config.translation.enabled);
        assert!(config.translation.api_key.is_none());
        assert!(config.catalog.timeout.is_none());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = from_toml("");
        assert_eq!(config.catalog.base_url, "https://www.themealdb.com");
        assert_eq!(config.translation.model, "gpt-4.1-mini");
    }

    #[test]
    fn test_partial_document_overrides() {
        let config = from_toml(
            r#"
            [catalog]
            timeout = 10

            [translation]
            provider = "ollama"
            model = "gemma3:12b"
            target_language = "Japanese"
            base_url = "http://localhost:11434"
            "#,
        );

        assert_eq!(config.catalog.timeout, Some(10));
        assert_eq!(config.catalog.base_url, "https://www.themealdb.com");
        assert_eq!(config.translation.provider, "ollama");
        assert_eq!(config.translation.model, "gemma3:12b");
        assert_eq!(config.translation.target_language, "Japanese");
        assert_eq!(
            config.translation.base_url.as_deref(),
            Some("http://localhost:11434")
        );
        assert!(config.translation.enabled);
    }

    #[test]
    fn test_translation_can_be_disabled() {
        let config = from_toml("[translation]\nenabled = false\n");
        assert!(!config.translation.enabled);
    }

    #[test]
    fn test_load_config_without_file() {
        // The important thing is a missing file doesn't fail the load
        let result = load_config("does-not-exist-meal-roulette");
        assert!(result.is_ok());
    }
}
