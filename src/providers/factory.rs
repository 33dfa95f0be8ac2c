use crate::config::TranslationConfig;
use crate::error::RecipeError;
use crate::providers::{OpenAITranslator, TranslationService};

pub struct TranslatorFactory;

impl TranslatorFactory {
    /// Create a translator instance from configuration
    ///
    /// Returns `Ok(None)` when translation is disabled.
    pub fn create(
        config: &TranslationConfig,
    ) -> Result<Option<Box<dyn TranslationService>>, RecipeError> {
        if !config.enabled {
            return Ok(None);
        }

        let translator: Box<dyn TranslationService> = match config.provider.as_str() {
            "openai" => Box::new(OpenAITranslator::new(config)?),
            "ollama" => Box::new(OpenAITranslator::ollama(config)?),
            other => {
                return Err(RecipeError::Builder(format!(
                    "Unknown translation provider: {}",
                    other
                )))
            }
        };
        Ok(Some(translator))
    }

    /// List all available provider names
    pub fn available_providers() -> Vec<&'static str> {
        vec!["openai", "ollama"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config(provider: &str) -> TranslationConfig {
        TranslationConfig {
            provider: provider.to_string(),
            api_key: Some("test-key".to_string()),
            ..TranslationConfig::default()
        }
    }

    #[test]
    fn test_create_openai_translator() {
        let config = create_test_config("openai");
        let translator = TranslatorFactory::create(&config).unwrap().unwrap();
        assert_eq!(translator.provider_name(), "openai");
    }

    #[test]
    fn test_create_ollama_translator() {
        let mut config = create_test_config("ollama");
        config.api_key = None;
        let translator = TranslatorFactory::create(&config).unwrap().unwrap();
        assert_eq!(translator.provider_name(), "ollama");
    }

    #[test]
    fn test_create_disabled_translator() {
        let mut config = create_test_config("openai");
        config.enabled = false;
        assert!(TranslatorFactory::create(&config).unwrap().is_none());
    }

    #[test]
    fn test_create_unknown_provider() {
        let config = create_test_config("unknown");
        let result = TranslatorFactory::create(&config);
        match result {
            Err(e) => assert!(e.to_string().contains("Unknown translation provider")),
            Ok(_) => panic!("Expected an error for an unknown provider"),
        }
    }

    #[test]
    fn test_available_providers() {
        let providers = TranslatorFactory::available_providers();
        assert_eq!(providers, vec!["openai", "ollama"]);
    }
}
