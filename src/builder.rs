use std::time::Duration;

use crate::catalog::{MealDbSource, RecipeSource};
use crate::config::AppConfig;
use crate::error::RecipeError;
use crate::orchestrator::RecipeOrchestrator;
use crate::providers::{TranslationService, TranslatorFactory};

/// Builder for assembling a [`RecipeOrchestrator`]
///
/// Starts from [`AppConfig::default`] unless a configuration is supplied with
/// [`config`](Self::config); individual setters override single values on top.
#[derive(Default)]
pub struct OrchestratorBuilder {
    config: Option<AppConfig>,
    source: Option<Box<dyn RecipeSource>>,
    translator: Option<Box<dyn TranslationService>>,
    catalog_url: Option<String>,
    provider: Option<String>,
    api_key: Option<String>,
    model: Option<String>,
    translation_url: Option<String>,
    target_language: Option<String>,
    timeout: Option<Duration>,
    translate: Option<bool>,
}

impl OrchestratorBuilder {
    /// Use a loaded configuration as the base for every setting
    ///
    /// # Example
    /// ```no_run
    /// use meal_roulette::{AppConfig, RecipeOrchestrator};
    ///
    /// let config = AppConfig::load()?;
    /// let orchestrator = RecipeOrchestrator::builder().config(config).build()?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Use a custom recipe source instead of TheMealDB
    pub fn source(mut self, source: Box<dyn RecipeSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Use a custom translation service instead of the configured provider
    pub fn translator(mut self, translator: Box<dyn TranslationService>) -> Self {
        self.translator = Some(translator);
        self
    }

    /// Set the base URL of the recipe catalog
    pub fn catalog_url(mut self, url: impl Into<String>) -> Self {
        self.catalog_url = Some(url.into());
        self
    }

    /// Set the translation provider by name ("openai" or "ollama")
    pub fn provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    /// Set the API key for the translation provider
    ///
    /// # Example
    /// ```
    /// use meal_roulette::RecipeOrchestrator;
    ///
    /// let builder = RecipeOrchestrator::builder()
    ///     .api_key("your-api-key")
    ///     .target_language("Japanese");
    /// ```
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the model name used for translation
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the base URL of the translation provider
    pub fn translation_url(mut self, url: impl Into<String>) -> Self {
        self.translation_url = Some(url.into());
        self
    }

    /// Set the language instructions are translated into
    pub fn target_language(mut self, language: impl Into<String>) -> Self {
        self.target_language = Some(language.into());
        self
    }

    /// Set a timeout for both HTTP clients
    ///
    /// Without one, the HTTP client's own defaults apply.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Skip translation and always show the catalog's instructions
    pub fn without_translation(mut self) -> Self {
        self.translate = Some(false);
        self
    }

    /// Build the orchestrator
    ///
    /// # Errors
    /// Returns `RecipeError` if:
    /// - The target language is blank
    /// - Translation is enabled but the provider is unknown or has no API key
    /// - An HTTP client cannot be created
    pub fn build(self) -> Result<RecipeOrchestrator, RecipeError> {
        let mut config = self.config.unwrap_or_default();

        if let Some(url) = self.catalog_url {
            config.catalog.base_url = url;
        }
        if let Some(provider) = self.provider {
            config.translation.provider = provider;
        }
        if let Some(key) = self.api_key {
            config.translation.api_key = Some(key);
        }
        if let Some(model) = self.model {
            config.translation.model = model;
        }
        if let Some(url) = self.translation_url {
            config.translation.base_url = Some(url);
        }
        if let Some(language) = self.target_language {
            config.translation.target_language = language;
        }
        if let Some(timeout) = self.timeout {
            let secs = timeout.as_secs().max(1);
            config.catalog.timeout = Some(secs);
            config.translation.timeout = Some(secs);
        }
        if let Some(translate) = self.translate {
            config.translation.enabled = translate;
        }

        let target_language = config.translation.target_language.trim().to_string();
        if target_language.is_empty() {
            return Err(RecipeError::Builder(
                "Target language cannot be empty".to_string(),
            ));
        }

        let source = match self.source {
            Some(source) => source,
            None => Box::new(MealDbSource::new(&config.catalog)?),
        };

        let translator = if !config.translation.enabled {
            None
        } else if let Some(translator) = self.translator {
            Some(translator)
        } else {
            TranslatorFactory::create(&config.translation)?
        };

        Ok(RecipeOrchestrator::new(source, translator, target_language))
    }
}
