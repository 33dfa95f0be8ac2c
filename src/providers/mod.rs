mod factory;
mod open_ai;
mod prompt;

pub use factory::TranslatorFactory;
pub use open_ai::OpenAITranslator;
pub use prompt::{build_translation_prompt, TRANSLATION_PROMPT};

use async_trait::async_trait;

use crate::error::RecipeError;

/// Unified trait for translation backends
#[async_trait]
pub trait TranslationService: Send + Sync {
    /// Get the provider name (e.g., "openai", "ollama")
    fn provider_name(&self) -> &str;

    /// Translate `text` into `target_language`.
    ///
    /// Returns the first completion, trimmed, without any other post-processing.
    async fn translate(&self, text: &str, target_language: &str) -> Result<String, RecipeError>;
}
