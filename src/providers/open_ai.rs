use crate::config::TranslationConfig;
use crate::error::RecipeError;
use crate::http_client;
use crate::providers::{build_translation_prompt, TranslationService};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const OPENAI_BASE_URL: &str = "https://api.openai.com";
const OLLAMA_BASE_URL: &str = "http://localhost:11434";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
enum Role {
    System,
    User,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: Role,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    index: u32,
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    role: String,
    content: String,
}

/// Translator backed by an OpenAI-compatible `/v1/chat/completions` endpoint
pub struct OpenAITranslator {
    client: Client,
    provider_name: &'static str,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

impl OpenAITranslator {
    /// Create an OpenAI translator from configuration
    pub fn new(config: &TranslationConfig) -> Result<Self, RecipeError> {
        // Try config first, then fall back to environment variable
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("OPENAI_API_KEY").ok())
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                RecipeError::MissingApiKey(
                    "OPENAI_API_KEY not found in config or environment".to_string(),
                )
            })?;

        Ok(OpenAITranslator {
            client: http_client(config.timeout)?,
            provider_name: "openai",
            api_key: Some(api_key),
            base_url: base_url_or(config, OPENAI_BASE_URL),
            model: config.model.clone(),
        })
    }

    /// Create a translator for a local Ollama server, which speaks the same protocol
    pub fn ollama(config: &TranslationConfig) -> Result<Self, RecipeError> {
        Ok(OpenAITranslator {
            client: http_client(config.timeout)?,
            provider_name: "ollama",
            api_key: config.api_key.clone().filter(|key| !key.trim().is_empty()),
            base_url: base_url_or(config, OLLAMA_BASE_URL),
            model: config.model.clone(),
        })
    }

    /// Create a new OpenAI translator with simple parameters
    pub fn with_api_key(api_key: String, model: String) -> Self {
        Self::with_base_url(api_key, OPENAI_BASE_URL.to_string(), model)
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String, model: String) -> Self {
        OpenAITranslator {
            client: Client::new(),
            provider_name: "openai",
            api_key: Some(api_key),
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

fn base_url_or(config: &TranslationConfig, default: &str) -> String {
    config
        .base_url
        .as_deref()
        .unwrap_or(default)
        .trim_end_matches('/')
        .to_string()
}

#[async_trait]
impl TranslationService for OpenAITranslator {
    fn provider_name(&self) -> &str {
        self.provider_name
    }

    async fn translate(&self, text: &str, target_language: &str) -> Result<String, RecipeError> {
        let system_prompt = build_translation_prompt(target_language);
        let request = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: Role::System,
                    content: &system_prompt,
                },
                ChatMessage {
                    role: Role::User,
                    content: text,
                },
            ],
        };

        let mut builder = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .json(&request);
        if let Some(api_key) = &self.api_key {
            builder = builder.bearer_auth(api_key);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            debug!("{} answered {}", self.provider_name, status);
            return Err(RecipeError::HttpStatus(status.as_u16()));
        }

        let body = response.text().await?;
        debug!("{}", body);
        let decoded: ChatResponse = serde_json::from_str(&body)
            .map_err(|e| RecipeError::MalformedResponse(e.to_string()))?;

        let choice = decoded
            .choices
            .into_iter()
            .next()
            .ok_or(RecipeError::EmptyCompletion)?;
        debug!(
            "Using choice {} ({}) from {}",
            choice.index, choice.message.role, self.provider_name
        );

        Ok(choice.message.content.trim().to_string())
    }
}
