use thiserror::Error;

/// Errors raised by the recipe catalog, the translation provider and setup
#[derive(Error, Debug)]
pub enum RecipeError {
    /// Transport or connectivity failure
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Remote answered with a non-success status code
    #[error("Unexpected HTTP status: {0}")]
    HttpStatus(u16),

    /// Body could not be decoded into the expected schema
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Catalog response parsed but held no recipes
    #[error("The recipe catalog returned no recipes")]
    EmptyCatalog,

    /// Provider response parsed but held no completion choices
    #[error("The translation provider returned no completion")]
    EmptyCompletion,

    /// Provider needs an API key that is not configured
    #[error("Missing API key: {0}")]
    MissingApiKey(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Builder or provider setup error
    #[error("Builder error: {0}")]
    Builder(String),
}

impl RecipeError {
    /// Status code for `HttpStatus` errors, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            RecipeError::HttpStatus(code) => Some(*code),
            _ => None,
        }
    }
}
