use crate::catalog::RecipeSource;
use crate::config::CatalogConfig;
use crate::error::RecipeError;
use crate::http_client;
use crate::model::{MealResponse, Recipe};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;

const RANDOM_PATH: &str = "/api/json/v1/1/random.php";

pub struct MealDbSource {
    client: Client,
    base_url: String,
}

impl MealDbSource {
    /// Create a catalog client from configuration
    pub fn new(config: &CatalogConfig) -> Result<Self, RecipeError> {
        Ok(MealDbSource {
            client: http_client(config.timeout)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: String) -> Self {
        MealDbSource {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn random_url(&self) -> String {
        format!("{}{}", self.base_url, RANDOM_PATH)
    }
}

#[async_trait]
impl RecipeSource for MealDbSource {
    fn source_name(&self) -> &str {
        "themealdb"
    }

    async fn fetch_random(&self) -> Result<Recipe, RecipeError> {
        let url = self.random_url();
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RecipeError::HttpStatus(status.as_u16()));
        }

        let body = response.text().await?;
        debug!("{}", body);
        MealResponse::first_recipe(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn test_fetch_random() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/json/v1/1/random.php")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "meals": [{
                        "idMeal": "52959",
                        "strMeal": "Baked salmon with fennel & tomatoes",
                        "strCategory": "Seafood",
                        "strInstructions": "Heat oven to 180C/fan 160C/gas 4.",
                        "strMealThumb": "https://www.themealdb.com/images/media/meals/1548772327.jpg"
                    }]
                }"#,
            )
            .expect(1)
            .create();

        let source = MealDbSource::with_base_url(server.url());
        let recipe = source.fetch_random().await.unwrap();

        assert_eq!(recipe.id(), "52959");
        assert_eq!(recipe.name(), "Baked salmon with fennel & tomatoes");
        assert_eq!(recipe.category(), Some("Seafood"));
        mock.assert();
    }

    #[tokio::test]
    async fn test_fetch_random_empty_catalog() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/api/json/v1/1/random.php")
            .with_status(200)
            .with_body(r#"{"meals": null}"#)
            .create();

        let source = MealDbSource::with_base_url(server.url());
        let result = source.fetch_random().await;
        assert!(matches!(result, Err(RecipeError::EmptyCatalog)));
    }

    #[tokio::test]
    async fn test_fetch_random_malformed_body() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/api/json/v1/1/random.php")
            .with_status(200)
            .with_body("not json at all")
            .create();

        let source = MealDbSource::with_base_url(server.url());
        let result = source.fetch_random().await;
        assert!(matches!(result, Err(RecipeError::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn test_fetch_random_server_error() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/api/json/v1/1/random.php")
            .with_status(503)
            .with_body("Service Unavailable")
            .create();

        let source = MealDbSource::with_base_url(server.url());
        let result = source.fetch_random().await;
        assert!(matches!(result, Err(RecipeError::HttpStatus(503))));
    }

    #[tokio::test]
    async fn test_fetch_random_connection_refused() {
        // Nothing listens on port 1
        let source = MealDbSource::with_base_url("http://127.0.0.1:1".to_string());
        let result = source.fetch_random().await;
        assert!(matches!(result, Err(RecipeError::Network(_))));
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let source = MealDbSource::with_base_url("https://www.themealdb.com/".to_string());
        assert_eq!(
            source.random_url(),
            "https://www.themealdb.com/api/json/v1/1/random.php"
        );
    }

    #[test]
    fn test_new_from_config() {
        let config = CatalogConfig {
            base_url: "https://mirror.example.com".to_string(),
            timeout: Some(5),
        };
        let source = MealDbSource::new(&config).unwrap();
        assert_eq!(source.source_name(), "themealdb");
        assert!(source.random_url().starts_with("https://mirror.example.com/"));
    }
}
