mod themealdb;

pub use themealdb::MealDbSource;

use async_trait::async_trait;

use crate::error::RecipeError;
use crate::model::Recipe;

/// A remote catalog that hands out one random recipe per call
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Get the catalog name (e.g., "themealdb")
    fn source_name(&self) -> &str;

    /// Fetch a single random recipe. Performs exactly one request and never retries.
    async fn fetch_random(&self) -> Result<Recipe, RecipeError>;
}
