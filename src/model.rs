use serde::Deserialize;

use crate::error::RecipeError;

/// A single recipe from the catalog.
///
/// Values are only produced by decoding a catalog response, so the fields are
/// read through accessors and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    id: String,
    name: String,
    thumbnail_url: Option<String>,
    instructions: Option<String>,
    category: Option<String>,
}

impl Recipe {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn thumbnail_url(&self) -> Option<&str> {
        self.thumbnail_url.as_deref()
    }

    /// Cooking instructions in the catalog's language
    pub fn instructions(&self) -> Option<&str> {
        self.instructions.as_deref()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

/// Envelope returned by TheMealDB lookup endpoints.
///
/// `meals` is `null` when the catalog has nothing to return, but the key
/// itself must be present.
#[derive(Debug, Deserialize)]
pub struct MealResponse {
    #[serde(deserialize_with = "Option::deserialize")]
    pub meals: Option<Vec<MealRecord>>,
}

/// Raw catalog record. Only the fields the app uses are decoded.
#[derive(Debug, Deserialize)]
pub struct MealRecord {
    #[serde(rename = "idMeal")]
    pub id_meal: String,
    #[serde(rename = "strMeal")]
    pub str_meal: String,
    #[serde(rename = "strMealThumb", default)]
    pub str_meal_thumb: Option<String>,
    #[serde(rename = "strInstructions", default)]
    pub str_instructions: Option<String>,
    #[serde(rename = "strCategory", default)]
    pub str_category: Option<String>,
}

impl MealResponse {
    /// Decode a raw catalog body and take its first recipe
    pub fn first_recipe(body: &str) -> Result<Recipe, RecipeError> {
        let response: MealResponse = serde_json::from_str(body)
            .map_err(|e| RecipeError::MalformedResponse(e.to_string()))?;

        response
            .meals
            .and_then(|meals| meals.into_iter().next())
            .map(Recipe::from)
            .ok_or(RecipeError::EmptyCatalog)
    }
}

impl From<MealRecord> for Recipe {
    fn from(record: MealRecord) -> Self {
        Recipe {
            id: record.id_meal,
            name: record.str_meal,
            thumbnail_url: non_blank(record.str_meal_thumb),
            instructions: non_blank(record.str_instructions),
            category: non_blank(record.str_category),
        }
    }
}

// The catalog sends "" for missing values about as often as null.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
impl Recipe {
    pub(crate) fn sample(instructions: Option<&str>) -> Self {
        Recipe {
            id: "52772".to_string(),
            name: "Teriyaki Chicken Casserole".to_string(),
            thumbnail_url: Some(
                "https://www.themealdb.com/images/media/meals/wvpsxx1468256321.jpg".to_string(),
            ),
            instructions: instructions.map(String::from),
            category: Some("Chicken".to_string()),
        }
    }
}
