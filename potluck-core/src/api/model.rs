//! Typed Spoonacular payload models.
//!
//! Only the fields the pipeline consumes are modeled; everything else in
//! the payloads is ignored. Deserialization failures are mapped to the
//! fetch-error taxonomy by the client, per step.

use serde::Deserialize;

/// Response body of `GET /recipes/complexSearch`.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

/// One hit in a search response.
#[derive(Debug, Deserialize)]
pub struct SearchResult {
    pub id: u64,
}

/// Response body of `GET /recipes/{id}/information`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeInformation {
    pub id: u64,
    pub title: String,
    pub image: Option<String>,
    pub source_url: Option<String>,
    #[serde(default)]
    pub extended_ingredients: Vec<ExtendedIngredient>,
    #[serde(default)]
    pub analyzed_instructions: Vec<InstructionGroup>,
}

/// One raw ingredient record as produced by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtendedIngredient {
    pub name: String,
    pub amount: f64,
    pub unit: String,
}

/// One group of analyzed instructions. Only the first group's steps are
/// consumed.
#[derive(Debug, Deserialize)]
pub struct InstructionGroup {
    #[serde(default)]
    pub steps: Vec<InstructionStep>,
}

/// A single instruction step.
#[derive(Debug, Deserialize)]
pub struct InstructionStep {
    pub step: String,
}

/// Response body of `GET /recipes/{id}/nutritionWidget.json`.
#[derive(Debug, Deserialize)]
pub struct NutritionWidget {
    pub calories: f64,
    #[serde(default)]
    pub nutrients: Vec<NutrientEntry>,
}

/// One nutrient row in the nutrition widget.
#[derive(Debug, Clone, Deserialize)]
pub struct NutrientEntry {
    pub name: String,
    pub amount: f64,
}
