//! Spoonacular client and the three-step fetch pipeline.

use crate::config::ApiConfig;
use crate::error::{FetchError, HttpError};
use crate::http::HttpClient;
use crate::query::SearchQuery;
use crate::recipe::{dedup_ingredients, Ingredient, NutrientReport, Recipe, RecipeBundle};

use super::model::{InstructionGroup, NutritionWidget, RecipeInformation, SearchResponse};

/// Client for the three Spoonacular endpoints the pipeline consumes.
pub struct SpoonacularClient {
    http: Box<dyn HttpClient>,
    config: ApiConfig,
}

impl SpoonacularClient {
    /// Create a client over the given HTTP implementation.
    pub fn new(http: Box<dyn HttpClient>, config: ApiConfig) -> Self {
        Self { http, config }
    }

    /// URL of the complex-search request for `query`.
    pub fn search_url(&self, query: &SearchQuery) -> String {
        let params: Vec<String> = query
            .params()
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .chain(std::iter::once(format!("apiKey={}", self.config.api_key)))
            .collect();
        format!(
            "{}/recipes/complexSearch?{}",
            self.config.base_url,
            params.join("&")
        )
    }

    /// URL of the recipe-information request for a recipe id.
    pub fn information_url(&self, id: u64) -> String {
        format!(
            "{}/recipes/{}/information?apiKey={}",
            self.config.base_url, id, self.config.api_key
        )
    }

    /// URL of the nutrition-widget request for a recipe id.
    pub fn nutrition_url(&self, id: u64) -> String {
        format!(
            "{}/recipes/{}/nutritionWidget.json?apiKey={}",
            self.config.base_url, id, self.config.api_key
        )
    }

    /// Run the full fetch pipeline for one search query.
    ///
    /// The three requests are strictly sequential: the information request
    /// needs the search hit's id, and the whole attempt is all-or-nothing.
    /// The first failure aborts it and nothing fetched so far is returned.
    pub async fn fetch_recipe(&self, query: &SearchQuery) -> Result<RecipeBundle, FetchError> {
        let recipe_id = self.search(query).await?;
        tracing::debug!(recipe_id, "pipeline: search hit");

        let info = self.information(recipe_id).await?;
        let RecipeInformation {
            id,
            title,
            image,
            source_url,
            extended_ingredients,
            analyzed_instructions,
        } = info;

        let steps = extract_steps(analyzed_instructions)?;
        let ingredients = dedup_ingredients(
            extended_ingredients
                .into_iter()
                .map(Ingredient::from)
                .collect(),
        );
        tracing::debug!(
            ingredients = ingredients.len(),
            steps = steps.len(),
            "pipeline: details loaded"
        );

        let nutrients = self.nutrition(recipe_id).await?;

        Ok(RecipeBundle {
            recipe: Recipe {
                id,
                title,
                image_url: image,
                source_url,
            },
            ingredients,
            steps,
            nutrients,
        })
    }

    async fn search(&self, query: &SearchQuery) -> Result<u64, FetchError> {
        let url = self.search_url(query);
        let body = self
            .http
            .get(&url)
            .await
            .map_err(|err| step_error(err, FetchError::SearchFailed))?;
        let response: SearchResponse = serde_json::from_str(&body)
            .map_err(|err| FetchError::SearchFailed(format!("malformed payload: {}", err)))?;
        match response.results.first() {
            Some(hit) => Ok(hit.id),
            None => {
                tracing::warn!("search returned no results");
                Err(FetchError::SearchFailed("empty result set".to_string()))
            }
        }
    }

    async fn information(&self, id: u64) -> Result<RecipeInformation, FetchError> {
        let url = self.information_url(id);
        let body = self
            .http
            .get(&url)
            .await
            .map_err(|err| step_error(err, FetchError::DetailsFailed))?;
        serde_json::from_str(&body)
            .map_err(|err| FetchError::DetailsFailed(format!("malformed payload: {}", err)))
    }

    async fn nutrition(&self, id: u64) -> Result<NutrientReport, FetchError> {
        let url = self.nutrition_url(id);
        let body = self
            .http
            .get(&url)
            .await
            .map_err(|err| step_error(err, FetchError::NutrientsFailed))?;
        let widget: NutritionWidget = serde_json::from_str(&body)
            .map_err(|err| FetchError::NutrientsFailed(format!("malformed payload: {}", err)))?;
        Ok(NutrientReport::from(widget))
    }
}

/// Map an HTTP-layer failure to the step's fetch error. Transport failures
/// stay transport failures regardless of step.
fn step_error(err: HttpError, wrap: fn(String) -> FetchError) -> FetchError {
    match err {
        HttpError::Unreachable(message) => FetchError::NetworkUnreachable(message),
        HttpError::Status(status) => wrap(format!("HTTP status {}", status)),
    }
}

/// The first instruction group's step texts.
fn extract_steps(groups: Vec<InstructionGroup>) -> Result<Vec<String>, FetchError> {
    let steps: Vec<String> = groups
        .into_iter()
        .next()
        .map(|group| group.steps.into_iter().map(|s| s.step).collect())
        .unwrap_or_default();
    if steps.is_empty() {
        return Err(FetchError::NoInstructions);
    }
    Ok(steps)
}
