pub mod api;
pub mod config;
pub mod error;
pub mod grocery;
pub mod http;
pub mod preferences;
pub mod query;
pub mod recipe;
pub mod session;

pub use api::SpoonacularClient;
pub use config::ApiConfig;
pub use error::{ConfigError, FetchError, HttpError};
pub use grocery::GroceryPartition;
pub use http::{HttpClient, MockClient, MockResponse, ReqwestClient};
pub use preferences::{Preferences, DIETS, INTOLERANCES, MEAL_TYPES};
pub use query::{QueryBuilder, SearchQuery};
pub use recipe::{
    dedup_ingredients, Ingredient, Nutrient, NutrientReport, Recipe, RecipeBundle,
};
pub use session::{FetchState, FetchTicket, RecipeSession, RecipeView};
