//! User preference state and the fixed filter vocabularies.

use serde::{Deserialize, Serialize};

/// Meal types offered by the preferences UI.
pub const MEAL_TYPES: &[&str] = &[
    "breakfast",
    "lunch",
    "dinner",
    "snack",
    "dessert",
    "cocktail",
    "mocktail",
    "drink",
];

/// Diets offered by the preferences UI.
pub const DIETS: &[&str] = &[
    "vegan",
    "vegetarian",
    "lacto-vegetarian",
    "ovo-vegetarian",
    "ketogenic",
    "paleo",
    "pescetarian",
];

/// Intolerances offered by the preferences UI.
pub const INTOLERANCES: &[&str] = &[
    "dairy",
    "egg",
    "gluten",
    "grain",
    "peanut",
    "seafood",
    "shellfish",
    "sesame",
    "soy",
    "wheat",
];

/// Dietary filters driving the recipe search.
///
/// The vocabularies above are advisory only: values are passed through to
/// the search query without validation. Each field is mutated only by an
/// explicit user action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    diets: Vec<String>,
    intolerances: Vec<String>,
    meal_type: Option<String>,
}

impl Preferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble preferences in one go, e.g. from CLI flags.
    pub fn from_parts(
        diets: Vec<String>,
        intolerances: Vec<String>,
        meal_type: Option<String>,
    ) -> Self {
        Self {
            diets,
            intolerances,
            meal_type,
        }
    }

    /// Checkbox semantics: add the diet if absent, remove it if present.
    pub fn toggle_diet(&mut self, diet: &str) {
        Self::toggle(&mut self.diets, diet);
    }

    /// Checkbox semantics: add the intolerance if absent, remove it if present.
    pub fn toggle_intolerance(&mut self, intolerance: &str) {
        Self::toggle(&mut self.intolerances, intolerance);
    }

    /// Select or clear the meal type.
    pub fn set_meal_type(&mut self, meal_type: Option<String>) {
        self.meal_type = meal_type;
    }

    /// Selected diets, in insertion order.
    pub fn diets(&self) -> &[String] {
        &self.diets
    }

    /// Selected intolerances, in insertion order.
    pub fn intolerances(&self) -> &[String] {
        &self.intolerances
    }

    pub fn meal_type(&self) -> Option<&str> {
        self.meal_type.as_deref()
    }

    fn toggle(list: &mut Vec<String>, value: &str) {
        if let Some(pos) = list.iter().position(|v| v == value) {
            list.remove(pos);
        } else {
            list.push(value.to_string());
        }
    }
}
