//! Recipe domain types, decoupled from the wire models.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::api::model::{ExtendedIngredient, NutritionWidget};

/// A fetched recipe's header data.
///
/// Replaced wholesale on every successful fetch, never merged with a
/// previous recipe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u64,
    pub title: String,
    pub image_url: Option<String>,
    pub source_url: Option<String>,
}

/// A single ingredient as shown in the ingredient and grocery views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub amount: f64,
    pub unit: String,
}

impl Ingredient {
    /// Key for structural dedup; `f64` amounts compare by bit pattern.
    fn identity_key(&self) -> (String, u64, String) {
        (self.name.clone(), self.amount.to_bits(), self.unit.clone())
    }
}

impl From<ExtendedIngredient> for Ingredient {
    fn from(raw: ExtendedIngredient) -> Self {
        Self {
            name: raw.name,
            amount: raw.amount,
            unit: raw.unit,
        }
    }
}

/// Remove structurally identical duplicate entries, preserving
/// first-occurrence order.
///
/// Two entries sharing a name but differing in amount or unit are distinct
/// and both survive.
pub fn dedup_ingredients(raw: Vec<Ingredient>) -> Vec<Ingredient> {
    let mut seen = HashSet::new();
    raw.into_iter()
        .filter(|ingredient| seen.insert(ingredient.identity_key()))
        .collect()
}

/// Nutrition data for one recipe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutrientReport {
    pub total_calories: f64,
    pub nutrients: Vec<Nutrient>,
}

/// One nutrient row in the report, in the order the API returned it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Nutrient {
    pub name: String,
    pub amount: f64,
}

impl From<NutritionWidget> for NutrientReport {
    fn from(widget: NutritionWidget) -> Self {
        Self {
            total_calories: widget.calories,
            nutrients: widget
                .nutrients
                .into_iter()
                .map(|entry| Nutrient {
                    name: entry.name,
                    amount: entry.amount,
                })
                .collect(),
        }
    }
}

/// Everything one successful fetch produces, committed all-or-nothing.
#[derive(Debug, Clone)]
pub struct RecipeBundle {
    pub recipe: Recipe,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<String>,
    pub nutrients: NutrientReport,
}
