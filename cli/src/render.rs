//! Text renderings of the four recipe views.

use potluck_core::{
    GroceryPartition, Ingredient, NutrientReport, Recipe, DIETS, INTOLERANCES, MEAL_TYPES,
};

const BAR_WIDTH: usize = 40;

pub fn print_filters() {
    println!("Meal types: {}", MEAL_TYPES.join(", "));
    println!("Diets: {}", DIETS.join(", "));
    println!("Intolerances: {}", INTOLERANCES.join(", "));
}

pub fn recipe_header(recipe: &Recipe) {
    println!("\n== {} ==", recipe.title);
    if let Some(url) = &recipe.source_url {
        println!("Source: {}", url);
    }
}

pub fn ingredients(ingredients: &[Ingredient]) {
    println!("\nIngredients:");
    for ingredient in ingredients {
        println!(
            "  {} - {:.2} {}",
            ingredient.name, ingredient.amount, ingredient.unit
        );
    }
}

pub fn instructions(steps: &[String]) {
    println!("\nInstructions:");
    for (index, step) in steps.iter().enumerate() {
        println!("  {}. {}", index + 1, step);
    }
}

pub fn grocery(partition: &GroceryPartition) {
    println!("\nCheck List:");
    for ingredient in partition.ingredients() {
        let mark = if partition.is_in_hand(&ingredient.name) {
            "x"
        } else {
            " "
        };
        println!("  [{}] {}", mark, ingredient.name);
    }
    println!("Grocery List:");
    for item in partition.to_buy() {
        println!("  {} ({} {})", item.name, item.amount, item.unit);
    }
}

/// Proportional text bar chart; amounts are shown as whole numbers, like
/// the original widget labels them.
pub fn nutrition(report: &NutrientReport) {
    println!("\nTotal Calories: {}", report.total_calories as i64);
    let max = report
        .nutrients
        .iter()
        .map(|n| n.amount)
        .fold(0.0_f64, f64::max);
    for nutrient in &report.nutrients {
        let label = format!("{}(g)", nutrient.name);
        let width = if max > 0.0 {
            ((nutrient.amount / max) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        println!(
            "  {:<20} {:<width$} {}",
            label,
            "#".repeat(width),
            nutrient.amount as i64,
            width = BAR_WIDTH
        );
    }
}
