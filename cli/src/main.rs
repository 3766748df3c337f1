mod render;

use std::io::BufRead;

use anyhow::Result;
use clap::Parser;
use potluck_core::{
    ApiConfig, FetchState, GroceryPartition, Preferences, RecipeSession, ReqwestClient,
    SpoonacularClient,
};
use tracing_subscriber::EnvFilter;

const LONG_ABOUT: &str = "\
Discover your next food cravings with the roll of a dice!

Potluck fetches one random recipe, with detailed instructions, nutritional
information and a checklist for groceries. Customize the search by filtering
on diets, intolerances, and meal types (see --list-filters).";

#[derive(Parser)]
#[command(name = "potluck")]
#[command(about = "Fetch a random recipe matching your preferences")]
#[command(long_about = LONG_ABOUT)]
struct Cli {
    /// Diet filter, repeatable (e.g. vegan, ketogenic)
    #[arg(long = "diet", value_name = "DIET")]
    diets: Vec<String>,

    /// Intolerance filter, repeatable (e.g. gluten, peanut)
    #[arg(long = "intolerance", value_name = "INTOLERANCE")]
    intolerances: Vec<String>,

    /// Meal type (e.g. breakfast, dinner, snack)
    #[arg(long = "meal-type", value_name = "TYPE")]
    meal_type: Option<String>,

    /// After rendering, toggle grocery items interactively on stdin
    #[arg(long)]
    grocery: bool,

    /// List the supported meal types, diets and intolerances, then exit
    #[arg(long)]
    list_filters: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.list_filters {
        render::print_filters();
        return Ok(());
    }

    let config = ApiConfig::from_env()?;
    let http = ReqwestClient::new(config.timeout)?;
    let client = SpoonacularClient::new(Box::new(http), config);

    let mut session = RecipeSession::new();
    *session.preferences_mut() =
        Preferences::from_parts(cli.diets, cli.intolerances, cli.meal_type);

    println!("Fetching Recipe...");
    let state = session.run_fetch(&client).await.clone();
    if let FetchState::Failed(message) = state {
        anyhow::bail!("Heads Up: {}", message);
    }

    let Some(view) = session.view() else {
        anyhow::bail!("no recipe fetched");
    };

    render::recipe_header(&view.recipe);
    render::ingredients(&view.ingredients);
    render::instructions(&view.steps);
    render::nutrition(&view.nutrients);
    render::grocery(&view.partition);

    if cli.grocery {
        if let Some(view) = session.view_mut() {
            grocery_loop(&mut view.partition)?;
        }
    }

    Ok(())
}

/// Interactive grocery checklist: `have <name>` / `need <name>` toggle an
/// item, `list` reprints, `done` (or EOF) exits.
fn grocery_loop(partition: &mut GroceryPartition) -> Result<()> {
    println!("\nToggle items with 'have <name>' or 'need <name>'; 'list' reprints; 'done' exits.");
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();
        match input {
            "done" => break,
            "list" => {
                render::grocery(partition);
                continue;
            }
            "" => continue,
            _ => {}
        }
        if let Some(name) = input.strip_prefix("have ") {
            partition.mark_have(name.trim());
        } else if let Some(name) = input.strip_prefix("need ") {
            partition.mark_need(name.trim());
        } else {
            println!("unrecognized command: {}", input);
            continue;
        }
        render::grocery(partition);
    }
    Ok(())
}
