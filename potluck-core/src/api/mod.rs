//! Spoonacular API boundary: typed payload models and the client that runs
//! the three-step fetch pipeline over them.

mod client;
pub mod model;

pub use client::SpoonacularClient;
