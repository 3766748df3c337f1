//! Fetch-state machine tying preferences, pipeline, and partition together.
//!
//! The original trigger-then-react flow is expressed here as an explicit
//! admit/complete cycle: [`RecipeSession::try_begin`] admits one attempt at
//! a time, and [`RecipeSession::complete`] applies its outcome only when no
//! newer attempt has superseded it.

use crate::api::SpoonacularClient;
use crate::error::FetchError;
use crate::grocery::GroceryPartition;
use crate::preferences::Preferences;
use crate::query::{QueryBuilder, SearchQuery};
use crate::recipe::{Ingredient, NutrientReport, Recipe, RecipeBundle};

/// Consolidated state of the fetch trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState {
    Idle,
    Loading,
    Success,
    Failed(String),
}

impl FetchState {
    /// Whether the trigger should be disabled.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// One fetched recipe plus the grocery partition seeded from it.
#[derive(Debug, Clone)]
pub struct RecipeView {
    pub recipe: Recipe,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<String>,
    pub nutrients: NutrientReport,
    pub partition: GroceryPartition,
}

impl From<RecipeBundle> for RecipeView {
    fn from(bundle: RecipeBundle) -> Self {
        let partition = GroceryPartition::new(bundle.ingredients.clone());
        Self {
            recipe: bundle.recipe,
            ingredients: bundle.ingredients,
            steps: bundle.steps,
            nutrients: bundle.nutrients,
            partition,
        }
    }
}

/// Proof that a fetch attempt was admitted.
///
/// Carries the generation deciding whether the outcome is still current on
/// completion, and the query the attempt must run. Deliberately not `Clone`:
/// one ticket, one completion.
#[derive(Debug)]
pub struct FetchTicket {
    generation: u64,
    query: SearchQuery,
}

impl FetchTicket {
    /// The query this attempt must run.
    pub fn query(&self) -> &SearchQuery {
        &self.query
    }
}

/// Everything the UI binds to: preferences, fetch state, and the most
/// recently fetched recipe view.
///
/// The view is only replaced on success; a failed attempt keeps the
/// previous recipe visible and records the failure message.
#[derive(Debug)]
pub struct RecipeSession {
    prefs: Preferences,
    queries: QueryBuilder,
    state: FetchState,
    generation: u64,
    view: Option<RecipeView>,
}

impl RecipeSession {
    pub fn new() -> Self {
        Self {
            prefs: Preferences::new(),
            queries: QueryBuilder::new(),
            state: FetchState::Idle,
            generation: 0,
            view: None,
        }
    }

    pub fn preferences(&self) -> &Preferences {
        &self.prefs
    }

    pub fn preferences_mut(&mut self) -> &mut Preferences {
        &mut self.prefs
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    /// The last successfully fetched view; survives failed attempts.
    pub fn view(&self) -> Option<&RecipeView> {
        self.view.as_ref()
    }

    /// Mutable access to the view, e.g. for grocery toggles.
    pub fn view_mut(&mut self) -> Option<&mut RecipeView> {
        self.view.as_mut()
    }

    /// Admit a new fetch attempt, or `None` while one is already loading
    /// (the disabled trigger). The query is derived from the current
    /// preferences, memoized on the full triple.
    pub fn try_begin(&mut self) -> Option<FetchTicket> {
        if self.state.is_loading() {
            return None;
        }
        self.generation += 1;
        self.state = FetchState::Loading;
        let query = self.queries.query_for(&self.prefs).clone();
        tracing::debug!(generation = self.generation, "fetch admitted");
        Some(FetchTicket {
            generation: self.generation,
            query,
        })
    }

    /// Replace whatever attempt is in flight: its outcome will be discarded
    /// and a fresh ticket is issued. Equivalent to `try_begin` when nothing
    /// is loading.
    pub fn supersede(&mut self) -> FetchTicket {
        self.generation += 1;
        self.state = FetchState::Loading;
        let query = self.queries.query_for(&self.prefs).clone();
        tracing::debug!(generation = self.generation, "in-flight fetch superseded");
        FetchTicket {
            generation: self.generation,
            query,
        }
    }

    /// Apply a fetch outcome. Outcomes of superseded tickets are discarded.
    ///
    /// Success replaces the whole view and re-seeds the grocery partition;
    /// failure keeps the previous view visible and records the message.
    pub fn complete(&mut self, ticket: FetchTicket, result: Result<RecipeBundle, FetchError>) {
        if ticket.generation != self.generation {
            tracing::debug!(
                stale = ticket.generation,
                current = self.generation,
                "discarding outcome of superseded fetch"
            );
            return;
        }
        match result {
            Ok(bundle) => {
                tracing::debug!(recipe_id = bundle.recipe.id, "fetch succeeded");
                self.view = Some(RecipeView::from(bundle));
                self.state = FetchState::Success;
            }
            Err(err) => {
                tracing::warn!(error = %err, "fetch failed");
                self.state = FetchState::Failed(err.to_string());
            }
        }
    }

    /// Run one complete fetch against `client`: admit, execute, apply.
    ///
    /// A refused trigger (already loading) leaves the state untouched.
    pub async fn run_fetch(&mut self, client: &SpoonacularClient) -> &FetchState {
        if let Some(ticket) = self.try_begin() {
            let result = client.fetch_recipe(ticket.query()).await;
            self.complete(ticket, result);
        }
        &self.state
    }
}

impl Default for RecipeSession {
    fn default() -> Self {
        Self::new()
    }
}
