//! Search-query derivation from preferences.

use crate::preferences::Preferences;

/// Parameters for one random-recipe search request.
///
/// Always requests exactly one random result. The filter parameters appear
/// only when the corresponding preference is set; list values are
/// comma-joined in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    params: Vec<(&'static str, String)>,
}

impl SearchQuery {
    /// Derive the query for the given preferences. Pure and deterministic.
    pub fn for_preferences(prefs: &Preferences) -> Self {
        let mut params = vec![
            ("number", "1".to_string()),
            ("sort", "random".to_string()),
        ];
        if let Some(meal_type) = prefs.meal_type().filter(|m| !m.is_empty()) {
            params.push(("type", meal_type.to_string()));
        }
        if !prefs.diets().is_empty() {
            params.push(("diet", prefs.diets().join(",")));
        }
        if !prefs.intolerances().is_empty() {
            params.push(("intolerances", prefs.intolerances().join(",")));
        }
        Self { params }
    }

    /// The query parameters, in the order they are sent.
    pub fn params(&self) -> &[(&'static str, String)] {
        &self.params
    }
}

/// Memoizes the derived query on the full preference triple.
///
/// The derivation itself is cheap; memoizing only avoids redundant
/// query-string construction when no preference field changed.
#[derive(Debug)]
pub struct QueryBuilder {
    last_prefs: Option<Preferences>,
    query: SearchQuery,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self {
            last_prefs: None,
            query: SearchQuery::for_preferences(&Preferences::default()),
        }
    }

    /// Return the query for `prefs`, rebuilding only when they changed.
    pub fn query_for(&mut self, prefs: &Preferences) -> &SearchQuery {
        if self.last_prefs.as_ref() != Some(prefs) {
            self.query = SearchQuery::for_preferences(prefs);
            self.last_prefs = Some(prefs.clone());
        }
        &self.query
    }
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
