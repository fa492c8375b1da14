pub mod config;
pub mod error;
pub mod model;
pub mod query;
pub mod score;
pub mod session;
pub mod store;
pub mod view;

pub use config::CatalogConfig;
pub use error::CatalogError;
pub use model::{Difficulty, Recipe};
pub use query::{RecipeQuery, SearchCriteria, SortKey};
pub use score::{match_score, TastePreferences};
pub use session::SessionStore;
pub use store::{RecipeStore, Region, RegionalStats};
pub use view::{CardVariant, ViewController, ViewState};

use query::apply;

/// Find a recipe in the bundled catalog by id.
///
/// Absence is a normal outcome, not an error; callers render a not-found
/// state on `None`.
pub fn lookup_recipe(id: &str) -> Option<&'static Recipe> {
    RecipeStore::builtin().lookup(id)
}

/// Search the bundled catalog with a text query and the default sort.
///
/// An empty query returns the whole catalog ordered by popularity.
pub fn search_recipes(query: &str) -> Vec<&'static Recipe> {
    let criteria = SearchCriteria {
        text: query.to_string(),
        ..SearchCriteria::default()
    };
    apply(RecipeStore::builtin().recipes(), &criteria)
}

/// Personalization score for a bundled-catalog recipe against the configured
/// taste profile, or `None` for an unknown id.
pub fn personal_match(id: &str, prefs: &TastePreferences) -> Option<u8> {
    lookup_recipe(id).map(|recipe| match_score(recipe, prefs))
}
