use std::collections::HashSet;
use std::sync::OnceLock;

use log::debug;
use serde::Deserialize;

use crate::error::CatalogError;
use crate::model::Recipe;

/// A named grouping of recipes used for browsing (a region or collection
/// such as "Tamil Nadu" or "Festive Favourites").
#[derive(Debug, Clone, Deserialize)]
pub struct Region {
    pub name: String,
    pub recipes: Vec<Recipe>,
}

/// The full recipe collection, partitioned into ordered regions.
///
/// The store is read-only for the life of the process: it is built once from
/// the bundled dataset (or caller-supplied JSON) and never mutated.
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeStore {
    regions: Vec<Region>,
}

static BUILTIN: OnceLock<RecipeStore> = OnceLock::new();

impl RecipeStore {
    /// The bundled catalog, deserialized on first access.
    ///
    /// The dataset ships inside the binary; a malformed dataset is a build
    /// defect, so this panics rather than surfacing an error to every caller.
    pub fn builtin() -> &'static RecipeStore {
        BUILTIN.get_or_init(|| {
            RecipeStore::from_json(include_str!("../data/recipes.json"))
                .expect("bundled recipe dataset is valid")
        })
    }

    /// Build a store from a JSON document of the bundled dataset's shape.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let store: RecipeStore = serde_json::from_str(json)?;
        debug!(
            "loaded {} recipes across {} regions",
            store.len(),
            store.regions.len()
        );
        debug_assert!(store.ids_are_unique(), "duplicate recipe id in dataset");
        Ok(store)
    }

    /// Find a recipe by id: a linear scan over the concatenation of all
    /// region sub-collections, first match wins. Absence is a normal outcome.
    pub fn lookup(&self, id: &str) -> Option<&Recipe> {
        let found = self.recipes().find(|r| r.id == id);
        if found.is_none() {
            debug!("no recipe with id {id:?}");
        }
        found
    }

    /// Every recipe, in region order.
    pub fn recipes(&self) -> impl Iterator<Item = &Recipe> + '_ {
        self.regions.iter().flat_map(|region| region.recipes.iter())
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn region(&self, name: &str) -> Option<&Region> {
        self.regions.iter().find(|region| region.name == name)
    }

    pub fn len(&self) -> usize {
        self.regions.iter().map(|region| region.recipes.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.iter().all(|region| region.recipes.is_empty())
    }

    /// Recipes carrying the trending flag, in region order.
    pub fn trending(&self) -> Vec<&Recipe> {
        self.recipes().filter(|r| r.trending).collect()
    }

    /// Recipes marked as new additions.
    pub fn newly_added(&self) -> Vec<&Recipe> {
        self.recipes().filter(|r| r.is_new).collect()
    }

    /// Recipes in a meal category ("breakfast", "main", "snack", "dessert").
    pub fn by_category(&self, category: &str) -> Vec<&Recipe> {
        self.recipes()
            .filter(|r| r.category.as_deref() == Some(category))
            .collect()
    }

    /// Aggregate stats over the catalog, for the browse header.
    pub fn stats(&self) -> RegionalStats {
        let total = self.len();
        let avg_rating = if total == 0 {
            0.0
        } else {
            self.recipes().map(|r| r.rating as f64).sum::<f64>() / total as f64
        };
        // Chef with the most recipes; first in catalog order wins ties.
        let mut counts: Vec<(&str, usize)> = Vec::new();
        for recipe in self.recipes() {
            match counts.iter_mut().find(|(chef, _)| *chef == recipe.chef) {
                Some((_, n)) => *n += 1,
                None => counts.push((&recipe.chef, 1)),
            }
        }
        let top_chef = counts
            .iter()
            .fold(None::<(&str, usize)>, |best, &(chef, n)| match best {
                Some((_, m)) if m >= n => best,
                _ => Some((chef, n)),
            })
            .map(|(chef, _)| chef.to_string())
            .unwrap_or_default();

        RegionalStats {
            total_recipes: total,
            avg_rating,
            top_chef,
        }
    }

    fn ids_are_unique(&self) -> bool {
        let mut seen = HashSet::new();
        self.recipes().all(|r| seen.insert(r.id.as_str()))
    }
}

/// Catalog-wide aggregates shown on the browse view.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionalStats {
    pub total_recipes: usize,
    pub avg_rating: f64,
    pub top_chef: String,
}
