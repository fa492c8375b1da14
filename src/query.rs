//! The filter / search / sort pipeline over the recipe collection.
//!
//! The pipeline is a pure function: it never mutates its input and produces a
//! freshly ordered view. Criteria that reference a field a record does not
//! carry simply fail to match that record; nothing in here errors or panics.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::CatalogError;
use crate::model::{Difficulty, Recipe};
use crate::store::RecipeStore;

/// Difficulty criterion: everything, or exactly one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DifficultyFilter {
    #[default]
    All,
    Only(Difficulty),
}

impl DifficultyFilter {
    fn matches(self, recipe: &Recipe) -> bool {
        match self {
            DifficultyFilter::All => true,
            DifficultyFilter::Only(level) => recipe.difficulty == level,
        }
    }
}

impl FromStr for DifficultyFilter {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(DifficultyFilter::All)
        } else {
            s.parse().map(DifficultyFilter::Only)
        }
    }
}

/// Prep-time criterion, bucketed on the leading integer of `prep_time`.
///
/// The parse is best-effort: "2 hours" reads as 2 minutes and lands in
/// `Quick`. This mirrors the source data's behavior and is pinned by tests;
/// fixing it would change which records the time filter returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeFilter {
    #[default]
    All,
    /// 30 minutes or under.
    Quick,
    /// 31 to 60 minutes.
    Medium,
    /// Over 60 minutes.
    Long,
}

impl TimeFilter {
    fn matches(self, recipe: &Recipe) -> bool {
        if self == TimeFilter::All {
            return true;
        }
        // A prep time with no leading integer never matches a bucket.
        let Some(minutes) = parse_prep_minutes(&recipe.prep_time) else {
            return false;
        };
        match self {
            TimeFilter::All => true,
            TimeFilter::Quick => minutes <= 30,
            TimeFilter::Medium => minutes > 30 && minutes <= 60,
            TimeFilter::Long => minutes > 60,
        }
    }
}

impl FromStr for TimeFilter {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(TimeFilter::All),
            "quick" => Ok(TimeFilter::Quick),
            "medium" => Ok(TimeFilter::Medium),
            "long" => Ok(TimeFilter::Long),
            other => Err(CatalogError::UnknownTimeBucket(other.to_string())),
        }
    }
}

/// Sort applied after filtering.
///
/// All sorts are stable (`slice::sort_by`), so records that compare equal
/// keep their filtered order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Descending by review count (the default).
    #[default]
    Popular,
    /// Descending by rating.
    Rating,
    /// Ascending by the leading-integer prep-time parse; unparseable last.
    Time,
    /// Ascending by difficulty rank (Easy < Medium < Hard).
    Difficulty,
    /// Lexicographic ascending on title.
    Name,
    /// Lexicographic ascending on chef.
    Chef,
}

impl SortKey {
    fn compare(self, a: &Recipe, b: &Recipe) -> Ordering {
        match self {
            SortKey::Popular => b.reviews.cmp(&a.reviews),
            SortKey::Rating => b.rating.total_cmp(&a.rating),
            SortKey::Time => {
                let (ta, tb) = (
                    parse_prep_minutes(&a.prep_time),
                    parse_prep_minutes(&b.prep_time),
                );
                // None sorts after every parsed value.
                match (ta, tb) {
                    (Some(ta), Some(tb)) => ta.cmp(&tb),
                    (Some(_), None) => Ordering::Less,
                    (None, Some(_)) => Ordering::Greater,
                    (None, None) => Ordering::Equal,
                }
            }
            SortKey::Difficulty => a.difficulty.rank().cmp(&b.difficulty.rank()),
            SortKey::Name => a.title.cmp(&b.title),
            SortKey::Chef => a.chef.cmp(&b.chef),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Popular => "popular",
            SortKey::Rating => "rating",
            SortKey::Time => "time",
            SortKey::Difficulty => "difficulty",
            SortKey::Name => "name",
            SortKey::Chef => "chef",
        }
    }
}

impl FromStr for SortKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "popular" => Ok(SortKey::Popular),
            "rating" => Ok(SortKey::Rating),
            "time" => Ok(SortKey::Time),
            "difficulty" => Ok(SortKey::Difficulty),
            "name" => Ok(SortKey::Name),
            "chef" => Ok(SortKey::Chef),
            other => Err(CatalogError::UnknownSortKey(other.to_string())),
        }
    }
}

/// The full criteria set for one pipeline run. `Default` is all no-ops plus
/// the default (popular) sort, which passes the collection through unchanged
/// apart from ordering.
#[derive(Debug, Clone, Default)]
pub struct SearchCriteria {
    /// Case-insensitive substring against title, description, any tag, chef.
    /// Empty passes everything.
    pub text: String,
    pub difficulty: DifficultyFilter,
    pub time: TimeFilter,
    /// Case-insensitive substring against any tag. Empty passes everything.
    pub diet: String,
    pub sort: SortKey,
}

impl SearchCriteria {
    fn matches(&self, recipe: &Recipe) -> bool {
        if !self.text.is_empty() && !matches_text(recipe, &self.text) {
            return false;
        }
        if !self.difficulty.matches(recipe) {
            return false;
        }
        if !self.time.matches(recipe) {
            return false;
        }
        if !self.diet.is_empty() {
            let needle = self.diet.to_lowercase();
            if !recipe
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle))
            {
                return false;
            }
        }
        true
    }
}

fn matches_text(recipe: &Recipe, query: &str) -> bool {
    let needle = query.to_lowercase();
    recipe.title.to_lowercase().contains(&needle)
        || recipe.description.to_lowercase().contains(&needle)
        || recipe
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&needle))
        || recipe.chef.to_lowercase().contains(&needle)
}

/// Run the pipeline over any sequence of recipes: filter in criteria order,
/// then stable-sort by the criteria's sort key.
pub fn apply<'a, I>(recipes: I, criteria: &SearchCriteria) -> Vec<&'a Recipe>
where
    I: IntoIterator<Item = &'a Recipe>,
{
    let mut filtered: Vec<&Recipe> = recipes
        .into_iter()
        .filter(|r| criteria.matches(r))
        .collect();
    filtered.sort_by(|a, b| criteria.sort.compare(a, b));
    filtered
}

/// Extract the leading run of decimal digits from a free-form duration
/// string, as minutes.
///
/// "25 mins" -> 25, "1 hour" -> 1, "overnight" -> None. Unit suffixes are
/// ignored, which is the known mis-bucketing quirk described on
/// [`TimeFilter`].
pub fn parse_prep_minutes(prep_time: &str) -> Option<u32> {
    let digits: String = prep_time
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Builder-style front end for the pipeline.
///
/// ```
/// use culinary_catalog::{query::SortKey, RecipeQuery, RecipeStore};
///
/// let store = RecipeStore::builtin();
/// let hits = RecipeQuery::new().text("dosa").sort(SortKey::Rating).run(store);
/// assert!(hits.iter().all(|r| r.title.to_lowercase().contains("dosa")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecipeQuery {
    criteria: SearchCriteria,
}

impl RecipeQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, query: impl Into<String>) -> Self {
        self.criteria.text = query.into();
        self
    }

    pub fn difficulty(mut self, level: Difficulty) -> Self {
        self.criteria.difficulty = DifficultyFilter::Only(level);
        self
    }

    pub fn time(mut self, bucket: TimeFilter) -> Self {
        self.criteria.time = bucket;
        self
    }

    pub fn diet(mut self, keyword: impl Into<String>) -> Self {
        self.criteria.diet = keyword.into();
        self
    }

    pub fn sort(mut self, key: SortKey) -> Self {
        self.criteria.sort = key;
        self
    }

    pub fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }

    /// Execute against a store.
    pub fn run<'a>(&self, store: &'a RecipeStore) -> Vec<&'a Recipe> {
        apply(store.recipes(), &self.criteria)
    }

    /// Execute against an arbitrary recipe sequence (a region slice, say).
    pub fn run_on<'a, I>(&self, recipes: I) -> Vec<&'a Recipe>
    where
        I: IntoIterator<Item = &'a Recipe>,
    {
        apply(recipes, &self.criteria)
    }
}

/// Criteria as they arrive from config or a query string, before validation.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawCriteria {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub diet: String,
    #[serde(default)]
    pub sort: Option<String>,
}

impl TryFrom<RawCriteria> for SearchCriteria {
    type Error = CatalogError;

    fn try_from(raw: RawCriteria) -> Result<Self, Self::Error> {
        Ok(SearchCriteria {
            text: raw.text,
            difficulty: match raw.difficulty.as_deref() {
                None => DifficultyFilter::All,
                Some(s) => s.parse()?,
            },
            time: match raw.time.as_deref() {
                None => TimeFilter::All,
                Some(s) => s.parse()?,
            },
            diet: raw.diet,
            sort: match raw.sort.as_deref() {
                None => SortKey::Popular,
                Some(s) => s.parse()?,
            },
        })
    }
}
