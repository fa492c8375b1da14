use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single recipe record.
///
/// Records are authored once in the bundled dataset and never mutated after
/// load. Field names follow the dataset's camelCase convention on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique identifier across the whole catalog.
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    /// Free-form duration string ("25 mins", "2 hours", "12 hours").
    /// Units are inconsistent across records; see `query::parse_prep_minutes`.
    pub prep_time: String,
    #[serde(default)]
    pub cook_time: Option<String>,
    pub servings: u32,
    pub calories: u32,
    /// 0.0 to 5.0.
    pub rating: f32,
    pub reviews: u32,
    pub tags: Vec<String>,
    pub difficulty: Difficulty,
    pub chef: String,
    #[serde(default)]
    pub category: Option<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    /// Nutrient name to display string. Empty when the record carries no
    /// nutrition facts; callers render a placeholder in that case.
    #[serde(default)]
    pub nutrition: BTreeMap<String, String>,
    #[serde(default)]
    pub premium: bool,
    #[serde(default)]
    pub trending: bool,
    #[serde(default)]
    pub is_new: bool,
    /// 0 (mild) to 5 (fiery), when the record declares one.
    #[serde(default)]
    pub heat_level: Option<u8>,
}

/// Recipe complexity, a closed three-level scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Fixed ascending rank: Easy < Medium < Hard.
    pub fn rank(self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = crate::error::CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Easy" | "easy" => Ok(Difficulty::Easy),
            "Medium" | "medium" => Ok(Difficulty::Medium),
            "Hard" | "hard" => Ok(Difficulty::Hard),
            other => Err(crate::error::CatalogError::UnknownDifficulty(
                other.to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_rank_is_ascending() {
        assert!(Difficulty::Easy.rank() < Difficulty::Medium.rank());
        assert!(Difficulty::Medium.rank() < Difficulty::Hard.rank());
    }

    #[test]
    fn difficulty_parses_display_names() {
        assert_eq!("Easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!("medium".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert!("Impossible".parse::<Difficulty>().is_err());
    }

    #[test]
    fn recipe_deserializes_with_optional_fields_absent() {
        let json = r#"{
            "id": "x-1",
            "title": "Test",
            "description": "d",
            "image": "i",
            "prepTime": "10 mins",
            "servings": 2,
            "calories": 100,
            "rating": 4.0,
            "reviews": 10,
            "tags": ["Vegetarian"],
            "difficulty": "Easy",
            "chef": "Someone",
            "ingredients": [],
            "instructions": []
        }"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert!(!recipe.premium);
        assert!(!recipe.trending);
        assert!(!recipe.is_new);
        assert!(recipe.heat_level.is_none());
        assert!(recipe.nutrition.is_empty());
        assert!(recipe.cook_time.is_none());
    }
}
