//! Decorative personalization score.
//!
//! A fixed-weight heuristic shown on recipe cards as a "personal match"
//! percentage. Nothing is learned or persisted; the only guarantees are that
//! it never panics and stays inside 0..=100.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CatalogError;
use crate::model::{Difficulty, Recipe};
use crate::query::parse_prep_minutes;

/// Self-reported cooking skill, matched one-to-one against [`Difficulty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    fn matches(self, difficulty: Difficulty) -> bool {
        matches!(
            (self, difficulty),
            (SkillLevel::Beginner, Difficulty::Easy)
                | (SkillLevel::Intermediate, Difficulty::Medium)
                | (SkillLevel::Advanced, Difficulty::Hard)
        )
    }
}

impl FromStr for SkillLevel {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(SkillLevel::Beginner),
            "intermediate" => Ok(SkillLevel::Intermediate),
            "advanced" => Ok(SkillLevel::Advanced),
            other => Err(CatalogError::UnknownSkillLevel(other.to_string())),
        }
    }
}

/// The preference profile the score is computed against.
///
/// `Default` mirrors the profile the original card used when no stored
/// preferences existed: an intermediate cook who favors quick vegetarian
/// recipes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TastePreferences {
    pub skill_level: SkillLevel,
    /// Lowercase tag keywords ("vegetarian", "vegan").
    pub dietary_restrictions: Vec<String>,
    /// Whether recipes at 30 minutes or under earn the time bonus.
    pub prefers_quick: bool,
}

impl Default for TastePreferences {
    fn default() -> Self {
        Self {
            skill_level: SkillLevel::Intermediate,
            dietary_restrictions: vec!["vegetarian".to_string()],
            prefers_quick: true,
        }
    }
}

/// Compute the 0-100 match score for a recipe.
///
/// Point values are fixed: +30 difficulty matches skill, +25 any tag equals a
/// dietary restriction (case-insensitive), +20 parsed prep time <= 30 when
/// quick cooking is preferred, +15 rating >= 4.5, +10 trending. The sum is
/// clamped to 0..=100.
pub fn match_score(recipe: &Recipe, prefs: &TastePreferences) -> u8 {
    let mut score: u32 = 0;

    if prefs.skill_level.matches(recipe.difficulty) {
        score += 30;
    }

    // Exact tag equality after lowercasing, not substring: "Non-Vegetarian"
    // must not earn the "vegetarian" bonus.
    if recipe.tags.iter().any(|tag| {
        let tag = tag.to_lowercase();
        prefs.dietary_restrictions.iter().any(|r| *r == tag)
    }) {
        score += 25;
    }

    if prefs.prefers_quick {
        if let Some(minutes) = parse_prep_minutes(&recipe.prep_time) {
            if minutes <= 30 {
                score += 20;
            }
        }
    }

    if recipe.rating >= 4.5 {
        score += 15;
    }

    if recipe.trending {
        score += 10;
    }

    score.min(100) as u8
}
