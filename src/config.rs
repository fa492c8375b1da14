use config::{Config, ConfigError, Environment, File};
use log::warn;
use serde::Deserialize;

use crate::query::SortKey;
use crate::score::{SkillLevel, TastePreferences};
use crate::view::CardVariant;

/// Catalog configuration: browse defaults and the taste profile the
/// personalization score is computed against.
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Default sort key for browse views ("popular", "rating", ...)
    #[serde(default = "default_sort")]
    pub default_sort: String,
    /// Default card variant ("default", "list", "compact")
    #[serde(default = "default_card_variant")]
    pub card_variant: String,
    /// Taste profile defaults
    #[serde(default)]
    pub preferences: PreferencesConfig,
}

/// Configured taste profile, before validation.
#[derive(Debug, Deserialize, Clone)]
pub struct PreferencesConfig {
    #[serde(default = "default_skill_level")]
    pub skill_level: String,
    #[serde(default = "default_dietary")]
    pub dietary_restrictions: Vec<String>,
    #[serde(default = "default_prefers_quick")]
    pub prefers_quick: bool,
}

impl Default for PreferencesConfig {
    fn default() -> Self {
        Self {
            skill_level: default_skill_level(),
            dietary_restrictions: default_dietary(),
            prefers_quick: default_prefers_quick(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_sort: default_sort(),
            card_variant: default_card_variant(),
            preferences: PreferencesConfig::default(),
        }
    }
}

// Default value functions
fn default_sort() -> String {
    "popular".to_string()
}

fn default_card_variant() -> String {
    "default".to_string()
}

fn default_skill_level() -> String {
    "intermediate".to_string()
}

fn default_dietary() -> Vec<String> {
    vec!["vegetarian".to_string()]
}

fn default_prefers_quick() -> bool {
    true
}

impl CatalogConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with CULINARY__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: CULINARY__PREFERENCES__SKILL_LEVEL
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            // Use double underscore for nested: CULINARY__PREFERENCES__SKILL_LEVEL
            .add_source(
                Environment::with_prefix("CULINARY")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// The configured sort key; an invalid value degrades to the default
    /// with a warning, it never fails the caller.
    pub fn sort_key(&self) -> SortKey {
        self.default_sort.parse().unwrap_or_else(|err| {
            warn!("ignoring configured sort: {err}");
            SortKey::Popular
        })
    }

    /// The configured card variant, degrading to `Default` when invalid.
    pub fn card_variant(&self) -> CardVariant {
        self.card_variant.parse().unwrap_or_else(|err| {
            warn!("ignoring configured card variant: {err}");
            CardVariant::Default
        })
    }

    /// The configured taste profile, degrading field-by-field when invalid.
    pub fn taste_preferences(&self) -> TastePreferences {
        let skill_level = self
            .preferences
            .skill_level
            .parse::<SkillLevel>()
            .unwrap_or_else(|err| {
                warn!("ignoring configured skill level: {err}");
                SkillLevel::Intermediate
            });
        TastePreferences {
            skill_level,
            dietary_restrictions: self
                .preferences
                .dietary_restrictions
                .iter()
                .map(|r| r.to_lowercase())
                .collect(),
            prefers_quick: self.preferences.prefers_quick,
        }
    }
}
