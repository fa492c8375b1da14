use thiserror::Error;

/// Errors that can occur while loading or querying the catalog.
///
/// A recipe id with no match is NOT an error; lookups return `Option` and the
/// caller renders a not-found state.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The dataset could not be deserialized
    #[error("Failed to read recipe data: {0}")]
    Data(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// A sort key string did not name a known sort
    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),

    /// A difficulty string did not name Easy, Medium, or Hard
    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),

    /// A time bucket string did not name quick, medium, or long
    #[error("Unknown time bucket: {0}")]
    UnknownTimeBucket(String),

    /// A skill level string did not name a known level
    #[error("Unknown skill level: {0}")]
    UnknownSkillLevel(String),

    /// A card variant string did not name a known variant
    #[error("Unknown card variant: {0}")]
    UnknownCardVariant(String),
}
