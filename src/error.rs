use thiserror::Error;

/// Errors that can occur while browsing recipes or persisting state.
///
/// Ingredient parsing is deliberately absent here: `ingredient::parse` is
/// total and degrades to a best-effort record instead of failing.
#[derive(Error, Debug)]
pub enum SousChefError {
    /// Failed to reach the recipe API
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("API returned status {0} for {1}")]
    ApiStatus(u16, String),

    /// A command needs a recipe but none is open
    #[error("No recipe is currently open")]
    NoRecipeOpen,

    /// Referenced shopping list item does not exist
    #[error("No shopping list item with id {0}")]
    UnknownListItem(u64),

    /// Reading or writing the likes file failed
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Likes file held something other than a list of likes
    #[error("Corrupt likes file: {0}")]
    CorruptStorage(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
