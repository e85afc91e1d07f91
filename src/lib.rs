//! Recipe browser core.
//!
//! Fetches recipes from a remote JSON API, parses free-text ingredient
//! lines into structured `(quantity, unit, name)` records, rescales
//! quantities when the serving count changes, and maintains a shopping
//! list and a persisted list of liked recipes.
//!
//! The parser is total: any line, however malformed, yields exactly one
//! [`ParsedIngredient`], degrading to `{1.0, "", <line>}` when nothing
//! better can be made of it.
//!
//! ```
//! let ing = souschef::ingredient::parse_line("2 tablespoons olive oil");
//! assert_eq!(ing.quantity, 2.0);
//! assert_eq!(ing.unit, "tbsp");
//! assert_eq!(ing.name, "olive oil");
//! ```

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod ingredient;
pub mod likes;
pub mod list;
pub mod model;
pub mod scale;

pub use api::RecipeClient;
pub use app::{App, Command};
pub use config::AppConfig;
pub use error::SousChefError;
pub use likes::Likes;
pub use list::{ShoppingItem, ShoppingList};
pub use model::{Like, ParsedIngredient, Recipe, RecipeSummary};
pub use scale::{rescale, ServingChange};
