//! Application context and command dispatch.
//!
//! Session state lives in one [`App`] value and changes only through
//! [`App::dispatch`]; there is no ambient global state. Each [`Command`]
//! corresponds to one user action in the browser UI.

use std::path::Path;
use std::time::Duration;

use log::info;

use crate::api::RecipeClient;
use crate::config::AppConfig;
use crate::error::SousChefError;
use crate::likes::Likes;
use crate::list::ShoppingList;
use crate::model::{Like, Recipe, RecipeSummary};
use crate::scale::ServingChange;

/// A user action, decoupled from whatever UI produced it.
#[derive(Debug, Clone)]
pub enum Command {
    /// Run a free-text search and remember the results
    Search(String),
    /// Fetch a recipe by id and make it the current one
    OpenRecipe(String),
    /// One more serving, quantities rescaled
    IncreaseServings,
    /// One less serving, floored at 1
    DecreaseServings,
    /// Copy the current recipe's ingredients onto the shopping list
    AddToList,
    /// Drop a shopping list item
    DeleteListItem(u64),
    /// Set a shopping list item's quantity
    UpdateListItem(u64, f64),
    /// Like the current recipe, or unlike it if already liked
    ToggleLike,
}

/// The whole browsing session: API client plus mutable state.
pub struct App {
    client: RecipeClient,
    search_results: Vec<RecipeSummary>,
    current_recipe: Option<Recipe>,
    shopping_list: ShoppingList,
    likes: Likes,
}

impl App {
    /// Build an app from configuration, restoring persisted likes.
    pub fn new(config: &AppConfig) -> Result<Self, SousChefError> {
        let client = RecipeClient::new(&config.api_base_url, Duration::from_secs(config.timeout))?;
        let likes = Likes::load(Path::new(&config.likes_path))?;
        Ok(Self::with_parts(client, likes))
    }

    /// Build an app from already-constructed parts. Used by tests to
    /// point the client at a mock server and keep likes off disk.
    pub fn with_parts(client: RecipeClient, likes: Likes) -> Self {
        Self {
            client,
            search_results: Vec::new(),
            current_recipe: None,
            shopping_list: ShoppingList::new(),
            likes,
        }
    }

    /// Apply one command to the session state.
    pub fn dispatch(&mut self, command: Command) -> Result<(), SousChefError> {
        match command {
            Command::Search(query) => {
                self.search_results = self.client.search(&query)?;
                info!("search {query:?}: {} results", self.search_results.len());
                Ok(())
            }
            Command::OpenRecipe(id) => {
                let recipe = self.client.get_recipe(&id)?;
                info!("opened recipe {id}: {}", recipe.title);
                self.current_recipe = Some(recipe);
                Ok(())
            }
            Command::IncreaseServings => {
                self.current_recipe_mut()?.update_servings(ServingChange::Increase);
                Ok(())
            }
            Command::DecreaseServings => {
                self.current_recipe_mut()?.update_servings(ServingChange::Decrease);
                Ok(())
            }
            Command::AddToList => {
                let recipe = self.current_recipe.as_ref().ok_or(SousChefError::NoRecipeOpen)?;
                self.shopping_list.add_ingredients(&recipe.ingredients);
                Ok(())
            }
            Command::DeleteListItem(id) => self.shopping_list.delete(id),
            Command::UpdateListItem(id, quantity) => {
                self.shopping_list.update_quantity(id, quantity)
            }
            Command::ToggleLike => {
                let recipe = self.current_recipe.as_ref().ok_or(SousChefError::NoRecipeOpen)?;
                if self.likes.is_liked(&recipe.id) {
                    self.likes.remove(&recipe.id)
                } else {
                    self.likes.add(Like::from(recipe))
                }
            }
        }
    }

    pub fn search_results(&self) -> &[RecipeSummary] {
        &self.search_results
    }

    pub fn current_recipe(&self) -> Option<&Recipe> {
        self.current_recipe.as_ref()
    }

    pub fn shopping_list(&self) -> &ShoppingList {
        &self.shopping_list
    }

    pub fn likes(&self) -> &Likes {
        &self.likes
    }

    fn current_recipe_mut(&mut self) -> Result<&mut Recipe, SousChefError> {
        self.current_recipe.as_mut().ok_or(SousChefError::NoRecipeOpen)
    }
}
