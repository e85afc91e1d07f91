//! Client for the remote recipe API.
//!
//! The API serves plain JSON: `/search?q=...` returns summaries and
//! `/get?rId=...` returns one recipe whose ingredients are free-text
//! lines. Ingredients are parsed into structured records as part of the
//! fetch, so callers only ever see [`Recipe`] with parsed ingredients.

use std::time::Duration;

use log::debug;
use reqwest::blocking::{Client, Response};
use serde::Deserialize;

use crate::error::SousChefError;
use crate::ingredient;
use crate::model::{Recipe, RecipeSummary};

const USER_AGENT: &str = "Mozilla/5.0 (compatible; SousChef/0.3)";

pub struct RecipeClient {
    base_url: String,
    client: Client,
}

impl RecipeClient {
    /// Build a client for the API at `base_url` (no trailing slash needed).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SousChefError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Search recipes by free-text query.
    pub fn search(&self, query: &str) -> Result<Vec<RecipeSummary>, SousChefError> {
        let url = format!("{}/search", self.base_url);
        let response = self.client.get(&url).query(&[("q", query)]).send()?;
        let body: SearchResponse = checked(response, &url)?.json()?;
        debug!("search {query:?} returned {} recipes", body.recipes.len());
        Ok(body.recipes.into_iter().map(RecipeSummary::from).collect())
    }

    /// Fetch one recipe by id, with ingredients parsed and time estimated.
    pub fn get_recipe(&self, id: &str) -> Result<Recipe, SousChefError> {
        let url = format!("{}/get", self.base_url);
        let response = self.client.get(&url).query(&[("rId", id)]).send()?;
        let body: GetResponse = checked(response, &url)?.json()?;
        debug!("fetched recipe {id} ({})", body.recipe.title);
        Ok(body.recipe.into())
    }
}

fn checked(response: Response, url: &str) -> Result<Response, SousChefError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(SousChefError::ApiStatus(status.as_u16(), url.to_string()))
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    recipes: Vec<SummaryDto>,
}

#[derive(Debug, Deserialize)]
struct GetResponse {
    recipe: RecipeDto,
}

/// Wire shape of a search hit.
#[derive(Debug, Deserialize)]
struct SummaryDto {
    recipe_id: String,
    title: String,
    #[serde(default)]
    publisher: String,
    #[serde(default)]
    image_url: String,
}

impl From<SummaryDto> for RecipeSummary {
    fn from(dto: SummaryDto) -> Self {
        RecipeSummary {
            id: dto.recipe_id,
            title: dto.title,
            publisher: dto.publisher,
            image_url: dto.image_url,
        }
    }
}

/// Wire shape of a full recipe, ingredients still raw text.
#[derive(Debug, Deserialize)]
struct RecipeDto {
    recipe_id: String,
    title: String,
    #[serde(default)]
    publisher: String,
    #[serde(default)]
    image_url: String,
    #[serde(default)]
    source_url: String,
    #[serde(default)]
    ingredients: Vec<String>,
}

impl From<RecipeDto> for Recipe {
    fn from(dto: RecipeDto) -> Self {
        let ingredients = ingredient::parse(&dto.ingredients);
        Recipe {
            id: dto.recipe_id,
            title: dto.title,
            publisher: dto.publisher,
            image_url: dto.image_url,
            source_url: dto.source_url,
            servings: Recipe::DEFAULT_SERVINGS,
            time_minutes: Recipe::estimate_time_minutes(ingredients.len()),
            ingredients,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dto_conversion_parses_ingredients_and_estimates_time() {
        let dto = RecipeDto {
            recipe_id: "47746".to_string(),
            title: "Pizza".to_string(),
            publisher: "someone".to_string(),
            image_url: String::new(),
            source_url: String::new(),
            ingredients: vec![
                "2 cups flour".to_string(),
                "1 tsp salt".to_string(),
                "olive oil for brushing".to_string(),
                "3 tomatoes".to_string(),
            ],
        };
        let recipe: Recipe = dto.into();
        assert_eq!(recipe.servings, Recipe::DEFAULT_SERVINGS);
        assert_eq!(recipe.time_minutes, 30);
        assert_eq!(recipe.ingredients.len(), 4);
        assert_eq!(recipe.ingredients[0].unit, "cup");
        assert_eq!(recipe.ingredients[2].name, "olive oil for brushing");
    }
}
