use serde::{Deserialize, Serialize};

/// One structured ingredient line.
///
/// Produced by [`crate::ingredient::parse`]; quantities are rescaled in
/// place when the serving count changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedIngredient {
    /// Numeric amount, 1.0 when the line carried none
    pub quantity: f64,
    /// Canonical short unit ("tbsp", "cup", ...) or empty when unitless
    pub unit: String,
    /// Lower-cased description with parenthetical asides removed
    pub name: String,
}

/// A search hit from the recipe API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub image_url: String,
}

/// A full recipe with parsed ingredients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub image_url: String,
    pub source_url: String,
    /// Current serving count, starts at [`Recipe::DEFAULT_SERVINGS`]
    pub servings: u32,
    /// Estimated preparation time in minutes
    pub time_minutes: u32,
    pub ingredients: Vec<ParsedIngredient>,
}

impl Recipe {
    pub const DEFAULT_SERVINGS: u32 = 4;

    /// Rough preparation time: 15 minutes per block of three ingredients.
    pub fn estimate_time_minutes(ingredient_count: usize) -> u32 {
        let periods = ingredient_count.div_ceil(3);
        (periods * 15) as u32
    }
}

/// A liked recipe, as kept on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Like {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub image_url: String,
}

impl From<&Recipe> for Like {
    fn from(recipe: &Recipe) -> Self {
        Like {
            id: recipe.id.clone(),
            title: recipe.title.clone(),
            publisher: recipe.publisher.clone(),
            image_url: recipe.image_url.clone(),
        }
    }
}
