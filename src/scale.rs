//! Serving-count scaling.

use log::debug;

use crate::model::{ParsedIngredient, Recipe};

/// Direction of a one-serving adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServingChange {
    Increase,
    Decrease,
}

/// Multiply every ingredient quantity by `new_servings / old_servings`.
///
/// Units and names are untouched. `old_servings` must be at least 1;
/// callers enforce that before getting here.
pub fn rescale(ingredients: &mut [ParsedIngredient], old_servings: u32, new_servings: u32) {
    debug_assert!(old_servings >= 1, "rescale from zero servings");
    let factor = f64::from(new_servings) / f64::from(old_servings);
    for ingredient in ingredients {
        ingredient.quantity *= factor;
    }
}

impl Recipe {
    /// Adjust the serving count by one and rescale all quantities.
    ///
    /// Decreasing below 1 serving is a no-op; the recipe is returned
    /// unchanged.
    pub fn update_servings(&mut self, change: ServingChange) {
        let new_servings = match change {
            ServingChange::Increase => self.servings + 1,
            ServingChange::Decrease if self.servings > 1 => self.servings - 1,
            ServingChange::Decrease => return,
        };
        debug!("rescaling {:?} from {} to {new_servings} servings", self.title, self.servings);
        rescale(&mut self.ingredients, self.servings, new_servings);
        self.servings = new_servings;
    }
}
