//! Shopping list built from parsed ingredients.

use serde::{Deserialize, Serialize};

use crate::error::SousChefError;
use crate::model::ParsedIngredient;

/// One entry on the shopping list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub id: u64,
    pub quantity: f64,
    pub unit: String,
    pub name: String,
}

/// An ordered shopping list with stable, list-unique item ids.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ShoppingList {
    items: Vec<ShoppingItem>,
    next_id: u64,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item and return it.
    pub fn add(&mut self, quantity: f64, unit: &str, name: &str) -> &ShoppingItem {
        let item = ShoppingItem {
            id: self.next_id,
            quantity,
            unit: unit.to_string(),
            name: name.to_string(),
        };
        self.next_id += 1;
        self.items.push(item);
        self.items.last().expect("just pushed")
    }

    /// Append every parsed ingredient of a recipe.
    pub fn add_ingredients(&mut self, ingredients: &[ParsedIngredient]) {
        for ing in ingredients {
            self.add(ing.quantity, &ing.unit, &ing.name);
        }
    }

    /// Remove the item with `id`.
    pub fn delete(&mut self, id: u64) -> Result<(), SousChefError> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(SousChefError::UnknownListItem(id))?;
        self.items.remove(index);
        Ok(())
    }

    /// Change the quantity of the item with `id`.
    pub fn update_quantity(&mut self, id: u64, quantity: f64) -> Result<(), SousChefError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(SousChefError::UnknownListItem(id))?;
        item.quantity = quantity;
        Ok(())
    }

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
