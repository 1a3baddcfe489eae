//! Recipe scoring against the inventory index.

use super::index::InventoryIndex;
use crate::types::Recipe;

/// Count how many of the recipe's ingredients are on hand.
///
/// Presence-only: the quantity in inventory is never compared against the
/// amount required, and optional ingredients count the same as required
/// ones.
pub fn score(recipe: &Recipe, index: &InventoryIndex) -> usize {
    recipe
        .ingredients
        .iter()
        .filter(|ingredient| index.contains(&ingredient.name))
        .count()
}
