//! Shopping-list aggregation for selected recipes.

use std::collections::HashMap;

use super::index::{normalize_name, InventoryIndex};
use crate::types::{Recipe, ShoppingItem};

/// Aggregate the ingredients the cook still needs to buy.
///
/// Walks the selected recipes in order and each recipe's ingredients in
/// listed order, so entries appear in first-encountered order. Anything
/// already in inventory is skipped outright; the quantity on hand is never
/// compared against the amount required. Repeat ingredients sum their
/// quantities into the first entry, which also fixes the display name and
/// unit — units are not reconciled across recipes.
pub fn build_shopping_list(selected: &[&Recipe], index: &InventoryIndex) -> Vec<ShoppingItem> {
    let mut list: Vec<ShoppingItem> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for recipe in selected {
        for ingredient in &recipe.ingredients {
            if index.contains(&ingredient.name) {
                continue;
            }
            let key = normalize_name(&ingredient.name);
            match positions.get(&key) {
                Some(&pos) => list[pos].qty += ingredient.qty,
                None => {
                    positions.insert(key, list.len());
                    list.push(ShoppingItem {
                        name: ingredient.name.clone(),
                        qty: ingredient.qty,
                        unit: ingredient.unit.clone(),
                    });
                }
            }
        }
    }

    list
}
