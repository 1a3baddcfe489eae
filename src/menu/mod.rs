//! Menu generation pipeline.
//!
//! Pure and synchronous, leaves first: build an inventory index, rank the
//! catalog by ingredient hits, fill the three nutrition slots, then derive
//! the shopping list and nutrition summary from the selection.

pub mod index;
pub mod nutrition;
pub mod score;
pub mod select;
pub mod shopping;

use crate::catalog::RecipeCatalog;
use crate::types::{InventoryItem, MenuResult};
use self::index::InventoryIndex;
use self::select::SlotThresholds;

/// Rationale lines shown alongside every generated menu.
const EXPLANATION: &[&str] = &[
    "优先选择库存中已有食材命中率高的菜谱，减少浪费。",
    "确保至少一个高蛋白菜和一个蔬菜菜，补足蛋白与纤维。",
    "补充主食或汤品，让一餐更均衡。",
];

/// Generate a menu for one inventory snapshot.
///
/// Total function of its inputs: degenerate cases (empty inventory, empty
/// catalog, no recipe meeting a threshold) produce a smaller menu and/or an
/// empty shopping list, never an error. Repeated calls with identical
/// inputs return structurally identical results.
pub fn generate_menu(
    catalog: &RecipeCatalog,
    inventory: &[InventoryItem],
    thresholds: &SlotThresholds,
) -> MenuResult {
    let index = InventoryIndex::build(inventory);
    let selected = select::select(catalog, &index, thresholds);

    tracing::debug!(
        inventory_items = index.len(),
        catalog_recipes = catalog.len(),
        menu_len = selected.len(),
        "menu generated"
    );

    MenuResult {
        nutrition: nutrition::aggregate(&selected),
        shopping_list: shopping::build_shopping_list(&selected, &index),
        explanation: EXPLANATION.iter().map(|line| (*line).to_string()).collect(),
        menu: selected.into_iter().cloned().collect(),
    }
}

/// A catalog plus slot thresholds, bound once and reused across calls.
///
/// The catalog is borrowed and never mutated; planners are cheap to clone
/// and safe to share across threads.
#[derive(Debug, Clone)]
pub struct MenuPlanner<'a> {
    catalog: &'a RecipeCatalog,
    thresholds: SlotThresholds,
}

impl<'a> MenuPlanner<'a> {
    pub fn new(catalog: &'a RecipeCatalog) -> Self {
        MenuPlanner {
            catalog,
            thresholds: SlotThresholds::default(),
        }
    }

    pub fn with_thresholds(catalog: &'a RecipeCatalog, thresholds: SlotThresholds) -> Self {
        MenuPlanner {
            catalog,
            thresholds,
        }
    }

    pub fn thresholds(&self) -> &SlotThresholds {
        &self.thresholds
    }

    pub fn plan(&self, inventory: &[InventoryItem]) -> MenuResult {
        generate_menu(self.catalog, inventory, &self.thresholds)
    }
}
