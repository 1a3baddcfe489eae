//! Pure menu-planning core for the smart-fridge app.
//!
//! Given an inventory snapshot and a read-only recipe catalog, recommends
//! up to three nutritionally balanced recipes and derives a shopping list
//! for the missing ingredients, a capped nutrition summary, and rationale
//! lines. Everything here is pure and synchronous; persistence, vision
//! detection, and the HTTP layer live in the surrounding app.

pub mod catalog;
pub mod error;
pub mod freshness;
pub mod menu;
pub mod types;
pub mod validate;

pub use catalog::RecipeCatalog;
pub use error::{CatalogError, InventoryError};
pub use freshness::{classify, FreshnessStatus};
pub use menu::index::InventoryIndex;
pub use menu::select::SlotThresholds;
pub use menu::{generate_menu, MenuPlanner};
pub use types::{
    Category, Ingredient, InventoryItem, MenuResult, NutritionProfile, NutritionSummary, Recipe,
    ShoppingItem,
};
pub use validate::{validate_item, validate_snapshot};
