//! Core domain types shared across the menu pipeline.
//!
//! The surrounding app exchanges these as camelCase JSON (the catalog file
//! and inventory snapshots), so the structs carry serde renames.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Food category for inventory items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Protein,
    Veg,
    Fruit,
    Carb,
    Dairy,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Protein => "protein",
            Category::Veg => "veg",
            Category::Fruit => "fruit",
            Category::Carb => "carb",
            Category::Dairy => "dairy",
            Category::Other => "other",
        }
    }
}

/// One row of the inventory snapshot.
///
/// Owned by the persistence layer; the core treats the snapshot as
/// immutable for the duration of a single menu-generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: Uuid,
    pub name: String,
    pub category: Category,
    pub qty: f64,
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A single recipe ingredient with its required amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub qty: f64,
    pub unit: String,
    /// Optional ingredients are matched and shopped exactly like required
    /// ones; the flag only informs display.
    #[serde(default)]
    pub optional: bool,
}

/// Fixed nutrition scores a recipe contributes to a menu.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionProfile {
    pub protein_score: f64,
    pub veg_servings: f64,
    pub carb_servings: f64,
    pub fiber_score: f64,
}

/// A catalog recipe. The title is the recipe's identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub title: String,
    pub ingredients: Vec<Ingredient>,
    pub nutrition_profile: NutritionProfile,
    pub steps: Vec<String>,
}

/// Aggregated, capped nutrition totals for a generated menu.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionSummary {
    pub protein_coverage: f64,
    pub veg_servings: f64,
    pub carb_servings: f64,
    pub fiber_score: f64,
}

/// One shopping-list entry: an ingredient the cook still needs to buy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub name: String,
    pub qty: f64,
    pub unit: String,
}

/// Result of one menu-generation call. Created fresh per call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuResult {
    /// Up to three distinct recipes, in slot order (protein, veg, carb).
    pub menu: Vec<Recipe>,
    pub nutrition: NutritionSummary,
    pub shopping_list: Vec<ShoppingItem>,
    /// Human-readable rationale lines for the selection.
    pub explanation: Vec<String>,
}
