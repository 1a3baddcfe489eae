//! The recipe catalog: an immutable, read-only collection of recipes.
//!
//! The default catalog ships with the crate, embedded from
//! `data/recipes.json` at compile time. Callers pass a catalog into the
//! pipeline explicitly; nothing reads it through hidden global state.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::error::CatalogError;
use crate::types::Recipe;

/// Catalog bundled with the crate, parsed once on first use.
static BUILTIN: LazyLock<RecipeCatalog> = LazyLock::new(|| {
    let json = include_str!("../data/recipes.json");
    RecipeCatalog::from_json(json).expect("Failed to parse recipes.json")
});

/// An ordered, validated set of recipes. Order is significant: it is the
/// tie-break for ranking recipes with equal match scores.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
}

impl RecipeCatalog {
    /// Build a catalog, rejecting recipes the menu pipeline could not use
    /// safely: empty or duplicate titles, negative or non-finite nutrition
    /// numbers, and negative or non-finite ingredient quantities.
    pub fn new(recipes: Vec<Recipe>) -> Result<Self, CatalogError> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(recipes.len());
        for (index, recipe) in recipes.iter().enumerate() {
            if recipe.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle { index });
            }
            if !seen.insert(recipe.title.as_str()) {
                return Err(CatalogError::DuplicateTitle {
                    title: recipe.title.clone(),
                });
            }

            let profile = &recipe.nutrition_profile;
            for (field, value) in [
                ("proteinScore", profile.protein_score),
                ("vegServings", profile.veg_servings),
                ("carbServings", profile.carb_servings),
                ("fiberScore", profile.fiber_score),
            ] {
                if !value.is_finite() || value < 0.0 {
                    return Err(CatalogError::InvalidNutrition {
                        title: recipe.title.clone(),
                        field,
                    });
                }
            }

            for ingredient in &recipe.ingredients {
                if !ingredient.qty.is_finite() || ingredient.qty < 0.0 {
                    return Err(CatalogError::InvalidIngredientQty {
                        title: recipe.title.clone(),
                        name: ingredient.name.clone(),
                    });
                }
            }
        }
        Ok(RecipeCatalog { recipes })
    }

    /// Parse a catalog from its JSON representation (an array of recipes).
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let recipes: Vec<Recipe> = serde_json::from_str(json)?;
        Self::new(recipes)
    }

    /// The catalog bundled with the crate.
    pub fn builtin() -> &'static RecipeCatalog {
        &BUILTIN
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Look up a recipe by its title.
    pub fn get(&self, title: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.title == title)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
