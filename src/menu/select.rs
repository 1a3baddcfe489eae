//! Slot-based recipe selection.

use std::cmp::Reverse;

use super::index::InventoryIndex;
use super::score::score;
use crate::catalog::RecipeCatalog;
use crate::types::Recipe;

/// Minimum nutrition-profile values a recipe must meet to fill each slot.
///
/// Product-tuning knobs; the defaults are the values the menu page has
/// always used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotThresholds {
    pub protein_score: f64,
    pub veg_servings: f64,
    pub carb_servings: f64,
}

impl Default for SlotThresholds {
    fn default() -> Self {
        SlotThresholds {
            protein_score: 7.0,
            veg_servings: 1.0,
            carb_servings: 1.0,
        }
    }
}

/// Rank the catalog by descending inventory match score.
///
/// The sort is stable, so recipes with equal scores keep their catalog
/// order. That is the only tie-break rule; there is no secondary key.
pub fn rank<'a>(catalog: &'a RecipeCatalog, index: &InventoryIndex) -> Vec<&'a Recipe> {
    let mut ranked: Vec<&Recipe> = catalog.recipes().iter().collect();
    ranked.sort_by_key(|recipe| Reverse(score(recipe, index)));
    ranked
}

/// Pick up to three distinct recipes covering the protein, vegetable, and
/// carb/soup slots.
///
/// Each slot independently scans the ranked order for the first recipe
/// meeting its threshold, so one recipe may fill several slots; duplicates
/// are then collapsed preserving first-occurrence order. Eligibility
/// depends only on the nutrition profile — the match score affects ranking,
/// never eligibility — so an inventory that matches nothing still yields a
/// deterministic menu.
pub fn select<'a>(
    catalog: &'a RecipeCatalog,
    index: &InventoryIndex,
    thresholds: &SlotThresholds,
) -> Vec<&'a Recipe> {
    let ranked = rank(catalog, index);

    let protein = ranked
        .iter()
        .copied()
        .find(|r| r.nutrition_profile.protein_score >= thresholds.protein_score);
    let veg = ranked
        .iter()
        .copied()
        .find(|r| r.nutrition_profile.veg_servings >= thresholds.veg_servings);
    let carb = ranked
        .iter()
        .copied()
        .find(|r| r.nutrition_profile.carb_servings >= thresholds.carb_servings);

    let mut menu: Vec<&Recipe> = Vec::with_capacity(3);
    for candidate in [protein, veg, carb].into_iter().flatten() {
        if !menu.iter().any(|picked| picked.title == candidate.title) {
            menu.push(candidate);
        }
    }
    menu.truncate(3);
    menu
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    use crate::types::{Category, Ingredient, InventoryItem, NutritionProfile};

    fn recipe(title: &str, protein: f64, veg: f64, carb: f64, ingredients: &[&str]) -> Recipe {
        Recipe {
            title: title.to_string(),
            ingredients: ingredients
                .iter()
                .map(|name| Ingredient {
                    name: name.to_string(),
                    qty: 1.0,
                    unit: "个".to_string(),
                    optional: false,
                })
                .collect(),
            nutrition_profile: NutritionProfile {
                protein_score: protein,
                veg_servings: veg,
                carb_servings: carb,
                fiber_score: 0.0,
            },
            steps: vec![],
        }
    }

    fn index_of(names: &[&str]) -> InventoryIndex {
        let items: Vec<InventoryItem> = names
            .iter()
            .map(|name| InventoryItem {
                id: Uuid::new_v4(),
                name: name.to_string(),
                category: Category::Other,
                qty: 1.0,
                unit: "个".to_string(),
                expires_at: None,
                note: None,
                created_at: Utc::now(),
            })
            .collect();
        InventoryIndex::build(&items)
    }

    #[test]
    fn test_rank_is_stable_on_equal_scores() {
        let catalog = RecipeCatalog::new(vec![
            recipe("甲", 0.0, 0.0, 0.0, &["a"]),
            recipe("乙", 0.0, 0.0, 0.0, &["b"]),
            recipe("丙", 0.0, 0.0, 0.0, &["c"]),
        ])
        .unwrap();
        let ranked = rank(&catalog, &index_of(&[]));
        let titles: Vec<&str> = ranked.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["甲", "乙", "丙"]);
    }

    #[test]
    fn test_rank_moves_higher_scores_first() {
        let catalog = RecipeCatalog::new(vec![
            recipe("甲", 0.0, 0.0, 0.0, &["a"]),
            recipe("乙", 0.0, 0.0, 0.0, &["b", "c"]),
            recipe("丙", 0.0, 0.0, 0.0, &["d"]),
        ])
        .unwrap();
        let ranked = rank(&catalog, &index_of(&["b", "c"]));
        let titles: Vec<&str> = ranked.iter().map(|r| r.title.as_str()).collect();
        // 乙 scores 2; 甲 and 丙 tie at 0 and keep catalog order.
        assert_eq!(titles, ["乙", "甲", "丙"]);
    }

    #[test]
    fn test_one_recipe_can_fill_every_slot() {
        let catalog =
            RecipeCatalog::new(vec![recipe("全能菜", 7.0, 1.0, 1.0, &["a"])]).unwrap();
        let menu = select(&catalog, &index_of(&[]), &SlotThresholds::default());
        assert_eq!(menu.len(), 1);
        assert_eq!(menu[0].title, "全能菜");
    }

    #[test]
    fn test_distinct_recipes_per_slot() {
        let catalog = RecipeCatalog::new(vec![
            recipe("荤菜", 8.0, 0.0, 0.0, &[]),
            recipe("素菜", 0.0, 2.0, 0.0, &[]),
            recipe("主食", 0.0, 0.0, 2.0, &[]),
        ])
        .unwrap();
        let menu = select(&catalog, &index_of(&[]), &SlotThresholds::default());
        let titles: Vec<&str> = menu.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["荤菜", "素菜", "主食"]);
    }

    #[test]
    fn test_unmet_thresholds_shrink_the_menu() {
        let catalog = RecipeCatalog::new(vec![recipe("小菜", 1.0, 1.0, 0.0, &[])]).unwrap();
        let menu = select(&catalog, &index_of(&[]), &SlotThresholds::default());
        // Only the vegetable slot is satisfied.
        assert_eq!(menu.len(), 1);
        assert_eq!(menu[0].title, "小菜");
    }

    #[test]
    fn test_empty_catalog_yields_empty_menu() {
        let catalog = RecipeCatalog::new(vec![]).unwrap();
        let menu = select(&catalog, &index_of(&["鸡蛋"]), &SlotThresholds::default());
        assert!(menu.is_empty());
    }

    #[test]
    fn test_custom_thresholds() {
        let catalog = RecipeCatalog::new(vec![recipe("低蛋白", 3.0, 0.0, 0.0, &[])]).unwrap();
        let lenient = SlotThresholds {
            protein_score: 3.0,
            ..SlotThresholds::default()
        };
        let menu = select(&catalog, &index_of(&[]), &lenient);
        assert_eq!(menu.len(), 1);

        let menu = select(&catalog, &index_of(&[]), &SlotThresholds::default());
        assert!(menu.is_empty());
    }

    #[test]
    fn test_score_affects_ranking_not_eligibility() {
        // 备选 meets the protein threshold but matches nothing; it is still
        // selected because eligibility only reads the nutrition profile.
        let catalog = RecipeCatalog::new(vec![
            recipe("家常菜", 0.0, 0.0, 0.0, &["鸡蛋", "番茄"]),
            recipe("备选", 9.0, 0.0, 0.0, &["牛排"]),
        ])
        .unwrap();
        let menu = select(
            &catalog,
            &index_of(&["鸡蛋", "番茄"]),
            &SlotThresholds::default(),
        );
        assert_eq!(menu.len(), 1);
        assert_eq!(menu[0].title, "备选");
    }
}
