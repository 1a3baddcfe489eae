//! Nutrition aggregation over the selected recipes.

use crate::types::{NutritionSummary, Recipe};

const PROTEIN_COVERAGE_CAP: f64 = 100.0;
const VEG_SERVINGS_CAP: f64 = 6.0;
const CARB_SERVINGS_CAP: f64 = 4.0;
const FIBER_SCORE_CAP: f64 = 100.0;

/// Scale factor turning summed protein/fiber scores into 0-100 coverage.
const SCORE_TO_COVERAGE: f64 = 10.0;

/// Sum the nutrition profiles of the selected recipes and cap the totals.
///
/// Protein and fiber sums are scaled into coverage numbers before capping;
/// servings are capped as-is. The caps are hard ceilings.
pub fn aggregate(selected: &[&Recipe]) -> NutritionSummary {
    let mut protein = 0.0;
    let mut veg = 0.0;
    let mut carb = 0.0;
    let mut fiber = 0.0;

    for recipe in selected {
        let profile = &recipe.nutrition_profile;
        protein += profile.protein_score;
        veg += profile.veg_servings;
        carb += profile.carb_servings;
        fiber += profile.fiber_score;
    }

    NutritionSummary {
        protein_coverage: (protein * SCORE_TO_COVERAGE).min(PROTEIN_COVERAGE_CAP),
        veg_servings: veg.min(VEG_SERVINGS_CAP),
        carb_servings: carb.min(CARB_SERVINGS_CAP),
        fiber_score: (fiber * SCORE_TO_COVERAGE).min(FIBER_SCORE_CAP),
    }
}
