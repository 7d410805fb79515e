// ABOUTME: Dietary restriction and goal predicates selecting recipe candidates from the catalog
// ABOUTME: Case-insensitive substring matching over free-text ingredient strings, by design
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Wellness

//! # Dietary Filter
//!
//! Predicates that narrow a catalog slice to the recipes compatible with a
//! user's dietary restrictions, excluded ingredients, and fitness goal.
//!
//! Restriction matching is a case-insensitive substring test against free-text
//! ingredient strings. That is intentionally preserved behavior: "almond milk"
//! trips the dairy keyword "milk". Restrictions compose conjunctively.

use crate::constants::goals::{
    MUSCLE_GAIN_MIN_RECIPE_PROTEIN_G, WEIGHT_LOSS_MAX_RECIPE_CALORIES,
    WEIGHT_LOSS_MAX_RECIPE_FAT_G,
};
use crate::models::{DietaryRestriction, FitnessGoal, NutritionGoals, RecipeTemplate};

const VEGETARIAN_KEYWORDS: &[&str] = &[
    "meat", "chicken", "beef", "pork", "fish", "salmon", "tuna", "shrimp", "bacon", "turkey",
    "sausage", "ham", "steak",
];

const VEGAN_ONLY_KEYWORDS: &[&str] = &[
    "dairy", "milk", "cheese", "butter", "yogurt", "cream", "whey", "egg", "honey",
];

const GLUTEN_KEYWORDS: &[&str] = &["wheat", "flour", "bread", "pasta", "barley", "rye", "granola"];

const DAIRY_KEYWORDS: &[&str] = &["dairy", "milk", "cheese", "butter", "yogurt", "cream", "whey"];

fn ingredient_contains_any(ingredients: &[String], keywords: &[&str]) -> bool {
    ingredients.iter().any(|ingredient| {
        let lowered = ingredient.to_lowercase();
        keywords
            .iter()
            .any(|keyword| lowered.contains(&keyword.to_lowercase()))
    })
}

/// Whether a recipe passes a single dietary restriction
#[must_use]
pub fn passes_restriction(recipe: &RecipeTemplate, restriction: DietaryRestriction) -> bool {
    match restriction {
        DietaryRestriction::None => true,
        DietaryRestriction::Vegetarian => {
            !ingredient_contains_any(&recipe.ingredients, VEGETARIAN_KEYWORDS)
        }
        DietaryRestriction::Vegan => {
            !ingredient_contains_any(&recipe.ingredients, VEGETARIAN_KEYWORDS)
                && !ingredient_contains_any(&recipe.ingredients, VEGAN_ONLY_KEYWORDS)
        }
        DietaryRestriction::GlutenFree => {
            !ingredient_contains_any(&recipe.ingredients, GLUTEN_KEYWORDS)
        }
        DietaryRestriction::DairyFree => {
            !ingredient_contains_any(&recipe.ingredients, DAIRY_KEYWORDS)
        }
    }
}

/// Whether a recipe passes every active restriction and avoids every
/// user-excluded ingredient
#[must_use]
pub fn passes_restrictions(recipe: &RecipeTemplate, goals: &NutritionGoals) -> bool {
    let restrictions_ok = goals
        .dietary_restrictions
        .iter()
        .all(|&restriction| passes_restriction(recipe, restriction));
    let exclusions: Vec<&str> = goals
        .excluded_ingredients
        .iter()
        .map(String::as_str)
        .collect();
    restrictions_ok && !ingredient_contains_any(&recipe.ingredients, &exclusions)
}

/// Whether a recipe fits the user's fitness goal
///
/// Weight loss caps calories and fat per serving; muscle gain requires a
/// protein floor; every other goal imposes no constraint.
#[must_use]
pub fn matches_goal(recipe: &RecipeTemplate, goal: FitnessGoal) -> bool {
    match goal {
        FitnessGoal::WeightLoss => {
            recipe.nutrition.calories < WEIGHT_LOSS_MAX_RECIPE_CALORIES
                && recipe.nutrition.fat_g < WEIGHT_LOSS_MAX_RECIPE_FAT_G
        }
        FitnessGoal::MuscleGain => {
            recipe.nutrition.protein_g > MUSCLE_GAIN_MIN_RECIPE_PROTEIN_G
        }
        FitnessGoal::General | FitnessGoal::Endurance => true,
    }
}

/// Catalog recipes passing both the dietary restrictions and the goal predicate
#[must_use]
pub fn filter_candidates<'a>(
    recipes: &'a [RecipeTemplate],
    goals: &NutritionGoals,
    goal: FitnessGoal,
) -> Vec<&'a RecipeTemplate> {
    recipes
        .iter()
        .filter(|recipe| passes_restrictions(recipe, goals) && matches_goal(recipe, goal))
        .collect()
}

/// Catalog recipes passing the dietary restrictions alone
///
/// The widened candidate set used when the goal predicate empties a slot.
#[must_use]
pub fn filter_by_restrictions<'a>(
    recipes: &'a [RecipeTemplate],
    goals: &NutritionGoals,
) -> Vec<&'a RecipeTemplate> {
    recipes
        .iter()
        .filter(|recipe| passes_restrictions(recipe, goals))
        .collect()
}
