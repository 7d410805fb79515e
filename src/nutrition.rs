// ABOUTME: Nutrition vector aggregation: scaling, summation, and daily log totals
// ABOUTME: serving_size and servings are recipe metadata and never scaled or summed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Wellness

//! # Nutrition Aggregator
//!
//! Pure functions over [`NutritionVector`]. `sum` over an empty iterator is
//! the zero vector and `scale(v, 1.0)` is the identity; scaling distributes
//! over summation.

use crate::models::{NutritionLog, NutritionVector};

/// Multiply every nutrient field by `multiplier`
///
/// `serving_size` and `servings` describe the recipe rather than the logged
/// quantity and pass through unscaled.
#[must_use]
pub fn scale(vector: &NutritionVector, multiplier: f64) -> NutritionVector {
    NutritionVector {
        calories: vector.calories * multiplier,
        protein_g: vector.protein_g * multiplier,
        carbs_g: vector.carbs_g * multiplier,
        fat_g: vector.fat_g * multiplier,
        fiber_g: vector.fiber_g * multiplier,
        sugar_g: vector.sugar_g * multiplier,
        sodium_mg: vector.sodium_mg * multiplier,
        cholesterol_mg: vector.cholesterol_mg * multiplier,
        saturated_fat_g: vector.saturated_fat_g * multiplier,
        serving_size: vector.serving_size,
        servings: vector.servings,
    }
}

/// Pairwise-add the nutrient fields of every vector
///
/// `serving_size` and `servings` are excluded from the sum; they carry no
/// additive meaning across meals and stay zero in the result.
#[must_use]
pub fn sum<'a, I>(vectors: I) -> NutritionVector
where
    I: IntoIterator<Item = &'a NutritionVector>,
{
    vectors
        .into_iter()
        .fold(NutritionVector::zero(), |mut acc, v| {
            acc.calories += v.calories;
            acc.protein_g += v.protein_g;
            acc.carbs_g += v.carbs_g;
            acc.fat_g += v.fat_g;
            acc.fiber_g += v.fiber_g;
            acc.sugar_g += v.sugar_g;
            acc.sodium_mg += v.sodium_mg;
            acc.cholesterol_mg += v.cholesterol_mg;
            acc.saturated_fat_g += v.saturated_fat_g;
            acc
        })
}

/// Total nutrition across a day's logged meals
///
/// Logged meals already carry scaled vectors, so the totals are a plain sum.
#[must_use]
pub fn daily_totals(log: &NutritionLog) -> NutritionVector {
    sum(log.meals.iter().map(|meal| &meal.nutrition))
}
