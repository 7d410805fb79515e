// ABOUTME: Nutrition tracking models for intake analysis and goal comparison
// ABOUTME: NutritionVector, MacroSplit, NutritionGoals, NutritionLog, and LoggedMeal definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Wellness

use super::meals::{DietaryRestriction, MealType};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Per-serving nutrition facts for a recipe or logged meal
///
/// All nutrient fields are non-negative. `serving_size` and `servings` describe
/// the recipe rather than the logged quantity; the aggregator never scales or
/// sums them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct NutritionVector {
    /// Energy in kilocalories
    pub calories: f64,
    /// Protein in grams
    pub protein_g: f64,
    /// Carbohydrates in grams
    pub carbs_g: f64,
    /// Fat in grams
    pub fat_g: f64,
    /// Fiber in grams
    pub fiber_g: f64,
    /// Sugar in grams
    pub sugar_g: f64,
    /// Sodium in milligrams
    pub sodium_mg: f64,
    /// Cholesterol in milligrams
    pub cholesterol_mg: f64,
    /// Saturated fat in grams
    pub saturated_fat_g: f64,
    /// Serving size in grams (metadata, not scaled)
    pub serving_size: f64,
    /// Number of servings the recipe yields (metadata, not scaled)
    pub servings: f64,
}

impl NutritionVector {
    /// The additive identity: every field zero
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }
}

/// Daily macro targets in grams
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct MacroSplit {
    /// Protein target in grams
    pub protein_g: f64,
    /// Carbohydrate target in grams
    pub carbs_g: f64,
    /// Fat target in grams
    pub fat_g: f64,
}

/// User-owned nutrition targets and dietary constraints
///
/// Created once with calculator-derived defaults, then mutated only through the
/// settings surface. Never regenerated by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionGoals {
    /// Owning user id
    pub user_id: String,
    /// Daily calorie target
    pub daily_calories: f64,
    /// Daily macro targets
    pub macros: MacroSplit,
    /// Daily water intake target in milliliters
    pub water_intake_ml: f64,
    /// Active dietary restrictions, applied conjunctively
    pub dietary_restrictions: Vec<DietaryRestriction>,
    /// Free-text ingredients the user wants excluded from meal plans
    pub excluded_ingredients: Vec<String>,
}

/// A meal the user actually ate
///
/// The nutrition vector is already scaled by the servings consumed at logging
/// time; aggregation sums these as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggedMeal {
    /// Meal name as logged
    pub name: String,
    /// Which slot this meal was logged under
    pub meal_type: MealType,
    /// Scaled nutrition for the quantity eaten
    pub nutrition: NutritionVector,
    /// When the meal was logged
    pub logged_at: DateTime<Utc>,
}

/// Per-day record of meals eaten and water consumed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionLog {
    /// Store-generated identifier
    pub id: String,
    /// Owning user id
    pub user_id: String,
    /// Calendar day the log covers
    pub date: NaiveDate,
    /// Meals logged for this day
    pub meals: Vec<LoggedMeal>,
    /// Water consumed in milliliters
    pub water_intake_ml: f64,
}
