// ABOUTME: Recipe catalog templates and per-day meal plan models
// ABOUTME: MealType, DietaryRestriction, SkillLevel, RecipeTemplate, DailyMealPlan definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Wellness

use super::nutrition::NutritionVector;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Meal slot within a daily plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast slot
    Breakfast,
    /// Lunch slot
    Lunch,
    /// Dinner slot
    Dinner,
    /// Snack slot (a plan carries several)
    Snack,
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        };
        f.write_str(label)
    }
}

/// Dietary restriction applied when filtering recipe candidates
///
/// Restrictions are conjunctive: a recipe must pass every active restriction.
/// Matching is a deliberate case-insensitive substring test over free-text
/// ingredient strings, so "almond milk" trips the dairy keyword "milk".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DietaryRestriction {
    /// No restriction; imposes no filter
    #[default]
    None,
    /// No meat or fish
    Vegetarian,
    /// No animal products
    Vegan,
    /// No gluten-containing ingredients
    GlutenFree,
    /// No dairy products
    DairyFree,
}

/// Cooking skill level for recipe complexity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    /// Simple recipes, basic techniques
    Beginner,
    /// Moderate complexity
    #[default]
    Intermediate,
    /// Complex recipes, advanced techniques
    Advanced,
}

/// Immutable recipe catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeTemplate {
    /// Stable catalog identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Slot this recipe is catalogued under
    pub meal_type: MealType,
    /// Ordered free-text ingredient list
    pub ingredients: Vec<String>,
    /// Per-serving nutrition facts
    pub nutrition: NutritionVector,
    /// Preparation time in minutes
    pub preparation_time_minutes: u32,
    /// Cooking difficulty
    pub difficulty: SkillLevel,
}

/// Per-user, per-day meal plan
///
/// Created once per (user, day); slot choices are frozen once persisted.
/// `completed` flips only via an explicit action, never derived from slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyMealPlan {
    /// Owning user id
    pub user_id: String,
    /// Calendar day the plan covers
    pub date: NaiveDate,
    /// Selected breakfast recipe
    pub breakfast: RecipeTemplate,
    /// Selected lunch recipe
    pub lunch: RecipeTemplate,
    /// Selected dinner recipe
    pub dinner: RecipeTemplate,
    /// Selected snack recipes
    pub snacks: Vec<RecipeTemplate>,
    /// Whether the user marked the day's plan done
    pub completed: bool,
}
