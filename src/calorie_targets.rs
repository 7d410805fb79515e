// ABOUTME: Harris-Benedict calorie target calculation with activity and goal adjustment
// ABOUTME: Also derives the macro gram split and first-time default nutrition goals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Wellness

//! # Calorie Target Calculator
//!
//! Produces a daily calorie target from onboarding biometrics. When weight,
//! height, and age are all present the target is a gender-branched
//! Harris-Benedict BMR scaled by an activity multiplier and a goal
//! adjustment. When any biometric is missing the target falls back to a fixed
//! value with no further adjustment.

use crate::constants::{activity, bmr, defaults, goals, macros};
use crate::models::{FitnessGoal, Gender, MacroSplit, NutritionGoals, UserGoalProfile};
use tracing::debug;

fn harris_benedict_bmr(weight_kg: f64, height_cm: f64, age: u32, gender: Option<Gender>) -> f64 {
    let age = f64::from(age);
    match gender {
        Some(Gender::Male) => {
            bmr::MALE_WEIGHT_COEF.mul_add(
                weight_kg,
                bmr::MALE_HEIGHT_COEF.mul_add(height_cm, bmr::MALE_BASE),
            ) - bmr::MALE_AGE_COEF * age
        }
        _ => {
            bmr::FEMALE_WEIGHT_COEF.mul_add(
                weight_kg,
                bmr::FEMALE_HEIGHT_COEF.mul_add(height_cm, bmr::FEMALE_BASE),
            ) - bmr::FEMALE_AGE_COEF * age
        }
    }
}

fn activity_multiplier(weekly_workouts: u32) -> f64 {
    if weekly_workouts <= activity::LIGHT_MAX_WEEKLY {
        activity::LIGHT_MULTIPLIER
    } else if weekly_workouts <= activity::MODERATE_MAX_WEEKLY {
        activity::MODERATE_MULTIPLIER
    } else {
        activity::ACTIVE_MULTIPLIER
    }
}

fn goal_adjustment(goal: FitnessGoal) -> f64 {
    match goal {
        FitnessGoal::WeightLoss => goals::WEIGHT_LOSS_ADJUSTMENT,
        FitnessGoal::MuscleGain => goals::MUSCLE_GAIN_ADJUSTMENT,
        FitnessGoal::General | FitnessGoal::Endurance => 1.0,
    }
}

/// Daily calorie target for a profile, rounded to the nearest integer
#[must_use]
pub fn daily_calorie_target(profile: &UserGoalProfile) -> u32 {
    let calories = match (profile.weight_kg, profile.height_cm, profile.age) {
        (Some(weight_kg), Some(height_cm), Some(age)) => {
            let base = harris_benedict_bmr(weight_kg, height_cm, age, profile.gender);
            base * activity_multiplier(profile.weekly_workouts) * goal_adjustment(profile.primary_goal)
        }
        _ => {
            debug!(
                user_id = %profile.user_id,
                "incomplete biometrics, using fallback calorie target"
            );
            if profile.primary_goal == FitnessGoal::WeightLoss {
                bmr::FALLBACK_WEIGHT_LOSS_CALORIES
            } else {
                bmr::FALLBACK_DEFAULT_CALORIES
            }
        }
    };
    calories.round() as u32
}

/// Macro gram targets for a calorie budget, rounded to whole grams
///
/// Protein takes 30% of calories for muscle gain and 25% otherwise, carbs 40%
/// for weight loss and 50% otherwise, fat 25% always, each divided by the
/// nutrient's energy density.
#[must_use]
pub fn macro_split(calories: f64, goal: FitnessGoal) -> MacroSplit {
    let protein_ratio = if goal == FitnessGoal::MuscleGain {
        macros::MUSCLE_GAIN_PROTEIN_RATIO
    } else {
        macros::DEFAULT_PROTEIN_RATIO
    };
    let carb_ratio = if goal == FitnessGoal::WeightLoss {
        macros::WEIGHT_LOSS_CARB_RATIO
    } else {
        macros::DEFAULT_CARB_RATIO
    };
    MacroSplit {
        protein_g: (calories * protein_ratio / macros::PROTEIN_KCAL_PER_G).round(),
        carbs_g: (calories * carb_ratio / macros::CARBS_KCAL_PER_G).round(),
        fat_g: (calories * macros::FAT_RATIO / macros::FAT_KCAL_PER_G).round(),
    }
}

/// First-time default nutrition goals derived from a profile
///
/// Created once; afterwards the goals record is user-owned and only mutated
/// through settings.
#[must_use]
pub fn default_goals_for(profile: &UserGoalProfile) -> NutritionGoals {
    let calories = f64::from(daily_calorie_target(profile));
    NutritionGoals {
        user_id: profile.user_id.clone(),
        daily_calories: calories,
        macros: macro_split(calories, profile.primary_goal),
        water_intake_ml: defaults::WATER_INTAKE_ML,
        dietary_restrictions: Vec::new(),
        excluded_ingredients: Vec::new(),
    }
}
