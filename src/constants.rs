// ABOUTME: Physiological and engine constants grouped by concern
// ABOUTME: BMR coefficients, activity multipliers, goal adjustments, macro ratios, plan defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Wellness

//! Engine-wide constants

/// Harris-Benedict basal metabolic rate coefficients
pub mod bmr {
    /// Male BMR base term
    pub const MALE_BASE: f64 = 88.362;
    /// Male weight coefficient (per kg)
    pub const MALE_WEIGHT_COEF: f64 = 13.397;
    /// Male height coefficient (per cm)
    pub const MALE_HEIGHT_COEF: f64 = 4.799;
    /// Male age coefficient (per year, subtracted)
    pub const MALE_AGE_COEF: f64 = 5.677;

    /// Non-male BMR base term
    pub const FEMALE_BASE: f64 = 447.593;
    /// Non-male weight coefficient (per kg)
    pub const FEMALE_WEIGHT_COEF: f64 = 9.247;
    /// Non-male height coefficient (per cm)
    pub const FEMALE_HEIGHT_COEF: f64 = 3.098;
    /// Non-male age coefficient (per year, subtracted)
    pub const FEMALE_AGE_COEF: f64 = 4.330;

    /// Fallback daily calories when biometrics are incomplete and the goal is weight loss
    pub const FALLBACK_WEIGHT_LOSS_CALORIES: f64 = 1800.0;
    /// Fallback daily calories when biometrics are incomplete for any other goal
    pub const FALLBACK_DEFAULT_CALORIES: f64 = 2200.0;
}

/// Activity multipliers keyed by weekly workout count
pub mod activity {
    /// Multiplier for up to [`LIGHT_MAX_WEEKLY`] workouts per week
    pub const LIGHT_MULTIPLIER: f64 = 1.2;
    /// Multiplier for up to [`MODERATE_MAX_WEEKLY`] workouts per week
    pub const MODERATE_MULTIPLIER: f64 = 1.375;
    /// Multiplier above [`MODERATE_MAX_WEEKLY`] workouts per week
    pub const ACTIVE_MULTIPLIER: f64 = 1.55;

    /// Upper bound of the light activity bracket
    pub const LIGHT_MAX_WEEKLY: u32 = 2;
    /// Upper bound of the moderate activity bracket
    pub const MODERATE_MAX_WEEKLY: u32 = 4;
}

/// Goal-specific calorie adjustments and meal predicates
pub mod goals {
    /// Calorie multiplier applied for a weight-loss goal
    pub const WEIGHT_LOSS_ADJUSTMENT: f64 = 0.85;
    /// Calorie multiplier applied for a muscle-gain goal
    pub const MUSCLE_GAIN_ADJUSTMENT: f64 = 1.15;

    /// Weight-loss recipes must stay under this many calories per serving
    pub const WEIGHT_LOSS_MAX_RECIPE_CALORIES: f64 = 500.0;
    /// Weight-loss recipes must stay under this many grams of fat per serving
    pub const WEIGHT_LOSS_MAX_RECIPE_FAT_G: f64 = 20.0;
    /// Muscle-gain recipes must exceed this many grams of protein per serving
    pub const MUSCLE_GAIN_MIN_RECIPE_PROTEIN_G: f64 = 30.0;
}

/// Macro split ratios and energy densities
pub mod macros {
    /// Calories per gram of protein
    pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
    /// Calories per gram of carbohydrate
    pub const CARBS_KCAL_PER_G: f64 = 4.0;
    /// Calories per gram of fat
    pub const FAT_KCAL_PER_G: f64 = 9.0;

    /// Protein share of daily calories for muscle gain
    pub const MUSCLE_GAIN_PROTEIN_RATIO: f64 = 0.30;
    /// Protein share of daily calories for every other goal
    pub const DEFAULT_PROTEIN_RATIO: f64 = 0.25;
    /// Carbohydrate share of daily calories for weight loss
    pub const WEIGHT_LOSS_CARB_RATIO: f64 = 0.40;
    /// Carbohydrate share of daily calories for every other goal
    pub const DEFAULT_CARB_RATIO: f64 = 0.50;
    /// Fat share of daily calories regardless of goal
    pub const FAT_RATIO: f64 = 0.25;
}

/// Workout plan defaults
pub mod workout {
    /// Sets assigned when an exercise template omits them
    pub const DEFAULT_SETS: u32 = 3;
    /// Reps assigned when an exercise template omits them
    pub const DEFAULT_REPS: u32 = 12;
}

/// Mental health statistics defaults
pub mod wellness {
    /// Average mood reported for an empty journal window
    pub const DEFAULT_AVERAGE_MOOD: f64 = 3.0;
    /// Minimum journal entries required to classify a mood trend
    pub const MIN_TREND_ENTRIES: usize = 2;
}

/// First-time record defaults
pub mod defaults {
    /// Daily water intake target in milliliters for freshly created goals
    pub const WATER_INTAKE_ML: f64 = 2000.0;
}
