// ABOUTME: Domain models for nutrition, workouts, meal plans, wellness records, and user profiles
// ABOUTME: Pure data definitions; all decision logic lives in the engine modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Wellness

//! Domain model definitions

/// Recipe, meal plan, and dietary restriction models
pub mod meals;
/// Nutrition vectors, goals, and food logs
pub mod nutrition;
/// User goal profile and progress rollup models
pub mod user;
/// Journal, breathing, motivation, and derived stats models
pub mod wellness;
/// Exercise templates and daily workout plans
pub mod workout;

pub use meals::{DailyMealPlan, DietaryRestriction, MealType, RecipeTemplate, SkillLevel};
pub use nutrition::{LoggedMeal, MacroSplit, NutritionGoals, NutritionLog, NutritionVector};
pub use user::{Gender, ProgressRollup, UserGoalProfile};
pub use wellness::{BreathingSession, JournalEntry, MentalHealthStats, MoodTrend, Motivation};
pub use workout::{DailyExercise, DailyWorkoutPlan, ExerciseTemplate, FitnessGoal, FitnessLevel};
