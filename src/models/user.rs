// ABOUTME: User goal profile from onboarding and the per-user progress rollup
// ABOUTME: UserGoalProfile, Gender, and ProgressRollup definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Wellness

use super::workout::{FitnessGoal, FitnessLevel};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Self-reported gender, used only to branch the BMR formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male formula branch
    Male,
    /// Non-male formula branch
    Female,
    /// Non-male formula branch
    Other,
}

/// Goal profile captured at onboarding
///
/// Biometrics are optional; the calorie calculator falls back to fixed targets
/// when any of weight, height, or age is missing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserGoalProfile {
    /// Owning user id
    pub user_id: String,
    /// Primary training goal
    pub primary_goal: FitnessGoal,
    /// Self-reported experience level
    pub fitness_level: FitnessLevel,
    /// Planned workouts per week
    pub weekly_workouts: u32,
    /// Body weight in kilograms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// Height in centimeters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    /// Age in years
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Gender for the BMR branch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
}

impl UserGoalProfile {
    /// Default profile persisted when a user has none: general goal, beginner
    /// level, three workouts a week, no biometrics
    #[must_use]
    pub fn default_for(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            primary_goal: FitnessGoal::General,
            fitness_level: FitnessLevel::Beginner,
            weekly_workouts: 3,
            weight_kg: None,
            height_cm: None,
            age: None,
            gender: None,
        }
    }
}

/// Per-user rollup counters updated as workouts complete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressRollup {
    /// Owning user id
    pub user_id: String,
    /// Total daily workout plans completed
    pub workouts_completed: u64,
    /// Consecutive workout days ending at the last workout date
    pub current_streak: u32,
    /// Day of the most recently completed workout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_workout_date: Option<NaiveDate>,
}

impl ProgressRollup {
    /// Empty rollup for a user with no completed workouts
    #[must_use]
    pub fn empty(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            workouts_completed: 0,
            current_streak: 0,
            last_workout_date: None,
        }
    }
}
