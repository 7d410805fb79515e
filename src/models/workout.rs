// ABOUTME: Exercise catalog templates and per-day workout plan models
// ABOUTME: FitnessGoal/FitnessLevel enums, ExerciseTemplate, DailyExercise, DailyWorkoutPlan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Wellness

use crate::constants::workout::{DEFAULT_REPS, DEFAULT_SETS};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Primary training goal driving catalog selection and calorie adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    /// General fitness, no specialized programming
    #[default]
    General,
    /// Calorie-deficit oriented programming
    WeightLoss,
    /// Hypertrophy oriented programming
    MuscleGain,
    /// Aerobic-capacity oriented programming
    Endurance,
}

/// Self-reported experience level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FitnessLevel {
    /// New to structured training
    #[default]
    Beginner,
    /// Comfortable with common movements
    Intermediate,
    /// Experienced, handles complex programming
    Advanced,
}

/// Immutable exercise catalog entry
///
/// Owned by the catalog and never mutated; plans snapshot these fields at
/// creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseTemplate {
    /// Stable catalog identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Muscle groups targeted
    pub muscle_groups: Vec<String>,
    /// Equipment required (empty for bodyweight)
    pub equipment: Vec<String>,
    /// Difficulty rating
    pub difficulty: FitnessLevel,
    /// Ordered instruction steps
    pub instruction_steps: Vec<String>,
    /// Ordered coaching tips
    pub tips: Vec<String>,
    /// Expected duration in minutes
    pub duration_minutes: u32,
    /// Estimated calorie burn per minute
    pub calories_per_minute: f64,
    /// Prescribed sets, when the template specifies them
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sets: Option<u32>,
    /// Prescribed reps, when the template specifies them
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
}

/// One exercise inside a daily plan, snapshotted from its template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyExercise {
    /// Id of the catalog template this was snapshotted from
    pub exercise_id: String,
    /// Display name
    pub name: String,
    /// Muscle groups targeted
    pub muscle_groups: Vec<String>,
    /// Equipment required
    pub equipment: Vec<String>,
    /// Difficulty rating
    pub difficulty: FitnessLevel,
    /// Ordered instruction steps
    pub instruction_steps: Vec<String>,
    /// Ordered coaching tips
    pub tips: Vec<String>,
    /// Expected duration in minutes
    pub duration_minutes: u32,
    /// Estimated calorie burn per minute
    pub calories_per_minute: f64,
    /// Prescribed sets
    pub sets: u32,
    /// Prescribed reps
    pub reps: u32,
    /// Whether the user has completed this exercise (monotonic, never reverts)
    pub completed: bool,
}

impl DailyExercise {
    /// Snapshot a catalog template into a plan entry, applying set/rep defaults
    #[must_use]
    pub fn from_template(template: &ExerciseTemplate) -> Self {
        Self {
            exercise_id: template.id.clone(),
            name: template.name.clone(),
            muscle_groups: template.muscle_groups.clone(),
            equipment: template.equipment.clone(),
            difficulty: template.difficulty,
            instruction_steps: template.instruction_steps.clone(),
            tips: template.tips.clone(),
            duration_minutes: template.duration_minutes,
            calories_per_minute: template.calories_per_minute,
            sets: template.sets.unwrap_or(DEFAULT_SETS),
            reps: template.reps.unwrap_or(DEFAULT_REPS),
            completed: false,
        }
    }
}

/// Per-user, per-day workout plan
///
/// Created once per (user, day) and never deleted by the engine. `completed`
/// holds iff every exercise in the list is completed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyWorkoutPlan {
    /// Owning user id
    pub user_id: String,
    /// Calendar day the plan covers
    pub date: NaiveDate,
    /// Ordered exercises snapshotted at creation time
    pub exercises: Vec<DailyExercise>,
    /// True iff every exercise is completed
    pub completed: bool,
}
