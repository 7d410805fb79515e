// ABOUTME: Tests for the Harris-Benedict calorie target calculator and macro split
// ABOUTME: Covers gender branches, activity brackets, goal adjustments, and biometric fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Wellness

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use vitality_engine::calorie_targets::{daily_calorie_target, default_goals_for, macro_split};
use vitality_engine::models::{FitnessGoal, FitnessLevel, Gender, UserGoalProfile};

fn profile(
    goal: FitnessGoal,
    gender: Option<Gender>,
    weight_kg: Option<f64>,
    height_cm: Option<f64>,
    age: Option<u32>,
    weekly_workouts: u32,
) -> UserGoalProfile {
    UserGoalProfile {
        user_id: "c1".to_owned(),
        primary_goal: goal,
        fitness_level: FitnessLevel::Beginner,
        weekly_workouts,
        weight_kg,
        height_cm,
        age,
        gender,
    }
}

#[test]
fn male_muscle_gain_target() {
    // BMR 1853.632, x1.375 activity, x1.15 goal.
    let p = profile(
        FitnessGoal::MuscleGain,
        Some(Gender::Male),
        Some(80.0),
        Some(180.0),
        Some(30),
        3,
    );
    assert_eq!(daily_calorie_target(&p), 2931);
}

#[test]
fn female_weight_loss_target() {
    // BMR 1438.578, x1.2 activity, x0.85 goal.
    let p = profile(
        FitnessGoal::WeightLoss,
        Some(Gender::Female),
        Some(65.0),
        Some(165.0),
        Some(28),
        2,
    );
    assert_eq!(daily_calorie_target(&p), 1467);
}

#[test]
fn unspecified_gender_uses_the_non_male_branch() {
    let female = profile(
        FitnessGoal::General,
        Some(Gender::Female),
        Some(65.0),
        Some(165.0),
        Some(28),
        3,
    );
    let unspecified = profile(
        FitnessGoal::General,
        None,
        Some(65.0),
        Some(165.0),
        Some(28),
        3,
    );
    assert_eq!(daily_calorie_target(&female), daily_calorie_target(&unspecified));
}

#[test]
fn activity_brackets_step_at_two_and_four_workouts() {
    let target = |weekly| {
        daily_calorie_target(&profile(
            FitnessGoal::General,
            Some(Gender::Male),
            Some(80.0),
            Some(180.0),
            Some(30),
            weekly,
        ))
    };
    // BMR 1853.632 times 1.2 / 1.375 / 1.55.
    assert_eq!(target(0), 2224);
    assert_eq!(target(2), 2224);
    assert_eq!(target(3), 2549);
    assert_eq!(target(4), 2549);
    assert_eq!(target(5), 2873);
}

#[test]
fn incomplete_biometrics_fall_back_without_adjustment() {
    let weight_loss = profile(FitnessGoal::WeightLoss, Some(Gender::Male), None, Some(180.0), Some(30), 6);
    assert_eq!(daily_calorie_target(&weight_loss), 1800);

    let general = profile(FitnessGoal::General, None, Some(80.0), None, None, 6);
    assert_eq!(daily_calorie_target(&general), 2200);
}

#[test]
fn macro_split_ratios_follow_the_goal() {
    let weight_loss = macro_split(2000.0, FitnessGoal::WeightLoss);
    assert!((weight_loss.protein_g - 125.0).abs() < 1e-9);
    assert!((weight_loss.carbs_g - 200.0).abs() < 1e-9);
    assert!((weight_loss.fat_g - 56.0).abs() < 1e-9);

    let muscle_gain = macro_split(2000.0, FitnessGoal::MuscleGain);
    assert!((muscle_gain.protein_g - 150.0).abs() < 1e-9);
    assert!((muscle_gain.carbs_g - 250.0).abs() < 1e-9);
    assert!((muscle_gain.fat_g - 56.0).abs() < 1e-9);
}

#[test]
fn default_goals_derive_from_the_calculator() {
    let p = profile(
        FitnessGoal::MuscleGain,
        Some(Gender::Male),
        Some(80.0),
        Some(180.0),
        Some(30),
        3,
    );
    let goals = default_goals_for(&p);

    assert!((goals.daily_calories - 2931.0).abs() < 1e-9);
    assert!((goals.macros.protein_g - (2931.0_f64 * 0.30 / 4.0).round()).abs() < 1e-9);
    assert!((goals.water_intake_ml - 2000.0).abs() < 1e-9);
    assert!(goals.dietary_restrictions.is_empty());
}
