// ABOUTME: Integration tests for daily workout plan generation and completion tracking
// ABOUTME: Covers idempotence, defaults, catalog fallback, monotonic completion, and the rollup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Wellness

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{day, profile, seed_profile};
use vitality_engine::catalog::StaticCatalog;
use vitality_engine::config::{EngineConfig, RetryConfig};
use vitality_engine::errors::EngineError;
use vitality_engine::models::{FitnessGoal, FitnessLevel, ProgressRollup, UserGoalProfile};
use vitality_engine::planner::WorkoutPlanGenerator;
use vitality_engine::store::memory::InMemoryStore;
use vitality_engine::store::{collections, get_typed};

fn generator(store: InMemoryStore) -> WorkoutPlanGenerator<InMemoryStore, StaticCatalog> {
    let config = EngineConfig {
        retry: RetryConfig {
            max_attempts: 2,
            delay_ms: 10,
        },
        ..EngineConfig::default()
    };
    WorkoutPlanGenerator::with_config(store, StaticCatalog::new(), config)
}

#[tokio::test]
async fn get_or_create_is_idempotent() {
    let store = InMemoryStore::new();
    seed_profile(
        &store,
        &profile("u1", FitnessGoal::WeightLoss, FitnessLevel::Beginner),
    )
    .await;
    let generator = generator(store);

    let today = day(2025, 6, 2);
    let first = generator.get_or_create_daily_workout("u1", today).await.unwrap();
    let second = generator.get_or_create_daily_workout("u1", today).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn missing_profile_persists_default_and_uses_general_beginner() {
    let store = InMemoryStore::new();
    let generator = generator(store.clone());

    let plan = generator
        .get_or_create_daily_workout("u2", day(2025, 6, 2))
        .await
        .unwrap();

    // The default profile was written as a side effect.
    let stored: Option<UserGoalProfile> = get_typed(&store, collections::PROFILES, "u2")
        .await
        .unwrap();
    let stored = stored.unwrap();
    assert_eq!(stored.primary_goal, FitnessGoal::General);
    assert_eq!(stored.fitness_level, FitnessLevel::Beginner);

    // And the plan comes from the general/beginner slice.
    assert_eq!(plan.exercises.len(), 3);
    assert!(plan.exercises.iter().all(|exercise| !exercise.completed));
    assert!(!plan.completed);
}

#[tokio::test]
async fn unprogrammed_goal_level_falls_back_to_general_beginner() {
    let store = InMemoryStore::new();
    seed_profile(
        &store,
        &profile("u3", FitnessGoal::Endurance, FitnessLevel::Advanced),
    )
    .await;
    let generator = generator(store);

    let plan = generator
        .get_or_create_daily_workout("u3", day(2025, 6, 2))
        .await
        .unwrap();

    assert_eq!(plan.exercises[0].exercise_id, "ex-bodyweight-squat");
}

#[tokio::test]
async fn snapshot_applies_set_and_rep_defaults() {
    let store = InMemoryStore::new();
    seed_profile(
        &store,
        &profile("u4", FitnessGoal::WeightLoss, FitnessLevel::Beginner),
    )
    .await;
    let generator = generator(store);

    let plan = generator
        .get_or_create_daily_workout("u4", day(2025, 6, 2))
        .await
        .unwrap();

    // The interval template prescribes its own sets/reps; step-ups omit both.
    let intervals = &plan.exercises[0];
    assert_eq!((intervals.sets, intervals.reps), (1, 1));
    let step_ups = &plan.exercises[1];
    assert_eq!((step_ups.sets, step_ups.reps), (3, 12));
}

#[tokio::test]
async fn marking_out_of_range_index_fails() {
    let store = InMemoryStore::new();
    seed_profile(
        &store,
        &profile("u5", FitnessGoal::WeightLoss, FitnessLevel::Beginner),
    )
    .await;
    let generator = generator(store);
    let today = day(2025, 6, 2);
    generator.get_or_create_daily_workout("u5", today).await.unwrap();

    let err = generator
        .mark_exercise_complete("u5", today, 5)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        EngineError::IndexOutOfRange { index: 5, len: 2 }
    ));
}

#[tokio::test]
async fn marking_without_a_plan_fails_not_found_after_retries() {
    let store = InMemoryStore::new();
    let generator = generator(store);

    let err = generator
        .mark_exercise_complete("u6", day(2025, 6, 2), 0)
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::NotFound { .. }));
}

#[tokio::test]
async fn completion_is_monotonic_and_plan_flag_is_all_of() {
    let store = InMemoryStore::new();
    seed_profile(
        &store,
        &profile("u7", FitnessGoal::WeightLoss, FitnessLevel::Beginner),
    )
    .await;
    let generator = generator(store);
    let today = day(2025, 6, 2);
    generator.get_or_create_daily_workout("u7", today).await.unwrap();

    let after_first = generator
        .mark_exercise_complete("u7", today, 0)
        .await
        .unwrap();
    assert!(after_first.exercises[0].completed);
    assert!(!after_first.completed);

    // Re-marking the same exercise never reverts anything.
    let re_marked = generator
        .mark_exercise_complete("u7", today, 0)
        .await
        .unwrap();
    assert!(re_marked.exercises[0].completed);

    let after_second = generator
        .mark_exercise_complete("u7", today, 1)
        .await
        .unwrap();
    assert!(after_second.exercises.iter().all(|exercise| exercise.completed));
    assert!(after_second.completed);
}

#[tokio::test]
async fn end_to_end_weight_loss_beginner_scenario() {
    let store = InMemoryStore::new();
    let mut user = profile("u8", FitnessGoal::WeightLoss, FitnessLevel::Beginner);
    user.weekly_workouts = 3;
    seed_profile(&store, &user).await;
    let generator = generator(store.clone());
    let today = day(2025, 6, 2);

    let plan = generator.get_or_create_daily_workout("u8", today).await.unwrap();
    assert_eq!(plan.exercises.len(), 2);
    assert!(plan.exercises.iter().all(|exercise| !exercise.completed));
    assert!(!plan.completed);

    generator.mark_exercise_complete("u8", today, 0).await.unwrap();
    let finished = generator.mark_exercise_complete("u8", today, 1).await.unwrap();
    assert!(finished.completed);

    let rollup: Option<ProgressRollup> = get_typed(&store, collections::PROGRESS, "u8")
        .await
        .unwrap();
    let rollup = rollup.unwrap();
    assert_eq!(rollup.workouts_completed, 1);
    assert_eq!(rollup.current_streak, 1);
    assert_eq!(rollup.last_workout_date, Some(today));
}

#[tokio::test]
async fn consecutive_workout_days_extend_the_streak() {
    let store = InMemoryStore::new();
    seed_profile(
        &store,
        &profile("u9", FitnessGoal::WeightLoss, FitnessLevel::Beginner),
    )
    .await;
    let generator = generator(store.clone());

    for (offset, expected_streak) in [(0_u64, 1_u32), (1, 2), (2, 3)] {
        let date = day(2025, 6, 2) + chrono::Days::new(offset);
        generator.get_or_create_daily_workout("u9", date).await.unwrap();
        generator.mark_exercise_complete("u9", date, 0).await.unwrap();
        generator.mark_exercise_complete("u9", date, 1).await.unwrap();

        let rollup: ProgressRollup = get_typed(&store, collections::PROGRESS, "u9")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(rollup.current_streak, expected_streak);
    }

    // A gap resets the streak.
    let later = day(2025, 6, 10);
    generator.get_or_create_daily_workout("u9", later).await.unwrap();
    generator.mark_exercise_complete("u9", later, 0).await.unwrap();
    generator.mark_exercise_complete("u9", later, 1).await.unwrap();
    let rollup: ProgressRollup = get_typed(&store, collections::PROGRESS, "u9")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(rollup.current_streak, 1);
    assert_eq!(rollup.workouts_completed, 4);
}
