// ABOUTME: Daily workout plan generation, exercise completion, and the progress rollup
// ABOUTME: Idempotent per (user, day); completion is monotonic and verified by read-back
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Wellness

//! # Workout Plan Generator
//!
//! One plan per user per calendar day, snapshotted from the catalog slice for
//! the user's goal and level. Creation goes through the store's atomic
//! conditional create; when two concurrent requests race, exactly one plan
//! wins and both callers observe it. Marking exercises complete never reverts
//! a completed flag, and the plan-level flag holds iff every exercise is done.

use crate::catalog::CatalogProvider;
use crate::config::EngineConfig;
use crate::errors::{EngineError, EngineResult};
use crate::models::{
    DailyExercise, DailyWorkoutPlan, FitnessGoal, FitnessLevel, ProgressRollup, UserGoalProfile,
};
use crate::store::{
    collections, create_typed_if_absent, get_typed, keys, set_typed, DocumentStore,
};
use chrono::NaiveDate;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Generates and mutates per-day workout plans
pub struct WorkoutPlanGenerator<S, C> {
    store: S,
    catalog: C,
    config: EngineConfig,
}

impl<S: DocumentStore, C: CatalogProvider> WorkoutPlanGenerator<S, C> {
    /// Create a generator with the default configuration
    #[must_use]
    pub fn new(store: S, catalog: C) -> Self {
        Self::with_config(store, catalog, EngineConfig::default())
    }

    /// Create a generator with a custom configuration
    #[must_use]
    pub fn with_config(store: S, catalog: C, config: EngineConfig) -> Self {
        Self {
            store,
            catalog,
            config,
        }
    }

    /// Return today's plan, creating it from the catalog when absent
    ///
    /// Idempotent per (user, day): repeated calls without mutation return the
    /// identical plan. A missing profile is replaced by a persisted default
    /// (general/beginner); a missing catalog slice falls back to the
    /// general/beginner slice.
    pub async fn get_or_create_daily_workout(
        &self,
        user_id: &str,
        today: NaiveDate,
    ) -> EngineResult<DailyWorkoutPlan> {
        let key = keys::daily(user_id, today);
        if let Some(existing) =
            get_typed::<DailyWorkoutPlan>(&self.store, collections::DAILY_WORKOUTS, &key).await?
        {
            return Ok(existing);
        }

        let profile = self.load_or_create_profile(user_id).await?;
        let plan = self.build_plan(user_id, today, &profile);

        let created =
            create_typed_if_absent(&self.store, collections::DAILY_WORKOUTS, &key, &plan).await?;
        if !created {
            debug!(user_id, %today, "lost plan creation race, reading winner");
        }

        // Read-back verification covers both the winner and the loser of a
        // concurrent create.
        get_typed::<DailyWorkoutPlan>(&self.store, collections::DAILY_WORKOUTS, &key)
            .await?
            .ok_or_else(|| {
                EngineError::persistence(format!("daily workout plan {key} absent after create"))
            })
    }

    /// Mark one exercise complete and recompute the plan-level flag
    ///
    /// Waits a bounded number of attempts for the plan to materialize (covers
    /// a race with concurrent generation), then flips the exercise flag to
    /// true. Completion is monotonic: a completed exercise stays completed.
    /// The write is verified by read-back. When the plan transitions to fully
    /// complete, the user's progress rollup is updated.
    pub async fn mark_exercise_complete(
        &self,
        user_id: &str,
        today: NaiveDate,
        index: usize,
    ) -> EngineResult<DailyWorkoutPlan> {
        let key = keys::daily(user_id, today);
        let mut plan = self.wait_for_plan(&key).await?;

        if index >= plan.exercises.len() {
            return Err(EngineError::IndexOutOfRange {
                index,
                len: plan.exercises.len(),
            });
        }

        let was_complete = plan.completed;
        plan.exercises[index].completed = true;
        plan.completed = plan.exercises.iter().all(|exercise| exercise.completed);

        set_typed(&self.store, collections::DAILY_WORKOUTS, &key, &plan).await?;

        let stored =
            get_typed::<DailyWorkoutPlan>(&self.store, collections::DAILY_WORKOUTS, &key)
                .await?
                .ok_or_else(|| {
                    EngineError::persistence(format!("daily workout plan {key} absent after write"))
                })?;
        if !stored.exercises[index].completed {
            return Err(EngineError::persistence(format!(
                "exercise {index} completion did not stick for plan {key}"
            )));
        }

        if stored.completed && !was_complete {
            info!(user_id, %today, "daily workout completed");
            self.record_completed_workout(user_id, today).await?;
        }

        Ok(stored)
    }

    async fn load_or_create_profile(&self, user_id: &str) -> EngineResult<UserGoalProfile> {
        if let Some(profile) =
            get_typed::<UserGoalProfile>(&self.store, collections::PROFILES, user_id).await?
        {
            return Ok(profile);
        }
        let profile = UserGoalProfile::default_for(user_id);
        warn!(user_id, "no goal profile found, persisting default");
        set_typed(&self.store, collections::PROFILES, user_id, &profile).await?;
        Ok(profile)
    }

    fn build_plan(
        &self,
        user_id: &str,
        today: NaiveDate,
        profile: &UserGoalProfile,
    ) -> DailyWorkoutPlan {
        let mut templates = self
            .catalog
            .exercises_for(profile.primary_goal, profile.fitness_level);
        if templates.is_empty() {
            debug!(
                user_id,
                goal = ?profile.primary_goal,
                level = ?profile.fitness_level,
                "no catalog slice for goal/level, falling back to general/beginner"
            );
            templates = self
                .catalog
                .exercises_for(FitnessGoal::General, FitnessLevel::Beginner);
        }
        DailyWorkoutPlan {
            user_id: user_id.to_owned(),
            date: today,
            exercises: templates.iter().map(DailyExercise::from_template).collect(),
            completed: false,
        }
    }

    async fn wait_for_plan(&self, key: &str) -> EngineResult<DailyWorkoutPlan> {
        let retry = self.config.retry;
        for attempt in 1..=retry.max_attempts {
            if let Some(plan) =
                get_typed::<DailyWorkoutPlan>(&self.store, collections::DAILY_WORKOUTS, key)
                    .await?
            {
                return Ok(plan);
            }
            if attempt < retry.max_attempts {
                debug!(key, attempt, "plan not yet visible, retrying");
                tokio::time::sleep(Duration::from_millis(retry.delay_ms)).await;
            }
        }
        Err(EngineError::not_found(format!("daily workout plan {key}")))
    }

    async fn record_completed_workout(&self, user_id: &str, date: NaiveDate) -> EngineResult<()> {
        let mut rollup =
            get_typed::<ProgressRollup>(&self.store, collections::PROGRESS, user_id)
                .await?
                .unwrap_or_else(|| ProgressRollup::empty(user_id));

        // A day already counted never bumps the counters twice.
        if rollup.last_workout_date == Some(date) {
            return Ok(());
        }

        rollup.workouts_completed += 1;
        rollup.current_streak = match rollup.last_workout_date {
            Some(previous) if previous.succ_opt() == Some(date) => rollup.current_streak + 1,
            _ => 1,
        };
        rollup.last_workout_date = Some(date);

        set_typed(&self.store, collections::PROGRESS, user_id, &rollup).await
    }
}
