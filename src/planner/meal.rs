// ABOUTME: Daily meal plan generation with dietary filtering and random slot selection
// ABOUTME: Requires nutrition goals and a profile; plans freeze once persisted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Wellness

//! # Meal Plan Generator
//!
//! One plan per user per calendar day. Each slot is filled by filtering the
//! catalog slice for that meal type through the user's dietary restrictions
//! and goal predicate, then picking uniformly at random. Selection is
//! non-deterministic until persisted; the stored plan is frozen.
//!
//! When filtering empties a slot, the goal predicate is dropped and the slot
//! retries with dietary restrictions alone; when even that set is empty the
//! operation fails with [`EngineError::NoCandidates`] rather than indexing
//! into nothing.

use crate::catalog::CatalogProvider;
use crate::dietary;
use crate::errors::{EngineError, EngineResult};
use crate::models::{
    DailyMealPlan, FitnessGoal, MealType, NutritionGoals, RecipeTemplate, UserGoalProfile,
};
use crate::store::{
    collections, create_typed_if_absent, get_typed, keys, set_typed, DocumentStore,
};
use chrono::NaiveDate;
use rand::seq::SliceRandom;
use tracing::{debug, warn};

/// Number of snack slots in a daily plan
const SNACK_SLOTS: usize = 2;

/// Generates and mutates per-day meal plans
pub struct MealPlanGenerator<S, C> {
    store: S,
    catalog: C,
}

impl<S: DocumentStore, C: CatalogProvider> MealPlanGenerator<S, C> {
    /// Create a generator
    #[must_use]
    pub fn new(store: S, catalog: C) -> Self {
        Self { store, catalog }
    }

    /// Return today's meal plan, creating it when absent
    ///
    /// Fails with a precondition error when the user has no nutrition goals or
    /// no goal profile; callers create defaults first. Creation goes through
    /// the store's conditional create, so concurrent generation resolves to a
    /// single frozen plan.
    pub async fn get_or_create_daily_meal_plan(
        &self,
        user_id: &str,
        today: NaiveDate,
    ) -> EngineResult<DailyMealPlan> {
        let key = keys::daily(user_id, today);
        if let Some(existing) =
            get_typed::<DailyMealPlan>(&self.store, collections::DAILY_MEAL_PLANS, &key).await?
        {
            return Ok(existing);
        }

        let goals = get_typed::<NutritionGoals>(&self.store, collections::NUTRITION_GOALS, user_id)
            .await?
            .ok_or_else(|| {
                EngineError::precondition(format!("nutrition goals missing for user {user_id}"))
            })?;
        let profile =
            get_typed::<UserGoalProfile>(&self.store, collections::PROFILES, user_id)
                .await?
                .ok_or_else(|| {
                    EngineError::precondition(format!("goal profile missing for user {user_id}"))
                })?;

        let plan = self.build_plan(user_id, today, &goals, profile.primary_goal)?;

        let created =
            create_typed_if_absent(&self.store, collections::DAILY_MEAL_PLANS, &key, &plan)
                .await?;
        if !created {
            debug!(user_id, %today, "lost meal plan creation race, reading winner");
        }

        get_typed::<DailyMealPlan>(&self.store, collections::DAILY_MEAL_PLANS, &key)
            .await?
            .ok_or_else(|| {
                EngineError::persistence(format!("daily meal plan {key} absent after create"))
            })
    }

    /// Flip the plan's explicit completed flag
    ///
    /// The flag is an explicit user action, never derived from slot state.
    pub async fn mark_meal_plan_completed(
        &self,
        user_id: &str,
        today: NaiveDate,
    ) -> EngineResult<DailyMealPlan> {
        let key = keys::daily(user_id, today);
        let mut plan =
            get_typed::<DailyMealPlan>(&self.store, collections::DAILY_MEAL_PLANS, &key)
                .await?
                .ok_or_else(|| EngineError::not_found(format!("daily meal plan {key}")))?;
        plan.completed = true;
        set_typed(&self.store, collections::DAILY_MEAL_PLANS, &key, &plan).await?;
        Ok(plan)
    }

    fn build_plan(
        &self,
        user_id: &str,
        today: NaiveDate,
        goals: &NutritionGoals,
        goal: FitnessGoal,
    ) -> EngineResult<DailyMealPlan> {
        let breakfast = self.pick_recipe(MealType::Breakfast, goals, goal)?;
        let lunch = self.pick_recipe(MealType::Lunch, goals, goal)?;
        let dinner = self.pick_recipe(MealType::Dinner, goals, goal)?;
        let mut snacks = Vec::with_capacity(SNACK_SLOTS);
        for _ in 0..SNACK_SLOTS {
            snacks.push(self.pick_recipe(MealType::Snack, goals, goal)?);
        }
        Ok(DailyMealPlan {
            user_id: user_id.to_owned(),
            date: today,
            breakfast,
            lunch,
            dinner,
            snacks,
            completed: false,
        })
    }

    fn pick_recipe(
        &self,
        meal_type: MealType,
        goals: &NutritionGoals,
        goal: FitnessGoal,
    ) -> EngineResult<RecipeTemplate> {
        let slice = self.catalog.recipes_for(meal_type);
        let mut candidates = dietary::filter_candidates(slice, goals, goal);
        if candidates.is_empty() {
            warn!(
                %meal_type,
                ?goal,
                "goal predicate emptied the candidate set, widening to restrictions only"
            );
            candidates = dietary::filter_by_restrictions(slice, goals);
        }
        let mut rng = rand::thread_rng();
        candidates
            .choose(&mut rng)
            .map(|&recipe| recipe.clone())
            .ok_or(EngineError::NoCandidates { meal_type })
    }
}
