// ABOUTME: Adherence scoring comparing actual nutrition intake against daily goals
// ABOUTME: Mean absolute deviation over calories and macros, clamped to a 0-100 score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Wellness

//! # Adherence Calculator
//!
//! Scores how closely a day's intake tracked the user's goals. A zero goal
//! field would divide by zero in the naive formula; it instead contributes
//! zero deviation when actual intake is also zero and full deviation
//! otherwise. A user with no goals record at all scores 100 by definition.

use crate::errors::EngineResult;
use crate::models::{NutritionGoals, NutritionVector};
use crate::nutrition;
use crate::store::{collections, get_typed, query_typed, DocumentStore, QueryFilter};
use chrono::NaiveDate;
use tracing::debug;

fn deviation(actual: f64, goal: f64) -> f64 {
    if goal == 0.0 {
        if actual == 0.0 {
            0.0
        } else {
            1.0
        }
    } else {
        (actual - goal).abs() / goal
    }
}

/// Score intake against goals on a 0-100 scale
///
/// Averages the relative deviations of calories, protein, carbs, and fat, then
/// maps the mean onto `clamp(0, 100, (1 - mean) * 100)`.
#[must_use]
pub fn adherence_score(actual: &NutritionVector, goals: &NutritionGoals) -> f64 {
    let deviations = [
        deviation(actual.calories, goals.daily_calories),
        deviation(actual.protein_g, goals.macros.protein_g),
        deviation(actual.carbs_g, goals.macros.carbs_g),
        deviation(actual.fat_g, goals.macros.fat_g),
    ];
    let average = deviations.iter().sum::<f64>() / deviations.len() as f64;
    ((1.0 - average) * 100.0).clamp(0.0, 100.0)
}

/// Adherence for one calendar day, read from the store
///
/// Sums the day's logged meals and scores them against the user's goals.
/// Returns 100 when no goals record exists; an absent or empty log scores as
/// zero intake.
pub async fn daily_adherence(
    store: &dyn DocumentStore,
    user_id: &str,
    date: NaiveDate,
) -> EngineResult<f64> {
    let Some(goals) =
        get_typed::<NutritionGoals>(store, collections::NUTRITION_GOALS, user_id).await?
    else {
        debug!(user_id, "no nutrition goals, reporting full adherence");
        return Ok(100.0);
    };

    let filters = [
        QueryFilter::eq("user_id", user_id),
        QueryFilter::eq("date", date.format("%Y-%m-%d").to_string()),
    ];
    let logs: Vec<crate::models::NutritionLog> =
        query_typed(store, collections::NUTRITION_LOGS, &filters).await?;

    let totals = nutrition::sum(
        logs.iter()
            .flat_map(|log| log.meals.iter().map(|meal| &meal.nutrition)),
    );
    Ok(adherence_score(&totals, &goals))
}
