// ABOUTME: Tests for nutrition vector aggregation and adherence scoring
// ABOUTME: Covers scaling linearity, zero-vector identity, score bounds, and zero-goal edges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Wellness

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::Utc;
use common::{day, goals, vector};
use vitality_engine::adherence::{adherence_score, daily_adherence};
use vitality_engine::models::{LoggedMeal, MacroSplit, MealType, NutritionLog, NutritionVector};
use vitality_engine::nutrition::{daily_totals, scale, sum};
use vitality_engine::store::memory::InMemoryStore;
use vitality_engine::store::{collections, set_typed};

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{a} != {b}");
}

#[test]
fn sum_of_nothing_is_the_zero_vector() {
    let empty: [&NutritionVector; 0] = [];
    assert_eq!(sum(empty), NutritionVector::zero());
}

#[test]
fn scale_by_one_is_identity() {
    let v = vector(450.0, 30.0, 40.0, 15.0);
    assert_eq!(scale(&v, 1.0), v);
}

#[test]
fn scale_leaves_serving_metadata_untouched() {
    let mut v = vector(200.0, 10.0, 20.0, 5.0);
    v.serving_size = 150.0;
    v.servings = 2.0;

    let scaled = scale(&v, 3.0);
    assert_close(scaled.calories, 600.0);
    assert_close(scaled.protein_g, 30.0);
    assert_close(scaled.serving_size, 150.0);
    assert_close(scaled.servings, 2.0);
}

#[test]
fn sum_excludes_serving_metadata() {
    let mut a = vector(100.0, 5.0, 10.0, 2.0);
    a.servings = 4.0;
    let mut b = vector(200.0, 10.0, 20.0, 4.0);
    b.servings = 2.0;

    let total = sum([&a, &b]);
    assert_close(total.calories, 300.0);
    assert_close(total.servings, 0.0);
    assert_close(total.serving_size, 0.0);
}

#[test]
fn scaling_distributes_over_summation() {
    let a = vector(310.0, 9.0, 58.0, 6.0);
    let b = vector(440.0, 36.0, 14.0, 19.0);
    let k = 2.5;

    let scaled_sum = scale(&sum([&a, &b]), k);
    let sum_scaled = sum([&scale(&a, k), &scale(&b, k)]);

    assert_close(scaled_sum.calories, sum_scaled.calories);
    assert_close(scaled_sum.protein_g, sum_scaled.protein_g);
    assert_close(scaled_sum.carbs_g, sum_scaled.carbs_g);
    assert_close(scaled_sum.fat_g, sum_scaled.fat_g);
    assert_close(scaled_sum.sodium_mg, sum_scaled.sodium_mg);
}

#[test]
fn perfect_adherence_scores_one_hundred() {
    let user_goals = goals("n1", vec![]);
    let actual = vector(2000.0, 150.0, 250.0, 70.0);
    assert_close(adherence_score(&actual, &user_goals), 100.0);
}

#[test]
fn adherence_stays_within_bounds() {
    let user_goals = goals("n2", vec![]);
    for actual in [
        vector(0.0, 0.0, 0.0, 0.0),
        vector(500.0, 20.0, 60.0, 10.0),
        vector(4000.0, 300.0, 500.0, 140.0),
        vector(9000.0, 900.0, 900.0, 900.0),
    ] {
        let score = adherence_score(&actual, &user_goals);
        assert!((0.0..=100.0).contains(&score), "score {score} out of bounds");
    }
}

#[test]
fn zero_goal_fields_are_special_cased() {
    let mut user_goals = goals("n3", vec![]);
    user_goals.daily_calories = 0.0;
    user_goals.macros = MacroSplit {
        protein_g: 0.0,
        carbs_g: 0.0,
        fat_g: 0.0,
    };

    // Nothing eaten against zero goals deviates by nothing.
    assert_close(adherence_score(&NutritionVector::zero(), &user_goals), 100.0);
    // Anything eaten against zero goals is full deviation.
    assert_close(
        adherence_score(&vector(500.0, 20.0, 60.0, 10.0), &user_goals),
        0.0,
    );
}

#[test]
fn daily_totals_sums_logged_meals() {
    let log = NutritionLog {
        id: "log-1".to_owned(),
        user_id: "n4".to_owned(),
        date: day(2025, 6, 2),
        meals: vec![
            LoggedMeal {
                name: "Oatmeal".to_owned(),
                meal_type: MealType::Breakfast,
                nutrition: vector(310.0, 9.0, 58.0, 6.0),
                logged_at: Utc::now(),
            },
            LoggedMeal {
                name: "Salad".to_owned(),
                meal_type: MealType::Lunch,
                nutrition: vector(380.0, 38.0, 12.0, 18.0),
                logged_at: Utc::now(),
            },
        ],
        water_intake_ml: 1200.0,
    };

    let totals = daily_totals(&log);
    assert_close(totals.calories, 690.0);
    assert_close(totals.protein_g, 47.0);
}

#[tokio::test]
async fn daily_adherence_defaults_to_one_hundred_without_goals() {
    let store = InMemoryStore::new();
    let score = daily_adherence(&store, "n5", day(2025, 6, 2)).await.unwrap();
    assert_close(score, 100.0);
}

#[tokio::test]
async fn daily_adherence_reads_log_and_goals_from_the_store() {
    let store = InMemoryStore::new();
    let user_goals = goals("n6", vec![]);
    set_typed(&store, collections::NUTRITION_GOALS, "n6", &user_goals)
        .await
        .unwrap();

    let log = NutritionLog {
        id: "log-n6".to_owned(),
        user_id: "n6".to_owned(),
        date: day(2025, 6, 2),
        meals: vec![LoggedMeal {
            name: "Everything".to_owned(),
            meal_type: MealType::Dinner,
            nutrition: vector(2000.0, 150.0, 250.0, 70.0),
            logged_at: Utc::now(),
        }],
        water_intake_ml: 2000.0,
    };
    set_typed(&store, collections::NUTRITION_LOGS, &log.id, &log)
        .await
        .unwrap();

    let score = daily_adherence(&store, "n6", day(2025, 6, 2)).await.unwrap();
    assert_close(score, 100.0);

    // A different day has no log: zero intake against real goals floors at 0.
    let other = daily_adherence(&store, "n6", day(2025, 6, 3)).await.unwrap();
    assert_close(other, 0.0);
}
