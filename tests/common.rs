// ABOUTME: Shared builders and seed helpers for integration tests
// ABOUTME: Constructs profiles, goals, journal entries, and nutrition fixtures against InMemoryStore
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Wellness

#![allow(dead_code)]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use vitality_engine::models::{
    BreathingSession, DietaryRestriction, FitnessGoal, FitnessLevel, Gender, JournalEntry,
    MacroSplit, Motivation, NutritionGoals, NutritionVector, UserGoalProfile,
};
use vitality_engine::store::{collections, set_typed, DocumentStore};

pub fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn noon(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_hms_opt(12, 0, 0).unwrap())
}

pub fn profile(user_id: &str, goal: FitnessGoal, level: FitnessLevel) -> UserGoalProfile {
    UserGoalProfile {
        user_id: user_id.to_owned(),
        primary_goal: goal,
        fitness_level: level,
        weekly_workouts: 3,
        weight_kg: Some(75.0),
        height_cm: Some(175.0),
        age: Some(32),
        gender: Some(Gender::Male),
    }
}

pub fn goals(user_id: &str, restrictions: Vec<DietaryRestriction>) -> NutritionGoals {
    NutritionGoals {
        user_id: user_id.to_owned(),
        daily_calories: 2000.0,
        macros: MacroSplit {
            protein_g: 150.0,
            carbs_g: 250.0,
            fat_g: 70.0,
        },
        water_intake_ml: 2000.0,
        dietary_restrictions: restrictions,
        excluded_ingredients: Vec::new(),
    }
}

pub fn vector(calories: f64, protein_g: f64, carbs_g: f64, fat_g: f64) -> NutritionVector {
    NutritionVector {
        calories,
        protein_g,
        carbs_g,
        fat_g,
        fiber_g: 3.0,
        sugar_g: 5.0,
        sodium_mg: 200.0,
        cholesterol_mg: 10.0,
        saturated_fat_g: 2.0,
        serving_size: 1.0,
        servings: 1.0,
    }
}

pub fn journal_entry(user_id: &str, date: DateTime<Utc>, mood: u8, tags: &[&str]) -> JournalEntry {
    JournalEntry {
        id: uuid::Uuid::new_v4().to_string(),
        user_id: user_id.to_owned(),
        date,
        content: "entry".to_owned(),
        mood,
        mood_tags: tags.iter().map(|&t| t.to_owned()).collect(),
        is_private: false,
    }
}

pub fn breathing_session(user_id: &str, date: DateTime<Utc>, seconds: u32) -> BreathingSession {
    BreathingSession {
        id: uuid::Uuid::new_v4().to_string(),
        user_id: user_id.to_owned(),
        date,
        pattern: "box".to_owned(),
        completed_repetitions: 10,
        duration_seconds: seconds,
        mood_before: Some(3),
        mood_after: Some(4),
    }
}

pub fn motivation(user_id: &str, is_active: bool) -> Motivation {
    Motivation {
        id: uuid::Uuid::new_v4().to_string(),
        user_id: user_id.to_owned(),
        text: "keep going".to_owned(),
        is_active,
    }
}

pub async fn seed_profile(store: &dyn DocumentStore, profile: &UserGoalProfile) {
    set_typed(store, collections::PROFILES, &profile.user_id, profile)
        .await
        .unwrap();
}

pub async fn seed_goals(store: &dyn DocumentStore, goals: &NutritionGoals) {
    set_typed(store, collections::NUTRITION_GOALS, &goals.user_id, goals)
        .await
        .unwrap();
}

pub async fn seed_journal(store: &dyn DocumentStore, entry: &JournalEntry) {
    set_typed(store, collections::JOURNAL_ENTRIES, &entry.id, entry)
        .await
        .unwrap();
}

pub async fn seed_breathing(store: &dyn DocumentStore, session: &BreathingSession) {
    set_typed(store, collections::BREATHING_SESSIONS, &session.id, session)
        .await
        .unwrap();
}

pub async fn seed_motivation(store: &dyn DocumentStore, motivation: &Motivation) {
    set_typed(store, collections::MOTIVATIONS, &motivation.id, motivation)
        .await
        .unwrap();
}
