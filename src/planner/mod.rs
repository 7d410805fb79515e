// ABOUTME: Per-day plan generators for workouts and meals
// ABOUTME: Idempotent per (user, day) via atomic conditional creates against the store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Wellness

//! Plan generation

/// Daily meal plan generation with dietary and goal filtering
pub mod meal;
/// Daily workout plan generation and completion tracking
pub mod workout;

pub use meal::MealPlanGenerator;
pub use workout::WorkoutPlanGenerator;
