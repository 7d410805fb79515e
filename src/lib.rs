// ABOUTME: Personalization and progress analytics engine for the Vitality wellness platform
// ABOUTME: Plan generation, nutrition aggregation, adherence scoring, and derived wellness stats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Wellness

//! # Vitality Engine
//!
//! The decision and aggregation core of the Vitality wellness tracker. UI code
//! calls these generators and calculators; everything persists through the
//! [`store::DocumentStore`] abstraction over the hosted document database.
//!
//! - [`planner::WorkoutPlanGenerator`] — one workout plan per user per day,
//!   snapshotted from the catalog and completed monotonically
//! - [`planner::MealPlanGenerator`] — one meal plan per user per day, filtered
//!   by dietary restrictions and fitness goal
//! - [`nutrition`] — scaling and summation over nutrition vectors
//! - [`adherence`] — 0-100 scores for actual-versus-goal intake
//! - [`stats::MentalHealthStatsEngine`] — mood trends, streaks, and breathing
//!   minutes derived from trailing windows
//! - [`calorie_targets`] — Harris-Benedict calorie targets and macro splits

/// Adherence scoring against nutrition goals
pub mod adherence;
/// Harris-Benedict calorie targets and macro splits
pub mod calorie_targets;
/// Read-only exercise and recipe template catalog
pub mod catalog;
/// Engine configuration
pub mod config;
/// Engine-wide constants
pub mod constants;
/// Dietary restriction and goal predicates
pub mod dietary;
/// Error taxonomy
pub mod errors;
/// Logging setup for embedding hosts
pub mod logging;
/// Domain models
pub mod models;
/// Nutrition vector aggregation
pub mod nutrition;
/// Per-day plan generators
pub mod planner;
/// Derived statistics engines
pub mod stats;
/// Document store boundary
pub mod store;

pub use config::{EngineConfig, RetryConfig};
pub use errors::{EngineError, EngineResult};
