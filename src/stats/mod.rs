// ABOUTME: Derived statistics engines over append-only wellness records
// ABOUTME: Snapshots are caches, recomputed and overwritten whenever records change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Wellness

//! Derived statistics

/// Mood trend, journal streak, tag frequency, and breathing minute derivation
pub mod mental_health;

pub use mental_health::MentalHealthStatsEngine;
