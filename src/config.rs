// ABOUTME: Engine configuration for retry policy, analysis thresholds, and window sizes
// ABOUTME: Every generator and stats engine accepts a config via with_config constructors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Wellness

//! Engine configuration
//!
//! A single [`EngineConfig`] value is shared by the plan generators and the
//! mental health stats engine. Defaults match production behavior; tests tune
//! the retry policy down to keep runs fast.

use serde::{Deserialize, Serialize};

/// Bounded retry policy for waiting on a just-written document to become visible
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum read attempts before giving up
    pub max_attempts: u32,
    /// Delay between attempts in milliseconds
    pub delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay_ms: 1000,
        }
    }
}

/// Tunable parameters for the engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Retry policy for plan-visibility waits
    pub retry: RetryConfig,
    /// Mean consecutive mood delta above which a trend classifies as improving
    pub trend_improving_threshold: f64,
    /// Mean consecutive mood delta below which a trend classifies as declining
    pub trend_declining_threshold: f64,
    /// Trailing journal window in days
    pub journal_window_days: i64,
    /// Trailing breathing session window in hours
    pub breathing_window_hours: i64,
    /// Maximum number of common mood tags reported
    pub common_tag_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            retry: RetryConfig::default(),
            trend_improving_threshold: 0.2,
            trend_declining_threshold: -0.2,
            journal_window_days: 30,
            breathing_window_hours: 24,
            common_tag_limit: 3,
        }
    }
}
