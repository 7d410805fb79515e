// ABOUTME: Document store abstraction consumed by every generator and stats engine
// ABOUTME: Async trait with get/set/update/conditional-create/query plus key schema and typed helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Wellness

//! # Document Store Boundary
//!
//! The engine persists everything through this abstraction. Implementations
//! return `anyhow::Result` at the trait boundary; the typed helpers in this
//! module convert failures into [`EngineError`] for engine callers.
//!
//! `create_if_absent` is the atomic conditional create that closes the
//! read-then-write race on per-day plan keys: two concurrent generators both
//! observing "absent" resolve to a single winner, and the loser reads the
//! winner's document back.

/// In-memory implementation for tests and embedded use
pub mod memory;

use crate::errors::{EngineError, EngineResult};
use anyhow::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Collection names used by the engine's fixed key schema
pub mod collections {
    /// `DailyWorkoutPlan` documents keyed by `{user_id}_{YYYY-MM-DD}`
    pub const DAILY_WORKOUTS: &str = "daily_workouts";
    /// `DailyMealPlan` documents keyed by `{user_id}_{YYYY-MM-DD}`
    pub const DAILY_MEAL_PLANS: &str = "daily_meal_plans";
    /// `NutritionLog` documents keyed by generated id, queried by user and date
    pub const NUTRITION_LOGS: &str = "nutrition_logs";
    /// `NutritionGoals` documents keyed by `{user_id}`
    pub const NUTRITION_GOALS: &str = "nutrition_goals";
    /// `MentalHealthStats` snapshots keyed by `{user_id}_{YYYY-MM-DD}`
    pub const MENTAL_HEALTH_STATS: &str = "mental_health_stats";
    /// Append-only `JournalEntry` documents keyed by generated id
    pub const JOURNAL_ENTRIES: &str = "journal_entries";
    /// Append-only `BreathingSession` documents keyed by generated id
    pub const BREATHING_SESSIONS: &str = "breathing_sessions";
    /// Append-only `Motivation` documents keyed by generated id
    pub const MOTIVATIONS: &str = "motivations";
    /// `UserGoalProfile` documents keyed by `{user_id}`
    pub const PROFILES: &str = "profiles";
    /// `ProgressRollup` documents keyed by `{user_id}`
    pub const PROGRESS: &str = "progress";
}

/// Key construction for the fixed schema
pub mod keys {
    use chrono::NaiveDate;

    /// Per-day key: `{user_id}_{YYYY-MM-DD}`
    #[must_use]
    pub fn daily(user_id: &str, date: NaiveDate) -> String {
        format!("{user_id}_{}", date.format("%Y-%m-%d"))
    }
}

/// Equality filter on a top-level document field
#[derive(Debug, Clone)]
pub struct QueryFilter {
    /// Field name to match
    pub field: String,
    /// Required value
    pub value: Value,
}

impl QueryFilter {
    /// Filter requiring `field == value`
    #[must_use]
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Abstract key/value + query document store
///
/// Mirrors the hosted document database the production app talks to. All
/// writes replace or merge a single key in one call; there are no torn writes
/// within a key.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch a document, `None` when absent
    async fn get(&self, collection: &str, key: &str) -> Result<Option<Value>>;

    /// Upsert a document, replacing any existing value
    async fn set(&self, collection: &str, key: &str, document: Value) -> Result<()>;

    /// Shallow-merge a partial document into an existing one (upsert when absent)
    async fn update(&self, collection: &str, key: &str, partial: Value) -> Result<()>;

    /// Atomically create the document only when the key is absent
    ///
    /// Returns `true` when this call created the document, `false` when the key
    /// already existed (the caller lost the race and should read back).
    async fn create_if_absent(&self, collection: &str, key: &str, document: Value)
        -> Result<bool>;

    /// Query documents by equality filters with optional ordering and limit
    async fn query(
        &self,
        collection: &str,
        filters: &[QueryFilter],
        order_by: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Vec<Value>>;
}

/// Fetch and deserialize a document
pub async fn get_typed<T: DeserializeOwned>(
    store: &dyn DocumentStore,
    collection: &str,
    key: &str,
) -> EngineResult<Option<T>> {
    match store.get(collection, key).await? {
        Some(value) => Ok(Some(serde_json::from_value(value)?)),
        None => Ok(None),
    }
}

/// Serialize and upsert a document
pub async fn set_typed<T: Serialize>(
    store: &dyn DocumentStore,
    collection: &str,
    key: &str,
    document: &T,
) -> EngineResult<()> {
    store
        .set(collection, key, serde_json::to_value(document)?)
        .await
        .map_err(EngineError::from)
}

/// Serialize and conditionally create a document; `true` when this call won
pub async fn create_typed_if_absent<T: Serialize>(
    store: &dyn DocumentStore,
    collection: &str,
    key: &str,
    document: &T,
) -> EngineResult<bool> {
    store
        .create_if_absent(collection, key, serde_json::to_value(document)?)
        .await
        .map_err(EngineError::from)
}

/// Query and deserialize documents
pub async fn query_typed<T: DeserializeOwned>(
    store: &dyn DocumentStore,
    collection: &str,
    filters: &[QueryFilter],
) -> EngineResult<Vec<T>> {
    let raw = store.query(collection, filters, None, None).await?;
    raw.into_iter()
        .map(|value| serde_json::from_value(value).map_err(EngineError::from))
        .collect()
}
