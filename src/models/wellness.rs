// ABOUTME: Mental wellness records and the derived per-day stats snapshot
// ABOUTME: JournalEntry, BreathingSession, Motivation, MoodTrend, MentalHealthStats definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Wellness

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Three-way mood trend classification derived from sequential mood ratings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MoodTrend {
    /// Mean consecutive delta above the improving threshold
    Improving,
    /// Between the thresholds, or fewer than two entries
    #[default]
    Stable,
    /// Mean consecutive delta below the declining threshold
    Declining,
}

/// A journal entry with a 1-5 mood rating
///
/// Append/update/delete by the user; the date is immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Store-generated identifier
    pub id: String,
    /// Owning user id
    pub user_id: String,
    /// When the entry was written
    pub date: DateTime<Utc>,
    /// Free-text content
    pub content: String,
    /// Mood rating from 1 (low) to 5 (high)
    pub mood: u8,
    /// Mood descriptor tags
    pub mood_tags: Vec<String>,
    /// Whether the entry is hidden from shared views
    pub is_private: bool,
}

/// A completed guided breathing session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreathingSession {
    /// Store-generated identifier
    pub id: String,
    /// Owning user id
    pub user_id: String,
    /// When the session ended
    pub date: DateTime<Utc>,
    /// Breathing pattern name (box, 4-7-8, ...)
    pub pattern: String,
    /// Repetitions completed
    pub completed_repetitions: u32,
    /// Total session length in seconds
    pub duration_seconds: u32,
    /// Self-reported mood before the session
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood_before: Option<u8>,
    /// Self-reported mood after the session
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood_after: Option<u8>,
}

/// A user-authored motivation card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Motivation {
    /// Store-generated identifier
    pub id: String,
    /// Owning user id
    pub user_id: String,
    /// Motivation text
    pub text: String,
    /// Whether the card is currently shown
    pub is_active: bool,
}

/// Derived per-day mental health snapshot
///
/// Fully recomputable from journal, breathing, and motivation history. A cache,
/// never a source of truth: callers overwrite it whenever underlying records
/// change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentalHealthStats {
    /// Owning user id
    pub user_id: String,
    /// Reference day the snapshot was computed for
    pub date: NaiveDate,
    /// Mean mood across the journal window, one decimal
    pub average_mood: f64,
    /// Trend classification across the journal window
    pub mood_trend: MoodTrend,
    /// Most frequent mood tags, at most three, ties by first-seen order
    pub common_mood_tags: Vec<String>,
    /// Consecutive days with at least one entry, walking back from `date`
    pub journal_streak: u32,
    /// Breathing minutes across the trailing 24 hours, rounded
    pub breathing_minutes: u32,
    /// Count of currently active motivations
    pub active_motivations: u32,
}
