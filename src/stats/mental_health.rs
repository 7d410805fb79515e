// ABOUTME: Mental health stats derivation: mood trend, tag frequency, streaks, breathing minutes
// ABOUTME: Recomputes a per-day snapshot from trailing journal and breathing windows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Wellness

//! # Mental Health Stats Engine
//!
//! Derives a per-day snapshot from the trailing 30 days of journal entries,
//! the trailing 24 hours of breathing sessions, and the currently active
//! motivations. The snapshot is a cache keyed by (user, day): recomputation
//! overwrites it, nothing ever appends to it.

use crate::config::EngineConfig;
use crate::errors::EngineResult;
use crate::models::{
    BreathingSession, JournalEntry, MentalHealthStats, MoodTrend, Motivation,
};
use crate::store::{collections, keys, query_typed, set_typed, DocumentStore, QueryFilter};
use chrono::{DateTime, Days, NaiveDate, Utc};
use std::cmp::Reverse;
use std::collections::HashSet;
use tracing::debug;

use crate::constants::wellness::{DEFAULT_AVERAGE_MOOD, MIN_TREND_ENTRIES};

/// Recomputes per-day mental health snapshots
pub struct MentalHealthStatsEngine<S> {
    store: S,
    config: EngineConfig,
}

/// Mean mood across a window, rounded to one decimal; 3.0 for an empty window
#[must_use]
pub fn average_mood(entries: &[JournalEntry]) -> f64 {
    if entries.is_empty() {
        return DEFAULT_AVERAGE_MOOD;
    }
    let total: f64 = entries.iter().map(|entry| f64::from(entry.mood)).sum();
    let mean = total / entries.len() as f64;
    (mean * 10.0).round() / 10.0
}

/// Classify a mood trend from the mean of consecutive mood deltas
///
/// Entries are sorted by date ascending before deltas are taken. Fewer than
/// two entries is always stable.
#[must_use]
pub fn mood_trend(entries: &[JournalEntry], config: &EngineConfig) -> MoodTrend {
    if entries.len() < MIN_TREND_ENTRIES {
        return MoodTrend::Stable;
    }
    let mut ordered: Vec<&JournalEntry> = entries.iter().collect();
    ordered.sort_by_key(|entry| entry.date);

    let deltas: Vec<f64> = ordered
        .windows(2)
        .map(|pair| f64::from(pair[1].mood) - f64::from(pair[0].mood))
        .collect();
    let mean_delta = deltas.iter().sum::<f64>() / deltas.len() as f64;

    if mean_delta > config.trend_improving_threshold {
        MoodTrend::Improving
    } else if mean_delta < config.trend_declining_threshold {
        MoodTrend::Declining
    } else {
        MoodTrend::Stable
    }
}

/// Most frequent mood tags across a window, ties broken by first-seen order
#[must_use]
pub fn common_mood_tags(entries: &[JournalEntry], limit: usize) -> Vec<String> {
    let mut ordered: Vec<&JournalEntry> = entries.iter().collect();
    ordered.sort_by_key(|entry| entry.date);

    let mut counts: Vec<(String, usize)> = Vec::new();
    for entry in ordered {
        for tag in &entry.mood_tags {
            match counts.iter_mut().find(|(seen, _)| seen == tag) {
                Some((_, count)) => *count += 1,
                None => counts.push((tag.clone(), 1)),
            }
        }
    }
    // Stable sort keeps first-seen order among equal counts.
    counts.sort_by_key(|&(_, count)| Reverse(count));
    counts.into_iter().take(limit).map(|(tag, _)| tag).collect()
}

/// Consecutive days with at least one entry, walking backward from `date`
///
/// No entry on `date` itself means a streak of zero regardless of earlier
/// days.
#[must_use]
pub fn journal_streak(entries: &[JournalEntry], date: NaiveDate) -> u32 {
    let days_with_entries: HashSet<NaiveDate> =
        entries.iter().map(|entry| entry.date.date_naive()).collect();

    let mut streak = 0;
    let mut day = date;
    while days_with_entries.contains(&day) {
        streak += 1;
        let Some(previous) = day.pred_opt() else {
            break;
        };
        day = previous;
    }
    streak
}

/// Total breathing minutes across a window of sessions, rounded
#[must_use]
pub fn breathing_minutes(sessions: &[BreathingSession]) -> u32 {
    let total_seconds: u64 = sessions
        .iter()
        .map(|session| u64::from(session.duration_seconds))
        .sum();
    (total_seconds as f64 / 60.0).round() as u32
}

impl<S: DocumentStore> MentalHealthStatsEngine<S> {
    /// Create an engine with the default configuration
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_config(store, EngineConfig::default())
    }

    /// Create an engine with a custom configuration
    #[must_use]
    pub fn with_config(store: S, config: EngineConfig) -> Self {
        Self { store, config }
    }

    /// Recompute the snapshot for (user, date) and overwrite the stored copy
    pub async fn recompute(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> EngineResult<MentalHealthStats> {
        // Both windows end at the first instant after the reference day.
        let window_end: DateTime<Utc> = date
            .checked_add_days(Days::new(1))
            .unwrap_or(date)
            .and_hms_opt(0, 0, 0)
            .map_or_else(Utc::now, |naive| naive.and_utc());
        let journal_start = window_end - chrono::Duration::days(self.config.journal_window_days);
        let breathing_start =
            window_end - chrono::Duration::hours(self.config.breathing_window_hours);

        let user_filter = [QueryFilter::eq("user_id", user_id)];

        let journal: Vec<JournalEntry> =
            query_typed(&self.store, collections::JOURNAL_ENTRIES, &user_filter)
                .await?
                .into_iter()
                .filter(|entry: &JournalEntry| {
                    entry.date >= journal_start && entry.date < window_end
                })
                .collect();

        let sessions: Vec<BreathingSession> =
            query_typed(&self.store, collections::BREATHING_SESSIONS, &user_filter)
                .await?
                .into_iter()
                .filter(|session: &BreathingSession| {
                    session.date >= breathing_start && session.date < window_end
                })
                .collect();

        let motivations: Vec<Motivation> =
            query_typed(&self.store, collections::MOTIVATIONS, &user_filter).await?;
        let active_motivations =
            motivations.iter().filter(|motivation| motivation.is_active).count() as u32;

        let stats = MentalHealthStats {
            user_id: user_id.to_owned(),
            date,
            average_mood: average_mood(&journal),
            mood_trend: mood_trend(&journal, &self.config),
            common_mood_tags: common_mood_tags(&journal, self.config.common_tag_limit),
            journal_streak: journal_streak(&journal, date),
            breathing_minutes: breathing_minutes(&sessions),
            active_motivations,
        };

        debug!(
            user_id,
            %date,
            entries = journal.len(),
            sessions = sessions.len(),
            "recomputed mental health snapshot"
        );

        let key = keys::daily(user_id, date);
        set_typed(&self.store, collections::MENTAL_HEALTH_STATS, &key, &stats).await?;
        Ok(stats)
    }
}
