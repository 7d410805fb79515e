// ABOUTME: Unified error taxonomy for the personalization and analytics engine
// ABOUTME: Precondition, lookup, range, candidate, and persistence failures plus store passthrough
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Wellness

//! # Engine Error Handling
//!
//! Defines the error taxonomy shared by every generator and calculator in this
//! crate. The two documented local recoveries (default profile creation and the
//! catalog fallback to general/beginner) never surface here; everything else
//! propagates to the caller unchanged.

use crate::models::MealType;
use thiserror::Error;

/// Result alias used throughout the engine
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors surfaced by engine operations
#[derive(Debug, Error)]
pub enum EngineError {
    /// A required upstream record (profile, nutrition goals) is missing and the
    /// caller must create defaults before retrying
    #[error("precondition failed: {what}")]
    Precondition {
        /// Description of the missing prerequisite
        what: String,
    },

    /// An expected per-day record is absent, including after the bounded
    /// wait-and-retry for a plan to materialize
    #[error("{what} not found")]
    NotFound {
        /// Description of the missing record
        what: String,
    },

    /// Exercise index outside the plan's exercise list
    #[error("exercise index {index} out of range for plan with {len} exercises")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of exercises in the plan
        len: usize,
    },

    /// Dietary and goal filtering eliminated every catalog option for a slot
    #[error("no recipe candidates for {meal_type} after dietary filtering")]
    NoCandidates {
        /// Meal slot that could not be filled
        meal_type: MealType,
    },

    /// A store write did not take effect on the verification read
    #[error("persistence verification failed: {what}")]
    Persistence {
        /// Description of the write that did not stick
        what: String,
    },

    /// Document store failure (network, backend)
    #[error("storage error: {0}")]
    Storage(#[from] anyhow::Error),

    /// Document (de)serialization failure
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl EngineError {
    /// Create a precondition error
    #[must_use]
    pub fn precondition(what: impl Into<String>) -> Self {
        Self::Precondition { what: what.into() }
    }

    /// Create a not-found error
    #[must_use]
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Create a persistence-verification error
    #[must_use]
    pub fn persistence(what: impl Into<String>) -> Self {
        Self::Persistence { what: what.into() }
    }
}
