// ABOUTME: Read-only template catalog behind an injectable provider trait
// ABOUTME: StaticCatalog ships the built-in exercise and recipe tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Wellness

//! # Template Catalog
//!
//! Static, read-only tables mapping (goal, fitness level) to exercise
//! templates and meal type to recipe templates. The catalog is immutable and
//! safe for unlimited concurrent readers; it is injected behind
//! [`CatalogProvider`] so tests can swap in fixture tables.

mod exercises;
mod recipes;

use crate::models::{ExerciseTemplate, FitnessGoal, FitnessLevel, MealType, RecipeTemplate};
use std::collections::HashMap;

/// Read-only access to the template catalog
pub trait CatalogProvider: Send + Sync {
    /// Exercise templates for a (goal, level) pair; empty when the
    /// combination has no programmed slice (callers fall back to
    /// general/beginner)
    fn exercises_for(&self, goal: FitnessGoal, level: FitnessLevel) -> &[ExerciseTemplate];

    /// Recipe templates catalogued under a meal type
    fn recipes_for(&self, meal_type: MealType) -> &[RecipeTemplate];
}

/// The built-in catalog
pub struct StaticCatalog {
    exercises: HashMap<(FitnessGoal, FitnessLevel), Vec<ExerciseTemplate>>,
    recipes: HashMap<MealType, Vec<RecipeTemplate>>,
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl StaticCatalog {
    /// Build the catalog from the built-in tables
    #[must_use]
    pub fn new() -> Self {
        Self {
            exercises: exercises::tables(),
            recipes: recipes::tables(),
        }
    }
}

impl CatalogProvider for StaticCatalog {
    fn exercises_for(&self, goal: FitnessGoal, level: FitnessLevel) -> &[ExerciseTemplate] {
        self.exercises
            .get(&(goal, level))
            .map_or(&[], Vec::as_slice)
    }

    fn recipes_for(&self, meal_type: MealType) -> &[RecipeTemplate] {
        self.recipes.get(&meal_type).map_or(&[], Vec::as_slice)
    }
}
