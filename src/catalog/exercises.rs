// ABOUTME: Built-in exercise template tables keyed by (goal, fitness level)
// ABOUTME: Combinations without a programmed slice fall back to general/beginner at the call site
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Wellness

use crate::models::{ExerciseTemplate, FitnessGoal, FitnessLevel};
use std::collections::HashMap;

#[allow(clippy::too_many_arguments)]
fn template(
    id: &str,
    name: &str,
    muscle_groups: &[&str],
    equipment: &[&str],
    difficulty: FitnessLevel,
    steps: &[&str],
    tips: &[&str],
    duration_minutes: u32,
    calories_per_minute: f64,
    sets: Option<u32>,
    reps: Option<u32>,
) -> ExerciseTemplate {
    ExerciseTemplate {
        id: id.to_owned(),
        name: name.to_owned(),
        muscle_groups: muscle_groups.iter().map(|&s| s.to_owned()).collect(),
        equipment: equipment.iter().map(|&s| s.to_owned()).collect(),
        difficulty,
        instruction_steps: steps.iter().map(|&s| s.to_owned()).collect(),
        tips: tips.iter().map(|&s| s.to_owned()).collect(),
        duration_minutes,
        calories_per_minute,
        sets,
        reps,
    }
}

pub(super) fn tables() -> HashMap<(FitnessGoal, FitnessLevel), Vec<ExerciseTemplate>> {
    let mut tables = HashMap::new();

    tables.insert(
        (FitnessGoal::General, FitnessLevel::Beginner),
        vec![
            template(
                "ex-bodyweight-squat",
                "Bodyweight Squat",
                &["quadriceps", "glutes"],
                &[],
                FitnessLevel::Beginner,
                &[
                    "Stand with feet shoulder-width apart",
                    "Lower until thighs are parallel to the floor",
                    "Drive through the heels to stand",
                ],
                &["Keep your chest up", "Knees track over toes"],
                10,
                6.0,
                None,
                None,
            ),
            template(
                "ex-knee-pushup",
                "Knee Push-Up",
                &["chest", "triceps", "shoulders"],
                &[],
                FitnessLevel::Beginner,
                &[
                    "Start in a plank with knees on the floor",
                    "Lower your chest toward the ground",
                    "Press back to the start position",
                ],
                &["Keep a straight line from head to knees"],
                8,
                5.0,
                None,
                Some(10),
            ),
            template(
                "ex-plank",
                "Plank Hold",
                &["core"],
                &[],
                FitnessLevel::Beginner,
                &[
                    "Rest on forearms and toes",
                    "Hold a straight line from head to heels",
                ],
                &["Do not let the hips sag"],
                5,
                4.0,
                Some(3),
                None,
            ),
        ],
    );

    tables.insert(
        (FitnessGoal::General, FitnessLevel::Intermediate),
        vec![
            template(
                "ex-goblet-squat",
                "Goblet Squat",
                &["quadriceps", "glutes", "core"],
                &["dumbbell"],
                FitnessLevel::Intermediate,
                &[
                    "Hold a dumbbell at chest height",
                    "Squat until elbows touch the knees",
                    "Stand tall between reps",
                ],
                &["Keep the weight close to your body"],
                12,
                7.5,
                None,
                None,
            ),
            template(
                "ex-pushup",
                "Push-Up",
                &["chest", "triceps", "shoulders"],
                &[],
                FitnessLevel::Intermediate,
                &[
                    "Start in a high plank",
                    "Lower until the chest nearly touches the floor",
                    "Press back up without flaring the elbows",
                ],
                &["Brace your core throughout"],
                10,
                7.0,
                None,
                Some(15),
            ),
            template(
                "ex-walking-lunge",
                "Walking Lunge",
                &["quadriceps", "glutes", "hamstrings"],
                &[],
                FitnessLevel::Intermediate,
                &[
                    "Step forward into a lunge",
                    "Lower the back knee toward the floor",
                    "Push off and step into the next lunge",
                ],
                &["Take controlled steps"],
                12,
                7.0,
                None,
                None,
            ),
        ],
    );

    tables.insert(
        (FitnessGoal::WeightLoss, FitnessLevel::Beginner),
        vec![
            template(
                "ex-brisk-walk-intervals",
                "Brisk Walk Intervals",
                &["legs", "cardiovascular"],
                &[],
                FitnessLevel::Beginner,
                &[
                    "Walk at an easy pace for two minutes",
                    "Walk briskly for one minute",
                    "Repeat for the full duration",
                ],
                &["Swing your arms to raise the effort"],
                20,
                5.5,
                Some(1),
                Some(1),
            ),
            template(
                "ex-step-ups",
                "Step-Ups",
                &["quadriceps", "glutes"],
                &["box"],
                FitnessLevel::Beginner,
                &[
                    "Step onto a knee-height box",
                    "Drive through the leading leg",
                    "Step down under control and alternate",
                ],
                &["Keep the whole foot on the box"],
                10,
                6.5,
                None,
                None,
            ),
        ],
    );

    tables.insert(
        (FitnessGoal::WeightLoss, FitnessLevel::Intermediate),
        vec![
            template(
                "ex-burpees",
                "Burpees",
                &["full body", "cardiovascular"],
                &[],
                FitnessLevel::Intermediate,
                &[
                    "Squat and place hands on the floor",
                    "Kick back to a plank and perform a push-up",
                    "Jump the feet in and leap upward",
                ],
                &["Pace yourself early in the set"],
                12,
                10.0,
                None,
                Some(10),
            ),
            template(
                "ex-mountain-climbers",
                "Mountain Climbers",
                &["core", "cardiovascular"],
                &[],
                FitnessLevel::Intermediate,
                &[
                    "Start in a high plank",
                    "Drive the knees toward the chest alternately",
                ],
                &["Keep the hips level"],
                8,
                9.0,
                None,
                None,
            ),
            template(
                "ex-jump-rope",
                "Jump Rope",
                &["calves", "cardiovascular"],
                &["jump rope"],
                FitnessLevel::Intermediate,
                &[
                    "Jump with both feet at a steady rhythm",
                    "Rest thirty seconds between rounds",
                ],
                &["Stay on the balls of your feet"],
                15,
                11.0,
                Some(5),
                None,
            ),
        ],
    );

    tables.insert(
        (FitnessGoal::MuscleGain, FitnessLevel::Beginner),
        vec![
            template(
                "ex-dumbbell-press",
                "Dumbbell Bench Press",
                &["chest", "triceps"],
                &["dumbbells", "bench"],
                FitnessLevel::Beginner,
                &[
                    "Lie on a bench holding dumbbells at chest level",
                    "Press the weights straight up",
                    "Lower under control",
                ],
                &["Keep your feet planted"],
                15,
                5.0,
                Some(3),
                Some(10),
            ),
            template(
                "ex-dumbbell-row",
                "One-Arm Dumbbell Row",
                &["back", "biceps"],
                &["dumbbell", "bench"],
                FitnessLevel::Beginner,
                &[
                    "Support one knee and hand on a bench",
                    "Row the dumbbell toward your hip",
                    "Lower slowly and repeat",
                ],
                &["Avoid rotating the torso"],
                12,
                5.0,
                Some(3),
                Some(10),
            ),
            template(
                "ex-dumbbell-squat",
                "Dumbbell Squat",
                &["quadriceps", "glutes"],
                &["dumbbells"],
                FitnessLevel::Beginner,
                &[
                    "Hold dumbbells at your sides",
                    "Squat to parallel",
                    "Stand and squeeze the glutes",
                ],
                &["Keep the heels down"],
                12,
                6.0,
                None,
                None,
            ),
        ],
    );

    tables.insert(
        (FitnessGoal::MuscleGain, FitnessLevel::Intermediate),
        vec![
            template(
                "ex-barbell-squat",
                "Barbell Back Squat",
                &["quadriceps", "glutes", "core"],
                &["barbell", "rack"],
                FitnessLevel::Intermediate,
                &[
                    "Unrack the bar across the upper back",
                    "Squat to parallel with a braced core",
                    "Drive up through the mid-foot",
                ],
                &["Warm up with empty-bar sets first"],
                20,
                6.5,
                Some(4),
                Some(8),
            ),
            template(
                "ex-barbell-bench",
                "Barbell Bench Press",
                &["chest", "triceps", "shoulders"],
                &["barbell", "bench"],
                FitnessLevel::Intermediate,
                &[
                    "Grip slightly wider than shoulder width",
                    "Lower the bar to mid-chest",
                    "Press to lockout",
                ],
                &["Use a spotter for heavy sets"],
                18,
                5.5,
                Some(4),
                Some(8),
            ),
            template(
                "ex-deadlift",
                "Romanian Deadlift",
                &["hamstrings", "glutes", "back"],
                &["barbell"],
                FitnessLevel::Intermediate,
                &[
                    "Hold the bar at hip height",
                    "Hinge at the hips with a flat back",
                    "Stand by driving the hips forward",
                ],
                &["The bar stays close to the legs"],
                15,
                6.0,
                Some(3),
                Some(10),
            ),
        ],
    );

    tables
}
