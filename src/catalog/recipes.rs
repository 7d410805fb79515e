// ABOUTME: Built-in recipe template tables keyed by meal type
// ABOUTME: Nutrition values are per serving; ingredient strings feed the substring dietary filter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Wellness

use crate::models::{MealType, NutritionVector, RecipeTemplate, SkillLevel};
use std::collections::HashMap;

#[allow(clippy::too_many_arguments)]
fn nutrition(
    calories: f64,
    protein_g: f64,
    carbs_g: f64,
    fat_g: f64,
    fiber_g: f64,
    sugar_g: f64,
    sodium_mg: f64,
    cholesterol_mg: f64,
    saturated_fat_g: f64,
) -> NutritionVector {
    NutritionVector {
        calories,
        protein_g,
        carbs_g,
        fat_g,
        fiber_g,
        sugar_g,
        sodium_mg,
        cholesterol_mg,
        saturated_fat_g,
        serving_size: 1.0,
        servings: 1.0,
    }
}

fn recipe(
    id: &str,
    name: &str,
    meal_type: MealType,
    ingredients: &[&str],
    nutrition: NutritionVector,
    preparation_time_minutes: u32,
    difficulty: SkillLevel,
) -> RecipeTemplate {
    RecipeTemplate {
        id: id.to_owned(),
        name: name.to_owned(),
        meal_type,
        ingredients: ingredients.iter().map(|&s| s.to_owned()).collect(),
        nutrition,
        preparation_time_minutes,
        difficulty,
    }
}

pub(super) fn tables() -> HashMap<MealType, Vec<RecipeTemplate>> {
    let mut tables = HashMap::new();

    tables.insert(
        MealType::Breakfast,
        vec![
            recipe(
                "rc-oatmeal-berries",
                "Oatmeal with Berries",
                MealType::Breakfast,
                &["rolled oats", "banana", "blueberries", "chia seeds", "maple syrup"],
                nutrition(310.0, 9.0, 58.0, 6.0, 9.0, 16.0, 120.0, 0.0, 1.0),
                10,
                SkillLevel::Beginner,
            ),
            recipe(
                "rc-yogurt-parfait",
                "Greek Yogurt Parfait",
                MealType::Breakfast,
                &["greek yogurt", "granola", "honey", "strawberries"],
                nutrition(340.0, 22.0, 45.0, 9.0, 4.0, 24.0, 95.0, 12.0, 4.0),
                5,
                SkillLevel::Beginner,
            ),
            recipe(
                "rc-eggs-toast",
                "Scrambled Eggs on Toast",
                MealType::Breakfast,
                &["eggs", "whole wheat bread", "butter", "chives"],
                nutrition(380.0, 19.0, 30.0, 22.0, 4.0, 4.0, 420.0, 370.0, 8.0),
                12,
                SkillLevel::Beginner,
            ),
            recipe(
                "rc-protein-smoothie",
                "Protein Power Smoothie",
                MealType::Breakfast,
                &["pea protein powder", "banana", "peanut butter", "spinach", "water"],
                nutrition(420.0, 34.0, 42.0, 14.0, 6.0, 18.0, 210.0, 0.0, 2.5),
                5,
                SkillLevel::Beginner,
            ),
            recipe(
                "rc-cottage-bowl",
                "Cottage Cheese Bowl",
                MealType::Breakfast,
                &["cottage cheese", "pineapple", "walnuts"],
                nutrition(330.0, 31.0, 26.0, 13.0, 2.0, 20.0, 480.0, 25.0, 5.0),
                5,
                SkillLevel::Beginner,
            ),
        ],
    );

    tables.insert(
        MealType::Lunch,
        vec![
            recipe(
                "rc-chicken-salad",
                "Grilled Chicken Salad",
                MealType::Lunch,
                &["chicken breast", "mixed greens", "olive oil", "cherry tomatoes", "cucumber"],
                nutrition(380.0, 38.0, 12.0, 18.0, 4.0, 6.0, 390.0, 95.0, 3.5),
                20,
                SkillLevel::Intermediate,
            ),
            recipe(
                "rc-quinoa-bowl",
                "Quinoa Buddha Bowl",
                MealType::Lunch,
                &["quinoa", "chickpeas", "avocado", "kale", "tahini", "lemon juice"],
                nutrition(460.0, 16.0, 58.0, 18.0, 12.0, 7.0, 310.0, 0.0, 2.5),
                25,
                SkillLevel::Intermediate,
            ),
            recipe(
                "rc-lentil-soup",
                "Lentil Soup with Sourdough",
                MealType::Lunch,
                &["red lentils", "carrots", "onion", "vegetable broth", "sourdough bread"],
                nutrition(340.0, 18.0, 56.0, 6.0, 11.0, 8.0, 620.0, 0.0, 0.5),
                30,
                SkillLevel::Beginner,
            ),
            recipe(
                "rc-turkey-club",
                "Turkey Club Sandwich",
                MealType::Lunch,
                &["turkey", "bacon", "whole wheat bread", "mayonnaise", "lettuce", "tomato"],
                nutrition(560.0, 32.0, 44.0, 28.0, 5.0, 7.0, 1150.0, 75.0, 7.0),
                15,
                SkillLevel::Beginner,
            ),
            recipe(
                "rc-tofu-stir-fry",
                "Tofu Stir-Fry with Rice",
                MealType::Lunch,
                &["tofu", "brown rice", "broccoli", "tamari", "sesame oil", "ginger"],
                nutrition(430.0, 31.0, 48.0, 16.0, 7.0, 6.0, 540.0, 0.0, 2.0),
                25,
                SkillLevel::Intermediate,
            ),
        ],
    );

    tables.insert(
        MealType::Dinner,
        vec![
            recipe(
                "rc-baked-salmon",
                "Baked Salmon with Vegetables",
                MealType::Dinner,
                &["salmon fillet", "asparagus", "olive oil", "lemon", "garlic"],
                nutrition(440.0, 36.0, 14.0, 19.0, 5.0, 4.0, 380.0, 90.0, 3.5),
                30,
                SkillLevel::Intermediate,
            ),
            recipe(
                "rc-chickpea-curry",
                "Chickpea Coconut Curry",
                MealType::Dinner,
                &["chickpeas", "coconut milk", "tomatoes", "basmati rice", "spinach", "curry paste"],
                nutrition(490.0, 15.0, 68.0, 17.0, 11.0, 9.0, 560.0, 0.0, 9.0),
                35,
                SkillLevel::Intermediate,
            ),
            recipe(
                "rc-vegetable-pasta",
                "Roasted Vegetable Pasta",
                MealType::Dinner,
                &["pasta", "zucchini", "bell pepper", "olive oil", "basil", "tomato sauce"],
                nutrition(480.0, 14.0, 74.0, 14.0, 8.0, 10.0, 470.0, 0.0, 2.0),
                25,
                SkillLevel::Beginner,
            ),
            recipe(
                "rc-steak-sweet-potato",
                "Sirloin Steak with Sweet Potato",
                MealType::Dinner,
                &["sirloin steak", "sweet potato", "green beans", "butter", "rosemary"],
                nutrition(520.0, 42.0, 36.0, 22.0, 7.0, 9.0, 410.0, 110.0, 9.0),
                35,
                SkillLevel::Advanced,
            ),
            recipe(
                "rc-herb-chicken",
                "Herb Baked Chicken with Quinoa",
                MealType::Dinner,
                &["chicken breast", "quinoa", "green beans", "olive oil", "thyme"],
                nutrition(450.0, 41.0, 38.0, 13.0, 6.0, 4.0, 360.0, 100.0, 2.5),
                35,
                SkillLevel::Intermediate,
            ),
            recipe(
                "rc-tofu-quinoa",
                "Seared Tofu Quinoa Plate",
                MealType::Dinner,
                &["tofu", "quinoa", "broccoli", "olive oil", "lemon", "chili flakes"],
                nutrition(470.0, 33.0, 44.0, 17.0, 8.0, 5.0, 430.0, 0.0, 2.5),
                30,
                SkillLevel::Intermediate,
            ),
        ],
    );

    tables.insert(
        MealType::Snack,
        vec![
            recipe(
                "rc-apple-almond",
                "Apple with Almond Butter",
                MealType::Snack,
                &["apple", "almond butter"],
                nutrition(200.0, 5.0, 24.0, 11.0, 5.0, 17.0, 75.0, 0.0, 1.0),
                2,
                SkillLevel::Beginner,
            ),
            recipe(
                "rc-protein-shake",
                "Whey Protein Shake",
                MealType::Snack,
                &["whey protein powder", "banana", "water"],
                nutrition(240.0, 32.0, 26.0, 2.0, 2.0, 15.0, 140.0, 15.0, 1.0),
                3,
                SkillLevel::Beginner,
            ),
            recipe(
                "rc-trail-mix",
                "Trail Mix",
                MealType::Snack,
                &["almonds", "cashews", "raisins", "dark chocolate"],
                nutrition(250.0, 7.0, 22.0, 16.0, 4.0, 14.0, 50.0, 0.0, 3.0),
                1,
                SkillLevel::Beginner,
            ),
            recipe(
                "rc-edamame",
                "Steamed Edamame",
                MealType::Snack,
                &["edamame", "sea salt"],
                nutrition(150.0, 13.0, 11.0, 6.0, 5.0, 2.0, 340.0, 0.0, 0.5),
                8,
                SkillLevel::Beginner,
            ),
            recipe(
                "rc-rice-cakes-hummus",
                "Rice Cakes with Hummus",
                MealType::Snack,
                &["rice cakes", "hummus", "paprika"],
                nutrition(180.0, 6.0, 28.0, 5.0, 3.0, 1.0, 260.0, 0.0, 0.5),
                3,
                SkillLevel::Beginner,
            ),
        ],
    );

    tables
}
