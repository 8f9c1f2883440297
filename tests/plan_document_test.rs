// ABOUTME: Plan document model tests: construction validation, meal leniency, totals, mutations
// ABOUTME: Pins the lenient numeric defaults and the last-writer-wins target semantics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

//! Plan document tests.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutriplan::errors::ErrorCode;
use nutriplan::models::plan::{
    GoalCategory, MacroTargets, Meal, MealDraft, MealType, PlanDocument, PlanDraft,
};
use uuid::Uuid;

fn meal_draft(name: &str, calories: f64) -> MealDraft {
    MealDraft {
        meal_type: MealType::Lunch,
        name: name.to_owned(),
        description: None,
        calories: Some(calories),
        protein_g: Some(calories / 20.0),
        carbs_g: Some(calories / 10.0),
        fat_g: Some(calories / 40.0),
        ingredients: None,
        instructions: None,
    }
}

fn plan_draft() -> PlanDraft {
    PlanDraft {
        client_id: Uuid::new_v4(),
        owner_id: Uuid::new_v4(),
        name: "Spring Cut".to_owned(),
        goal: GoalCategory::WeightLoss,
        daily_calories: 2100.0,
        macro_targets: MacroTargets {
            protein_g: 184,
            carbs_g: 184,
            fat_g: 70,
        },
        meals: vec![],
        restrictions: None,
        supplements: None,
        hydration_notes: None,
        is_active: true,
    }
}

// ============================================================================
// CONSTRUCTION VALIDATION
// ============================================================================

#[test]
fn test_build_valid_plan() {
    let plan = PlanDocument::build(plan_draft()).unwrap();
    assert_eq!(plan.name, "Spring Cut");
    assert_eq!(plan.goal, GoalCategory::WeightLoss);
    assert!(plan.is_active);
    assert_eq!(plan.created_at, plan.updated_at);
}

#[test]
fn test_build_rejects_empty_name() {
    let mut draft = plan_draft();
    draft.name = "   ".to_owned();

    let err = PlanDocument::build(draft).unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingRequiredField);
    assert_eq!(err.field(), Some("name"));
}

#[test]
fn test_build_rejects_calories_outside_range() {
    for calories in [799.9, 5000.1] {
        let mut draft = plan_draft();
        draft.daily_calories = calories;

        let err = PlanDocument::build(draft).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert_eq!(err.field(), Some("daily_calories"));
    }
}

#[test]
fn test_build_accepts_range_boundaries() {
    for calories in [800.0, 5000.0] {
        let mut draft = plan_draft();
        draft.daily_calories = calories;
        assert!(PlanDocument::build(draft).is_ok());
    }
}

// ============================================================================
// MEAL LENIENCY
// ============================================================================

#[test]
fn test_meal_missing_numerics_default_to_zero() {
    let meal = Meal::from_draft(MealDraft {
        meal_type: MealType::Snack,
        name: "Apple".to_owned(),
        description: None,
        calories: None,
        protein_g: None,
        carbs_g: None,
        fat_g: None,
        ingredients: None,
        instructions: None,
    })
    .unwrap();

    assert_eq!(meal.calories, 0.0);
    assert_eq!(meal.protein_g, 0.0);
    assert_eq!(meal.carbs_g, 0.0);
    assert_eq!(meal.fat_g, 0.0);
}

#[test]
fn test_meal_requires_name() {
    let err = Meal::from_draft(MealDraft {
        meal_type: MealType::Breakfast,
        name: String::new(),
        description: None,
        calories: Some(300.0),
        protein_g: None,
        carbs_g: None,
        fat_g: None,
        ingredients: None,
        instructions: None,
    })
    .unwrap_err();

    assert_eq!(err.code, ErrorCode::MissingRequiredField);
    assert_eq!(err.field(), Some("name"));
}

#[test]
fn test_meal_rejects_negative_numerics() {
    let mut draft = meal_draft("Oats", 350.0);
    draft.protein_g = Some(-1.0);

    let err = Meal::from_draft(draft).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    assert_eq!(err.field(), Some("protein_g"));
}

// ============================================================================
// DAILY TOTALS
// ============================================================================

#[test]
fn test_daily_totals_sum_across_meals() {
    let mut draft = plan_draft();
    draft.meals = vec![
        meal_draft("Breakfast bowl", 300.0),
        meal_draft("Chicken wrap", 400.0),
        meal_draft("Salmon dinner", 500.0),
        meal_draft("Greek yogurt", 200.0),
    ];

    let plan = PlanDocument::build(draft).unwrap();
    let totals = plan.daily_totals();
    assert_eq!(totals.calories, 1400.0);
    assert_eq!(totals.protein_g, 70.0);
    assert_eq!(totals.carbs_g, 140.0);
    assert_eq!(totals.fat_g, 35.0);
}

#[test]
fn test_daily_totals_empty_meal_list_is_zero_not_error() {
    let plan = PlanDocument::build(plan_draft()).unwrap();
    let totals = plan.daily_totals();
    assert_eq!(totals.calories, 0.0);
    assert_eq!(totals.protein_g, 0.0);
    assert_eq!(totals.carbs_g, 0.0);
    assert_eq!(totals.fat_g, 0.0);
}

// ============================================================================
// MEAL MUTATIONS
// ============================================================================

#[test]
fn test_add_remove_update_meals() {
    let mut plan = PlanDocument::build(plan_draft()).unwrap();

    plan.add_meal(meal_draft("Oats", 350.0)).unwrap();
    plan.add_meal(meal_draft("Stir fry", 550.0)).unwrap();
    assert_eq!(plan.meals.len(), 2);

    plan.update_meal(1, meal_draft("Beef stir fry", 600.0)).unwrap();
    assert_eq!(plan.meals[1].name, "Beef stir fry");
    assert_eq!(plan.meals[1].calories, 600.0);

    let removed = plan.remove_meal(0).unwrap();
    assert_eq!(removed.name, "Oats");
    assert_eq!(plan.meals.len(), 1);
}

#[test]
fn test_meal_mutations_reject_bad_indexes() {
    let mut plan = PlanDocument::build(plan_draft()).unwrap();

    assert_eq!(
        plan.remove_meal(0).unwrap_err().code,
        ErrorCode::ResourceNotFound
    );
    assert_eq!(
        plan.update_meal(3, meal_draft("Ghost", 1.0)).unwrap_err().code,
        ErrorCode::ResourceNotFound
    );
}

#[test]
fn test_invalid_meal_draft_does_not_mutate_plan() {
    let mut plan = PlanDocument::build(plan_draft()).unwrap();
    plan.add_meal(meal_draft("Oats", 350.0)).unwrap();

    let mut bad = meal_draft("Bad", 100.0);
    bad.calories = Some(-5.0);
    assert!(plan.update_meal(0, bad).is_err());
    assert_eq!(plan.meals[0].name, "Oats");
}

// ============================================================================
// LAST-WRITER-WINS TARGETS
// ============================================================================

#[test]
fn test_set_energy_targets_overwrites_snapshot() {
    let mut plan = PlanDocument::build(plan_draft()).unwrap();

    let new_macros = MacroTargets {
        protein_g: 180,
        carbs_g: 323,
        fat_g: 96,
    };
    plan.set_energy_targets(2873.0, new_macros).unwrap();

    assert_eq!(plan.daily_calories, 2873.0);
    assert_eq!(plan.macro_targets, new_macros);
}

#[test]
fn test_set_energy_targets_rejects_out_of_range_and_keeps_old_values() {
    let mut plan = PlanDocument::build(plan_draft()).unwrap();
    let before_calories = plan.daily_calories;
    let before_macros = plan.macro_targets;

    let err = plan
        .set_energy_targets(
            6000.0,
            MacroTargets {
                protein_g: 1,
                carbs_g: 1,
                fat_g: 1,
            },
        )
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    assert_eq!(plan.daily_calories, before_calories);
    assert_eq!(plan.macro_targets, before_macros);
}
