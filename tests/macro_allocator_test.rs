// ABOUTME: Algorithm tests for the macro allocator and its two ratio policies
// ABOUTME: Verifies gram conversion, policy divergence, idempotence, and lossy goal parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

//! Macro allocator tests.
//!
//! The allocator carries two historically independent ratio tables: the
//! plan-goal policy and the calculator policy. Both are pinned here so
//! neither can silently drift toward the other.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutriplan::config::nutrition::MacroRatiosConfig;
use nutriplan::intelligence::macros::{allocate_macros, MacroPolicy};
use nutriplan::models::plan::GoalCategory;

// ============================================================================
// PLAN-GOAL POLICY
// ============================================================================

#[test]
fn test_weight_loss_plan_ratios_at_2000_kcal() {
    let ratios = MacroRatiosConfig::default();

    // Weight loss: 35% protein / 30% fat / 35% carbs
    let targets = allocate_macros(
        2000.0,
        MacroPolicy::PlanGoal(GoalCategory::WeightLoss),
        &ratios,
    );
    assert_eq!(targets.protein_g, 175); // 2000*0.35/4
    assert_eq!(targets.carbs_g, 175); // 2000*0.35/4
    assert_eq!(targets.fat_g, 67); // 2000*0.30/9 = 66.67
}

#[test]
fn test_each_goal_category_gets_its_own_row() {
    let ratios = MacroRatiosConfig::default();
    let calories = 2400.0;

    let by_goal: Vec<_> = [
        GoalCategory::WeightLoss,
        GoalCategory::MuscleGain,
        GoalCategory::Maintenance,
        GoalCategory::Performance,
    ]
    .into_iter()
    .map(|goal| allocate_macros(calories, MacroPolicy::PlanGoal(goal), &ratios))
    .collect();

    // All four rows are distinct policies; protein descends from weight loss
    // to performance in the default table.
    assert!(by_goal[0].protein_g > by_goal[1].protein_g);
    assert!(by_goal[1].protein_g > by_goal[2].protein_g);
    assert!(by_goal[2].protein_g > by_goal[3].protein_g);
}

// ============================================================================
// CALCULATOR POLICY
// ============================================================================

#[test]
fn test_calculator_ratios_at_2000_kcal() {
    let ratios = MacroRatiosConfig::default();

    // Calculator: fixed 25% protein / 45% carbs / 30% fat for every option
    let targets = allocate_macros(2000.0, MacroPolicy::Calculator, &ratios);
    assert_eq!(targets.protein_g, 125); // 2000*0.25/4
    assert_eq!(targets.carbs_g, 225); // 2000*0.45/4
    assert_eq!(targets.fat_g, 67); // 2000*0.30/9
}

#[test]
fn test_policies_diverge_and_stay_diverged() {
    let ratios = MacroRatiosConfig::default();

    // The two tables are not reconciled with each other; a weight-loss plan
    // and a calculator option disagree at the same calorie total.
    let plan = allocate_macros(
        2000.0,
        MacroPolicy::PlanGoal(GoalCategory::WeightLoss),
        &ratios,
    );
    let calculator = allocate_macros(2000.0, MacroPolicy::Calculator, &ratios);
    assert_ne!(plan, calculator);
}

// ============================================================================
// TOTALITY AND PURITY
// ============================================================================

#[test]
fn test_allocation_is_idempotent() {
    let ratios = MacroRatiosConfig::default();

    let first = allocate_macros(
        2000.0,
        MacroPolicy::PlanGoal(GoalCategory::WeightLoss),
        &ratios,
    );
    let second = allocate_macros(
        2000.0,
        MacroPolicy::PlanGoal(GoalCategory::WeightLoss),
        &ratios,
    );
    assert_eq!(first, second);
}

#[test]
fn test_zero_calories_yield_zero_grams() {
    let ratios = MacroRatiosConfig::default();

    let targets = allocate_macros(0.0, MacroPolicy::Calculator, &ratios);
    assert_eq!(targets.protein_g, 0);
    assert_eq!(targets.carbs_g, 0);
    assert_eq!(targets.fat_g, 0);
}

#[test]
fn test_unrecognized_goal_string_falls_back_to_maintenance() {
    let ratios = MacroRatiosConfig::default();

    let fallback = allocate_macros(
        2200.0,
        MacroPolicy::PlanGoal(GoalCategory::from_str_lossy("carnivore")),
        &ratios,
    );
    let maintenance = allocate_macros(
        2200.0,
        MacroPolicy::PlanGoal(GoalCategory::Maintenance),
        &ratios,
    );
    assert_eq!(fallback, maintenance);
}

#[test]
fn test_macro_calories_reconstruct_close_to_input() {
    let ratios = MacroRatiosConfig::default();

    for calories in [1200.0, 1847.0, 2873.0, 4999.0] {
        let targets = allocate_macros(calories, MacroPolicy::Calculator, &ratios);
        let reconstructed = f64::from(targets.protein_g) * 4.0
            + f64::from(targets.carbs_g) * 4.0
            + f64::from(targets.fat_g) * 9.0;
        // Each gram figure rounds independently, so the reconstruction can be
        // off by at most half a gram of each macro: 2 + 2 + 4.5 kcal.
        assert!(
            (reconstructed - calories).abs() <= 8.5,
            "reconstructed {reconstructed} too far from {calories}"
        );
    }
}
