// ABOUTME: Macro allocator: converts a calorie target and goal into gram-level macro targets
// ABOUTME: Two named ratio policies (plan-goal vs calculator) selected explicitly by callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

//! Macronutrient allocation.
//!
//! Two ratio policies coexist and do not agree with each other:
//!
//! - [`MacroPolicy::PlanGoal`] applies when a full diet plan's goal drives
//!   the split (weight loss plans get 35% protein, and so on).
//! - [`MacroPolicy::Calculator`] applies when deriving macros for each entry
//!   of the calorie-option menu; it is a single fixed 25/45/30
//!   protein/carb/fat row regardless of goal.
//!
//! The divergence is inherited behavior that downstream documents depend on;
//! callers pick a policy explicitly and nothing reconciles the tables.

use crate::config::nutrition::MacroRatiosConfig;
use crate::models::plan::{GoalCategory, MacroTargets};

/// Energy density of protein (kcal per gram)
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
/// Energy density of carbohydrate (kcal per gram)
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
/// Energy density of fat (kcal per gram)
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Which ratio table to allocate under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacroPolicy {
    /// Per-goal ratios used by full diet plans
    PlanGoal(GoalCategory),
    /// Fixed ratios used by the calorie-option calculator
    Calculator,
}

/// Allocate gram-level macro targets for a calorie total.
///
/// Total, infallible, and pure: any non-negative calorie input and any goal
/// category yields a result, and identical inputs yield identical outputs.
/// Grams are rounded to the nearest whole gram.
#[must_use]
pub fn allocate_macros(
    calories: f64,
    policy: MacroPolicy,
    ratios: &MacroRatiosConfig,
) -> MacroTargets {
    let row = match policy {
        MacroPolicy::PlanGoal(goal) => ratios.plan_goal(goal),
        MacroPolicy::Calculator => ratios.calculator,
    };

    MacroTargets {
        protein_g: grams(calories, row.protein, KCAL_PER_GRAM_PROTEIN),
        carbs_g: grams(calories, row.carbs, KCAL_PER_GRAM_CARBS),
        fat_g: grams(calories, row.fat, KCAL_PER_GRAM_FAT),
    }
}

fn grams(calories: f64, ratio: f64, kcal_per_gram: f64) -> u32 {
    // Float-to-int casts saturate, so a stray negative input yields 0 grams.
    (calories * ratio / kcal_per_gram).round() as u32
}
