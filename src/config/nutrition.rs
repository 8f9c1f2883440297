// ABOUTME: Nutrition constant tables: Harris-Benedict coefficients, activity factors, goal adjustments
// ABOUTME: Both macro ratio policies (plan-goal and calculator) live here as immutable configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

//! Nutrition calculation configuration.
//!
//! All formula constants are configuration rather than literals buried in the
//! calculators, so a deployment can recalibrate without code changes. The
//! `Default` impls carry the published values.
//!
//! # Scientific References
//!
//! - BMR: Harris-Benedict revised by Roza & Shizgal (1984)
//!   DOI: 10.1093/ajcn/40.1.168
//! - Activity factors: `McArdle` et al. (2010) - Exercise Physiology

use crate::models::plan::GoalCategory;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// BMR (Basal Metabolic Rate) calculation configuration.
///
/// Harris-Benedict equations as revised by Roza & Shizgal (1984):
/// - male:   88.362 + 13.397·kg + 4.799·cm − 5.677·years
/// - female: 447.593 + 9.247·kg + 3.098·cm − 4.330·years
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Male base constant (88.362)
    pub male_base: f64,
    /// Male weight coefficient (13.397 per kg)
    pub male_weight_coef: f64,
    /// Male height coefficient (4.799 per cm)
    pub male_height_coef: f64,
    /// Male age coefficient (5.677 per year, subtracted)
    pub male_age_coef: f64,
    /// Female base constant (447.593)
    pub female_base: f64,
    /// Female weight coefficient (9.247 per kg)
    pub female_weight_coef: f64,
    /// Female height coefficient (3.098 per cm)
    pub female_height_coef: f64,
    /// Female age coefficient (4.330 per year, subtracted)
    pub female_age_coef: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            male_base: 88.362,
            male_weight_coef: 13.397,
            male_height_coef: 4.799,
            male_age_coef: 5.677,
            female_base: 447.593,
            female_weight_coef: 9.247,
            female_height_coef: 3.098,
            female_age_coef: 4.330,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub lightly_active: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderately_active: f64,
    /// Very active (6-7 days/week): 1.725
    pub very_active: f64,
    /// Extremely active (hard training 2x/day): 1.9
    pub extremely_active: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            lightly_active: 1.375,
            moderately_active: 1.55,
            very_active: 1.725,
            extremely_active: 1.9,
        }
    }
}

/// Key identifying one row of the goal-adjustment table
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GoalKey {
    ExtremeLoss,
    RapidLoss,
    ModerateLoss,
    MildLoss,
    Maintenance,
    MildGain,
    ModerateGain,
    AggressiveGain,
}

/// One row of the goal-adjustment table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalAdjustment {
    /// Stable key for this goal
    pub key: GoalKey,
    /// Display label for the calculator UI
    pub label: String,
    /// Daily calorie adjustment relative to TDEE (kcal/day)
    pub adjustment_kcal: f64,
}

/// The fixed goal-adjustment table, ordered extreme loss through aggressive
/// gain. Calorie options are produced in exactly this order, never sorted by
/// value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalAdjustmentsConfig {
    /// Table rows in presentation order
    pub rows: Vec<GoalAdjustment>,
}

impl Default for GoalAdjustmentsConfig {
    fn default() -> Self {
        let row = |key, label: &str, adjustment_kcal: f64| GoalAdjustment {
            key,
            label: label.to_owned(),
            adjustment_kcal,
        };
        Self {
            rows: vec![
                row(GoalKey::ExtremeLoss, "Extreme weight loss", -1000.0),
                row(GoalKey::RapidLoss, "Rapid weight loss", -750.0),
                row(GoalKey::ModerateLoss, "Moderate weight loss", -500.0),
                row(GoalKey::MildLoss, "Mild weight loss", -250.0),
                row(GoalKey::Maintenance, "Maintain weight", 0.0),
                row(GoalKey::MildGain, "Mild weight gain", 250.0),
                row(GoalKey::ModerateGain, "Moderate weight gain", 500.0),
                row(GoalKey::AggressiveGain, "Aggressive weight gain", 750.0),
            ],
        }
    }
}

/// Protein/fat/carb share of total calories. Each policy row sums to 1.0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroRatios {
    /// Protein share of calories
    pub protein: f64,
    /// Fat share of calories
    pub fat: f64,
    /// Carbohydrate share of calories
    pub carbs: f64,
}

impl MacroRatios {
    /// Sum of the three shares; valid rows sum to exactly 1.0
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.protein + self.fat + self.carbs
    }
}

/// Both macro ratio policies.
///
/// The plan-goal rows and the calculator row are two historically independent
/// tables used in different contexts; they do not agree with each other and
/// are deliberately kept separate. Do not reconcile them here without a
/// product decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroRatiosConfig {
    /// Plan-goal policy: weight loss plans
    pub weight_loss: MacroRatios,
    /// Plan-goal policy: muscle gain plans
    pub muscle_gain: MacroRatios,
    /// Plan-goal policy: maintenance plans
    pub maintenance: MacroRatios,
    /// Plan-goal policy: performance plans
    pub performance: MacroRatios,
    /// Calculator policy: one fixed row applied to every calorie option
    pub calculator: MacroRatios,
}

impl Default for MacroRatiosConfig {
    fn default() -> Self {
        Self {
            weight_loss: MacroRatios {
                protein: 0.35,
                fat: 0.30,
                carbs: 0.35,
            },
            muscle_gain: MacroRatios {
                protein: 0.30,
                fat: 0.25,
                carbs: 0.45,
            },
            maintenance: MacroRatios {
                protein: 0.25,
                fat: 0.30,
                carbs: 0.45,
            },
            performance: MacroRatios {
                protein: 0.20,
                fat: 0.25,
                carbs: 0.55,
            },
            calculator: MacroRatios {
                protein: 0.25,
                fat: 0.30,
                carbs: 0.45,
            },
        }
    }
}

impl MacroRatiosConfig {
    /// Plan-goal policy row for a goal category
    #[must_use]
    pub const fn plan_goal(&self, goal: GoalCategory) -> MacroRatios {
        match goal {
            GoalCategory::WeightLoss => self.weight_loss,
            GoalCategory::MuscleGain => self.muscle_gain,
            GoalCategory::Maintenance => self.maintenance,
            GoalCategory::Performance => self.performance,
        }
    }
}

/// Export pipeline tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Caller-side render timeout in milliseconds (default 30000)
    pub timeout_ms: u64,
    /// Progress simulator tick interval in milliseconds (default 200)
    pub progress_tick_ms: u64,
    /// Smallest simulated progress increment per tick (default 5)
    pub progress_step_min: u8,
    /// Largest simulated progress increment per tick (default 10)
    pub progress_step_max: u8,
    /// Simulated progress ceiling until the render resolves (default 90)
    pub progress_cap_percent: u8,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 30_000,
            progress_tick_ms: 200,
            progress_step_min: 5,
            progress_step_max: 10,
            progress_cap_percent: 90,
        }
    }
}

impl ExportConfig {
    /// Caller-side render timeout
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Progress simulator tick interval
    #[must_use]
    pub const fn progress_tick(&self) -> Duration {
        Duration::from_millis(self.progress_tick_ms)
    }
}

/// Aggregate nutrition configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// BMR formula coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE
    pub activity_factors: ActivityFactorsConfig,
    /// Goal-adjustment table for calorie options
    pub goal_adjustments: GoalAdjustmentsConfig,
    /// Macro ratio policies
    pub macro_ratios: MacroRatiosConfig,
}
