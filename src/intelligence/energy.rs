// ABOUTME: Metabolic calculator: Harris-Benedict BMR, activity-scaled TDEE, calorie option menu
// ABOUTME: Validates biometric inputs strictly; fails fast with field-level validation errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

//! Energy expenditure calculations.
//!
//! The calculator converts biometric inputs into a basal metabolic rate
//! (Harris-Benedict as revised by Roza & Shizgal 1984), scales it by an
//! activity factor into TDEE, and derives one calorie option per row of the
//! fixed goal-adjustment table. Formulas run at full precision; rounding
//! happens only at the output boundary.
//!
//! # Reference
//!
//! Roza, A.M., & Shizgal, H.M. (1984). The Harris Benedict equation
//! reevaluated. *American Journal of Clinical Nutrition*, 40(1), 168-182.
//! DOI: 10.1093/ajcn/40.1.168

use crate::config::nutrition::{ActivityFactorsConfig, BmrConfig, GoalKey, NutritionConfig};
use crate::errors::{AppError, AppResult};
use crate::intelligence::macros::{allocate_macros, MacroPolicy};
use crate::models::plan::MacroTargets;
use crate::models::profile::{ActivityLevel, Gender};
use serde::{Deserialize, Serialize};

/// Energy content of one pound of body mass (kcal). The goal table is
/// denominated in this constant: a 500 kcal/day deficit is one pound per week.
pub const KCAL_PER_POUND: f64 = 3500.0;

/// Kilograms per pound. Weekly weight-change figures are converted to
/// kilograms with this factor so `weekly_weight_change_kg` is truthful to its
/// name; the 3500 kcal constant above stays pound-based because that is the
/// semantic content of the goal table.
pub const KG_PER_POUND: f64 = 0.453_592_37;

/// Biometric inputs for one calculation request. Transient; never persisted
/// by this subsystem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiometricInput {
    /// Biological gender for BMR formula selection
    pub gender: Gender,
    /// Age in years, in [10, 100]
    pub age_years: u32,
    /// Body weight in kilograms, in [20, 500]
    pub weight_kg: f64,
    /// Height in centimeters, in [100, 250]
    pub height_cm: f64,
    /// Activity level for the TDEE multiplier
    pub activity_level: ActivityLevel,
}

impl BiometricInput {
    /// Validate every field invariant.
    ///
    /// # Errors
    ///
    /// Returns a field-level validation error on the first violation; values
    /// are never coerced into range.
    pub fn validate(&self) -> AppResult<()> {
        if !(10..=100).contains(&self.age_years) {
            return Err(AppError::out_of_range(
                "age_years",
                format!(
                    "age must be between 10 and 100 years, got {}",
                    self.age_years
                ),
            ));
        }
        if !self.weight_kg.is_finite() || !(20.0..=500.0).contains(&self.weight_kg) {
            return Err(AppError::out_of_range(
                "weight_kg",
                format!("weight must be between 20 and 500 kg, got {}", self.weight_kg),
            ));
        }
        if !self.height_cm.is_finite() || !(100.0..=250.0).contains(&self.height_cm) {
            return Err(AppError::out_of_range(
                "height_cm",
                format!(
                    "height must be between 100 and 250 cm, got {}",
                    self.height_cm
                ),
            ));
        }
        Ok(())
    }
}

/// One entry of the calorie-option menu
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieOption {
    /// Goal-table key this option was derived from
    pub goal_key: GoalKey,
    /// Display label
    pub label: String,
    /// Daily calorie target, rounded from TDEE plus adjustment
    pub daily_calories: i64,
    /// Expected weekly weight change in kilograms (negative = loss)
    pub weekly_weight_change_kg: f64,
    /// Macro targets under the calculator ratio policy
    pub macro_targets: MacroTargets,
}

/// Complete energy profile for one biometric input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergyProfile {
    /// Basal metabolic rate, kcal/day, rounded
    pub bmr: i64,
    /// Total daily energy expenditure, kcal/day, rounded
    pub tdee: i64,
    /// One option per goal-table row, in table order
    pub calorie_options: Vec<CalorieOption>,
}

/// Calculate BMR with the revised Harris-Benedict equations.
///
/// The result is exact; no rounding is applied here.
///
/// # Errors
///
/// Returns a validation error when any biometric field is out of range.
pub fn compute_bmr(input: &BiometricInput, config: &BmrConfig) -> AppResult<f64> {
    input.validate()?;

    let age = f64::from(input.age_years);
    let bmr = match input.gender {
        Gender::Male => {
            config.male_base + config.male_weight_coef * input.weight_kg
                + config.male_height_coef * input.height_cm
                - config.male_age_coef * age
        }
        Gender::Female => {
            config.female_base + config.female_weight_coef * input.weight_kg
                + config.female_height_coef * input.height_cm
                - config.female_age_coef * age
        }
    };
    Ok(bmr)
}

/// Activity multiplier for a level
#[must_use]
pub const fn activity_multiplier(level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    match level {
        ActivityLevel::Sedentary => config.sedentary,
        ActivityLevel::LightlyActive => config.lightly_active,
        ActivityLevel::ModeratelyActive => config.moderately_active,
        ActivityLevel::VeryActive => config.very_active,
        ActivityLevel::ExtremelyActive => config.extremely_active,
    }
}

/// Scale BMR to total daily energy expenditure
#[must_use]
pub fn compute_tdee(bmr: f64, level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    bmr * activity_multiplier(level, config)
}

/// Expected weekly weight change for a daily calorie adjustment, in kilograms
#[must_use]
pub fn weekly_weight_change_kg(adjustment_kcal: f64) -> f64 {
    adjustment_kcal * 7.0 / KCAL_PER_POUND * KG_PER_POUND
}

/// Compute the complete energy profile: BMR, TDEE, and the calorie-option
/// menu in fixed goal-table order.
///
/// # Errors
///
/// Returns a validation error when any biometric field is out of range. There
/// is no partial profile: validation failure yields nothing.
pub fn compute_energy_profile(
    input: &BiometricInput,
    config: &NutritionConfig,
) -> AppResult<EnergyProfile> {
    let bmr = compute_bmr(input, &config.bmr)?;
    let tdee = compute_tdee(bmr, input.activity_level, &config.activity_factors);

    let calorie_options = config
        .goal_adjustments
        .rows
        .iter()
        .map(|row| {
            let daily = (tdee + row.adjustment_kcal).round();
            CalorieOption {
                goal_key: row.key,
                label: row.label.clone(),
                daily_calories: daily as i64,
                weekly_weight_change_kg: weekly_weight_change_kg(row.adjustment_kcal),
                macro_targets: allocate_macros(daily, MacroPolicy::Calculator, &config.macro_ratios),
            }
        })
        .collect();

    Ok(EnergyProfile {
        bmr: bmr.round() as i64,
        tdee: tdee.round() as i64,
        calorie_options,
    })
}
