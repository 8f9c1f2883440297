// ABOUTME: Common data models shared across the calculation and export layers
// ABOUTME: Client profiles with biometrics, and validated plan documents with meals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

/// Nutrition plan documents, meals, and macro targets
pub mod plan;

/// Client profiles and biometric enums
pub mod profile;

pub use plan::{
    DailyTotals, GoalCategory, MacroTargets, Meal, MealDraft, MealType, PlanDocument, PlanDraft,
};
pub use profile::{ActivityLevel, ClientProfile, Gender};
